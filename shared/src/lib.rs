//! # Reaper Shared
//! Common functionality shared between the reaper-client & reaper-test crates:
//! vessel identities and records, the collaborator traits a host simulation
//! implements, and the error taxonomy produced at those seams.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod settings;
mod types;
mod world;

pub use settings::{interval_from_millis, SettingsStore, DEFAULT_KILL_CHECK_INTERVAL_MS};
pub use types::SubspaceId;
pub use world::{
    error::{HostError, ReconcileError},
    vessel::{LifecycleState, VesselId, VesselRecord},
    world_type::{HostEngine, LockService, SubspaceService, VesselDirectory},
};
