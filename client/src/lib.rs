//! # Reaper Client
//! Keeps the local replica of a multi-subspace simulation free of vessels
//! that belong to another subspace. A periodic reconciliation pass finds
//! such vessels and a per-vessel removal task unloads, destroys and purges
//! each one across several scheduler quanta, moving the spectator's focus
//! elsewhere first when needed.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use reaper_shared::{
        interval_from_millis, HostEngine, HostError, LifecycleState, LockService,
        ReconcileError, SettingsStore, SubspaceId, SubspaceService, VesselDirectory, VesselId,
        VesselRecord, DEFAULT_KILL_CHECK_INTERVAL_MS,
    };
}

mod error;
mod events;
mod focus;
mod reconciliation;
mod removal;
mod remover;
mod remover_config;
mod services;

pub use error::RemoverError;
pub use events::{
    CompletedEvent, EventSender, FocusEvent, HostFailureEvent, RemovalEvent, RemovalEvents,
    SkippedEvent, StartedEvent, VesselEvent,
};
pub use focus::{reassign_focus, FocusOutcome, SPECTATED_VESSEL_REMOVED_NOTICE};
pub use reconciliation::{LoopState, ReconciliationLoop, RemovalCandidate};
pub use removal::{
    removal_ledger::RemovalLedger,
    removal_reason::RemovalReason,
    removal_task::{RemovalPhase, RemovalTask, SkipReason, TaskStep},
};
pub use remover::VesselRemover;
pub use remover_config::RemoverConfig;
pub use services::Services;
