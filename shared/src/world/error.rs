use thiserror::Error;

use crate::VesselId;

/// Errors raised by a host simulation while it carries out a lifecycle call
///
/// None of these are fatal to vessel removal: the caller logs them and
/// moves on to the next removal phase.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The vessel could not be unloaded cleanly from active simulation
    #[error("Failed to unload {vessel_id}: {reason}")]
    UnloadFailed { vessel_id: VesselId, reason: String },

    /// The vessel could not be destroyed
    #[error("Failed to destroy {vessel_id}: {reason}")]
    DestroyFailed { vessel_id: VesselId, reason: String },

    /// The vessel could not be removed from the persisted scenario
    #[error("Failed to purge {vessel_id} from scenario: {reason}")]
    PurgeFailed { vessel_id: VesselId, reason: String },

    /// The persisted scenario could not be flagged as updated after a purge
    #[error("Failed to mark scenario updated after purging {vessel_id}: {reason}")]
    ScenarioUpdateFailed { vessel_id: VesselId, reason: String },

    /// Focus could not be forced onto the vessel
    #[error("Failed to focus {vessel_id}: {reason}")]
    FocusFailed { vessel_id: VesselId, reason: String },

    /// The host has no representation for the vessel
    #[error("{vessel_id} not found in host simulation")]
    VesselNotFound { vessel_id: VesselId },
}

impl HostError {
    /// The vessel the failed call was made for
    pub fn vessel_id(&self) -> VesselId {
        match self {
            HostError::UnloadFailed { vessel_id, .. }
            | HostError::DestroyFailed { vessel_id, .. }
            | HostError::PurgeFailed { vessel_id, .. }
            | HostError::ScenarioUpdateFailed { vessel_id, .. }
            | HostError::FocusFailed { vessel_id, .. }
            | HostError::VesselNotFound { vessel_id } => *vessel_id,
        }
    }
}

/// Errors that abort a single reconciliation pass
///
/// A pass that fails is logged and skipped; the next scheduled pass
/// re-evaluates from scratch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// The vessel directory could not be enumerated
    #[error("Vessel directory unavailable: {reason}")]
    DirectoryUnavailable { reason: String },

    /// The subspace service does not know which subspace this client is in
    #[error("Current subspace unknown: {reason}")]
    SubspaceUnknown { reason: String },
}
