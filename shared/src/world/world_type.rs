use crate::{HostError, ReconcileError, SubspaceId, VesselId, VesselRecord};

/// Enumerable set of vessels known to this client
///
/// Implementations own vessel storage. Records handed out are snapshots.
pub trait VesselDirectory {
    /// Lists every known vessel, in a stable iteration order.
    fn vessels(&self) -> Result<Vec<VesselRecord>, ReconcileError>;
    /// Looks up a single vessel. `None` if the vessel is no longer known.
    fn vessel(&self, vessel_id: &VesselId) -> Option<VesselRecord>;
    /// Sets whether this client is meant to keep the vessel loaded.
    fn set_loaded(&mut self, vessel_id: &VesselId, loaded: bool);
}

/// Subspace membership of this client and of each vessel
pub trait SubspaceService {
    fn current_subspace(&self) -> Result<SubspaceId, ReconcileError>;
    /// `None` when the vessel's subspace is not known yet.
    fn subspace_of(&self, vessel_id: &VesselId) -> Option<SubspaceId>;
}

/// Control locks and spectating state
pub trait LockService {
    /// True while this client is watching a vessel controlled by another player.
    fn is_spectating(&self) -> bool;
    fn focused_vessel(&self) -> Option<VesselId>;
}

/// Lifecycle primitives of the host simulation
///
/// Calls that mutate engine state may fail. Failures are reported, never
/// panicked on, so that later removal phases still run.
pub trait HostEngine {
    /// False while the simulation is paused in menus or between scenes.
    fn is_running(&self) -> bool;
    /// Whether the host has a concrete simulated representation of the vessel.
    fn has_vessel(&self, vessel_id: &VesselId) -> bool;
    /// Whether the vessel is loaded into active physics.
    fn is_loaded(&self, vessel_id: &VesselId) -> bool;

    fn unload(&mut self, vessel_id: &VesselId) -> Result<(), HostError>;
    /// Kills the vessel. Calling this on an already destroyed vessel is a no-op.
    fn destroy(&mut self, vessel_id: &VesselId) -> Result<(), HostError>;
    /// Removes the vessel from persisted scenario state.
    fn purge_from_scenario(&mut self, vessel_id: &VesselId) -> Result<(), HostError>;
    /// Flags persisted scenario state as changed after a purge.
    fn mark_scenario_updated(&mut self, vessel_id: &VesselId) -> Result<(), HostError>;

    fn force_focus(&mut self, vessel_id: &VesselId) -> Result<(), HostError>;
    /// Leaves vessel view for a neutral top-level view with nothing focused.
    fn clear_focus(&mut self);
    fn notify_user(&mut self, message: &str);
}
