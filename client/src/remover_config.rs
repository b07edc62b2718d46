use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by the VesselRemover
#[derive(Clone, Debug)]
pub struct RemoverConfig {
    /// How long a vessel stays in the removal ledger after its removal
    /// completed. Other systems consult the ledger to avoid reloading a
    /// vessel that was just removed.
    pub removed_vessel_ttl: Duration,
    /// When false (the default), the reconciliation pass clears a
    /// candidate's loaded flag as soon as it is detected. When true, the flag
    /// is only cleared once the vessel's destroy phase has run, so an
    /// interrupted removal is picked up again by the next pass.
    pub mark_unloaded_after_destroy: bool,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            removed_vessel_ttl: Duration::from_secs(60),
            mark_unloaded_after_destroy: false,
        }
    }
}
