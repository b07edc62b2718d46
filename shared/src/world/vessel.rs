use std::fmt;

use crate::SubspaceId;

/// Stable identity of a simulated vessel, shared by every client
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct VesselId(u64);

impl VesselId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VesselId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vessel#{}", self.0)
    }
}

/// Where a vessel is in its life, as seen by the host simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Alive,
    /// Going away (recovered, crashed, being destroyed) but not yet gone
    Terminal,
    Dead,
}

impl LifecycleState {
    pub fn is_alive(&self) -> bool {
        *self == LifecycleState::Alive
    }

    pub fn is_dead(&self) -> bool {
        *self == LifecycleState::Dead
    }
}

/// Snapshot of one vessel as listed by a [`VesselDirectory`](crate::VesselDirectory).
///
/// The directory owns the vessel; a record is a copy taken at query time and
/// is never written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VesselRecord {
    pub id: VesselId,
    /// Subspace tag the directory last saw for this vessel
    pub subspace: SubspaceId,
    /// Whether this client is meant to keep the vessel loaded
    pub loaded: bool,
    pub lifecycle: LifecycleState,
    /// Name of the player holding the control lock, if any
    pub lock_owner: Option<String>,
}

impl VesselRecord {
    pub fn new(id: VesselId, subspace: SubspaceId) -> Self {
        Self {
            id,
            subspace,
            loaded: true,
            lifecycle: LifecycleState::Alive,
            lock_owner: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle.is_alive()
    }
}
