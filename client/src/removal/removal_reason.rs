use std::fmt;

/// Why a vessel is being removed from the local world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    /// The vessel belongs to a subspace other than the client's current one
    SubspaceMismatch,
    Recovered,
    Terminated,
    Destroyed,
    /// Removal was asked for directly through the public API
    Requested,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemovalReason::SubspaceMismatch => "subspace mismatch",
            RemovalReason::Recovered => "recovered",
            RemovalReason::Terminated => "terminated",
            RemovalReason::Destroyed => "destroyed",
            RemovalReason::Requested => "requested",
        };
        f.write_str(name)
    }
}
