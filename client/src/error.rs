use thiserror::Error;

/// Errors returned by the lifecycle and queue APIs of a
/// [`VesselRemover`](crate::VesselRemover)
///
/// Reconciliation and removal never surface errors through this type; their
/// failures are logged and reported as events instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoverError {
    /// `stop` was called while the reconciliation loop was not running
    #[error("Reconciliation loop is not running")]
    NotStarted,

    /// `start` was called while the reconciliation loop was already running
    #[error("Reconciliation loop is already running")]
    AlreadyStarted,

    /// The remover owning the inbound event queue has been dropped
    #[error("Inbound event queue is closed")]
    EventQueueClosed,
}
