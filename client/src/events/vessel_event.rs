use crossbeam_channel::Sender;

use reaper_shared::VesselId;

use crate::{RemovalReason, RemoverError};

/// Inbound notification, delivered to a remover through its event queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VesselEvent {
    Recovered(VesselId),
    Terminated(VesselId),
    Destroyed(VesselId),
    RemoveRequested(VesselId, RemovalReason),
}

impl VesselEvent {
    /// Every notification is handled by queueing a removal.
    pub fn into_request(self) -> (VesselId, RemovalReason) {
        match self {
            VesselEvent::Recovered(vessel_id) => (vessel_id, RemovalReason::Recovered),
            VesselEvent::Terminated(vessel_id) => (vessel_id, RemovalReason::Terminated),
            VesselEvent::Destroyed(vessel_id) => (vessel_id, RemovalReason::Destroyed),
            VesselEvent::RemoveRequested(vessel_id, reason) => (vessel_id, reason),
        }
    }
}

/// Cloneable handle that engine callbacks use to feed a remover's event queue
///
/// Events are only consumed on the next `VesselRemover::update`, on the
/// remover's own thread.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<VesselEvent>,
}

impl EventSender {
    pub(crate) fn new(sender: Sender<VesselEvent>) -> Self {
        Self { sender }
    }

    pub fn send(&self, event: VesselEvent) -> Result<(), RemoverError> {
        self.sender
            .send(event)
            .map_err(|_| RemoverError::EventQueueClosed)
    }

    pub fn vessel_recovered(&self, vessel_id: VesselId) -> Result<(), RemoverError> {
        self.send(VesselEvent::Recovered(vessel_id))
    }

    pub fn vessel_terminated(&self, vessel_id: VesselId) -> Result<(), RemoverError> {
        self.send(VesselEvent::Terminated(vessel_id))
    }

    pub fn vessel_destroyed(&self, vessel_id: VesselId) -> Result<(), RemoverError> {
        self.send(VesselEvent::Destroyed(vessel_id))
    }
}
