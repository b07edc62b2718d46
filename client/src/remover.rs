use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info};

use reaper_shared::{interval_from_millis, VesselId};

use crate::{
    removal::{removal_ledger::RemovalLedger, RemovalProtocol},
    EventSender, ReconciliationLoop, RemovalEvents, RemovalPhase, RemovalReason, RemoverConfig,
    RemoverError, Services, VesselEvent,
};

/// Removes vessels that no longer belong in the local world
///
/// Drive it by calling [`update`](Self::update) once per scheduler quantum
/// from the thread that owns the host simulation. Each call:
///
/// 1. drains the inbound [`VesselEvent`] queue into removal requests
/// 2. runs a reconciliation pass if one is due
/// 3. advances removals started in earlier quanta by one phase
/// 4. starts newly requested removals, up to their first yield point
/// 5. expires old entries from the removal ledger
pub struct VesselRemover {
    config: RemoverConfig,
    services: Services,
    reconciliation: ReconciliationLoop,
    protocol: RemovalProtocol,
    ledger: RemovalLedger,
    event_sender: Sender<VesselEvent>,
    event_receiver: Receiver<VesselEvent>,
}

impl VesselRemover {
    /// Create a new VesselRemover. The reconciliation loop stays idle until
    /// [`start`](Self::start) is called, but explicit removals are processed
    /// right away.
    pub fn new(config: RemoverConfig, services: Services) -> Self {
        let (event_sender, event_receiver) = unbounded();
        let ledger = RemovalLedger::new(config.removed_vessel_ttl);

        Self {
            config,
            services,
            reconciliation: ReconciliationLoop::new(),
            protocol: RemovalProtocol::new(),
            ledger,
            event_sender,
            event_receiver,
        }
    }

    // Lifecycle

    /// Begins periodic reconciliation. The first pass runs one configured
    /// interval after `now`.
    pub fn start(&mut self, now: &Instant) -> Result<(), RemoverError> {
        let interval = interval_from_millis(self.services.settings.kill_check_interval_ms());
        self.reconciliation.start(now, interval)
    }

    /// Ends periodic reconciliation. Removals already in flight keep
    /// advancing on later calls to `update`.
    pub fn stop(&mut self) -> Result<(), RemoverError> {
        self.reconciliation.stop()
    }

    pub fn is_started(&self) -> bool {
        self.reconciliation.is_running()
    }

    // Removal

    /// Queues one vessel for removal. Does nothing if the vessel is already
    /// queued or being removed. The removal begins on the next `update`.
    pub fn remove(&mut self, vessel_id: &VesselId, reason: RemovalReason) {
        self.protocol.remove(vessel_id, reason);
    }

    /// Queues every given vessel for removal, independently of each other.
    pub fn remove_all<I: IntoIterator<Item = VesselId>>(
        &mut self,
        vessel_ids: I,
        reason: RemovalReason,
    ) {
        for vessel_id in vessel_ids {
            self.remove(&vessel_id, reason);
        }
    }

    /// Handle for engine callbacks that report recovered, terminated or
    /// destroyed vessels.
    pub fn event_sender(&self) -> EventSender {
        EventSender::new(self.event_sender.clone())
    }

    /// Must be called once per scheduler quantum.
    pub fn update(&mut self, now: &Instant) -> RemovalEvents {
        let mut events = RemovalEvents::new();

        self.receive_events();

        let candidates = self
            .reconciliation
            .poll(now, &mut self.services, &self.config);
        if !candidates.is_empty() {
            info!("Found {} vessel(s) outside the current subspace", candidates.len());
        }
        for candidate in candidates {
            self.remove(&candidate.vessel_id, RemovalReason::SubspaceMismatch);
        }

        self.protocol.advance_in_flight(
            &mut self.services,
            &self.config,
            &mut self.ledger,
            now,
            &mut events,
        );
        self.protocol.start_queued(
            &mut self.services,
            &self.config,
            &mut self.ledger,
            now,
            &mut events,
        );

        self.ledger.expire(now);

        events
    }

    fn receive_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            debug!("Received {:?}", event);
            let (vessel_id, reason) = event.into_request();
            self.remove(&vessel_id, reason);
        }
    }

    // Queries

    pub fn is_removing(&self, vessel_id: &VesselId) -> bool {
        self.protocol.is_removing(vessel_id)
    }

    /// Removals queued or in flight
    pub fn in_flight_count(&self) -> usize {
        self.protocol.len()
    }

    pub fn removal_phase(&self, vessel_id: &VesselId) -> Option<RemovalPhase> {
        self.protocol.phase_of(vessel_id)
    }

    /// Whether the vessel's removal completed within the ledger's ttl.
    pub fn was_removed(&self, vessel_id: &VesselId) -> bool {
        self.ledger.contains(vessel_id)
    }
}
