pub mod removal_ledger;
pub mod removal_reason;
pub mod removal_task;

use std::{
    collections::{HashSet, VecDeque},
    time::Instant,
};

use log::debug;

use reaper_shared::VesselId;

use crate::{RemovalEvents, RemoverConfig, Services};
use removal_ledger::RemovalLedger;
use removal_reason::RemovalReason;
use removal_task::{RemovalPhase, RemovalTask, TaskStep};

/// Everything a task may touch while it advances
pub(crate) struct RemovalContext<'a> {
    pub services: &'a mut Services,
    pub config: &'a RemoverConfig,
    /// Vessels queued or mid-removal, never picked as a replacement focus
    pub removing: &'a HashSet<VesselId>,
    pub events: &'a mut RemovalEvents,
}

/// Queue of requested removals plus the tasks currently in flight
///
/// A vessel has at most one entry across both collections.
pub(crate) struct RemovalProtocol {
    queued: VecDeque<RemovalTask>,
    in_flight: Vec<RemovalTask>,
}

impl RemovalProtocol {
    pub fn new() -> Self {
        Self {
            queued: VecDeque::new(),
            in_flight: Vec::new(),
        }
    }

    /// Queues a removal. Returns false if the vessel is already queued or
    /// being removed.
    pub fn remove(&mut self, vessel_id: &VesselId, reason: RemovalReason) -> bool {
        if self.is_removing(vessel_id) {
            debug!("{} is already being removed", vessel_id);
            return false;
        }
        self.queued.push_back(RemovalTask::new(*vessel_id, reason));
        true
    }

    pub fn is_removing(&self, vessel_id: &VesselId) -> bool {
        self.task(vessel_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.queued.len() + self.in_flight.len()
    }

    pub fn phase_of(&self, vessel_id: &VesselId) -> Option<RemovalPhase> {
        self.task(vessel_id).map(RemovalTask::phase)
    }

    fn task(&self, vessel_id: &VesselId) -> Option<&RemovalTask> {
        self.in_flight
            .iter()
            .chain(self.queued.iter())
            .find(|task| task.vessel_id() == *vessel_id)
    }

    fn removing(&self) -> HashSet<VesselId> {
        self.in_flight
            .iter()
            .chain(self.queued.iter())
            .map(RemovalTask::vessel_id)
            .collect()
    }

    /// Moves every task started in an earlier quantum forward by one phase.
    pub fn advance_in_flight(
        &mut self,
        services: &mut Services,
        config: &RemoverConfig,
        ledger: &mut RemovalLedger,
        now: &Instant,
        events: &mut RemovalEvents,
    ) {
        if self.in_flight.is_empty() {
            return;
        }
        let removing = self.removing();
        let mut context = RemovalContext {
            services,
            config,
            removing: &removing,
            events,
        };
        let tasks = std::mem::take(&mut self.in_flight);
        self.in_flight = Self::run(tasks, &mut context, ledger, now);
    }

    /// Starts every queued task, running it up to its first yield point.
    pub fn start_queued(
        &mut self,
        services: &mut Services,
        config: &RemoverConfig,
        ledger: &mut RemovalLedger,
        now: &Instant,
        events: &mut RemovalEvents,
    ) {
        if self.queued.is_empty() {
            return;
        }
        let removing = self.removing();
        let mut context = RemovalContext {
            services,
            config,
            removing: &removing,
            events,
        };
        let tasks: Vec<RemovalTask> = self.queued.drain(..).collect();
        let started = Self::run(tasks, &mut context, ledger, now);
        self.in_flight.extend(started);
    }

    fn run(
        tasks: Vec<RemovalTask>,
        context: &mut RemovalContext,
        ledger: &mut RemovalLedger,
        now: &Instant,
    ) -> Vec<RemovalTask> {
        let mut still_running = Vec::with_capacity(tasks.len());
        for mut task in tasks {
            match task.advance(context) {
                TaskStep::Yielded => still_running.push(task),
                TaskStep::Completed => {
                    ledger.record(task.vessel_id(), now);
                    context.events.push_completed(&task.vessel_id(), task.reason());
                }
                TaskStep::Skipped(skip) => {
                    context.events.push_skipped(&task.vessel_id(), skip);
                }
            }
        }
        still_running
    }
}
