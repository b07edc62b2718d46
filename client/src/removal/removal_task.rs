use log::{debug, info, warn};

use reaper_shared::{HostError, LifecycleState, VesselId};

use super::{removal_reason::RemovalReason, RemovalContext};
use crate::focus::{reassign_focus, FocusOutcome};

/// Progress of one vessel through the removal protocol
///
/// `FocusChecked` and `Purged` are passed through within a single quantum;
/// a task only ever rests at `NotStarted`, `Unloaded`, `Destroyed` or `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemovalPhase {
    NotStarted,
    FocusChecked,
    Unloaded,
    Destroyed,
    Purged,
    Done,
}

/// Why a removal task ended without touching its vessel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The vessel vanished from the directory or the host before removal began
    Missing,
    /// The vessel was already on its way out
    NotAlive(LifecycleState),
}

/// Result of advancing a task by one quantum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStep {
    /// Waiting for the next quantum
    Yielded,
    Completed,
    Skipped(SkipReason),
}

/// A resumable removal of a single vessel
///
/// Each call to `advance` runs phases up to the next yield point:
///
/// | quantum | phases run                                   |
/// |---------|----------------------------------------------|
/// | 1       | entry guard, focus reassignment, unload      |
/// | 2       | destroy                                      |
/// | 3       | scenario purge                               |
///
/// Host failures inside a phase are logged and reported, then the task moves
/// on to the next phase regardless.
#[derive(Clone, Debug)]
pub struct RemovalTask {
    vessel_id: VesselId,
    reason: RemovalReason,
    phase: RemovalPhase,
}

impl RemovalTask {
    pub fn new(vessel_id: VesselId, reason: RemovalReason) -> Self {
        Self {
            vessel_id,
            reason,
            phase: RemovalPhase::NotStarted,
        }
    }

    pub fn vessel_id(&self) -> VesselId {
        self.vessel_id
    }

    pub fn reason(&self) -> RemovalReason {
        self.reason
    }

    pub fn phase(&self) -> RemovalPhase {
        self.phase
    }

    pub(crate) fn advance(&mut self, context: &mut RemovalContext) -> TaskStep {
        loop {
            match self.phase {
                RemovalPhase::NotStarted => {
                    if let Some(skip) = self.entry_guard(context) {
                        debug!("Removal of {} skipped: {:?}", self.vessel_id, skip);
                        // no destroy phase will clear it
                        if context.config.mark_unloaded_after_destroy {
                            context.services.directory.set_loaded(&self.vessel_id, false);
                        }
                        self.phase = RemovalPhase::Done;
                        return TaskStep::Skipped(skip);
                    }
                    info!("Removing {} ({})", self.vessel_id, self.reason);
                    context.events.push_started(&self.vessel_id, self.reason);
                    self.check_focus(context);
                    self.phase = RemovalPhase::FocusChecked;
                }
                RemovalPhase::FocusChecked => {
                    self.unload(context);
                    self.phase = RemovalPhase::Unloaded;
                    return TaskStep::Yielded;
                }
                RemovalPhase::Unloaded => {
                    self.destroy(context);
                    self.phase = RemovalPhase::Destroyed;
                    return TaskStep::Yielded;
                }
                RemovalPhase::Destroyed => {
                    self.purge(context);
                    self.phase = RemovalPhase::Purged;
                }
                RemovalPhase::Purged => {
                    info!("Removed {}", self.vessel_id);
                    self.phase = RemovalPhase::Done;
                    return TaskStep::Completed;
                }
                RemovalPhase::Done => return TaskStep::Completed,
            }
        }
    }

    fn entry_guard(&self, context: &RemovalContext) -> Option<SkipReason> {
        let Some(record) = context.services.directory.vessel(&self.vessel_id) else {
            return Some(SkipReason::Missing);
        };
        if !context.services.host.has_vessel(&self.vessel_id) {
            return Some(SkipReason::Missing);
        }
        if !record.is_alive() {
            return Some(SkipReason::NotAlive(record.lifecycle));
        }
        None
    }

    fn check_focus(&self, context: &mut RemovalContext) {
        let services = &mut *context.services;
        let outcome = reassign_focus(
            &self.vessel_id,
            context.removing,
            services.directory.as_ref(),
            services.locks.as_ref(),
            services.host.as_mut(),
        );
        if outcome != FocusOutcome::Untouched {
            context.events.push_focus(&self.vessel_id, outcome);
        }
    }

    fn unload(&self, context: &mut RemovalContext) {
        let host = context.services.host.as_mut();
        if host.is_loaded(&self.vessel_id) {
            if let Err(err) = host.unload(&self.vessel_id) {
                self.report(context, err);
            }
        }
        if !context.config.mark_unloaded_after_destroy {
            context.services.directory.set_loaded(&self.vessel_id, false);
        }
    }

    fn destroy(&self, context: &mut RemovalContext) {
        let already_dead = context
            .services
            .directory
            .vessel(&self.vessel_id)
            .map_or(true, |record| record.lifecycle.is_dead());

        if already_dead || !context.services.host.has_vessel(&self.vessel_id) {
            debug!("{} already destroyed", self.vessel_id);
        } else if let Err(err) = context.services.host.destroy(&self.vessel_id) {
            self.report(context, err);
        }

        if context.config.mark_unloaded_after_destroy {
            context.services.directory.set_loaded(&self.vessel_id, false);
        }
    }

    fn purge(&self, context: &mut RemovalContext) {
        let host = context.services.host.as_mut();
        let result = match host.purge_from_scenario(&self.vessel_id) {
            Ok(()) => host.mark_scenario_updated(&self.vessel_id),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            self.report(context, err);
        }
    }

    fn report(&self, context: &mut RemovalContext, err: HostError) {
        warn!("{} (removal of {} continues)", err, self.vessel_id);
        context.events.push_host_failure(err);
    }
}
