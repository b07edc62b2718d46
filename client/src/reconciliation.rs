use std::time::{Duration, Instant};

use log::{debug, info, warn};

use reaper_shared::{interval_from_millis, ReconcileError, VesselId};

use crate::{RemoverConfig, RemoverError, Services};

/// A vessel found in the wrong subspace by one reconciliation pass
///
/// Only vessels the directory flagged as loaded at snapshot time become
/// candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovalCandidate {
    pub vessel_id: VesselId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running { next_pass: Instant },
}

/// Periodic pass that finds loaded vessels outside the current subspace
///
/// Each pass reschedules the next one from the settings store before doing
/// any work, so a failing pass never stops the loop.
pub struct ReconciliationLoop {
    state: LoopState,
}

impl Default for ReconciliationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Stopped,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Arms the loop. The first pass is due one `interval` after `now`.
    pub fn start(&mut self, now: &Instant, interval: Duration) -> Result<(), RemoverError> {
        if self.is_running() {
            return Err(RemoverError::AlreadyStarted);
        }
        info!("Reconciliation loop started, checking every {:?}", interval);
        self.state = LoopState::Running {
            next_pass: *now + interval,
        };
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), RemoverError> {
        if !self.is_running() {
            return Err(RemoverError::NotStarted);
        }
        info!("Reconciliation loop stopped");
        self.state = LoopState::Stopped;
        Ok(())
    }

    pub fn is_due(&self, now: &Instant) -> bool {
        match self.state {
            LoopState::Stopped => false,
            LoopState::Running { next_pass } => *now >= next_pass,
        }
    }

    /// Runs a pass if one is due and returns the candidates that can be
    /// handed to the removal protocol.
    ///
    /// Every detected candidate has its loaded flag cleared here, unless
    /// `mark_unloaded_after_destroy` defers that to the destroy phase.
    /// Candidates the host cannot resolve are still cleared, since no
    /// removal task will ever run for them.
    pub(crate) fn poll(
        &mut self,
        now: &Instant,
        services: &mut Services,
        config: &RemoverConfig,
    ) -> Vec<RemovalCandidate> {
        if !self.is_due(now) {
            return Vec::new();
        }

        let interval = interval_from_millis(services.settings.kill_check_interval_ms());
        self.state = LoopState::Running {
            next_pass: *now + interval,
        };

        if !services.host.is_running() {
            debug!("Simulation not running, skipping reconciliation pass");
            return Vec::new();
        }

        match collect_candidates(services) {
            Ok(candidates) => dispatch(candidates, services, config),
            Err(err) => {
                warn!("Reconciliation pass failed, retrying in {:?}: {}", interval, err);
                Vec::new()
            }
        }
    }
}

fn collect_candidates(services: &Services) -> Result<Vec<RemovalCandidate>, ReconcileError> {
    let current = services.subspaces.current_subspace()?;
    let vessels = services.directory.vessels()?;

    let candidates = vessels
        .into_iter()
        .filter(|record| record.loaded)
        .filter(|record| {
            services
                .subspaces
                .subspace_of(&record.id)
                .is_some_and(|subspace| subspace != current)
        })
        .map(|record| RemovalCandidate {
            vessel_id: record.id,
        })
        .collect();

    Ok(candidates)
}

fn dispatch(
    candidates: Vec<RemovalCandidate>,
    services: &mut Services,
    config: &RemoverConfig,
) -> Vec<RemovalCandidate> {
    let mut resolved = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let resolvable = services.host.has_vessel(&candidate.vessel_id);
        if !resolvable || !config.mark_unloaded_after_destroy {
            services.directory.set_loaded(&candidate.vessel_id, false);
        }
        if resolvable {
            resolved.push(candidate);
        } else {
            debug!("{} disappeared before it could be removed", candidate.vessel_id);
        }
    }
    resolved
}
