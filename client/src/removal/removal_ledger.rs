use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use log::debug;

use reaper_shared::VesselId;

/// Remembers recently removed vessels for a fixed time-to-live
pub struct RemovalLedger {
    removed_at: HashMap<VesselId, Instant>,
    expiry_queue: VecDeque<(Instant, VesselId)>,
    ttl: Duration,
}

impl RemovalLedger {
    pub fn new(ttl: Duration) -> Self {
        Self {
            removed_at: HashMap::new(),
            expiry_queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn record(&mut self, vessel_id: VesselId, now: &Instant) {
        self.removed_at.insert(vessel_id, *now);
        self.expiry_queue.push_back((*now, vessel_id));
    }

    pub fn contains(&self, vessel_id: &VesselId) -> bool {
        self.removed_at.contains_key(vessel_id)
    }

    pub fn len(&self) -> usize {
        self.removed_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removed_at.is_empty()
    }

    /// Forgets every vessel recorded at least `ttl` before `now`.
    pub fn expire(&mut self, now: &Instant) {
        loop {
            let Some((recorded_at, _)) = self.expiry_queue.front() else {
                break;
            };
            if now.saturating_duration_since(*recorded_at) < self.ttl {
                break;
            }
            let Some((recorded_at, vessel_id)) = self.expiry_queue.pop_front() else {
                break;
            };
            // a vessel recorded again later keeps its newer entry
            if self.removed_at.get(&vessel_id) == Some(&recorded_at) {
                debug!("{} expired from removal ledger", vessel_id);
                self.removed_at.remove(&vessel_id);
            }
        }
    }
}
