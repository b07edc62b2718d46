use std::vec::IntoIter;

use reaper_shared::{HostError, VesselId};

use crate::{FocusOutcome, RemovalReason, SkipReason};

/// Everything that happened to removals during one quantum
pub struct RemovalEvents {
    started: Vec<(VesselId, RemovalReason)>,
    focus_changes: Vec<(VesselId, FocusOutcome)>,
    completed: Vec<(VesselId, RemovalReason)>,
    skipped: Vec<(VesselId, SkipReason)>,
    host_failures: Vec<HostError>,
    empty: bool,
}

impl Default for RemovalEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl RemovalEvents {
    pub(crate) fn new() -> Self {
        Self {
            started: Vec::new(),
            focus_changes: Vec::new(),
            completed: Vec::new(),
            skipped: Vec::new(),
            host_failures: Vec::new(),
            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: RemovalEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: RemovalEvent>(&self) -> bool {
        V::has(self)
    }

    // Crate-public

    pub(crate) fn push_started(&mut self, vessel_id: &VesselId, reason: RemovalReason) {
        self.started.push((*vessel_id, reason));
        self.empty = false;
    }

    pub(crate) fn push_focus(&mut self, vessel_id: &VesselId, outcome: FocusOutcome) {
        self.focus_changes.push((*vessel_id, outcome));
        self.empty = false;
    }

    pub(crate) fn push_completed(&mut self, vessel_id: &VesselId, reason: RemovalReason) {
        self.completed.push((*vessel_id, reason));
        self.empty = false;
    }

    pub(crate) fn push_skipped(&mut self, vessel_id: &VesselId, skip: SkipReason) {
        self.skipped.push((*vessel_id, skip));
        self.empty = false;
    }

    pub(crate) fn push_host_failure(&mut self, error: HostError) {
        self.host_failures.push(error);
        self.empty = false;
    }
}

// Event Trait
pub trait RemovalEvent {
    type Iter;

    fn iter(events: &mut RemovalEvents) -> Self::Iter;

    fn has(events: &RemovalEvents) -> bool;
}

// Started Event
pub struct StartedEvent;
impl RemovalEvent for StartedEvent {
    type Iter = IntoIter<(VesselId, RemovalReason)>;

    fn iter(events: &mut RemovalEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.started);
        IntoIterator::into_iter(list)
    }

    fn has(events: &RemovalEvents) -> bool {
        !events.started.is_empty()
    }
}

// Focus Event
pub struct FocusEvent;
impl RemovalEvent for FocusEvent {
    type Iter = IntoIter<(VesselId, FocusOutcome)>;

    fn iter(events: &mut RemovalEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.focus_changes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &RemovalEvents) -> bool {
        !events.focus_changes.is_empty()
    }
}

// Completed Event
pub struct CompletedEvent;
impl RemovalEvent for CompletedEvent {
    type Iter = IntoIter<(VesselId, RemovalReason)>;

    fn iter(events: &mut RemovalEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.completed);
        IntoIterator::into_iter(list)
    }

    fn has(events: &RemovalEvents) -> bool {
        !events.completed.is_empty()
    }
}

// Skipped Event
pub struct SkippedEvent;
impl RemovalEvent for SkippedEvent {
    type Iter = IntoIter<(VesselId, SkipReason)>;

    fn iter(events: &mut RemovalEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.skipped);
        IntoIterator::into_iter(list)
    }

    fn has(events: &RemovalEvents) -> bool {
        !events.skipped.is_empty()
    }
}

// Host Failure Event
pub struct HostFailureEvent;
impl RemovalEvent for HostFailureEvent {
    type Iter = IntoIter<HostError>;

    fn iter(events: &mut RemovalEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.host_failures);
        IntoIterator::into_iter(list)
    }

    fn has(events: &RemovalEvents) -> bool {
        !events.host_failures.is_empty()
    }
}
