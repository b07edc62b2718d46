//! In-memory stand-in for the host simulation and every collaborator
//! service, for driving a VesselRemover in tests

use std::{
    cell::{Ref, RefCell, RefMut},
    collections::HashSet,
    rc::Rc,
};

use reaper_client::Services;
use reaper_shared::{
    HostEngine, HostError, LifecycleState, LockService, ReconcileError, SettingsStore,
    SubspaceId, SubspaceService, VesselDirectory, VesselId, VesselRecord,
    DEFAULT_KILL_CHECK_INTERVAL_MS,
};

/// A host call as observed by the test world, in call order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Unload(VesselId),
    Destroy(VesselId),
    PurgeFromScenario(VesselId),
    MarkScenarioUpdated(VesselId),
    ForceFocus(VesselId),
    ClearFocus,
    NotifyUser(String),
}

impl HostCall {
    pub fn vessel_id(&self) -> Option<VesselId> {
        match self {
            HostCall::Unload(vessel_id)
            | HostCall::Destroy(vessel_id)
            | HostCall::PurgeFromScenario(vessel_id)
            | HostCall::MarkScenarioUpdated(vessel_id)
            | HostCall::ForceFocus(vessel_id) => Some(*vessel_id),
            HostCall::ClearFocus | HostCall::NotifyUser(_) => None,
        }
    }
}

/// Host calls that can be made to fail for a given vessel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailPoint {
    Unload,
    Destroy,
    Purge,
    MarkScenarioUpdated,
    ForceFocus,
}

#[derive(Clone, Debug)]
pub struct TestVessel {
    pub record: VesselRecord,
    /// Host has a simulated representation of the vessel
    pub in_host: bool,
    /// Loaded into physics, as reported by `HostEngine::is_loaded`
    pub engine_loaded: bool,
    /// Present in persisted scenario state
    pub in_scenario: bool,
}

impl TestVessel {
    pub fn new(vessel_id: VesselId, subspace: SubspaceId) -> Self {
        Self {
            record: VesselRecord::new(vessel_id, subspace),
            in_host: true,
            engine_loaded: true,
            in_scenario: true,
        }
    }
}

pub struct TestWorld {
    vessels: Vec<TestVessel>,
    current_subspace: Option<SubspaceId>,
    running: bool,
    spectating: bool,
    focused: Option<VesselId>,
    kill_check_interval_ms: i64,
    directory_available: bool,
    failures: HashSet<(FailPoint, VesselId)>,
    calls: Vec<HostCall>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            vessels: Vec::new(),
            current_subspace: Some(0),
            running: true,
            spectating: false,
            focused: None,
            kill_check_interval_ms: DEFAULT_KILL_CHECK_INTERVAL_MS,
            directory_available: true,
            failures: HashSet::new(),
            calls: Vec::new(),
        }
    }
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    // Setup

    pub fn add_vessel(&mut self, vessel: TestVessel) {
        self.vessels.push(vessel);
    }

    pub fn vessel(&self, vessel_id: &VesselId) -> Option<&TestVessel> {
        self.vessels
            .iter()
            .find(|vessel| vessel.record.id == *vessel_id)
    }

    pub fn vessel_mut(&mut self, vessel_id: &VesselId) -> Option<&mut TestVessel> {
        self.vessels
            .iter_mut()
            .find(|vessel| vessel.record.id == *vessel_id)
    }

    /// Drops the vessel from both the directory and the host.
    pub fn forget_vessel(&mut self, vessel_id: &VesselId) {
        self.vessels.retain(|vessel| vessel.record.id != *vessel_id);
    }

    pub fn set_current_subspace(&mut self, subspace: Option<SubspaceId>) {
        self.current_subspace = subspace;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn spectate(&mut self, vessel_id: VesselId) {
        self.spectating = true;
        self.focused = Some(vessel_id);
    }

    pub fn set_focus(&mut self, vessel_id: Option<VesselId>) {
        self.focused = vessel_id;
    }

    pub fn set_kill_check_interval_ms(&mut self, millis: i64) {
        self.kill_check_interval_ms = millis;
    }

    pub fn set_directory_available(&mut self, available: bool) {
        self.directory_available = available;
    }

    pub fn fail(&mut self, fail_point: FailPoint, vessel_id: VesselId) {
        self.failures.insert((fail_point, vessel_id));
    }

    pub fn heal(&mut self, fail_point: FailPoint, vessel_id: VesselId) {
        self.failures.remove(&(fail_point, vessel_id));
    }

    // Inspection

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn calls_for(&self, vessel_id: &VesselId) -> Vec<HostCall> {
        self.calls
            .iter()
            .filter(|call| call.vessel_id() == Some(*vessel_id))
            .cloned()
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn notifications(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::NotifyUser(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn focused(&self) -> Option<VesselId> {
        self.focused
    }

    pub fn is_loaded_flag(&self, vessel_id: &VesselId) -> Option<bool> {
        self.vessel(vessel_id).map(|vessel| vessel.record.loaded)
    }

    // Internal

    fn should_fail(&self, fail_point: FailPoint, vessel_id: &VesselId) -> bool {
        self.failures.contains(&(fail_point, *vessel_id))
    }
}

/// Shared handle to a [`TestWorld`]. Every collaborator slot of a
/// [`Services`] bundle gets a clone, so a test keeps one to inspect results.
#[derive(Clone, Default)]
pub struct TestWorldHandle(Rc<RefCell<TestWorld>>);

impl TestWorldHandle {
    pub fn new(world: TestWorld) -> Self {
        Self(Rc::new(RefCell::new(world)))
    }

    pub fn borrow(&self) -> Ref<'_, TestWorld> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, TestWorld> {
        self.0.borrow_mut()
    }

    pub fn services(&self) -> Services {
        Services::new(
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
        )
    }
}

// VesselDirectory implementation
impl VesselDirectory for TestWorldHandle {
    fn vessels(&self) -> Result<Vec<VesselRecord>, ReconcileError> {
        let world = self.borrow();
        if !world.directory_available {
            return Err(ReconcileError::DirectoryUnavailable {
                reason: "test directory offline".to_string(),
            });
        }
        Ok(world
            .vessels
            .iter()
            .map(|vessel| vessel.record.clone())
            .collect())
    }

    fn vessel(&self, vessel_id: &VesselId) -> Option<VesselRecord> {
        self.borrow()
            .vessel(vessel_id)
            .map(|vessel| vessel.record.clone())
    }

    fn set_loaded(&mut self, vessel_id: &VesselId, loaded: bool) {
        if let Some(vessel) = self.borrow_mut().vessel_mut(vessel_id) {
            vessel.record.loaded = loaded;
        }
    }
}

// SubspaceService implementation
impl SubspaceService for TestWorldHandle {
    fn current_subspace(&self) -> Result<SubspaceId, ReconcileError> {
        self.borrow()
            .current_subspace
            .ok_or_else(|| ReconcileError::SubspaceUnknown {
                reason: "test client has not joined a subspace".to_string(),
            })
    }

    fn subspace_of(&self, vessel_id: &VesselId) -> Option<SubspaceId> {
        self.borrow()
            .vessel(vessel_id)
            .map(|vessel| vessel.record.subspace)
    }
}

// LockService implementation
impl LockService for TestWorldHandle {
    fn is_spectating(&self) -> bool {
        self.borrow().spectating
    }

    fn focused_vessel(&self) -> Option<VesselId> {
        self.borrow().focused
    }
}

// SettingsStore implementation
impl SettingsStore for TestWorldHandle {
    fn kill_check_interval_ms(&self) -> i64 {
        self.borrow().kill_check_interval_ms
    }
}

// HostEngine implementation
impl HostEngine for TestWorldHandle {
    fn is_running(&self) -> bool {
        self.borrow().running
    }

    fn has_vessel(&self, vessel_id: &VesselId) -> bool {
        self.borrow()
            .vessel(vessel_id)
            .is_some_and(|vessel| vessel.in_host)
    }

    fn is_loaded(&self, vessel_id: &VesselId) -> bool {
        self.borrow()
            .vessel(vessel_id)
            .is_some_and(|vessel| vessel.in_host && vessel.engine_loaded)
    }

    fn unload(&mut self, vessel_id: &VesselId) -> Result<(), HostError> {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::Unload(*vessel_id));
        if world.should_fail(FailPoint::Unload, vessel_id) {
            return Err(HostError::UnloadFailed {
                vessel_id: *vessel_id,
                reason: "injected failure".to_string(),
            });
        }
        let Some(vessel) = world.vessel_mut(vessel_id) else {
            return Err(HostError::VesselNotFound {
                vessel_id: *vessel_id,
            });
        };
        vessel.engine_loaded = false;
        Ok(())
    }

    fn destroy(&mut self, vessel_id: &VesselId) -> Result<(), HostError> {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::Destroy(*vessel_id));
        if world.should_fail(FailPoint::Destroy, vessel_id) {
            return Err(HostError::DestroyFailed {
                vessel_id: *vessel_id,
                reason: "injected failure".to_string(),
            });
        }
        if let Some(vessel) = world.vessel_mut(vessel_id) {
            vessel.in_host = false;
            vessel.engine_loaded = false;
            vessel.record.lifecycle = LifecycleState::Dead;
        }
        Ok(())
    }

    fn purge_from_scenario(&mut self, vessel_id: &VesselId) -> Result<(), HostError> {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::PurgeFromScenario(*vessel_id));
        if world.should_fail(FailPoint::Purge, vessel_id) {
            return Err(HostError::PurgeFailed {
                vessel_id: *vessel_id,
                reason: "injected failure".to_string(),
            });
        }
        if let Some(vessel) = world.vessel_mut(vessel_id) {
            vessel.in_scenario = false;
        }
        Ok(())
    }

    fn mark_scenario_updated(&mut self, vessel_id: &VesselId) -> Result<(), HostError> {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::MarkScenarioUpdated(*vessel_id));
        if world.should_fail(FailPoint::MarkScenarioUpdated, vessel_id) {
            return Err(HostError::ScenarioUpdateFailed {
                vessel_id: *vessel_id,
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn force_focus(&mut self, vessel_id: &VesselId) -> Result<(), HostError> {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::ForceFocus(*vessel_id));
        if world.should_fail(FailPoint::ForceFocus, vessel_id) {
            return Err(HostError::FocusFailed {
                vessel_id: *vessel_id,
                reason: "injected failure".to_string(),
            });
        }
        if !world.vessel(vessel_id).is_some_and(|vessel| vessel.in_host) {
            return Err(HostError::VesselNotFound {
                vessel_id: *vessel_id,
            });
        }
        world.focused = Some(*vessel_id);
        Ok(())
    }

    fn clear_focus(&mut self) {
        let mut world = self.borrow_mut();
        world.calls.push(HostCall::ClearFocus);
        world.focused = None;
        world.spectating = false;
    }

    fn notify_user(&mut self, message: &str) {
        self.borrow_mut()
            .calls
            .push(HostCall::NotifyUser(message.to_string()));
    }
}
