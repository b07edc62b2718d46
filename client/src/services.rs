use reaper_shared::{HostEngine, LockService, SettingsStore, SubspaceService, VesselDirectory};

/// Handles to every external collaborator, injected at construction
pub struct Services {
    pub directory: Box<dyn VesselDirectory>,
    pub subspaces: Box<dyn SubspaceService>,
    pub locks: Box<dyn LockService>,
    pub settings: Box<dyn SettingsStore>,
    pub host: Box<dyn HostEngine>,
}

impl Services {
    pub fn new(
        directory: Box<dyn VesselDirectory>,
        subspaces: Box<dyn SubspaceService>,
        locks: Box<dyn LockService>,
        settings: Box<dyn SettingsStore>,
        host: Box<dyn HostEngine>,
    ) -> Self {
        Self {
            directory,
            subspaces,
            locks,
            settings,
            host,
        }
    }
}
