use std::collections::HashSet;

use log::{info, warn};

use reaper_shared::{HostEngine, LockService, VesselDirectory, VesselId};

/// Shown to the player when the vessel they were spectating is removed.
pub const SPECTATED_VESSEL_REMOVED_NOTICE: &str =
    "The vessel you were spectating was removed by its owner";

/// What the focus policy did for one removal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Not spectating, or spectating some other vessel
    Untouched,
    /// Focus was forced onto another live vessel
    Reassigned(VesselId),
    /// No other vessel could take focus, so the view was reset
    Cleared,
}

/// Moves focus away from `removed` if the player is spectating it.
///
/// Must run before any destructive removal phase so the host never renders a
/// focused vessel that no longer exists. The replacement is the first live
/// vessel in directory order that is neither `removed` nor in `excluded`
/// (vessels whose own removal is already under way).
pub fn reassign_focus(
    removed: &VesselId,
    excluded: &HashSet<VesselId>,
    directory: &dyn VesselDirectory,
    locks: &dyn LockService,
    host: &mut dyn HostEngine,
) -> FocusOutcome {
    if !locks.is_spectating() || locks.focused_vessel() != Some(*removed) {
        return FocusOutcome::Untouched;
    }

    let replacement = match directory.vessels() {
        Ok(vessels) => vessels
            .into_iter()
            .find(|record| {
                record.id != *removed
                    && record.is_alive()
                    && !excluded.contains(&record.id)
                    && host.has_vessel(&record.id)
            })
            .map(|record| record.id),
        Err(err) => {
            warn!("Cannot look for a replacement focus: {}", err);
            None
        }
    };

    let outcome = match replacement {
        Some(next) => match host.force_focus(&next) {
            Ok(()) => {
                info!("Spectated {} is being removed, focus moved to {}", removed, next);
                FocusOutcome::Reassigned(next)
            }
            Err(err) => {
                warn!("{}, clearing focus instead", err);
                host.clear_focus();
                FocusOutcome::Cleared
            }
        },
        None => {
            info!("Spectated {} is being removed and no vessel can take focus", removed);
            host.clear_focus();
            FocusOutcome::Cleared
        }
    };

    host.notify_user(SPECTATED_VESSEL_REMOVED_NOTICE);

    outcome
}
