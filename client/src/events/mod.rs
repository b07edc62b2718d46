mod removal_events;
mod vessel_event;

pub use removal_events::*;
pub use vessel_event::*;
