pub mod error;
pub mod vessel;
pub mod world_type;
