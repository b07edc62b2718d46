/// Identifies a logical timeline that clients may occupy independently.
pub type SubspaceId = i32;
