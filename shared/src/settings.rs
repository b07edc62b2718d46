use std::time::Duration;

/// Interval between two reconciliation passes when a store has no value of its own.
pub const DEFAULT_KILL_CHECK_INTERVAL_MS: i64 = 2500;

/// Read access to the externally owned settings that tune vessel removal
pub trait SettingsStore {
    /// Milliseconds between two reconciliation passes. May be any integer,
    /// see [`interval_from_millis`] for how it is normalised.
    fn kill_check_interval_ms(&self) -> i64;
}

/// Converts a settings value in milliseconds into a scheduler interval.
///
/// Negative values clamp to zero. A zero interval means the reconciliation
/// pass runs on every scheduler quantum.
pub fn interval_from_millis(millis: i64) -> Duration {
    Duration::from_millis(millis.max(0) as u64)
}
