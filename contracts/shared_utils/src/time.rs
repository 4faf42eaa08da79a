//! Time utilities for timestamp and duration calculations

use soroban_sdk::Env;

use crate::math::SafeMath;

/// Seconds in one day
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Time utility functions for working with timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Check if a timestamp has been reached (current time >= deadline)
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `deadline` - The deadline timestamp
    ///
    /// # Returns
    /// `true` if reached, `false` otherwise
    pub fn is_expired(e: &Env, deadline: u64) -> bool {
        Self::now(e) >= deadline
    }

    /// Calculate elapsed time since a timestamp
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `start_time` - The start timestamp
    ///
    /// # Returns
    /// Elapsed time in seconds (0 if `start_time` is in the future)
    pub fn elapsed(e: &Env, start_time: u64) -> u64 {
        Self::now(e).saturating_sub(start_time)
    }

    /// Number of days started within `seconds`: any partial day counts as one
    pub fn started_days(seconds: u64) -> u64 {
        SafeMath::ceil_div(seconds, SECONDS_PER_DAY)
    }
}
