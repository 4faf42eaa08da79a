//! Validation predicates shared by the listing entry points

use soroban_sdk::String;

/// Smallest accepted sale or rent price, in minor units
pub const MIN_PRICE: i128 = 1;

/// Largest accepted sale or rent price, in minor units. Keeps a month of
/// rent with a full deposit, and a late charge over any ledger timestamp,
/// inside `i128`.
pub const MAX_PRICE: i128 = 1_000_000_000_000_000_000;

/// Largest accepted deposit percentage
pub const MAX_DEPOSIT_PERCENT: u32 = 100;

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// A price is valid when it lies in `MIN_PRICE..=MAX_PRICE`
    pub fn is_valid_price(price: i128) -> bool {
        (MIN_PRICE..=MAX_PRICE).contains(&price)
    }

    /// A deposit percentage is valid when it lies in 0..=100
    pub fn is_valid_percent(percent: u32) -> bool {
        percent <= MAX_DEPOSIT_PERCENT
    }

    /// A rent duration is valid when it is non-zero and at most `max_seconds`
    pub fn is_valid_duration(seconds: u64, max_seconds: u64) -> bool {
        seconds > 0 && seconds <= max_seconds
    }

    /// A fee may be zero but never negative
    pub fn is_valid_fee(fee: i128) -> bool {
        fee >= 0
    }

    /// Validate that a string is not empty
    pub fn is_non_empty(value: &String) -> bool {
        !value.is_empty()
    }
}
