//! Standardized error codes and messages for the parking-space contracts.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Validation: 1-99 (invalid input, out of range)
//! - Authorization: 100-199 (caller lacks the required role)
//! - State: 200-299 (wrong listing status, not initialized, not expired)
//! - Resource: 300-399 (not found, insufficient payment)

use soroban_sdk::{symbol_short, Env, String as SorobanString};

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Validation (1-99)
    pub const INVALID_PRICE: u32 = 1;
    pub const INVALID_DEPOSIT: u32 = 2;
    pub const INVALID_DURATION: u32 = 3;
    pub const EMPTY_METADATA: u32 = 4;
    pub const INVALID_FEE: u32 = 5;

    // Authorization (100-199)
    pub const UNAUTHORIZED: u32 = 100;

    // State (200-299)
    pub const ALREADY_INITIALIZED: u32 = 200;
    pub const NOT_INITIALIZED: u32 = 201;
    pub const WRONG_STATE: u32 = 202;
    pub const RENT_NOT_EXPIRED: u32 = 203;

    // Resource (300-399)
    pub const NOT_FOUND: u32 = 300;
    pub const INSUFFICIENT_PAYMENT: u32 = 301;
}

/// Returns a human-readable message for a given error code (for events/logging).
pub fn message_for_code(code: u32) -> &'static str {
    match code {
        1 => "Invalid price: out of the accepted range",
        2 => "Invalid deposit: percent must be between 0 and 100",
        3 => "Invalid duration: must be greater than zero and within the rent limit",
        4 => "Metadata locator must not be empty",
        5 => "Invalid fee: must not be negative",
        100 => "Unauthorized: caller not allowed",
        200 => "Contract already initialized",
        201 => "Contract not initialized",
        202 => "Invalid listing status for this operation",
        203 => "Rent period has not expired",
        300 => "Lot not found",
        301 => "Insufficient payment",
        _ => "Unknown error",
    }
}

/// Emit an error event for off-chain indexing and debugging.
/// Call this before returning an error so indexers can record it.
pub fn emit_error_event(e: &Env, error_code: u32, context: &str) {
    let msg = message_for_code(error_code);
    let context_str = SorobanString::from_str(e, context);
    let msg_str = SorobanString::from_str(e, msg);
    e.events().publish(
        (symbol_short!("Error"), error_code),
        (context_str, msg_str, e.ledger().timestamp()),
    );
}
