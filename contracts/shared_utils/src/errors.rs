//! Error logging helpers

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with the entry point it was raised from
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context, usually `contract::entry_point`
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log an error code with its standard message and context, then emit
    /// the matching error event.
    pub fn report(e: &Env, error_code: u32, context: &str) {
        Self::log_error_with_context(e, context, crate::error_codes::message_for_code(error_code));
        crate::error_codes::emit_error_event(e, error_code, context);
    }
}
