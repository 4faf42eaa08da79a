#![no_std]

//! Shared utility library for the parking-space contracts
//!
//! Common helpers used by every contract in the workspace:
//! - Math utilities (safe math, percentages, day rounding)
//! - Time utilities (timestamps, durations)
//! - Validation predicates
//! - Storage helpers
//! - Error codes and error logging
//! - Event emission patterns

pub mod error_codes;
pub mod errors;
pub mod events;
pub mod math;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
