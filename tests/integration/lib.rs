//! Integration Test Suite for the parking-space marketplace
//!
//! This module validates the contract and the listing controller together:
//! - Frontend-style flows driven through `ListingController`
//! - End-to-end lot journeys against the deployed contract
//! - Error scenarios and edge cases
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `authority`: `LedgerAuthority` adapter over the contract client
//! - `frontend_tests`: Controller-driven user flows
//! - `e2e_tests`: End-to-end flow tests
//! - `error_tests`: Error and edge case tests

#![cfg(test)]

pub mod error_tests;
pub mod harness;

// Re-export commonly used items for convenience
pub use harness::*;
