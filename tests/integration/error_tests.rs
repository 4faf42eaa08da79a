//! Error and Edge Case Tests
//!
//! These tests verify:
//! - Unauthorized access attempts
//! - Invalid input handling
//! - Boundary values (0, max, empty)
//! - Expected error assertions

use crate::assert_err;
use crate::harness::{TestHarness, MINT_FEE, SECONDS_PER_DAY};
use soroban_sdk::String;

use parking_space::{Listing, ParkingError};

// ============================================================================
// Unauthorized Access Tests
// ============================================================================

/// Test: Non-lender cannot list a lot
#[test]
fn test_error_stranger_cannot_list() {
    let harness = TestHarness::new();
    let client = harness.client();
    let index = harness.mint_lot("mem://lot");

    let result = client.try_set_sale(&harness.accounts.stranger, &index, &10);
    assert_err!(result, Ok(ParkingError::Unauthorized));

    let result = client.try_set_rent(&harness.accounts.stranger, &index, &10, &10);
    assert_err!(result, Ok(ParkingError::Unauthorized));

    let result = client.try_set_unavailable(&harness.accounts.stranger, &index);
    assert_err!(result, Ok(ParkingError::Unauthorized));
}

/// Test: Lender cannot buy or rent their own lot
#[test]
fn test_error_lender_cannot_trade_with_self() {
    let harness = TestHarness::new();
    let client = harness.client();
    let lender = &harness.accounts.lender;
    let index = harness.mint_lot("mem://lot");

    client.set_sale(lender, &index, &10);
    assert_err!(
        client.try_buy_lot(lender, &index, &10),
        Ok(ParkingError::Unauthorized)
    );

    client.set_rent(lender, &index, &10, &0);
    assert_err!(
        client.try_rent_lot(lender, &index, &SECONDS_PER_DAY, &10),
        Ok(ParkingError::Unauthorized)
    );
}

/// Test: Only the renter can return, only the lender can reclaim
#[test]
fn test_error_end_rent_roles() {
    let harness = TestHarness::new();
    let client = harness.client();
    let index = harness.mint_for_rent(10, 0);
    client.rent_lot(&harness.accounts.renter, &index, &SECONDS_PER_DAY, &10);
    harness.advance_days(2);

    assert_err!(
        client.try_client_end_rent(&harness.accounts.stranger, &index, &0),
        Ok(ParkingError::Unauthorized)
    );
    assert_err!(
        client.try_lender_end_rent(&harness.accounts.renter, &index),
        Ok(ParkingError::Unauthorized)
    );
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

/// Test: Boundary prices and deposits
#[test]
fn test_error_price_and_deposit_bounds() {
    let harness = TestHarness::new();
    let client = harness.client();
    let lender = &harness.accounts.lender;
    let index = harness.mint_lot("mem://lot");

    assert_err!(client.try_set_sale(lender, &index, &0), Ok(ParkingError::InvalidPrice));
    assert_err!(client.try_set_sale(lender, &index, &-1), Ok(ParkingError::InvalidPrice));
    assert_err!(client.try_set_rent(lender, &index, &0, &10), Ok(ParkingError::InvalidPrice));
    assert_err!(
        client.try_set_rent(lender, &index, &i128::MAX, &10),
        Ok(ParkingError::InvalidPrice)
    );
    assert_err!(
        client.try_set_rent(lender, &index, &10, &101),
        Ok(ParkingError::InvalidDeposit)
    );

    // Nothing changed
    assert_eq!(client.get_lot(&index).status, Listing::Unavailable);

    client.set_sale(lender, &index, &1);
    client.set_rent(lender, &index, &1, &0);
    client.set_rent(lender, &index, &1, &100);
    assert_eq!(client.get_lot(&index).deposit_percent, 100);
}

/// Test: Rent durations outside (0, 30 days] are rejected
#[test]
fn test_error_rent_duration_bounds() {
    let harness = TestHarness::new();
    let client = harness.client();
    let renter = &harness.accounts.renter;
    let index = harness.mint_for_rent(1, 0);

    assert_err!(
        client.try_rent_lot(renter, &index, &0, &1_000),
        Ok(ParkingError::InvalidDuration)
    );
    assert_err!(
        client.try_rent_lot(renter, &index, &(30 * SECONDS_PER_DAY + 1), &1_000),
        Ok(ParkingError::InvalidDuration)
    );
    client.rent_lot(renter, &index, &(30 * SECONDS_PER_DAY), &30);
}

/// Test: Mint rejects an empty locator or a short fee
#[test]
fn test_error_mint_inputs() {
    let harness = TestHarness::new();
    let client = harness.client();
    let lender = &harness.accounts.lender;

    assert_err!(
        client.try_create_lot(lender, &String::from_str(&harness.env, ""), &MINT_FEE),
        Ok(ParkingError::EmptyMetadata)
    );
    assert_err!(
        client.try_create_lot(lender, &String::from_str(&harness.env, "mem://x"), &(MINT_FEE - 1)),
        Ok(ParkingError::InsufficientPayment)
    );
    assert_eq!(client.get_lots_length(), 0);
}

// ============================================================================
// State Tests
// ============================================================================

/// Test: Wrong-status transitions
#[test]
fn test_error_wrong_status() {
    let harness = TestHarness::new();
    let client = harness.client();
    let renter = &harness.accounts.renter;
    let index = harness.mint_lot("mem://lot");

    assert_err!(client.try_buy_lot(renter, &index, &100), Ok(ParkingError::InvalidState));
    assert_err!(
        client.try_rent_lot(renter, &index, &SECONDS_PER_DAY, &100),
        Ok(ParkingError::InvalidState)
    );
    assert_err!(
        client.try_client_end_rent(renter, &index, &0),
        Ok(ParkingError::InvalidState)
    );
    assert_err!(
        client.try_get_rent_price(&index, &SECONDS_PER_DAY, &Listing::Unavailable),
        Ok(ParkingError::InvalidState)
    );
}

/// Test: Rented lots cannot be relisted and reclaim waits for the return day
#[test]
fn test_error_rented_lot_locked() {
    let harness = TestHarness::new();
    let client = harness.client();
    let lender = &harness.accounts.lender;
    let index = harness.mint_for_rent(10, 0);
    client.rent_lot(&harness.accounts.renter, &index, &(2 * SECONDS_PER_DAY), &20);

    assert_err!(client.try_set_sale(lender, &index, &5), Ok(ParkingError::InvalidState));
    assert_err!(client.try_set_unavailable(lender, &index), Ok(ParkingError::InvalidState));

    harness.advance_time(2 * SECONDS_PER_DAY - 1);
    assert_err!(
        client.try_lender_end_rent(lender, &index),
        Ok(ParkingError::RentNotExpired)
    );
    harness.advance_time(1);
    client.lender_end_rent(lender, &index);
}

/// Test: Unknown lots
#[test]
fn test_error_unknown_lot() {
    let harness = TestHarness::new();
    let client = harness.client();

    assert_err!(client.try_get_lot(&0), Ok(ParkingError::LotNotFound));
    assert_err!(client.try_token_uri(&0), Ok(ParkingError::LotNotFound));
    assert_err!(client.try_owner_of(&0), Ok(ParkingError::LotNotFound));
    assert_err!(
        client.try_set_sale(&harness.accounts.lender, &0, &10),
        Ok(ParkingError::LotNotFound)
    );
}

/// Test: Double initialization
#[test]
fn test_error_initialize_twice() {
    let harness = TestHarness::new();
    let client = harness.client();

    assert_err!(
        client.try_initialize(
            &harness.accounts.admin,
            &harness.contracts.token,
            &MINT_FEE,
            &0
        ),
        Ok(ParkingError::AlreadyInitialized)
    );
}
