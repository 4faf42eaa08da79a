//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env
//! - Deploys the payment token and the parking-space contract
//! - Creates test accounts (admin/lender/renter/buyer/stranger)
//! - Seeds token balances
//! - Provides typed contract clients and a listing controller
//! - Supports deterministic time advancement

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

use lot_controller::{ControllerConfig, ListingController, MemoryContentStore};
use parking_space::{ParkingSpaceContract, ParkingSpaceContractClient};

use crate::authority::{LedgerClock, SorobanLedger};

/// Fee charged for minting a lot
pub const MINT_FEE: i128 = 50;

/// Grace period after the return day, in seconds
pub const ADDITIONAL_TIME: u64 = 3600;

/// Default user initial balance
pub const DEFAULT_USER_BALANCE: i128 = 1_000_000;

/// One day in seconds
pub const SECONDS_PER_DAY: u64 = 86400;

pub type Controller = ListingController<SorobanLedger, MemoryContentStore, LedgerClock>;

/// Test accounts container
pub struct TestAccounts {
    pub admin: Address,
    pub lender: Address,
    pub renter: Address,
    pub buyer: Address,
    pub stranger: Address,
}

impl TestAccounts {
    /// Create new test accounts
    pub fn new(e: &Env) -> Self {
        Self {
            admin: Address::generate(e),
            lender: Address::generate(e),
            renter: Address::generate(e),
            buyer: Address::generate(e),
            stranger: Address::generate(e),
        }
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub parking_space: Address,
    pub token: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a new test harness with the contract deployed and initialized
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Set initial ledger state
        env.ledger().set(LedgerInfo {
            timestamp: 1704067200, // Jan 1, 2024 00:00:00 UTC
            protocol_version: 22,
            sequence_number: 1,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 1000,
            min_persistent_entry_ttl: 1000,
            max_entry_ttl: 100_000,
        });

        let accounts = TestAccounts::new(&env);

        // Deploy token contract (Stellar Asset Contract)
        let token_admin = Address::generate(&env);
        let token = env.register_stellar_asset_contract_v2(token_admin);
        let token_address = token.address();

        let parking_space = env.register(ParkingSpaceContract, ());
        ParkingSpaceContractClient::new(&env, &parking_space).initialize(
            &accounts.admin,
            &token_address,
            &MINT_FEE,
            &ADDITIONAL_TIME,
        );

        // Mint tokens to users
        let token_client = StellarAssetClient::new(&env, &token_address);
        token_client.mint(&accounts.lender, &DEFAULT_USER_BALANCE);
        token_client.mint(&accounts.renter, &DEFAULT_USER_BALANCE);
        token_client.mint(&accounts.buyer, &DEFAULT_USER_BALANCE);
        token_client.mint(&accounts.stranger, &DEFAULT_USER_BALANCE);

        Self {
            env,
            accounts,
            contracts: DeployedContracts {
                parking_space,
                token: token_address,
            },
        }
    }

    // ========================================================================
    // Time Management Helpers
    // ========================================================================

    /// Advance time by a specified number of seconds
    pub fn advance_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        ledger.sequence_number += 1;
        self.env.ledger().set(ledger);
    }

    /// Advance time by a specified number of days
    pub fn advance_days(&self, days: u64) {
        self.advance_time(days * SECONDS_PER_DAY);
    }

    /// Get current timestamp
    pub fn current_timestamp(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ========================================================================
    // Contract Interaction Helpers
    // ========================================================================

    pub fn client(&self) -> ParkingSpaceContractClient<'static> {
        ParkingSpaceContractClient::new(&self.env, &self.contracts.parking_space)
    }

    /// Get token client
    pub fn token_client(&self) -> TokenClient<'static> {
        TokenClient::new(&self.env, &self.contracts.token)
    }

    /// Check user balance
    pub fn balance(&self, user: &Address) -> i128 {
        self.token_client().balance(user)
    }

    /// Mint a lot for the default lender directly on the contract
    pub fn mint_lot(&self, uri: &str) -> u32 {
        self.client().create_lot(
            &self.accounts.lender,
            &String::from_str(&self.env, uri),
            &MINT_FEE,
        )
    }

    /// Mint a lot and list it for rent
    pub fn mint_for_rent(&self, price: i128, deposit_percent: u32) -> u32 {
        let index = self.mint_lot("mem://lot");
        self.client()
            .set_rent(&self.accounts.lender, &index, &price, &deposit_percent);
        index
    }

    /// Listing controller wired to this harness's contract and ledger clock
    pub fn controller(&self) -> Controller {
        ListingController::with_clock(
            SorobanLedger::new(&self.env, &self.contracts.parking_space),
            MemoryContentStore::new(),
            LedgerClock::new(&self.env),
            ControllerConfig::default(),
        )
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro to assert an error result matches expected error
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $expected:pat) => {
        match $result {
            Err($expected) => (),
            Err(e) => panic!("Expected error {:?}, got {:?}", stringify!($expected), e),
            Ok(_) => panic!("Expected error {:?}, got Ok", stringify!($expected)),
        }
    };
}

/// Helper macro to assert success and extract value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(val) => val,
            Err(e) => panic!("Expected Ok, got Err({:?})", e),
        }
    };
}

#[cfg(test)]
mod harness_tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();

        assert_ne!(harness.accounts.admin, harness.accounts.lender);
        assert_ne!(harness.accounts.lender, harness.accounts.renter);
        assert_eq!(harness.client().owner(), harness.accounts.admin);
        assert_eq!(harness.client().payment_token(), harness.contracts.token);
    }

    #[test]
    fn test_time_advancement() {
        let harness = TestHarness::new();
        let initial_time = harness.current_timestamp();

        harness.advance_time(100);
        assert_eq!(harness.current_timestamp(), initial_time + 100);

        harness.advance_days(1);
        assert_eq!(
            harness.current_timestamp(),
            initial_time + 100 + SECONDS_PER_DAY
        );
    }

    #[test]
    fn test_token_balances() {
        let harness = TestHarness::new();

        assert_eq!(harness.balance(&harness.accounts.lender), DEFAULT_USER_BALANCE);
        assert_eq!(harness.balance(&harness.accounts.renter), DEFAULT_USER_BALANCE);
        assert_eq!(harness.balance(&harness.contracts.parking_space), 0);
    }
}
