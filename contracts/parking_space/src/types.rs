//! Data types, storage keys and errors for the parking-space contract.

use soroban_sdk::{contracterror, contracttype, Address};
use shared_utils::error_codes::code;

// ============================================================================
// Error Types
// ============================================================================

/// Contract errors. Every rejected entry point leaves state untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ParkingError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// No lot exists at the given index
    LotNotFound = 3,
    /// Caller lacks the role required for this action
    Unauthorized = 4,
    /// Price is outside the accepted range
    InvalidPrice = 5,
    /// Deposit percent must be within 0..=100
    InvalidDeposit = 6,
    /// Rent duration must be non-zero and at most thirty days
    InvalidDuration = 7,
    /// Listing status forbids this action
    InvalidState = 8,
    /// Attached payment is below the required amount
    InsufficientPayment = 9,
    /// Lender tried to reclaim before the return day
    RentNotExpired = 10,
    /// Metadata locator is empty
    EmptyMetadata = 11,
    /// Mint fee must not be negative
    InvalidFee = 12,
}

impl ParkingError {
    /// Shared error code used for error events.
    pub fn code(&self) -> u32 {
        match self {
            ParkingError::NotInitialized => code::NOT_INITIALIZED,
            ParkingError::AlreadyInitialized => code::ALREADY_INITIALIZED,
            ParkingError::LotNotFound => code::NOT_FOUND,
            ParkingError::Unauthorized => code::UNAUTHORIZED,
            ParkingError::InvalidPrice => code::INVALID_PRICE,
            ParkingError::InvalidDeposit => code::INVALID_DEPOSIT,
            ParkingError::InvalidDuration => code::INVALID_DURATION,
            ParkingError::InvalidState => code::WRONG_STATE,
            ParkingError::InsufficientPayment => code::INSUFFICIENT_PAYMENT,
            ParkingError::RentNotExpired => code::RENT_NOT_EXPIRED,
            ParkingError::EmptyMetadata => code::EMPTY_METADATA,
            ParkingError::InvalidFee => code::INVALID_FEE,
        }
    }
}

// ============================================================================
// Data Types
// ============================================================================

/// Listing status of a lot. Discriminants are part of the public interface.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Listing {
    ForSale = 0,
    ForRent = 1,
    Unavailable = 2,
    Rented = 3,
}

/// A parking lot and its current listing terms.
///
/// `sale_price` is non-zero only while `ForSale`, `rent_price` only while
/// `ForRent` or `Rented`, and `renter` is set only while `Rented`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lot {
    pub index: u32,
    pub lender: Address,
    pub renter: Option<Address>,
    pub sale_price: i128,
    /// Price per started day of rent
    pub rent_price: i128,
    pub deposit_percent: u32,
    pub rent_start: u64,
    pub return_day: u64,
    pub rent_duration: u64,
    /// Deposit escrowed by the contract for the current rent
    pub held_deposit: i128,
    pub status: Listing,
}

impl Lot {
    pub fn new(index: u32, lender: Address) -> Self {
        Lot {
            index,
            lender,
            renter: None,
            sale_price: 0,
            rent_price: 0,
            deposit_percent: 0,
            rent_start: 0,
            return_day: 0,
            rent_duration: 0,
            held_deposit: 0,
            status: Listing::Unavailable,
        }
    }

    /// Drop every rent field set by `rent_lot`.
    pub fn clear_rent(&mut self) {
        self.renter = None;
        self.rent_start = 0;
        self.return_day = 0;
        self.rent_duration = 0;
        self.held_deposit = 0;
    }
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token used for every payment
    PaymentToken,
    /// Fee charged by `create_lot`
    MintFee,
    /// Grace period after `return_day` before late charges start, in seconds
    AdditionalTime,
    /// Number of lots ever minted; also the next index
    LotCount,
    /// Lot data (index -> Lot)
    Lot(u32),
    /// Metadata locator (index -> String)
    TokenUri(u32),
    /// Token custody (index -> Address)
    Owner(u32),
    /// Number of lot tokens held by an address
    Balance(Address),
}
