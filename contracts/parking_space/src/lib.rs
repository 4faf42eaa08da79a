#![no_std]

//! Parking-space marketplace contract.
//!
//! Every lot is a non-fungible token owned by its lender. Lenders list lots
//! for sale or rent; buyers and renters pay in the configured token. Rent
//! deposits are escrowed by the contract until the rent ends.

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use shared_utils::{ErrorHelper, Events, Storage, TimeUtils, Validation};

mod pricing;
mod types;

pub use pricing::{
    client_settlement, late_charge, lender_settlement, rent_cost, RentCost, Settlement,
    MAX_RENT_DURATION,
};
pub use types::{DataKey, Listing, Lot, ParkingError};

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    // --- Configuration ---

    pub fn set_payment_token(e: &Env, token: &Address) {
        e.storage().instance().set(&DataKey::PaymentToken, token);
    }

    pub fn get_payment_token(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::PaymentToken)
    }

    pub fn set_mint_fee(e: &Env, fee: i128) {
        e.storage().instance().set(&DataKey::MintFee, &fee);
    }

    pub fn get_mint_fee(e: &Env) -> Option<i128> {
        e.storage().instance().get(&DataKey::MintFee)
    }

    pub fn set_additional_time(e: &Env, seconds: u64) {
        e.storage().instance().set(&DataKey::AdditionalTime, &seconds);
    }

    pub fn get_additional_time(e: &Env) -> Option<u64> {
        e.storage().instance().get(&DataKey::AdditionalTime)
    }

    // --- Lots ---

    pub fn get_lot_count(e: &Env) -> u32 {
        e.storage().instance().get(&DataKey::LotCount).unwrap_or(0)
    }

    /// Reserve the next lot index.
    pub fn next_index(e: &Env) -> u32 {
        let index = get_lot_count(e);
        e.storage().instance().set(&DataKey::LotCount, &(index + 1));
        index
    }

    pub fn set_lot(e: &Env, lot: &Lot) {
        e.storage().persistent().set(&DataKey::Lot(lot.index), lot);
    }

    pub fn get_lot(e: &Env, index: u32) -> Option<Lot> {
        e.storage().persistent().get(&DataKey::Lot(index))
    }

    pub fn set_token_uri(e: &Env, index: u32, uri: &String) {
        e.storage().persistent().set(&DataKey::TokenUri(index), uri);
    }

    pub fn get_token_uri(e: &Env, index: u32) -> Option<String> {
        e.storage().persistent().get(&DataKey::TokenUri(index))
    }

    // --- Token custody ---

    pub fn get_owner(e: &Env, index: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Owner(index))
    }

    pub fn get_balance(e: &Env, holder: &Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(holder.clone()))
            .unwrap_or(0)
    }

    fn set_balance(e: &Env, holder: &Address, balance: u32) {
        e.storage()
            .persistent()
            .set(&DataKey::Balance(holder.clone()), &balance);
    }

    /// Give a freshly minted lot token to `holder`.
    pub fn assign(e: &Env, index: u32, holder: &Address) {
        e.storage().persistent().set(&DataKey::Owner(index), holder);
        set_balance(e, holder, get_balance(e, holder) + 1);
    }

    /// Move a lot token from its current holder to `to`.
    pub fn move_custody(e: &Env, index: u32, to: &Address) {
        let Some(from) = get_owner(e, index) else {
            return assign(e, index, to);
        };
        if from == *to {
            return;
        }
        set_balance(e, &from, get_balance(e, &from).saturating_sub(1));
        e.storage().persistent().set(&DataKey::Owner(index), to);
        set_balance(e, to, get_balance(e, to) + 1);
        Events::emit_custody(e, index, &from, to);
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct ParkingSpaceContract;

/// Log and emit an error event, then hand the error back for `Err(..)`.
fn reject(e: &Env, err: ParkingError, context: &str) -> ParkingError {
    ErrorHelper::report(e, err.code(), context);
    err
}

fn require_initialized(e: &Env) -> Result<(), ParkingError> {
    if !Storage::is_initialized(e) {
        return Err(ParkingError::NotInitialized);
    }
    Ok(())
}

fn load_lot(e: &Env, index: u32, context: &str) -> Result<Lot, ParkingError> {
    storage::get_lot(e, index).ok_or_else(|| reject(e, ParkingError::LotNotFound, context))
}

/// Load a lot that `caller` must be the lender of, rejecting rented lots.
fn load_listable(e: &Env, caller: &Address, index: u32, context: &str) -> Result<Lot, ParkingError> {
    let lot = load_lot(e, index, context)?;
    if lot.lender != *caller {
        return Err(reject(e, ParkingError::Unauthorized, context));
    }
    if lot.status == Listing::Rented {
        return Err(reject(e, ParkingError::InvalidState, context));
    }
    Ok(lot)
}

/// Transfer `amount` of the payment token; zero amounts are skipped.
fn pay(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ParkingError> {
    if amount <= 0 {
        return Ok(());
    }
    let token_address = storage::get_payment_token(e).ok_or(ParkingError::NotInitialized)?;
    token::Client::new(e, &token_address).transfer(from, to, &amount);
    Events::emit_transfer(e, from, to, amount);
    Ok(())
}

fn publish_listing(e: &Env, lot: &Lot) {
    Events::emit_updated(
        e,
        lot.index,
        (lot.status, lot.sale_price, lot.rent_price, lot.deposit_percent),
    );
}

#[contractimpl]
impl ParkingSpaceContract {
    // ========================================================================
    // Initialization & Configuration
    // ========================================================================

    /// Initialize the marketplace
    ///
    /// # Arguments
    /// * `admin` - Contract owner; receives mint fees
    /// * `payment_token` - Token every price is denominated in
    /// * `mint_fee` - Fee charged by `create_lot`
    /// * `additional_time` - Grace period after the return day, in seconds
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    /// * `InvalidFee` - If `mint_fee` is negative
    pub fn initialize(
        e: Env,
        admin: Address,
        payment_token: Address,
        mint_fee: i128,
        additional_time: u64,
    ) -> Result<(), ParkingError> {
        if Storage::is_initialized(&e) {
            return Err(reject(&e, ParkingError::AlreadyInitialized, "parking::initialize"));
        }
        admin.require_auth();
        if !Validation::is_valid_fee(mint_fee) {
            return Err(reject(&e, ParkingError::InvalidFee, "parking::initialize"));
        }

        Storage::set_admin(&e, &admin);
        storage::set_payment_token(&e, &payment_token);
        storage::set_mint_fee(&e, mint_fee);
        storage::set_additional_time(&e, additional_time);
        e.storage().instance().set(&DataKey::LotCount, &0u32);
        Storage::set_initialized(&e);

        Ok(())
    }

    /// Contract owner
    pub fn owner(e: Env) -> Result<Address, ParkingError> {
        Storage::get_admin(&e).ok_or(ParkingError::NotInitialized)
    }

    pub fn payment_token(e: Env) -> Result<Address, ParkingError> {
        storage::get_payment_token(&e).ok_or(ParkingError::NotInitialized)
    }

    pub fn get_mint_fee(e: Env) -> Result<i128, ParkingError> {
        storage::get_mint_fee(&e).ok_or(ParkingError::NotInitialized)
    }

    /// Update the mint fee (owner only)
    pub fn set_mint_fee(e: Env, fee: i128) -> Result<(), ParkingError> {
        let admin = Storage::get_admin(&e).ok_or(ParkingError::NotInitialized)?;
        admin.require_auth();
        if !Validation::is_valid_fee(fee) {
            return Err(reject(&e, ParkingError::InvalidFee, "parking::set_mint_fee"));
        }
        storage::set_mint_fee(&e, fee);
        Ok(())
    }

    pub fn additional_time(e: Env) -> Result<u64, ParkingError> {
        storage::get_additional_time(&e).ok_or(ParkingError::NotInitialized)
    }

    /// Update the late-return grace period (owner only)
    pub fn set_additional_time(e: Env, seconds: u64) -> Result<(), ParkingError> {
        let admin = Storage::get_admin(&e).ok_or(ParkingError::NotInitialized)?;
        admin.require_auth();
        storage::set_additional_time(&e, seconds);
        Ok(())
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint a new lot owned by `caller`
    ///
    /// The mint fee is pulled from `caller` and paid to the contract owner.
    ///
    /// # Arguments
    /// * `caller` - The lender of the new lot
    /// * `uri` - Metadata locator
    /// * `payment` - Most the caller agrees to pay; must cover the mint fee
    ///
    /// # Returns
    /// The index of the new lot
    ///
    /// # Errors
    /// * `EmptyMetadata` - If `uri` is empty
    /// * `InsufficientPayment` - If `payment` is below the mint fee
    pub fn create_lot(
        e: Env,
        caller: Address,
        uri: String,
        payment: i128,
    ) -> Result<u32, ParkingError> {
        caller.require_auth();
        require_initialized(&e)?;
        if !Validation::is_non_empty(&uri) {
            return Err(reject(&e, ParkingError::EmptyMetadata, "parking::create_lot"));
        }
        let fee = storage::get_mint_fee(&e).unwrap_or(0);
        if payment < fee {
            return Err(reject(&e, ParkingError::InsufficientPayment, "parking::create_lot"));
        }

        let owner = Storage::get_admin(&e).ok_or(ParkingError::NotInitialized)?;
        pay(&e, &caller, &owner, fee)?;

        let index = storage::next_index(&e);
        let lot = Lot::new(index, caller.clone());
        storage::set_lot(&e, &lot);
        storage::set_token_uri(&e, index, &uri);
        storage::assign(&e, index, &caller);

        Events::emit_created(&e, index, &caller, (uri, fee));

        Ok(index)
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// List a lot for sale. The lot token is held by the contract while listed.
    ///
    /// # Errors
    /// * `InvalidPrice` - If `price` is outside `MIN_PRICE..=MAX_PRICE`
    /// * `Unauthorized` - If `caller` is not the lender
    /// * `InvalidState` - If the lot is rented
    pub fn set_sale(e: Env, caller: Address, index: u32, price: i128) -> Result<(), ParkingError> {
        caller.require_auth();
        let mut lot = load_listable(&e, &caller, index, "parking::set_sale")?;
        if !Validation::is_valid_price(price) {
            return Err(reject(&e, ParkingError::InvalidPrice, "parking::set_sale"));
        }

        lot.status = Listing::ForSale;
        lot.sale_price = price;
        lot.rent_price = 0;
        lot.deposit_percent = 0;
        storage::set_lot(&e, &lot);
        storage::move_custody(&e, index, &e.current_contract_address());

        publish_listing(&e, &lot);
        Ok(())
    }

    /// List a lot for rent at `price` per started day
    ///
    /// # Errors
    /// * `InvalidPrice` - If `price` is outside `MIN_PRICE..=MAX_PRICE`
    /// * `InvalidDeposit` - If `deposit_percent` exceeds 100
    /// * `Unauthorized` - If `caller` is not the lender
    /// * `InvalidState` - If the lot is rented
    pub fn set_rent(
        e: Env,
        caller: Address,
        index: u32,
        price: i128,
        deposit_percent: u32,
    ) -> Result<(), ParkingError> {
        caller.require_auth();
        let mut lot = load_listable(&e, &caller, index, "parking::set_rent")?;
        if !Validation::is_valid_price(price) {
            return Err(reject(&e, ParkingError::InvalidPrice, "parking::set_rent"));
        }
        if !Validation::is_valid_percent(deposit_percent) {
            return Err(reject(&e, ParkingError::InvalidDeposit, "parking::set_rent"));
        }

        lot.status = Listing::ForRent;
        lot.sale_price = 0;
        lot.rent_price = price;
        lot.deposit_percent = deposit_percent;
        storage::set_lot(&e, &lot);
        storage::move_custody(&e, index, &caller);

        publish_listing(&e, &lot);
        Ok(())
    }

    /// Take a lot off the market
    pub fn set_unavailable(e: Env, caller: Address, index: u32) -> Result<(), ParkingError> {
        caller.require_auth();
        let mut lot = load_listable(&e, &caller, index, "parking::set_unavailable")?;

        lot.status = Listing::Unavailable;
        lot.sale_price = 0;
        lot.rent_price = 0;
        lot.deposit_percent = 0;
        storage::set_lot(&e, &lot);
        storage::move_custody(&e, index, &caller);

        publish_listing(&e, &lot);
        Ok(())
    }

    // ========================================================================
    // Sale
    // ========================================================================

    /// Buy a lot listed for sale. The buyer becomes the lender.
    ///
    /// # Errors
    /// * `InvalidState` - If the lot is not for sale
    /// * `Unauthorized` - If `buyer` is already the lender
    /// * `InsufficientPayment` - If `payment` is below the sale price
    pub fn buy_lot(e: Env, buyer: Address, index: u32, payment: i128) -> Result<(), ParkingError> {
        buyer.require_auth();
        let mut lot = load_lot(&e, index, "parking::buy_lot")?;
        if lot.status != Listing::ForSale {
            return Err(reject(&e, ParkingError::InvalidState, "parking::buy_lot"));
        }
        if lot.lender == buyer {
            return Err(reject(&e, ParkingError::Unauthorized, "parking::buy_lot"));
        }
        if payment < lot.sale_price {
            return Err(reject(&e, ParkingError::InsufficientPayment, "parking::buy_lot"));
        }

        pay(&e, &buyer, &lot.lender, lot.sale_price)?;

        lot.lender = buyer.clone();
        lot.status = Listing::Unavailable;
        lot.sale_price = 0;
        storage::set_lot(&e, &lot);
        storage::move_custody(&e, index, &buyer);

        publish_listing(&e, &lot);
        Ok(())
    }

    // ========================================================================
    // Rent
    // ========================================================================

    /// Rent a lot for `duration` seconds
    ///
    /// The rent is paid to the lender; the deposit is held by the contract
    /// until the rent ends.
    ///
    /// # Errors
    /// * `InvalidState` - If the lot is not for rent
    /// * `Unauthorized` - If `renter` is the lender
    /// * `InvalidDuration` - If `duration` is zero or longer than thirty days
    /// * `InsufficientPayment` - If `payment` does not cover rent plus deposit
    pub fn rent_lot(
        e: Env,
        renter: Address,
        index: u32,
        duration: u64,
        payment: i128,
    ) -> Result<(), ParkingError> {
        renter.require_auth();
        let mut lot = load_lot(&e, index, "parking::rent_lot")?;
        if lot.status != Listing::ForRent {
            return Err(reject(&e, ParkingError::InvalidState, "parking::rent_lot"));
        }
        if lot.lender == renter {
            return Err(reject(&e, ParkingError::Unauthorized, "parking::rent_lot"));
        }
        if !Validation::is_valid_duration(duration, MAX_RENT_DURATION) {
            return Err(reject(&e, ParkingError::InvalidDuration, "parking::rent_lot"));
        }
        let cost = rent_cost(lot.rent_price, lot.deposit_percent, duration);
        if payment < cost.total() {
            return Err(reject(&e, ParkingError::InsufficientPayment, "parking::rent_lot"));
        }

        pay(&e, &renter, &lot.lender, cost.rent)?;
        pay(&e, &renter, &e.current_contract_address(), cost.deposit)?;

        let now = TimeUtils::now(&e);
        lot.renter = Some(renter.clone());
        lot.rent_start = now;
        lot.return_day = now + duration;
        lot.rent_duration = duration;
        lot.held_deposit = cost.deposit;
        lot.status = Listing::Rented;
        storage::set_lot(&e, &lot);
        storage::move_custody(&e, index, &renter);

        publish_listing(&e, &lot);
        Ok(())
    }

    /// Return a rented lot
    ///
    /// Any late charge is covered by the held deposit first; the renter pays
    /// the rest and gets back whatever deposit is left.
    ///
    /// # Errors
    /// * `InvalidState` - If the lot is not rented
    /// * `Unauthorized` - If `renter` is not the current renter
    /// * `InsufficientPayment` - If `payment` does not cover the late charge
    pub fn client_end_rent(
        e: Env,
        renter: Address,
        index: u32,
        payment: i128,
    ) -> Result<(), ParkingError> {
        renter.require_auth();
        let mut lot = load_lot(&e, index, "parking::client_end_rent")?;
        if lot.status != Listing::Rented {
            return Err(reject(&e, ParkingError::InvalidState, "parking::client_end_rent"));
        }
        if lot.renter.as_ref() != Some(&renter) {
            return Err(reject(&e, ParkingError::Unauthorized, "parking::client_end_rent"));
        }

        let additional = storage::get_additional_time(&e).unwrap_or(0);
        let elapsed = TimeUtils::elapsed(&e, lot.rent_start);
        let charge = late_charge(lot.rent_price, lot.rent_duration, elapsed, additional);
        let settlement = client_settlement(charge, lot.held_deposit);
        if payment < settlement.from_renter {
            return Err(reject(&e, ParkingError::InsufficientPayment, "parking::client_end_rent"));
        }

        Self::settle(&e, &mut lot, &renter, &settlement)
    }

    /// Reclaim a rented lot once its return day has passed
    ///
    /// The lender keeps as much of the held deposit as the late charge and
    /// the remainder goes back to the renter.
    ///
    /// # Errors
    /// * `InvalidState` - If the lot is not rented
    /// * `Unauthorized` - If `caller` is not the lender
    /// * `RentNotExpired` - If the return day has not been reached
    pub fn lender_end_rent(e: Env, caller: Address, index: u32) -> Result<(), ParkingError> {
        caller.require_auth();
        let mut lot = load_lot(&e, index, "parking::lender_end_rent")?;
        if lot.status != Listing::Rented {
            return Err(reject(&e, ParkingError::InvalidState, "parking::lender_end_rent"));
        }
        if lot.lender != caller {
            return Err(reject(&e, ParkingError::Unauthorized, "parking::lender_end_rent"));
        }
        if !TimeUtils::is_expired(&e, lot.return_day) {
            return Err(reject(&e, ParkingError::RentNotExpired, "parking::lender_end_rent"));
        }
        let Some(renter) = lot.renter.clone() else {
            return Err(reject(&e, ParkingError::InvalidState, "parking::lender_end_rent"));
        };

        let additional = storage::get_additional_time(&e).unwrap_or(0);
        let elapsed = TimeUtils::elapsed(&e, lot.rent_start);
        let charge = late_charge(lot.rent_price, lot.rent_duration, elapsed, additional);
        let settlement = lender_settlement(charge, lot.held_deposit);

        Self::settle(&e, &mut lot, &renter, &settlement)
    }

    /// Price quote used before payment-bearing calls
    ///
    /// * `target == ForRent` - `time` is a rent duration; returns rent plus deposit
    /// * `target == Rented` - `time` is the elapsed rent time; returns what the
    ///   renter must attach to `client_end_rent`
    ///
    /// # Errors
    /// * `InvalidState` - For any other target, or if the lot is not in it
    /// * `InvalidDuration` - If a rent duration is out of range
    pub fn get_rent_price(
        e: Env,
        index: u32,
        time: u64,
        target: Listing,
    ) -> Result<i128, ParkingError> {
        let lot = storage::get_lot(&e, index).ok_or(ParkingError::LotNotFound)?;
        if lot.status != target {
            return Err(ParkingError::InvalidState);
        }
        match target {
            Listing::ForRent => {
                if !Validation::is_valid_duration(time, MAX_RENT_DURATION) {
                    return Err(ParkingError::InvalidDuration);
                }
                Ok(rent_cost(lot.rent_price, lot.deposit_percent, time).total())
            }
            Listing::Rented => {
                let additional = storage::get_additional_time(&e).unwrap_or(0);
                let charge = late_charge(lot.rent_price, lot.rent_duration, time, additional);
                Ok(client_settlement(charge, lot.held_deposit).from_renter)
            }
            _ => Err(ParkingError::InvalidState),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_lot(e: Env, index: u32) -> Result<Lot, ParkingError> {
        storage::get_lot(&e, index).ok_or(ParkingError::LotNotFound)
    }

    /// Number of lots ever minted
    pub fn get_lots_length(e: Env) -> u32 {
        storage::get_lot_count(&e)
    }

    /// Metadata locator of a lot
    pub fn token_uri(e: Env, index: u32) -> Result<String, ParkingError> {
        storage::get_token_uri(&e, index).ok_or(ParkingError::LotNotFound)
    }

    /// Current holder of a lot token
    pub fn owner_of(e: Env, index: u32) -> Result<Address, ParkingError> {
        storage::get_owner(&e, index).ok_or(ParkingError::LotNotFound)
    }

    /// Number of lot tokens held by `holder`
    pub fn balance_of(e: Env, holder: Address) -> u32 {
        storage::get_balance(&e, &holder)
    }
}

impl ParkingSpaceContract {
    /// Pay out a settlement and hand the lot back to its lender for rent.
    fn settle(
        e: &Env,
        lot: &mut Lot,
        renter: &Address,
        settlement: &Settlement,
    ) -> Result<(), ParkingError> {
        let contract = e.current_contract_address();
        pay(e, renter, &lot.lender, settlement.from_renter)?;
        pay(e, &contract, &lot.lender, settlement.deposit_to_lender)?;
        pay(e, &contract, renter, settlement.deposit_to_renter)?;

        lot.clear_rent();
        lot.status = Listing::ForRent;
        storage::set_lot(e, lot);
        storage::move_custody(e, lot.index, &lot.lender);

        publish_listing(e, lot);
        Ok(())
    }
}
