use std::fmt::Debug;

use crate::error::AuthorityError;
use crate::lot::{ListingStatus, LotRecord};

pub type AuthorityResult<T> = std::result::Result<T, AuthorityError>;

/// The remote ledger that owns every lot and settles every payment.
///
/// Mutators either settle atomically or reject with no effect. Payments are
/// explicit amounts the caller agrees to be charged up to.
#[async_trait::async_trait(?Send)]
pub trait LedgerAuthority {
    /// Account identity on the ledger.
    type Identity: Clone + Eq + Debug;

    async fn lot_count(&self) -> AuthorityResult<u32>;

    async fn lot(&self, index: u32) -> AuthorityResult<LotRecord<Self::Identity>>;

    async fn metadata_locator(&self, index: u32) -> AuthorityResult<String>;

    async fn mint_fee(&self) -> AuthorityResult<i128>;

    async fn contract_owner(&self) -> AuthorityResult<Self::Identity>;

    /// Price quote for a lot.
    ///
    /// With `target == ForRent`, `time` is a rent duration and the quote is
    /// rent plus deposit. With `target == Rented`, `time` is the elapsed rent
    /// time and the quote is what the renter must attach to end the rent.
    async fn rent_quote(&self, index: u32, time: u64, target: ListingStatus)
        -> AuthorityResult<i128>;

    async fn create_lot(
        &self,
        caller: &Self::Identity,
        locator: &str,
        payment: i128,
    ) -> AuthorityResult<u32>;

    async fn set_sale(&self, caller: &Self::Identity, index: u32, price: i128)
        -> AuthorityResult<()>;

    async fn set_rent(
        &self,
        caller: &Self::Identity,
        index: u32,
        price: i128,
        deposit_percent: u32,
    ) -> AuthorityResult<()>;

    async fn set_unavailable(&self, caller: &Self::Identity, index: u32) -> AuthorityResult<()>;

    async fn buy_lot(&self, caller: &Self::Identity, index: u32, payment: i128)
        -> AuthorityResult<()>;

    async fn rent_lot(
        &self,
        caller: &Self::Identity,
        index: u32,
        duration: u64,
        payment: i128,
    ) -> AuthorityResult<()>;

    async fn client_end_rent(
        &self,
        caller: &Self::Identity,
        index: u32,
        payment: i128,
    ) -> AuthorityResult<()>;

    async fn lender_end_rent(&self, caller: &Self::Identity, index: u32) -> AuthorityResult<()>;
}
