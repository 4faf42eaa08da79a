use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::MetadataDocument;

/// Listing status of a lot. Discriminants match the ledger's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ListingStatus {
    ForSale = 0,
    ForRent = 1,
    Unavailable = 2,
    Rented = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown listing status discriminant {0}")]
pub struct UnknownStatus(pub u32);

impl TryFrom<u32> for ListingStatus {
    type Error = UnknownStatus;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ListingStatus::ForSale),
            1 => Ok(ListingStatus::ForRent),
            2 => Ok(ListingStatus::Unavailable),
            3 => Ok(ListingStatus::Rented),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<ListingStatus> for u32 {
    fn from(status: ListingStatus) -> Self {
        status as u32
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListingStatus::ForSale => "for sale",
            ListingStatus::ForRent => "for rent",
            ListingStatus::Unavailable => "unavailable",
            ListingStatus::Rented => "rented",
        };
        f.write_str(label)
    }
}

/// A lot as reported by the ledger authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotRecord<I> {
    pub index: u32,
    pub lender: I,
    pub renter: Option<I>,
    pub sale_price: i128,
    /// Price per started day
    pub rent_price: i128,
    pub deposit_percent: u32,
    pub rent_start: u64,
    pub return_day: u64,
    pub rent_duration: u64,
    pub held_deposit: i128,
    pub status: ListingStatus,
}

impl<I> LotRecord<I> {
    /// A freshly minted lot: unavailable, no prices, no rent.
    pub fn minted(index: u32, lender: I) -> Self {
        Self {
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
            status: ListingStatus::Unavailable,
        }
    }
}

/// Cached view of one lot: the authority's record plus its metadata.
///
/// `metadata` is `None` when the document could not be fetched or decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct LotView<I> {
    pub lot: LotRecord<I>,
    pub locator: String,
    pub metadata: Option<MetadataDocument>,
}
