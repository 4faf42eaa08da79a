//! Client-side precondition checks, run against a fresh read of the lot
//! before anything is sent to the authority.

use crate::config::ControllerConfig;
use crate::error::{ControllerError, Result};
use crate::lot::{ListingStatus, LotRecord};

fn expect_status<I>(lot: &LotRecord<I>, status: ListingStatus) -> Result<()> {
    if lot.status != status {
        return Err(ControllerError::InvalidState {
            index: lot.index,
            status: lot.status,
        });
    }
    Ok(())
}

/// `set_sale`, `set_rent` and `set_unavailable`: the caller must be the
/// lender and the lot must not be rented.
pub fn check_listable<I: PartialEq>(lot: &LotRecord<I>, caller: &I) -> Result<()> {
    if lot.lender != *caller {
        return Err(ControllerError::Unauthorized(format!(
            "only the lender can relist lot {}",
            lot.index
        )));
    }
    if lot.status == ListingStatus::Rented {
        return Err(ControllerError::InvalidState {
            index: lot.index,
            status: lot.status,
        });
    }
    Ok(())
}

pub fn check_buy<I: PartialEq>(lot: &LotRecord<I>, caller: &I) -> Result<()> {
    expect_status(lot, ListingStatus::ForSale)?;
    if lot.lender == *caller {
        return Err(ControllerError::Unauthorized(format!(
            "lender cannot buy own lot {}",
            lot.index
        )));
    }
    Ok(())
}

pub fn check_rent<I: PartialEq>(lot: &LotRecord<I>, caller: &I) -> Result<()> {
    expect_status(lot, ListingStatus::ForRent)?;
    if lot.lender == *caller {
        return Err(ControllerError::Unauthorized(format!(
            "lender cannot rent own lot {}",
            lot.index
        )));
    }
    Ok(())
}

pub fn check_client_end<I: PartialEq>(lot: &LotRecord<I>, caller: &I) -> Result<()> {
    expect_status(lot, ListingStatus::Rented)?;
    if lot.renter.as_ref() != Some(caller) {
        return Err(ControllerError::Unauthorized(format!(
            "only the renter can return lot {}",
            lot.index
        )));
    }
    Ok(())
}

pub fn check_lender_end<I: PartialEq>(lot: &LotRecord<I>, caller: &I, now: u64) -> Result<()> {
    expect_status(lot, ListingStatus::Rented)?;
    if lot.lender != *caller {
        return Err(ControllerError::Unauthorized(format!(
            "only the lender can reclaim lot {}",
            lot.index
        )));
    }
    if now < lot.return_day {
        return Err(ControllerError::RentNotExpired {
            index: lot.index,
            return_day: lot.return_day,
        });
    }
    Ok(())
}

pub fn check_price(price: i128, config: &ControllerConfig) -> Result<()> {
    if price < config.min_price {
        return Err(ControllerError::InvalidInput(format!(
            "price {price} is below the minimum of {}",
            config.min_price
        )));
    }
    if price > config.max_price {
        return Err(ControllerError::InvalidInput(format!(
            "price {price} exceeds the maximum of {}",
            config.max_price
        )));
    }
    Ok(())
}

pub fn check_deposit(percent: u32, config: &ControllerConfig) -> Result<()> {
    if percent > config.max_deposit_percent {
        return Err(ControllerError::InvalidInput(format!(
            "deposit {percent}% exceeds {}%",
            config.max_deposit_percent
        )));
    }
    Ok(())
}

pub fn check_duration(seconds: u64, config: &ControllerConfig) -> Result<()> {
    if seconds == 0 || seconds > config.max_rent_duration_secs {
        return Err(ControllerError::InvalidInput(format!(
            "rent duration {seconds}s outside 1..={}s",
            config.max_rent_duration_secs
        )));
    }
    Ok(())
}

/// Every metadata field is required.
pub fn check_metadata(location: &str, description: &str, image: &str) -> Result<()> {
    for (field, value) in [
        ("location", location),
        ("description", description),
        ("image", image),
    ] {
        if value.trim().is_empty() {
            return Err(ControllerError::InvalidInput(format!("{field} is empty")));
        }
    }
    Ok(())
}
