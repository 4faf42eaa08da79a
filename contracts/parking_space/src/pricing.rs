//! Rent pricing and end-of-rent settlement.
//!
//! Rent is charged per started day. Late charges start once the rent
//! duration plus the grace period has elapsed, and are also counted in
//! started days.

use shared_utils::{SafeMath, TimeUtils, SECONDS_PER_DAY};

/// Longest rent a lot can be taken for, in seconds
pub const MAX_RENT_DURATION: u64 = 30 * SECONDS_PER_DAY;

/// Cost of renting a lot for a given duration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RentCost {
    pub rent: i128,
    pub deposit: i128,
}

impl RentCost {
    pub fn total(&self) -> i128 {
        SafeMath::add(self.rent, self.deposit)
    }
}

/// Rent plus deposit for `duration` seconds at `rent_price` per started day.
pub fn rent_cost(rent_price: i128, deposit_percent: u32, duration: u64) -> RentCost {
    let days = TimeUtils::started_days(duration) as i128;
    let rent = SafeMath::mul(rent_price, days);
    RentCost {
        rent,
        deposit: SafeMath::percent(rent, deposit_percent),
    }
}

/// Late charge owed after `elapsed` seconds of a rent lasting `rent_duration`.
pub fn late_charge(rent_price: i128, rent_duration: u64, elapsed: u64, additional_time: u64) -> i128 {
    let overdue = elapsed
        .saturating_sub(rent_duration)
        .saturating_sub(additional_time);
    SafeMath::mul(rent_price, TimeUtils::started_days(overdue) as i128)
}

/// Movement of funds when a rent ends.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Settlement {
    /// Paid by the renter directly to the lender
    pub from_renter: i128,
    /// Released from the held deposit to the lender
    pub deposit_to_lender: i128,
    /// Released from the held deposit back to the renter
    pub deposit_to_renter: i128,
}

impl Settlement {
    /// Total the lender receives.
    pub fn to_lender(&self) -> i128 {
        SafeMath::add(self.from_renter, self.deposit_to_lender)
    }
}

/// Settlement when the renter returns the lot. The deposit covers the late
/// charge first and the renter pays whatever it does not cover.
pub fn client_settlement(late_charge: i128, held_deposit: i128) -> Settlement {
    let covered = SafeMath::min(late_charge, held_deposit);
    Settlement {
        from_renter: SafeMath::sub(late_charge, covered),
        deposit_to_lender: covered,
        deposit_to_renter: SafeMath::sub(held_deposit, covered),
    }
}

/// Settlement when the lender reclaims the lot. The lender keeps at most the
/// held deposit; nothing is pulled from the renter.
pub fn lender_settlement(late_charge: i128, held_deposit: i128) -> Settlement {
    let covered = SafeMath::min(late_charge, held_deposit);
    Settlement {
        from_renter: 0,
        deposit_to_lender: covered,
        deposit_to_renter: SafeMath::sub(held_deposit, covered),
    }
}
