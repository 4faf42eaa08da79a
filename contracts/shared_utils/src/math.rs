//! Math utilities for safe arithmetic operations and percentage calculations

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Safely add two i128 values, panicking on overflow
    pub fn add(a: i128, b: i128) -> i128 {
        a.checked_add(b).expect("Math: addition overflow")
    }

    /// Safely subtract two i128 values, panicking on underflow
    pub fn sub(a: i128, b: i128) -> i128 {
        a.checked_sub(b).expect("Math: subtraction underflow")
    }

    /// Safely multiply two i128 values, panicking on overflow
    pub fn mul(a: i128, b: i128) -> i128 {
        a.checked_mul(b).expect("Math: multiplication overflow")
    }

    /// Safely divide two i128 values, panicking on division by zero
    pub fn div(a: i128, b: i128) -> i128 {
        if b == 0 {
            panic!("Math: division by zero");
        }
        a.checked_div(b).expect("Math: division overflow")
    }

    /// Calculate percentage: (value * percent) / 100
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `percent` - The percentage (0-100)
    ///
    /// # Returns
    /// The calculated percentage value, rounded down
    pub fn percent(value: i128, percent: u32) -> i128 {
        if percent > 100 {
            panic!("Math: percent must be <= 100");
        }
        Self::div(Self::mul(value, percent as i128), 100)
    }

    /// Divide two u64 values rounding up; `ceil_div(0, d) == 0`
    pub fn ceil_div(a: u64, b: u64) -> u64 {
        if b == 0 {
            panic!("Math: division by zero");
        }
        a / b + u64::from(a % b != 0)
    }

    /// The smaller of two amounts
    pub fn min(a: i128, b: i128) -> i128 {
        if a < b {
            a
        } else {
            b
        }
    }
}
