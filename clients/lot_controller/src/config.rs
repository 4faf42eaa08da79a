use serde::{Deserialize, Serialize};

/// Client-side bounds applied before any call reaches the ledger authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Smallest sale or rent price, in minor units
    #[serde(default = "default_min_price")]
    pub min_price: i128,
    /// Largest sale or rent price the ledger accepts
    #[serde(default = "default_max_price")]
    pub max_price: i128,
    #[serde(default = "default_max_deposit_percent")]
    pub max_deposit_percent: u32,
    #[serde(default = "default_max_rent_duration_secs")]
    pub max_rent_duration_secs: u64,
    /// Buffered notices per subscriber before the oldest are dropped
    #[serde(default = "default_notice_capacity")]
    pub notice_capacity: usize,
}

fn default_min_price() -> i128 {
    1
}

fn default_max_price() -> i128 {
    1_000_000_000_000_000_000
}

fn default_max_deposit_percent() -> u32 {
    100
}

fn default_max_rent_duration_secs() -> u64 {
    30 * 24 * 60 * 60
}

fn default_notice_capacity() -> usize {
    64
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
            max_deposit_percent: default_max_deposit_percent(),
            max_rent_duration_secs: default_max_rent_duration_secs(),
            notice_capacity: default_notice_capacity(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
