//! Platform settings.

use serde::{Deserialize, Serialize};

use crate::AccountType;

/// Subscription prices per account type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSettings {
    /// Yearly subscription price for individual artists.
    pub normal_artist: f64,

    /// Yearly subscription price for labels.
    pub label: f64,
}

impl PriceSettings {
    /// The price for a given account type.
    #[must_use]
    pub const fn for_account_type(&self, account_type: AccountType) -> f64 {
        match account_type {
            AccountType::NormalArtist => self.normal_artist,
            AccountType::Label => self.label,
        }
    }
}

impl Default for PriceSettings {
    fn default() -> Self {
        Self {
            normal_artist: 999.0,
            label: 1999.0,
        }
    }
}

/// Mutable platform-wide settings, stored as a single record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Subscription prices.
    pub prices: PriceSettings,
}
