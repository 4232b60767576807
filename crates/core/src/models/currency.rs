use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Glyph shown for any code outside the supported set.
pub const FALLBACK_FLAG: &str = "🌍";

/// One of the four supported currencies. Closed set — there is no runtime
/// registration of new codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// Pakistani Rupee
    PKR,
    /// Saudi Riyal
    SAR,
    /// US Dollar
    USD,
    /// Indian Rupee
    INR,
}

impl CurrencyCode {
    /// All supported currencies, in selector order.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::PKR,
        CurrencyCode::SAR,
        CurrencyCode::USD,
        CurrencyCode::INR,
    ];

    /// ISO 4217 code, e.g. "PKR".
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::PKR => "PKR",
            CurrencyCode::SAR => "SAR",
            CurrencyCode::USD => "USD",
            CurrencyCode::INR => "INR",
        }
    }

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::PKR => "Pakistani Rupee",
            CurrencyCode::SAR => "Saudi Riyal",
            CurrencyCode::USD => "US Dollar",
            CurrencyCode::INR => "Indian Rupee",
        }
    }

    /// Country flag emoji.
    pub fn flag(&self) -> &'static str {
        match self {
            CurrencyCode::PKR => "🇵🇰",
            CurrencyCode::SAR => "🇸🇦",
            CurrencyCode::USD => "🇺🇸",
            CurrencyCode::INR => "🇮🇳",
        }
    }

    /// Label used in the currency drop-downs, e.g. "🇵🇰 PKR - Pakistani Rupee".
    pub fn option_label(&self) -> String {
        format!("{} {} - {}", self.flag(), self.as_str(), self.name())
    }

    pub fn badge(&self) -> CurrencyBadge {
        CurrencyBadge {
            glyph: self.flag().to_string(),
            label: self.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.as_str() == upper)
            .ok_or_else(|| CoreError::InvalidCurrency(s.to_string()))
    }
}

/// Glyph + label pair rendered next to a currency selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyBadge {
    pub glyph: String,
    pub label: String,
}

/// Badge for a raw currency code. Unknown codes keep their text as the
/// label and get the generic [`FALLBACK_FLAG`] glyph.
pub fn badge_for(code: &str) -> CurrencyBadge {
    match code.parse::<CurrencyCode>() {
        Ok(currency) => currency.badge(),
        Err(_) => CurrencyBadge {
            glyph: FALLBACK_FLAG.to_string(),
            label: code.to_string(),
        },
    }
}
