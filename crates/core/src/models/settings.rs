use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use super::currency::CurrencyCode;

/// Storage key the theme preference is kept under unless configured otherwise.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// What to do when the rate table has no entry for a requested pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatePolicy {
    /// Treat the missing rate as 0 and let the conversion yield 0.
    #[default]
    Lenient,
    /// Reject the conversion with `CoreError::UnknownRatePair`.
    Strict,
}

/// Converter configuration. Every field is optional in JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rate_policy: RatePolicy,

    /// Key under which the theme preference is persisted.
    pub theme_key: String,

    /// Currency pre-selected in the "from" selector.
    pub default_from: CurrencyCode,

    /// Currency pre-selected in the "to" selector.
    pub default_to: CurrencyCode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate_policy: RatePolicy::Lenient,
            theme_key: DEFAULT_THEME_KEY.to_string(),
            default_from: CurrencyCode::PKR,
            default_to: CurrencyCode::SAR,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON object; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}
