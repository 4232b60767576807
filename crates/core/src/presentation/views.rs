//! Plain display data handed to a [`Presenter`](super::Presenter).

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::currency::{CurrencyBadge, CurrencyCode};
use crate::models::record::ConversionRecord;
use crate::models::theme::Theme;

/// Shown when the history is empty.
pub const EMPTY_HISTORY_MESSAGE: &str = "No conversions yet";

/// Shown when the amount input cannot be converted.
pub const INVALID_AMOUNT_WARNING: &str = "Please enter a valid amount";

/// Freshness marker next to the rate line. Rates are static, so it is
/// always "now".
pub const RATE_UPDATED_TEXT: &str = "Updated now";

/// Layout of the date header, e.g. "Mon, Oct 19, 2026".
pub const DATE_HEADER_FORMAT: &str = "%a, %b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItemView {
    /// Id to pass back to `delete_history_item`
    pub id: Uuid,
    pub headline: String,
    pub rate_line: String,
    pub time: String,
}

impl From<&ConversionRecord> for HistoryItemView {
    fn from(record: &ConversionRecord) -> Self {
        Self {
            id: record.id,
            headline: record.headline(),
            rate_line: record.rate_line(),
            time: record.time.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub theme: Theme,
    pub icon: &'static str,
    pub label: &'static str,
}

impl From<Theme> for ThemeView {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            icon: theme.icon(),
            label: theme.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateView {
    /// E.g. "1 SAR = 74.0700 PKR"
    pub line: String,
    pub updated: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub from_badge: CurrencyBadge,
    pub to_badge: CurrencyBadge,
}

impl SelectionView {
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            from,
            to,
            from_badge: from.badge(),
            to_badge: to.badge(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    pub code: CurrencyCode,
    pub label: String,
}

/// Date header text for `date`.
pub fn date_header(date: NaiveDate) -> String {
    date.format(DATE_HEADER_FORMAT).to_string()
}
