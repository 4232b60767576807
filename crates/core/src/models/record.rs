use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::CurrencyCode;

/// Timestamp layout used for history entries, e.g. "10/19/2026, 3:04:05 PM".
pub const RECORD_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Outcome of a successful conversion, before it is stamped into history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub result: f64,
    /// Multiplicative factor applied (1 for identical currencies).
    pub rate: f64,
}

impl Conversion {
    /// Converted amount at two decimals, e.g. "1.35".
    pub fn result_display(&self) -> String {
        format!("{:.2}", self.result)
    }

    /// Result line shown under the converter, e.g. "1.35 SAR".
    pub fn result_line(&self) -> String {
        format!("{} {}", self.result_display(), self.to)
    }
}

/// One completed conversion, kept for the rolling history.
///
/// Records are created once from a [`Conversion`] and never modified; the
/// history only inserts and removes whole records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Unique within the process
    pub id: Uuid,

    /// Human-readable local time of the conversion
    pub time: String,

    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub result: f64,
    pub rate: f64,
}

impl ConversionRecord {
    /// Stamp a conversion that happened at `at`.
    pub fn new(conversion: &Conversion, at: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time: at.format(RECORD_TIME_FORMAT).to_string(),
            amount: conversion.amount,
            from: conversion.from,
            to: conversion.to,
            result: conversion.result,
            rate: conversion.rate,
        }
    }

    /// Stamp a conversion with the current local time.
    pub fn now(conversion: &Conversion) -> Self {
        Self::new(conversion, Local::now())
    }

    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount)
    }

    pub fn result_display(&self) -> String {
        format!("{:.2}", self.result)
    }

    pub fn rate_display(&self) -> String {
        format!("{:.4}", self.rate)
    }

    /// E.g. "🇵🇰 100.00 PKR → 🇸🇦 1.35 SAR".
    pub fn headline(&self) -> String {
        format!(
            "{} {} {} → {} {} {}",
            self.from.flag(),
            self.amount_display(),
            self.from,
            self.to.flag(),
            self.result_display(),
            self.to,
        )
    }

    /// E.g. "1 PKR = 0.0135 SAR".
    pub fn rate_line(&self) -> String {
        format!("1 {} = {} {}", self.from, self.rate_display(), self.to)
    }
}
