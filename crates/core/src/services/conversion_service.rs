use log::{debug, warn};

use crate::errors::CoreError;
use crate::models::currency::CurrencyCode;
use crate::models::history::HistoryStore;
use crate::models::record::{Conversion, ConversionRecord};
use crate::models::settings::RatePolicy;
use crate::rates::table::RateTable;

/// Converts amounts between the supported currencies using a [`RateTable`].
///
/// Holds no state besides its policy: the table and the history are passed
/// in by the caller.
///
/// Under [`RatePolicy::Lenient`] a pair missing from the table converts at
/// rate 0 (result 0). Under [`RatePolicy::Strict`] it is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionService {
    policy: RatePolicy,
}

impl ConversionService {
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RatePolicy {
        self.policy
    }

    /// Convert `amount` of `from` into `to`.
    ///
    /// The amount must be finite and strictly positive.
    pub fn convert(
        &self,
        table: &RateTable,
        amount: f64,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Conversion, CoreError> {
        validate_amount(amount)?;

        if self.policy == RatePolicy::Strict && !table.has_rate(from, to) {
            return Err(CoreError::UnknownRatePair { from, to });
        }

        let rate = table.rate(from, to);
        if rate == 0.0 {
            warn!("No rate for {from} → {to}; conversion yields 0");
        }

        let conversion = Conversion {
            amount,
            from,
            to,
            result: amount * rate,
            rate,
        };
        debug!(
            "Converted {amount} {from} → {} {to} at {rate}",
            conversion.result_display()
        );
        Ok(conversion)
    }

    /// Convert and, on success, push the stamped record onto `history`.
    /// A rejected conversion leaves `history` untouched.
    pub fn convert_and_record(
        &self,
        table: &RateTable,
        history: &mut HistoryStore,
        amount: f64,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<ConversionRecord, CoreError> {
        let conversion = self.convert(table, amount, from, to)?;
        let record = ConversionRecord::now(&conversion);
        if let Some(evicted) = history.add(record.clone()) {
            debug!("History full; evicted conversion {}", evicted.id);
        }
        Ok(record)
    }
}

/// Parse raw amount input. Empty or non-numeric text, non-finite values and
/// anything not strictly positive are rejected.
pub fn parse_amount(input: &str) -> Result<f64, CoreError> {
    let trimmed = input.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
    validate_amount(amount)?;
    Ok(amount)
}

fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::InvalidAmount(format!("{amount} is not a finite number")));
    }
    if amount <= 0.0 {
        return Err(CoreError::InvalidAmount(format!("{amount} must be greater than zero")));
    }
    Ok(())
}
