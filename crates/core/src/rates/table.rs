use std::collections::HashMap;

use crate::models::currency::CurrencyCode;

/// Directed currency pair: (from, to).
pub type RatePair = (CurrencyCode, CurrencyCode);

/// Fixed table of exchange rates between the supported currencies.
///
/// Rates are authored per direction, so `rate(A, B)` is generally NOT
/// `1 / rate(B, A)`. Identity pairs are never stored; [`RateTable::rate`]
/// answers 1 for them. A pair missing from the table answers 0, which
/// callers must treat as "no known rate".
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<RatePair, f64>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The approximate fixed rates shipped with the widget.
    pub fn standard() -> Self {
        use CurrencyCode::*;

        Self::new()
            .with_rate(PKR, SAR, 0.0135)
            .with_rate(PKR, USD, 0.0036)
            .with_rate(PKR, INR, 0.30)
            .with_rate(SAR, PKR, 74.07)
            .with_rate(SAR, USD, 0.27)
            .with_rate(SAR, INR, 22.22)
            .with_rate(USD, PKR, 277.78)
            .with_rate(USD, SAR, 3.75)
            .with_rate(USD, INR, 83.33)
            .with_rate(INR, PKR, 3.33)
            .with_rate(INR, SAR, 0.045)
            .with_rate(INR, USD, 0.012)
    }

    /// Builder-style insertion used while seeding a table. Identity pairs and
    /// non-positive or non-finite rates are ignored.
    #[must_use]
    pub fn with_rate(mut self, from: CurrencyCode, to: CurrencyCode, rate: f64) -> Self {
        if from != to && rate.is_finite() && rate > 0.0 {
            self.rates.insert((from, to), rate);
        }
        self
    }

    /// Rate for converting one unit of `from` into `to`.
    /// 1 for identical currencies, 0 for an unknown pair.
    pub fn rate(&self, from: CurrencyCode, to: CurrencyCode) -> f64 {
        if from == to {
            return 1.0;
        }
        self.lookup(from, to).unwrap_or(0.0)
    }

    /// Stored rate for a non-identity pair, if any.
    pub fn lookup(&self, from: CurrencyCode, to: CurrencyCode) -> Option<f64> {
        self.rates.get(&(from, to)).copied()
    }

    /// Whether `rate(from, to)` is a real conversion factor.
    pub fn has_rate(&self, from: CurrencyCode, to: CurrencyCode) -> bool {
        from == to || self.rates.contains_key(&(from, to))
    }

    /// Number of stored (non-identity) pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// "1 SAR = 74.0700 PKR"
    pub fn rate_line(&self, from: CurrencyCode, to: CurrencyCode) -> String {
        format!("1 {} = {:.4} {}", from, self.rate(from, to), to)
    }

    /// Headline rates for the stats panel. PKR-based rates are small and
    /// shown at four decimals; SAR→PKR at two.
    pub fn featured(&self) -> Vec<FeaturedRate> {
        use CurrencyCode::*;

        let panel: [(CurrencyCode, CurrencyCode, usize); 4] =
            [(PKR, SAR, 4), (PKR, USD, 4), (PKR, INR, 4), (SAR, PKR, 2)];
        panel
            .into_iter()
            .map(|(from, to, decimals)| {
                let rate = self.rate(from, to);
                FeaturedRate {
                    from,
                    to,
                    rate,
                    display: format!("{rate:.decimals$}"),
                }
            })
            .collect()
    }
}

/// One entry of the stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedRate {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub display: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::currency::CurrencyCode::*;

    #[test]
    fn standard_table_covers_every_directed_pair() {
        let table = RateTable::standard();
        assert_eq!(table.len(), 12);
        for from in CurrencyCode::ALL {
            for to in CurrencyCode::ALL {
                assert!(table.has_rate(from, to), "{from} → {to}");
            }
        }
    }

    #[test]
    fn seeding_ignores_identity_and_invalid_rates() {
        let table = RateTable::new()
            .with_rate(USD, USD, 2.0)
            .with_rate(USD, PKR, -1.0)
            .with_rate(USD, SAR, f64::NAN);
        assert!(table.is_empty());
        assert_eq!(table.rate(USD, USD), 1.0);
    }
}
