pub mod views;

use crate::models::currency::CurrencyCode;
use views::{CurrencyOption, HistoryItemView, RateView, SelectionView, ThemeView};
use crate::rates::table::FeaturedRate;

/// Rendering and input surface the controller drives (a DOM binding, a
/// terminal front-end, or a recording mock in tests).
///
/// Every method has a no-op default. A front-end that lacks a given display
/// target simply does not override the matching method, and the controller
/// carries on without it.
pub trait Presenter {
    /// Raw text of the amount input. `None` when there is no amount input,
    /// in which case conversion is skipped entirely.
    fn read_amount(&self) -> Option<String> {
        None
    }

    /// Show a user-facing warning (e.g. an invalid amount).
    fn warn(&mut self, _message: &str) {}

    /// Converted amount line, e.g. "1.35 SAR".
    fn render_result(&mut self, _text: &str) {}

    /// Whole history, newest first. An empty slice means "no conversions yet".
    fn render_history(&mut self, _items: &[HistoryItemView]) {}

    fn render_theme(&mut self, _theme: &ThemeView) {}

    /// Optional spin of the theme toggle icon. Purely decorative.
    fn animate_theme_toggle(&mut self) {}

    fn render_rate(&mut self, _rate: &RateView) {}

    /// Current from/to selection with their badges.
    fn render_selection(&mut self, _selection: &SelectionView) {}

    /// Fill both currency drop-downs.
    fn render_currency_options(&mut self, _options: &[CurrencyOption]) {}

    fn render_featured_rates(&mut self, _rates: &[FeaturedRate]) {}

    /// Today's date header, e.g. "Mon, Oct 19, 2026".
    fn render_date(&mut self, _text: &str) {}
}

/// Options for the currency selectors, in display order.
pub fn currency_options() -> Vec<CurrencyOption> {
    CurrencyCode::ALL
        .into_iter()
        .map(|code| CurrencyOption {
            code,
            label: code.option_label(),
        })
        .collect()
}
