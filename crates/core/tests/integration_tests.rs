// ═══════════════════════════════════════════════════════════════════
// Integration Tests — CurrencyConverter driven through a recording
// Presenter, the way a front-end would drive it
// ═══════════════════════════════════════════════════════════════════

use uuid::Uuid;

use currency_converter_core::errors::CoreError;
use currency_converter_core::models::currency::CurrencyCode::{self, *};
use currency_converter_core::models::history::HISTORY_CAPACITY;
use currency_converter_core::models::settings::{RatePolicy, Settings};
use currency_converter_core::models::theme::Theme;
use currency_converter_core::presentation::views::{
    CurrencyOption, HistoryItemView, RateView, SelectionView, ThemeView, EMPTY_HISTORY_MESSAGE,
    INVALID_AMOUNT_WARNING,
};
use currency_converter_core::presentation::Presenter;
use currency_converter_core::rates::table::{FeaturedRate, RateTable};
use currency_converter_core::storage::store::{DisabledStore, KeyValueStore, MemoryStore};
use currency_converter_core::CurrencyConverter;

// ═══════════════════════════════════════════════════════════════════
// Recording Presenter
// ═══════════════════════════════════════════════════════════════════

#[derive(Default)]
struct RecordingPresenter {
    amount: Option<String>,
    warnings: Vec<String>,
    result: Option<String>,
    history: Option<Vec<HistoryItemView>>,
    history_renders: usize,
    theme: Option<ThemeView>,
    spins: usize,
    rate: Option<RateView>,
    selection: Option<SelectionView>,
    options: Vec<CurrencyOption>,
    featured: Vec<FeaturedRate>,
    date: Option<String>,
}

impl RecordingPresenter {
    fn with_amount(amount: &str) -> Self {
        Self {
            amount: Some(amount.to_string()),
            ..Self::default()
        }
    }
}

impl Presenter for RecordingPresenter {
    fn read_amount(&self) -> Option<String> {
        self.amount.clone()
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn render_result(&mut self, text: &str) {
        self.result = Some(text.to_string());
    }

    fn render_history(&mut self, items: &[HistoryItemView]) {
        self.history = Some(items.to_vec());
        self.history_renders += 1;
    }

    fn render_theme(&mut self, theme: &ThemeView) {
        self.theme = Some(*theme);
    }

    fn animate_theme_toggle(&mut self) {
        self.spins += 1;
    }

    fn render_rate(&mut self, rate: &RateView) {
        self.rate = Some(rate.clone());
    }

    fn render_selection(&mut self, selection: &SelectionView) {
        self.selection = Some(selection.clone());
    }

    fn render_currency_options(&mut self, options: &[CurrencyOption]) {
        self.options = options.to_vec();
    }

    fn render_featured_rates(&mut self, rates: &[FeaturedRate]) {
        self.featured = rates.to_vec();
    }

    fn render_date(&mut self, text: &str) {
        self.date = Some(text.to_string());
    }
}

/// A front-end with no display targets at all.
struct BarePresenter;

impl Presenter for BarePresenter {}

fn converter(amount: &str) -> CurrencyConverter<RecordingPresenter, MemoryStore> {
    let mut c = CurrencyConverter::new(RecordingPresenter::with_amount(amount), MemoryStore::new());
    c.start();
    c
}

fn set_amount(c: &mut CurrencyConverter<RecordingPresenter, MemoryStore>, amount: &str) {
    c.presenter_mut().amount = Some(amount.to_string());
}

// ═══════════════════════════════════════════════════════════════════
// Start-up
// ═══════════════════════════════════════════════════════════════════

mod start {
    use super::*;

    #[test]
    fn renders_initial_state() {
        let c = converter("100");
        let p = c.presenter();

        assert_eq!(p.theme.unwrap().label, "Dark Mode");
        assert!(p.date.is_some());
        assert_eq!(p.options.len(), 4);
        assert_eq!(p.options[0].label, "🇵🇰 PKR - Pakistani Rupee");
        assert_eq!(p.featured.len(), 4);

        let selection = p.selection.as_ref().unwrap();
        assert_eq!((selection.from, selection.to), (PKR, SAR));
        assert_eq!(selection.from_badge.glyph, "🇵🇰");
        assert_eq!(selection.to_badge.glyph, "🇸🇦");

        let rate = p.rate.as_ref().unwrap();
        assert_eq!(rate.line, "1 PKR = 0.0135 SAR");
        assert_eq!(rate.updated, "Updated now");

        assert_eq!(p.history.as_deref(), Some(&[][..]));
        assert!(!EMPTY_HISTORY_MESSAGE.is_empty());
    }

    #[test]
    fn restores_persisted_theme() {
        let store = MemoryStore::with_entry("theme", "light");
        let mut c = CurrencyConverter::new(RecordingPresenter::default(), store);
        c.start();
        assert_eq!(c.theme(), Theme::Light);
        assert_eq!(c.presenter().theme.unwrap().icon, "sun");
    }

    #[test]
    fn honours_configured_default_selection() {
        let settings = Settings {
            default_from: USD,
            default_to: INR,
            ..Settings::default()
        };
        let mut c = CurrencyConverter::with_settings(settings, RecordingPresenter::default(), MemoryStore::new());
        c.start();
        assert_eq!(c.selection(), (USD, INR));
        assert_eq!(c.presenter().rate.as_ref().unwrap().line, "1 USD = 83.3300 INR");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Convert
// ═══════════════════════════════════════════════════════════════════

mod convert {
    use super::*;

    #[test]
    fn pkr_to_sar() {
        let mut c = converter("100");
        let record = c.convert().unwrap().unwrap();

        assert_eq!(record.rate_display(), "0.0135");
        assert_eq!(record.result_display(), "1.35");
        assert_eq!(c.presenter().result.as_deref(), Some("1.35 SAR"));

        let history = c.presenter().history.as_ref().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
        assert_eq!(history[0].headline, "🇵🇰 100.00 PKR → 🇸🇦 1.35 SAR");
        assert_eq!(history[0].rate_line, "1 PKR = 0.0135 SAR");
    }

    #[test]
    fn sar_to_pkr() {
        let mut c = converter("1");
        c.select_from(SAR);
        c.select_to(PKR);
        let record = c.convert().unwrap().unwrap();
        assert_eq!(record.rate, 74.07);
        assert_eq!(c.presenter().result.as_deref(), Some("74.07 PKR"));
    }

    #[test]
    fn same_currency_keeps_amount() {
        let mut c = converter("19.99");
        c.select_to(PKR);
        let record = c.convert().unwrap().unwrap();
        assert_eq!(record.rate, 1.0);
        assert_eq!(record.result, 19.99);
    }

    #[test]
    fn negative_amount_warns_and_keeps_history() {
        let mut c = converter("-5");
        c.select_from(USD);
        c.select_to(INR);

        let err = c.convert();
        assert!(matches!(err, Err(CoreError::InvalidAmount(_))));
        assert_eq!(c.presenter().warnings, vec![INVALID_AMOUNT_WARNING.to_string()]);
        assert!(c.history().is_empty());
        assert!(c.presenter().result.is_none());
    }

    #[test]
    fn non_numeric_amount_warns() {
        let mut c = converter("lots");
        assert!(c.convert().is_err());
        assert_eq!(c.presenter().warnings.len(), 1);
        assert!(c.history().is_empty());
    }

    #[test]
    fn missing_amount_input_skips_conversion() {
        let mut c = CurrencyConverter::new(RecordingPresenter::default(), MemoryStore::new());
        c.start();
        assert!(c.convert().unwrap().is_none());
        assert!(c.presenter().warnings.is_empty());
        assert!(c.history().is_empty());
    }

    #[test]
    fn enter_key_converts_other_keys_do_not() {
        let mut c = converter("10");
        assert!(c.on_amount_key("a").unwrap().is_none());
        assert!(c.history().is_empty());
        assert!(c.on_amount_key("Enter").unwrap().is_some());
        assert_eq!(c.history().len(), 1);
    }

    #[test]
    fn history_keeps_last_five() {
        let mut c = converter("1");
        let mut ids = Vec::new();
        for i in 1..=6 {
            set_amount(&mut c, &i.to_string());
            ids.push(c.convert().unwrap().unwrap().id);
        }

        assert_eq!(c.history().len(), HISTORY_CAPACITY);
        assert_eq!(c.history().head().unwrap().id, ids[5]);
        assert!(c.history().get(ids[0]).is_none());

        let rendered: Vec<Uuid> = c.presenter().history.as_ref().unwrap().iter().map(|i| i.id).collect();
        let expected: Vec<Uuid> = ids[1..].iter().rev().copied().collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn lenient_unknown_pair_converts_to_zero() {
        let rates = RateTable::new().with_rate(PKR, SAR, 0.0135);
        let mut c = CurrencyConverter::with_rates(
            Settings::default(),
            rates,
            RecordingPresenter::with_amount("10"),
            MemoryStore::new(),
        );
        c.start();
        c.select_from(USD);
        assert_eq!(c.presenter().rate.as_ref().unwrap().line, "1 USD = 0.0000 SAR");

        let record = c.convert().unwrap().unwrap();
        assert_eq!(record.result, 0.0);
        assert_eq!(c.presenter().result.as_deref(), Some("0.00 SAR"));
    }

    #[test]
    fn strict_unknown_pair_is_reported() {
        let settings = Settings {
            rate_policy: RatePolicy::Strict,
            ..Settings::default()
        };
        let mut c = CurrencyConverter::with_rates(
            settings,
            RateTable::new(),
            RecordingPresenter::with_amount("10"),
            MemoryStore::new(),
        );
        c.start();

        assert!(matches!(c.convert(), Err(CoreError::UnknownRatePair { .. })));
        assert_eq!(c.presenter().warnings, vec!["No exchange rate known for PKR → SAR".to_string()]);
        assert!(c.history().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Selection
// ═══════════════════════════════════════════════════════════════════

mod selection {
    use super::*;

    #[test]
    fn swap_exchanges_and_updates_rate() {
        let mut c = converter("1");
        c.swap();

        assert_eq!(c.selection(), (SAR, PKR));
        assert_eq!(c.presenter().rate.as_ref().unwrap().line, "1 SAR = 74.0700 PKR");
        let selection = c.presenter().selection.as_ref().unwrap();
        assert_eq!(selection.from_badge.label, "SAR");
        assert_eq!(selection.to_badge.label, "PKR");
    }

    #[test]
    fn swap_does_not_convert() {
        let mut c = converter("1");
        c.swap();
        assert!(c.history().is_empty());
        assert!(c.presenter().result.is_none());
    }

    #[test]
    fn selection_change_updates_badges_and_rate() {
        let mut c = converter("1");
        c.select_to(INR);
        assert_eq!(c.rate_line(), "1 PKR = 0.3000 INR");
        let selection = c.presenter().selection.as_ref().unwrap();
        assert_eq!(selection.to_badge.glyph, "🇮🇳");
        assert!(c.history().is_empty());
    }

    #[test]
    fn every_selection_has_a_rate_line() {
        let mut c = converter("1");
        for from in CurrencyCode::ALL {
            for to in CurrencyCode::ALL {
                c.select_from(from);
                c.select_to(to);
                let line = &c.presenter().rate.as_ref().unwrap().line;
                assert!(line.starts_with(&format!("1 {from} = ")));
                assert!(line.ends_with(&format!(" {to}")));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// History actions
// ═══════════════════════════════════════════════════════════════════

mod history_actions {
    use super::*;

    #[test]
    fn delete_removes_item_and_rerenders() {
        let mut c = converter("5");
        let first = c.convert().unwrap().unwrap();
        let second = c.convert().unwrap().unwrap();

        assert!(c.delete_history_item(first.id));
        let rendered = c.presenter().history.as_ref().unwrap();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].id, second.id);
    }

    #[test]
    fn delete_unknown_id_leaves_history() {
        let mut c = converter("5");
        c.convert().unwrap();
        c.convert().unwrap();
        let before: Vec<Uuid> = c.history().list().map(|r| r.id).collect();

        assert!(!c.delete_history_item(Uuid::new_v4()));

        let after: Vec<Uuid> = c.history().list().map(|r| r.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn clear_empties_and_rerenders_once() {
        let mut c = converter("5");
        c.convert().unwrap();
        let renders = c.presenter().history_renders;

        c.clear_history();
        assert!(c.history().is_empty());
        assert_eq!(c.presenter().history.as_deref(), Some(&[][..]));
        assert_eq!(c.presenter().history_renders, renders + 1);

        // Already empty: nothing to redraw
        c.clear_history();
        assert_eq!(c.presenter().history_renders, renders + 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Theme
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn toggle_renders_persists_and_spins() {
        let mut c = converter("1");
        assert_eq!(c.toggle_theme(), Theme::Light);

        let view = c.presenter().theme.unwrap();
        assert_eq!(view.icon, "sun");
        assert_eq!(view.label, "Light Mode");
        assert_eq!(c.presenter().spins, 1);
        assert_eq!(
            c.theme_preference().store().get("theme").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn toggle_twice_restores_original() {
        let mut c = converter("1");
        let original = c.theme();
        c.toggle_theme();
        c.toggle_theme();
        assert_eq!(c.theme(), original);
        assert_eq!(
            c.theme_preference().store().get("theme").unwrap().as_deref(),
            Some(original.as_str())
        );
    }

    #[test]
    fn disabled_storage_still_works_in_memory() {
        let mut c = CurrencyConverter::new(RecordingPresenter::default(), DisabledStore);
        c.start();
        assert_eq!(c.theme(), Theme::Dark);
        assert!(!c.theme_preference().is_persistent());
        assert_eq!(c.toggle_theme(), Theme::Light);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Partial presentation environments
// ═══════════════════════════════════════════════════════════════════

mod bare_presenter {
    use super::*;

    #[test]
    fn every_gesture_is_a_safe_no_op() {
        let mut c = CurrencyConverter::new(BarePresenter, MemoryStore::new());
        c.start();
        assert!(c.convert().unwrap().is_none());
        c.swap();
        assert_eq!(c.selection(), (SAR, PKR));
        c.toggle_theme();
        c.clear_history();
        assert!(!c.delete_history_item(Uuid::new_v4()));
        assert!(c.history().is_empty());
    }

    #[test]
    fn debug_output_summarises_state() {
        let c = CurrencyConverter::new(BarePresenter, MemoryStore::new());
        let debug = format!("{:?}", c);
        assert!(debug.contains("CurrencyConverter"));
        assert!(debug.contains("PKR"));
    }
}
