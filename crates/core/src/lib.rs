pub mod errors;
pub mod models;
pub mod presentation;
pub mod rates;
pub mod services;
pub mod storage;

use log::{debug, info, warn};
use models::{
    currency::CurrencyCode,
    history::HistoryStore,
    record::ConversionRecord,
    settings::Settings,
    theme::Theme,
};
use presentation::{
    currency_options,
    views::{
        date_header, HistoryItemView, RateView, SelectionView, ThemeView,
        INVALID_AMOUNT_WARNING, RATE_UPDATED_TEXT,
    },
    Presenter,
};
use rates::table::RateTable;
use services::{
    conversion_service::{parse_amount, ConversionService},
    theme_service::ThemePreference,
};
use storage::store::KeyValueStore;
use uuid::Uuid;

use errors::CoreError;

/// Mutable per-session state: the rolling history and the current currency
/// selection. Nothing in here is persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub history: HistoryStore,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl SessionState {
    pub fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            history: HistoryStore::new(),
            from,
            to,
        }
    }
}

/// Main entry point for the converter widget.
///
/// Each public method handles one user gesture: it updates the session
/// state and re-renders the affected parts through the [`Presenter`].
#[must_use]
pub struct CurrencyConverter<P: Presenter, S: KeyValueStore> {
    presenter: P,
    session: SessionState,
    rates: RateTable,
    conversion_service: ConversionService,
    theme: ThemePreference<S>,
}

impl<P: Presenter, S: KeyValueStore> std::fmt::Debug for CurrencyConverter<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyConverter")
            .field("from", &self.session.from)
            .field("to", &self.session.to)
            .field("history", &self.session.history.len())
            .field("theme", &self.theme.current())
            .field("policy", &self.conversion_service.policy())
            .finish()
    }
}

impl<P: Presenter, S: KeyValueStore> CurrencyConverter<P, S> {
    /// Converter with default settings and the standard rate table.
    pub fn new(presenter: P, store: S) -> Self {
        Self::with_settings(Settings::default(), presenter, store)
    }

    pub fn with_settings(settings: Settings, presenter: P, store: S) -> Self {
        Self::with_rates(settings, RateTable::standard(), presenter, store)
    }

    /// Converter over a custom rate table.
    pub fn with_rates(settings: Settings, rates: RateTable, presenter: P, store: S) -> Self {
        Self {
            presenter,
            session: SessionState::new(settings.default_from, settings.default_to),
            rates,
            conversion_service: ConversionService::new(settings.rate_policy),
            theme: ThemePreference::new(store, settings.theme_key),
        }
    }

    /// Initial render: theme first, then date, selectors, rate line, stats
    /// and the (empty) history.
    pub fn start(&mut self) {
        info!("Currency converter starting");
        let theme = self.theme.init();
        self.presenter.render_theme(&ThemeView::from(theme));

        let today = chrono::Local::now().date_naive();
        self.presenter.render_date(&date_header(today));

        self.presenter.render_currency_options(&currency_options());
        self.refresh_selection();

        self.presenter.render_featured_rates(&self.rates.featured());
        self.render_history();
        info!("Currency converter ready");
    }

    // ── Conversion ──────────────────────────────────────────────────

    /// Convert the amount currently in the input with the current selection.
    ///
    /// Returns the new history record, or `Ok(None)` if there is no amount
    /// input to read. A rejected amount is shown to the user as a warning
    /// and returned as the error; history is left unchanged.
    pub fn convert(&mut self) -> Result<Option<ConversionRecord>, CoreError> {
        let Some(input) = self.presenter.read_amount() else {
            debug!("No amount input; skipping conversion");
            return Ok(None);
        };

        let (from, to) = (self.session.from, self.session.to);
        let outcome = parse_amount(&input).and_then(|amount| {
            self.conversion_service.convert_and_record(
                &self.rates,
                &mut self.session.history,
                amount,
                from,
                to,
            )
        });

        match outcome {
            Ok(record) => {
                let line = format!("{} {}", record.result_display(), record.to);
                self.presenter.render_result(&line);
                self.render_history();
                Ok(Some(record))
            }
            Err(e) => {
                warn!("Conversion rejected: {e}");
                let message = match &e {
                    CoreError::InvalidAmount(_) => INVALID_AMOUNT_WARNING.to_string(),
                    other => other.to_string(),
                };
                self.presenter.warn(&message);
                Err(e)
            }
        }
    }

    /// Key press in the amount input; Enter converts.
    pub fn on_amount_key(&mut self, key: &str) -> Result<Option<ConversionRecord>, CoreError> {
        if key == "Enter" {
            self.convert()
        } else {
            Ok(None)
        }
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Exchange the from/to currencies and redisplay badges and rate.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.session.from, &mut self.session.to);
        debug!("Swapped selection to {} → {}", self.session.from, self.session.to);
        self.refresh_selection();
    }

    /// "From" selector changed. Redisplays badges and rate; no conversion.
    pub fn select_from(&mut self, code: CurrencyCode) {
        self.session.from = code;
        self.refresh_selection();
    }

    /// "To" selector changed. Redisplays badges and rate; no conversion.
    pub fn select_to(&mut self, code: CurrencyCode) {
        self.session.to = code;
        self.refresh_selection();
    }

    /// Current rate line, e.g. "1 PKR = 0.0135 SAR".
    #[must_use]
    pub fn rate_line(&self) -> String {
        self.rates.rate_line(self.session.from, self.session.to)
    }

    #[must_use]
    pub fn selection(&self) -> (CurrencyCode, CurrencyCode) {
        (self.session.from, self.session.to)
    }

    // ── History ─────────────────────────────────────────────────────

    /// Remove one history entry. Unknown ids are ignored.
    /// Returns whether an entry was removed.
    pub fn delete_history_item(&mut self, id: Uuid) -> bool {
        let removed = self.session.history.delete(id).is_some();
        debug!("Delete history item {id}: removed={removed}");
        self.render_history();
        removed
    }

    /// Empty the history. Re-renders only if there was something to clear.
    pub fn clear_history(&mut self) {
        let removed = self.session.history.clear();
        if removed > 0 {
            debug!("Cleared {removed} history items");
            self.render_history();
        }
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.session.history
    }

    // ── Theme ───────────────────────────────────────────────────────

    /// Flip the theme, persist it and redraw the toggle.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.presenter.render_theme(&ThemeView::from(theme));
        self.presenter.animate_theme_toggle();
        theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn theme_preference(&self) -> &ThemePreference<S> {
        &self.theme
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // ── Internal ────────────────────────────────────────────────────

    fn refresh_selection(&mut self) {
        let (from, to) = (self.session.from, self.session.to);
        self.presenter.render_selection(&SelectionView::new(from, to));
        self.presenter.render_rate(&RateView {
            line: self.rates.rate_line(from, to),
            updated: RATE_UPDATED_TEXT,
        });
    }

    fn render_history(&mut self) {
        let items: Vec<HistoryItemView> = self
            .session
            .history
            .list()
            .map(HistoryItemView::from)
            .collect();
        self.presenter.render_history(&items);
    }
}
