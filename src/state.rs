use leptos::*;

use crate::domain::annotations::{Trendline, TrendlineStore};
use crate::domain::chart::ChartAxes;
use crate::domain::market_data::{CandleSeries, Symbol, TimeInterval};
use crate::domain::surface::SurfaceState;
use crate::infrastructure::storage::{LocalStorageRepository, LocalStore};

/// Overlay and chart canvas extent in CSS pixels.
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 500;

/// Upper bound on candles kept in memory, matching the feed request limit.
pub const MAX_CANDLES: usize = 100;

/// Application state owned by the root component and handed to children via
/// context. All persistent pieces are loaded once here and written back by
/// save-on-change effects; nothing lives in module-level globals.
#[derive(Clone, Copy)]
pub struct AppState {
    pub dark_mode: RwSignal<bool>,
    pub favorites: RwSignal<Vec<String>>,
    pub symbol: RwSignal<Symbol>,
    pub interval: RwSignal<TimeInterval>,
    pub candles: RwSignal<CandleSeries>,
    pub axes: RwSignal<ChartAxes>,
    pub trendlines: RwSignal<TrendlineStore>,
    pub surface: RwSignal<SurfaceState>,
    /// The line currently open in the edit dialog, if any.
    pub editing: RwSignal<Option<Trendline>>,
    pub status: RwSignal<String>,
}

impl AppState {
    /// Load persisted records and build the initial state.
    pub fn load() -> Self {
        let store = TrendlineStore::new(
            Box::new(LocalStorageRepository),
            Box::new(|| js_sys::Date::now() as u64),
        );

        Self {
            dark_mode: create_rw_signal(LocalStore::load_dark_mode()),
            favorites: create_rw_signal(LocalStore::load_favorites()),
            symbol: create_rw_signal(Symbol::from("BTC")),
            interval: create_rw_signal(TimeInterval::OneHour),
            candles: create_rw_signal(CandleSeries::new(MAX_CANDLES)),
            axes: create_rw_signal(ChartAxes::new()),
            trendlines: create_rw_signal(store),
            surface: create_rw_signal(SurfaceState::new(
                CHART_WIDTH as f64,
                CHART_HEIGHT as f64,
            )),
            editing: create_rw_signal(None),
            status: create_rw_signal("Loading...".to_string()),
        }
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }

    pub fn toggle_favorite(&self, coin: &str) {
        self.favorites.update(|favorites| toggle_favorite(favorites, coin));
    }

    pub fn is_favorite(&self, coin: &str) -> bool {
        self.favorites.with(|favorites| favorites.iter().any(|c| c == coin))
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState provided by the root component")
}

/// Remove the coin when present (preserving the order of the rest),
/// append it otherwise.
pub fn toggle_favorite(favorites: &mut Vec<String>, coin: &str) {
    if let Some(pos) = favorites.iter().position(|c| c == coin) {
        favorites.remove(pos);
    } else {
        favorites.push(coin.to_string());
    }
}
