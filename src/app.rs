use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use strum::IntoEnumIterator;

use crate::domain::annotations::HIT_THRESHOLD_PX;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Symbol, TimeInterval};
use crate::domain::surface::render_overlay;
use crate::edit_dialog::EditDialog;
use crate::infrastructure::http::{CANDLE_LIMIT, MarketFeedClient};
use crate::infrastructure::rendering::{ChartRenderer, OverlayCanvas, export_chart_png};
use crate::infrastructure::storage::LocalStore;
use crate::state::{AppState, CHART_HEIGHT, CHART_WIDTH, use_app_state};

const CHART_CANVAS_ID: &str = "chart-canvas";
const OVERLAY_CANVAS_ID: &str = "overlay-canvas";

/// Market data poll cadence.
const POLL_INTERVAL_MS: u32 = 10_000;

const SYMBOLS: [&str; 5] = ["BTC", "ETH", "SOL", "BNB", "XRP"];

/// Root component: owns the application state, the persistence effects and
/// the market data polling loop.
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::load();
    provide_context(state);

    // Save-on-change lifecycle for the persisted records.
    create_effect(move |_| LocalStore::save_dark_mode(state.dark_mode.get()));
    create_effect(move |_| state.favorites.with(|favorites| LocalStore::save_favorites(favorites)));

    // Poll the feed every 10 seconds; restart the timer whenever the
    // symbol or interval selection changes. Dropping the previous handle
    // cancels its timer, and teardown clears the last one.
    let poll_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    {
        let poll_handle = poll_handle.clone();
        create_effect(move |_| {
            let symbol = state.symbol.get();
            let interval = state.interval.get();
            fetch_candles(state, symbol.clone(), interval);
            let timer = Interval::new(POLL_INTERVAL_MS, move || {
                fetch_candles(state, symbol.clone(), interval);
            });
            *poll_handle.borrow_mut() = Some(timer);
        });
    }
    on_cleanup(move || {
        poll_handle.borrow_mut().take();
    });

    view! {
        <style>{STYLE}</style>
        <div class="trendline-app" class:dark=move || state.dark_mode.get()>
            <Toolbar />
            <ChartContainer />
            <div class="status">{move || state.status.get()}</div>
            {move || state.editing.get().map(|line| view! { <EditDialog line /> })}
        </div>
    }
}

/// One poll cycle. A failure leaves the chart as-is; a response that
/// arrives after the selection changed is discarded.
fn fetch_candles(state: AppState, symbol: Symbol, interval: TimeInterval) {
    spawn_local(async move {
        let client = MarketFeedClient::new(symbol.clone(), interval);
        match client.fetch_recent(CANDLE_LIMIT).await {
            Ok(candles) => {
                if state.symbol.get_untracked() != symbol
                    || state.interval.get_untracked() != interval
                {
                    return;
                }
                state.candles.update(|series| series.set_candles(candles));
                state.status.set(format!("{} • {} • live", symbol.to_pair(), interval));
            }
            Err(e) => {
                get_logger()
                    .error(LogComponent::Presentation("App"), &format!("poll failed: {e}"));
                state.status.set("Feed unavailable, retrying on next poll".to_string());
            }
        }
    });
}

/// Symbol/interval selectors, theme toggle, favorite star, PNG export.
#[component]
fn Toolbar() -> impl IntoView {
    let state = use_app_state();

    let on_symbol_change = move |ev| {
        state.symbol.set(Symbol::from(event_target_value(&ev).as_str()));
    };

    let on_interval_change = move |ev| {
        if let Ok(interval) = event_target_value(&ev).parse::<TimeInterval>() {
            state.interval.set(interval);
        }
    };

    let on_download = move |_| {
        let symbol = state.symbol.get_untracked();
        if let Err(e) = export_chart_png(CHART_CANVAS_ID, symbol.value()) {
            get_logger()
                .error(LogComponent::Presentation("Toolbar"), &format!("export failed: {e:?}"));
        }
    };

    view! {
        <nav class="toolbar">
            <h1>"Crypto Trendline Chart"</h1>
            <div class="toolbar-controls">
                <select on:change=on_symbol_change>
                    {SYMBOLS
                        .iter()
                        .map(|coin| {
                            view! {
                                <option
                                    value=*coin
                                    selected=move || state.symbol.get().value() == *coin
                                >
                                    {*coin}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <select on:change=on_interval_change>
                    {TimeInterval::iter()
                        .map(|interval| {
                            view! {
                                <option
                                    value=interval.to_string()
                                    selected=move || state.interval.get() == interval
                                >
                                    {interval.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button
                    title="Toggle dark mode"
                    on:click=move |_| state.toggle_dark_mode()
                >
                    {move || if state.dark_mode.get() { "☀" } else { "🌙" }}
                </button>
                <button
                    title="Toggle favorite"
                    class:favorite=move || {
                        state.symbol.with(|symbol| state.is_favorite(symbol.value()))
                    }
                    on:click=move |_| {
                        let coin = state.symbol.get_untracked();
                        state.toggle_favorite(coin.value());
                    }
                >
                    "★"
                </button>
                <button title="Download chart" on:click=on_download>
                    "⬇ PNG"
                </button>
            </div>
        </nav>
    }
}

/// The chart canvas with the transparent drawing overlay stacked on top.
/// All pointer input lands on the overlay.
#[component]
fn ChartContainer() -> impl IntoView {
    let state = use_app_state();

    let chart_ref = create_node_ref::<Canvas>();
    let overlay_ref = create_node_ref::<Canvas>();

    // Repaint the chart whenever candles or the theme change, and publish
    // the viewport it rendered with as the current axis calibration.
    create_effect(move |_| {
        if chart_ref.get().is_none() {
            return;
        }
        let dark = state.dark_mode.get();
        state.candles.with(|series| {
            let renderer = ChartRenderer::new(CHART_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT);
            match renderer.render(series, dark) {
                Ok(Some(viewport)) => state.axes.update(|axes| axes.calibrate(viewport)),
                Ok(None) => {}
                Err(e) => get_logger().error(
                    LogComponent::Presentation("ChartContainer"),
                    &format!("chart render failed: {e:?}"),
                ),
            }
        });
    });

    // Full clear-and-redraw of the overlay on every pointer or line change.
    create_effect(move |_| {
        if overlay_ref.get().is_none() {
            return;
        }
        let commands = state.surface.with(|surface| {
            state.trendlines.with(|store| {
                state.candles.with(|series| {
                    let readout = surface
                        .cursor()
                        .and_then(|(x, _)| surface.candle_index_at(x, series.count()))
                        .and_then(|index| series.get(index));
                    render_overlay(surface, store.list(), readout)
                })
            })
        });
        if let Err(e) = OverlayCanvas::new(OVERLAY_CANVAS_ID).execute(&commands) {
            get_logger().error(
                LogComponent::Presentation("ChartContainer"),
                &format!("overlay repaint failed: {e:?}"),
            );
        }
    });

    let on_mouse_down = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        state.surface.update(|s| s.pointer_down(ev.offset_x() as f64, ev.offset_y() as f64));
    };

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        state.surface.update(|s| s.pointer_move(ev.offset_x() as f64, ev.offset_y() as f64));
    };

    let on_mouse_up = move |_ev: web_sys::MouseEvent| {
        let committed = state.surface.try_update(|s| s.pointer_up()).flatten();
        if let Some(line) = committed {
            state.trendlines.update(|store| {
                store.add(line);
            });
        }
    };

    let on_mouse_leave = move |_ev: web_sys::MouseEvent| {
        state.surface.update(|s| s.pointer_leave());
    };

    // Secondary action: hit-test committed lines and open the edit dialog.
    let on_context_menu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let x = ev.offset_x() as f64;
        let y = ev.offset_y() as f64;
        let hit = state
            .trendlines
            .with_untracked(|store| store.hit_test(x, y, HIT_THRESHOLD_PX).cloned());
        if let Some(line) = hit {
            state.editing.set(Some(line));
        }
    };

    view! {
        <div class="chart-stack">
            <canvas
                id=CHART_CANVAS_ID
                node_ref=chart_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
            />
            <canvas
                id=OVERLAY_CANVAS_ID
                node_ref=overlay_ref
                class="overlay"
                width=CHART_WIDTH
                height=CHART_HEIGHT
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_leave
                on:contextmenu=on_context_menu
            />
        </div>
    }
}

const STYLE: &str = r#"
.trendline-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    min-height: 100vh;
    padding: 20px;
    background: #f9fafb;
    color: #111827;
}

.trendline-app.dark {
    background: #111827;
    color: #f9fafb;
}

.toolbar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 16px;
}

.toolbar h1 {
    font-size: 24px;
    margin: 0;
}

.toolbar-controls {
    display: flex;
    gap: 8px;
}

.toolbar-controls select,
.toolbar-controls button {
    padding: 6px 10px;
    border-radius: 6px;
    border: 1px solid #9ca3af;
    background: inherit;
    color: inherit;
    cursor: pointer;
}

.toolbar-controls button.favorite {
    color: #facc15;
}

.chart-stack {
    position: relative;
    display: inline-block;
    border: 1px solid #6b7280;
    border-radius: 8px;
    overflow: hidden;
}

.chart-stack .overlay {
    position: absolute;
    top: 0;
    left: 0;
    z-index: 10;
    cursor: crosshair;
}

.status {
    margin-top: 10px;
    font-size: 14px;
    color: #6b7280;
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}

.modal {
    background: #1e222d;
    color: #f9fafb;
    border: 1px solid #2a2e39;
    border-radius: 12px;
    padding: 24px;
    width: 100%;
    max-width: 420px;
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 12px;
}

.modal-header h3 {
    margin: 0;
}

.modal-close {
    background: none;
    border: none;
    color: #9ca3af;
    cursor: pointer;
    font-size: 16px;
}

.modal-field {
    margin-bottom: 12px;
}

.modal-field label {
    display: block;
    font-size: 13px;
    margin-bottom: 4px;
}

.modal-field input,
.modal-field select {
    width: 100%;
    padding: 8px;
    border-radius: 6px;
    border: 1px solid #374151;
    background: #2a2e39;
    color: #f9fafb;
}

.modal-actions {
    display: flex;
    gap: 8px;
    margin-top: 16px;
}

.modal-actions button {
    flex: 1;
    padding: 8px 0;
    border: none;
    border-radius: 6px;
    color: white;
    cursor: pointer;
}

.btn-save { background: #3b82f6; }
.btn-delete { background: #dc2626; }
.btn-cancel { background: #6b7280; }
"#;
