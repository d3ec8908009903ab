use leptos::*;

use crate::domain::annotations::{AlertMeta, LineStyle, Stroke, Trendline};
use crate::domain::chart::Color;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::{AnnotationSyncClient, TrendlinePayload};
use crate::state::use_app_state;

/// Blocking acknowledgment, per the sync caller contract.
fn notify(message: &str) {
    let _ = window().alert_with_message(message);
}

/// Modal dialog editing a trendline's display and alert attributes.
///
/// SAVE runs the translate-then-sync chain: pixel endpoints are translated
/// into domain values first (aborting before any network call when the axes
/// are not ready), then the payload is submitted, and only a successful
/// acknowledgment updates the local store. On failure the locally drawn
/// line is left untouched and stays usable offline.
#[component]
pub fn EditDialog(line: Trendline) -> impl IntoView {
    let state = use_app_state();

    let (color, set_color) = create_signal(line.stroke.color.clone());
    let (thickness, set_thickness) = create_signal(line.stroke.thickness);
    let (style, set_style) = create_signal(line.stroke.style);
    let (alert_name, set_alert_name) = create_signal(line.alert.alert_name.clone());
    let (message, set_message) = create_signal(line.alert.message.clone());
    let (expiry_date, set_expiry_date) = create_signal(line.alert.expiry_date.clone());

    let base = line.clone();
    let on_save = move |_| {
        // <input type="color"> yields lowercase hex; persisted strokes keep
        // the canonical uppercase form. An unparseable value keeps the
        // line's current color.
        let updated = Trendline {
            stroke: Stroke {
                color: Color::from_css(&color.get_untracked())
                    .map(|c| c.to_css())
                    .unwrap_or_else(|| base.stroke.color.clone()),
                thickness: thickness.get_untracked(),
                style: style.get_untracked(),
            },
            alert: AlertMeta {
                alert_name: alert_name.get_untracked(),
                message: message.get_untracked(),
                expiry_date: expiry_date.get_untracked(),
            },
            ..base.clone()
        };

        spawn_local(async move {
            // Translate at submission time: the axis calibration may have
            // shifted since the line was drawn.
            let translated = state.axes.with_untracked(|axes| {
                let start = axes.to_domain(updated.start_x, updated.start_y)?;
                let end = axes.to_domain(updated.end_x, updated.end_y)?;
                Ok::<_, crate::domain::errors::ChartError>((start, end))
            });

            let (start, end) = match translated {
                Ok(points) => points,
                Err(e) => {
                    get_logger().error(
                        LogComponent::Presentation("EditDialog"),
                        &format!("translation failed: {e}"),
                    );
                    notify("Chart is not ready yet. Please try again.");
                    return;
                }
            };

            let payload = TrendlinePayload::new(&updated, start, end);
            match AnnotationSyncClient::new().submit(&payload).await {
                Ok(_) => {
                    state.trendlines.update(|store| {
                        if let Err(e) = store.update(updated.clone()) {
                            get_logger().warn(
                                LogComponent::Presentation("EditDialog"),
                                &format!("store update skipped: {e}"),
                            );
                        }
                    });
                    state.editing.set(None);
                    notify("Trendline updated.");
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Presentation("EditDialog"),
                        &format!("sync failed: {e}"),
                    );
                    notify("Failed to update trendline. The server is not running....");
                }
            }
        });
    };

    let line_id = line.id;
    let on_delete = move |_| {
        state.trendlines.update(|store| store.remove(line_id));
        state.editing.set(None);
    };

    let on_cancel = move |_| state.editing.set(None);

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>"Edit Trendline"</h3>
                    <button class="modal-close" on:click=on_cancel>"✕"</button>
                </div>

                <div class="modal-field">
                    <label>"Color"</label>
                    <input
                        type="color"
                        prop:value=color
                        on:input=move |ev| set_color.set(event_target_value(&ev))
                    />
                </div>

                <div class="modal-field">
                    <label>"Thickness"</label>
                    <input
                        type="number"
                        min="1"
                        max="10"
                        prop:value=move || thickness.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                set_thickness.set(value);
                            }
                        }
                    />
                </div>

                <div class="modal-field">
                    <label>"Style"</label>
                    <select on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<LineStyle>() {
                            set_style.set(value);
                        }
                    }>
                        <option value="solid" selected=move || style.get() == LineStyle::Solid>
                            "Solid"
                        </option>
                        <option value="dashed" selected=move || style.get() == LineStyle::Dashed>
                            "Dashed"
                        </option>
                        <option value="dotted" selected=move || style.get() == LineStyle::Dotted>
                            "Dotted"
                        </option>
                    </select>
                </div>

                <div class="modal-field">
                    <label>"Alert Name"</label>
                    <input
                        type="text"
                        placeholder="Enter alert name"
                        prop:value=alert_name
                        on:input=move |ev| set_alert_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="modal-field">
                    <label>"Message"</label>
                    <input
                        type="text"
                        placeholder="Enter message"
                        prop:value=message
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    />
                </div>

                <div class="modal-field">
                    <label>"Expiry Date"</label>
                    <input
                        type="date"
                        prop:value=expiry_date
                        on:input=move |ev| set_expiry_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="modal-actions">
                    <button class="btn-save" on:click=on_save>"SAVE"</button>
                    <button class="btn-delete" on:click=on_delete>"DELETE"</button>
                    <button class="btn-cancel" on:click=on_cancel>"CANCEL"</button>
                </div>
            </div>
        </div>
    }
}
