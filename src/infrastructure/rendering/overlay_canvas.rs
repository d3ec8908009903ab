use crate::domain::surface::DrawCommand;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const READOUT_FONT: &str = "14px Arial";

/// Executes overlay draw commands against the transparent canvas stacked
/// over the chart. The command list itself is produced by the pure
/// `render_overlay` function in the domain.
pub struct OverlayCanvas {
    canvas_id: String,
}

impl OverlayCanvas {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("overlay canvas not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to 2D context"))
    }

    pub fn execute(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        let context = self.context()?;

        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    context.clear_rect(0.0, 0.0, *width, *height);
                }
                DrawCommand::Stroke { x1, y1, x2, y2, stroke } => {
                    let dash = js_sys::Array::new();
                    for segment in stroke.style.dash_pattern() {
                        dash.push(&JsValue::from_f64(*segment));
                    }
                    context.set_line_dash(&dash)?;
                    context.set_stroke_style(&JsValue::from(stroke.color.as_str()));
                    context.set_line_width(stroke.thickness);
                    context.begin_path();
                    context.move_to(*x1, *y1);
                    context.line_to(*x2, *y2);
                    context.stroke();
                    context.set_line_dash(&js_sys::Array::new())?;
                }
                DrawCommand::Text { text, x, y, color } => {
                    context.set_fill_style(&JsValue::from(color.as_str()));
                    context.set_font(READOUT_FONT);
                    context.fill_text(text, *x, *y)?;
                }
            }
        }

        Ok(())
    }
}

/// Serialize the chart canvas to a PNG data URL and offer it as a
/// `<symbol>-chart.png` download.
pub fn export_chart_png(canvas_id: &str, symbol: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("chart canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))?;

    let data_url = canvas.to_data_url()?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("failed to create anchor"))?;
    anchor.set_href(&data_url);
    anchor.set_download(&format!("{}-chart.png", symbol));
    anchor.click();

    Ok(())
}
