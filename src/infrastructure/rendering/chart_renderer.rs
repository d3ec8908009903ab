use crate::domain::chart::Viewport;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Candle, CandleSeries};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const WICK_COLOR: &str = "#888888";
const BULLISH_COLOR: &str = "#00ff88";
const BEARISH_COLOR: &str = "#ff4444";
const DARK_BACKGROUND: &str = "#1a1a1a";
const LIGHT_BACKGROUND: &str = "#f9fafb";

/// Precomputed render data for one candle
#[derive(Debug, Clone)]
struct CandleRenderData {
    x: f64,
    high_y: f64,
    low_y: f64,
    open_y: f64,
    close_y: f64,
    color: &'static str,
    is_bullish: bool,
    body_width: f64,
}

/// Canvas 2D candlestick renderer.
///
/// Plays the chart-widget role: besides painting candles it publishes the
/// `Viewport` it rendered with, which is the axis calibration the
/// coordinate translator needs.
pub struct ChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.into(), width, height }
    }

    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render the series and return the viewport used, or `None` when there
    /// was no data to calibrate axes from.
    pub fn render(&self, series: &CandleSeries, dark: bool) -> Result<Option<Viewport>, JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        let background = if dark { DARK_BACKGROUND } else { LIGHT_BACKGROUND };
        context.set_fill_style(&JsValue::from(background));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if series.is_empty() {
            self.render_no_data_message(&context, dark)?;
            return Ok(None);
        }

        let viewport = self.viewport_for(series);
        let slot_width = self.width as f64 / series.count() as f64;

        for (i, candle) in series.get_candles().iter().enumerate() {
            let data = self.calculate_candle_render_data(i, candle, &viewport, slot_width);
            self.render_single_candle(&context, &data)?;
        }

        self.render_price_scale(&context, &viewport)?;
        self.render_current_price_line(&context, series, &viewport)?;

        get_logger().debug(
            LogComponent::Infrastructure("ChartRenderer"),
            &format!("rendered {} candles", series.count()),
        );

        Ok(Some(viewport))
    }

    /// Axis calibration covering the whole canvas extent, with a small
    /// vertical margin so wicks do not touch the edges.
    fn viewport_for(&self, series: &CandleSeries) -> Viewport {
        let (min_price, max_price) =
            series.price_range().map(|(lo, hi)| (lo.value(), hi.value())).unwrap_or((0.0, 100.0));
        let margin = (max_price - min_price) * 0.05;

        let (first, last) = series.time_range().expect("series checked non-empty");
        let slot_ms = if series.count() > 1 {
            (last.value() - first.value()) as f64 / (series.count() - 1) as f64
        } else {
            60_000.0
        };

        Viewport {
            start_time: first.as_f64(),
            end_time: last.as_f64() + slot_ms,
            min_price: min_price - margin,
            max_price: max_price + margin,
            width: self.width,
            height: self.height,
        }
    }

    fn calculate_candle_render_data(
        &self,
        index: usize,
        candle: &Candle,
        viewport: &Viewport,
        slot_width: f64,
    ) -> CandleRenderData {
        let x = (index as f64 + 0.5) * slot_width;

        let high_y = viewport.price_to_y(candle.ohlcv.high.value());
        let low_y = viewport.price_to_y(candle.ohlcv.low.value());
        let open_y = viewport.price_to_y(candle.ohlcv.open.value());
        let close_y = viewport.price_to_y(candle.ohlcv.close.value());

        let is_bullish = candle.is_bullish();
        let color = if is_bullish { BULLISH_COLOR } else { BEARISH_COLOR };
        let body_width = slot_width * 0.6;

        CandleRenderData { x, high_y, low_y, open_y, close_y, color, is_bullish, body_width }
    }

    fn render_single_candle(
        &self,
        context: &CanvasRenderingContext2d,
        data: &CandleRenderData,
    ) -> Result<(), JsValue> {
        // Wick (high-low)
        context.set_stroke_style(&JsValue::from(WICK_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(data.x, data.high_y);
        context.line_to(data.x, data.low_y);
        context.stroke();

        context.set_fill_style(&JsValue::from(data.color));
        context.set_stroke_style(&JsValue::from(data.color));
        context.set_line_width(1.0);

        let body_top = data.open_y.min(data.close_y);
        let body_height = (data.open_y - data.close_y).abs();

        if body_height < 1.0 {
            // Doji - draw line
            context.begin_path();
            context.move_to(data.x - data.body_width / 2.0, data.open_y);
            context.line_to(data.x + data.body_width / 2.0, data.open_y);
            context.stroke();
        } else if data.is_bullish {
            context.stroke_rect(
                data.x - data.body_width / 2.0,
                body_top,
                data.body_width,
                body_height,
            );
        } else {
            context.fill_rect(data.x - data.body_width / 2.0, body_top, data.body_width, body_height);
        }

        Ok(())
    }

    fn render_price_scale(
        &self,
        context: &CanvasRenderingContext2d,
        viewport: &Viewport,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#aaaaaa"));
        context.set_font("12px Arial");

        let max_text = format!("${:.2}", viewport.max_price);
        context.fill_text(&max_text, 10.0, 15.0)?;

        let min_text = format!("${:.2}", viewport.min_price);
        context.fill_text(&min_text, 10.0, self.height as f64 - 5.0)?;

        Ok(())
    }

    fn render_current_price_line(
        &self,
        context: &CanvasRenderingContext2d,
        series: &CandleSeries,
        viewport: &Viewport,
    ) -> Result<(), JsValue> {
        if let Some(latest) = series.latest() {
            let current_price = latest.ohlcv.close.value();
            let current_y = viewport.price_to_y(current_price);
            let current_text = format!("${:.2}", current_price);

            context.set_stroke_style(&JsValue::from(BULLISH_COLOR));
            context.set_line_width(1.0);
            context.begin_path();
            context.move_to(0.0, current_y);
            context.line_to(self.width as f64 - 70.0, current_y);
            context.stroke();

            context.set_fill_style(&JsValue::from(BULLISH_COLOR));
            context.fill_text(&current_text, self.width as f64 - 65.0, current_y + 5.0)?;
        }

        Ok(())
    }

    fn render_no_data_message(
        &self,
        context: &CanvasRenderingContext2d,
        dark: bool,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(if dark { "#ffffff" } else { "#111111" }));
        context.set_font("16px Arial");
        context.fill_text("No chart data available - Loading...", 50.0, self.height as f64 / 2.0)?;

        get_logger().warn(
            LogComponent::Infrastructure("ChartRenderer"),
            "No candle data to render",
        );

        Ok(())
    }
}
