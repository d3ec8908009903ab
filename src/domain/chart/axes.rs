use super::value_objects::Viewport;
use crate::domain::errors::{ChartError, ChartResult};

/// A pixel position translated into domain values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub time: f64,
    pub price: f64,
}

/// Coordinate translator over the chart's axis calibration.
///
/// The chart widget publishes its `Viewport` after every render; until the
/// first publish every translation fails fast with `AxisUnavailable` rather
/// than returning stale values. Translation must run at submission time, not
/// at draw time, because panning can recalibrate the axes in between.
#[derive(Debug, Clone, Default)]
pub struct ChartAxes {
    viewport: Option<Viewport>,
}

impl ChartAxes {
    pub fn new() -> Self {
        Self { viewport: None }
    }

    /// Called by the chart widget after each render.
    pub fn calibrate(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn is_ready(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Translate an overlay pixel position into `{time, price}`.
    pub fn to_domain(&self, pixel_x: f64, pixel_y: f64) -> ChartResult<ChartPoint> {
        let viewport = self.viewport.as_ref().ok_or(ChartError::AxisUnavailable)?;
        Ok(ChartPoint { time: viewport.x_to_time(pixel_x), price: viewport.y_to_price(pixel_y) })
    }
}
