use super::geometry::distance_to_segment;
use super::value_objects::{AlertMeta, Stroke};
use serde::{Deserialize, Serialize};

/// Domain entity - Trendline annotation.
///
/// Endpoints are stored in overlay pixel space as of draw time; they are
/// translated into `{time, price}` only when the line is submitted to the
/// sync endpoint. Pixel coordinates are not re-normalized when the surface
/// resizes (known limitation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trendline {
    /// Unique within a store. 0 means "not yet assigned".
    #[serde(default)]
    pub id: u64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    #[serde(flatten)]
    pub stroke: Stroke,
    #[serde(flatten)]
    pub alert: AlertMeta,
}

impl Trendline {
    /// A freshly drawn line with default display attributes and no alert.
    pub fn segment(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            id: 0,
            start_x,
            start_y,
            end_x,
            end_y,
            stroke: Stroke::default(),
            alert: AlertMeta::default(),
        }
    }

    /// Distance from a pointer position to this line, clamped to its extent.
    pub fn distance_to(&self, px: f64, py: f64) -> f64 {
        distance_to_segment(px, py, self.start_x, self.start_y, self.end_x, self.end_y)
    }
}
