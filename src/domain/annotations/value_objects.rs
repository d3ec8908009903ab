use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

pub const DEFAULT_COLOR: &str = "#FF0000";
pub const DEFAULT_THICKNESS: f64 = 2.0;

/// Value Object - Line rendering style
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum LineStyle {
    #[default]
    #[strum(serialize = "solid")]
    #[serde(rename = "solid")]
    Solid,

    #[strum(serialize = "dashed")]
    #[serde(rename = "dashed")]
    Dashed,

    #[strum(serialize = "dotted")]
    #[serde(rename = "dotted")]
    Dotted,
}

impl LineStyle {
    /// Canvas dash pattern for this style.
    pub fn dash_pattern(&self) -> &'static [f64] {
        match self {
            LineStyle::Solid => &[],
            LineStyle::Dashed => &[8.0, 4.0],
            LineStyle::Dotted => &[2.0, 4.0],
        }
    }
}

/// Value Object - Display attributes of a trendline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: String,
    pub thickness: f64,
    pub style: LineStyle,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            thickness: DEFAULT_THICKNESS,
            style: LineStyle::Solid,
        }
    }
}

/// Value Object - Optional alert metadata attached to a trendline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMeta {
    pub alert_name: String,
    pub message: String,
    pub expiry_date: String,
}
