use super::state::SurfaceState;
use crate::domain::annotations::{Stroke, Trendline};
use crate::domain::market_data::Candle;

/// One overlay drawing instruction. Executing a command list against a real
/// canvas lives in the infrastructure layer; producing it is pure.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Full clear of the overlay. Always the first command.
    Clear { width: f64, height: f64 },
    Stroke { x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke },
    Text { text: String, x: f64, y: f64, color: String },
}

/// Offsets of the OHLC readout from the cursor position.
const READOUT_DX: f64 = 10.0;
const READOUT_DY: f64 = -10.0;
const READOUT_COLOR: &str = "orange";

/// Repaint contract: every repaint is a full clear-and-redraw.
///
/// Committed lines are drawn with their own stroke, the candidate (if any)
/// with the default stroke, and the OHLC readout as text near the cursor
/// when the cursor is inside the surface and a candle resolved under it.
pub fn render_overlay(
    state: &SurfaceState,
    lines: &[Trendline],
    readout: Option<&Candle>,
) -> Vec<DrawCommand> {
    let mut commands =
        Vec::with_capacity(lines.len() + if state.is_drawing() { 1 } else { 0 } + 2);
    commands.push(DrawCommand::Clear { width: state.width, height: state.height });

    for line in lines {
        commands.push(DrawCommand::Stroke {
            x1: line.start_x,
            y1: line.start_y,
            x2: line.end_x,
            y2: line.end_y,
            stroke: line.stroke.clone(),
        });
    }

    if let Some(draft) = state.draft() {
        commands.push(DrawCommand::Stroke {
            x1: draft.start_x,
            y1: draft.start_y,
            x2: draft.end_x,
            y2: draft.end_y,
            stroke: Stroke::default(),
        });
    }

    if let (Some((cx, cy)), Some(candle)) = (state.cursor(), readout) {
        if cx >= 0.0 && cx < state.width && cy >= 0.0 && cy < state.height {
            commands.push(DrawCommand::Text {
                text: candle.readout(),
                x: cx + READOUT_DX,
                y: cy + READOUT_DY,
                color: READOUT_COLOR.to_string(),
            });
        }
    }

    commands
}
