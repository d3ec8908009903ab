use crate::domain::annotations::Trendline;

/// Drawing surface modes: `Idle -> Drawing -> Idle` over a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceMode {
    Idle,
    Drawing(Draft),
}

/// The candidate line while a drag is in progress. The start point is fixed
/// at the press location, the end point tracks the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draft {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// State machine behind the transparent overlay canvas.
///
/// Pure: pointer events mutate this state, the overlay is repainted from it
/// via `render_overlay`. No canvas handle is held here, which keeps the
/// whole gesture flow testable without a DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub width: f64,
    pub height: f64,
    mode: SurfaceMode,
    cursor: Option<(f64, f64)>,
}

impl SurfaceState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, mode: SurfaceMode::Idle, cursor: None }
    }

    /// Press starts a candidate line anchored at the press location.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        self.mode = SurfaceMode::Drawing(Draft { start_x: x, start_y: y, end_x: x, end_y: y });
    }

    /// Move updates the cursor and, while drawing, the candidate's end point.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        if let SurfaceMode::Drawing(draft) = &mut self.mode {
            draft.end_x = x;
            draft.end_y = y;
        }
    }

    /// Release commits the candidate and returns to `Idle`.
    /// Returns the finished segment, id not yet assigned.
    pub fn pointer_up(&mut self) -> Option<Trendline> {
        match std::mem::replace(&mut self.mode, SurfaceMode::Idle) {
            SurfaceMode::Drawing(draft) => {
                Some(Trendline::segment(draft.start_x, draft.start_y, draft.end_x, draft.end_y))
            }
            SurfaceMode::Idle => None,
        }
    }

    /// Pointer left the surface: no cursor, abandon any candidate.
    pub fn pointer_leave(&mut self) {
        self.cursor = None;
        self.mode = SurfaceMode::Idle;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, SurfaceMode::Drawing(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            SurfaceMode::Drawing(draft) => Some(draft),
            SurfaceMode::Idle => None,
        }
    }

    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Nearest candle index under `x`, by even division of the surface
    /// width. An approximation, not hit-testing against rendered geometry.
    pub fn candle_index_at(&self, x: f64, candle_count: usize) -> Option<usize> {
        if candle_count == 0 || self.width <= 0.0 || x < 0.0 {
            return None;
        }
        let candle_width = self.width / candle_count as f64;
        let index = (x / candle_width).floor() as usize;
        (index < candle_count).then_some(index)
    }
}
