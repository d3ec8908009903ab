pub mod chart_renderer;
pub mod overlay_canvas;

pub use chart_renderer::*;
pub use overlay_canvas::*;
