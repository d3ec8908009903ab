/// Value Object - Viewport, the chart's axis calibration.
///
/// Maps between on-screen pixels and domain quantities (time on X, price
/// on Y), honoring the current pan/zoom state. The mapping is monotonic
/// and continuous over the canvas extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub start_time: f64,
    pub end_time: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            min_price: 0.0,
            max_price: 100.0,
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn time_range(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    pub fn zoom(&mut self, factor: f64, center_x: f64) {
        let current_range = self.time_range();
        let new_range = current_range / factor;
        let center_time = self.start_time + current_range * center_x;

        self.start_time = center_time - new_range / 2.0;
        self.end_time = center_time + new_range / 2.0;
    }

    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        let time_delta = self.time_range() * delta_x;
        self.start_time += time_delta;
        self.end_time += time_delta;

        let price_delta = self.price_range() * delta_y;
        self.min_price += price_delta;
        self.max_price += price_delta;
    }

    /// Convert a timestamp to a screen X coordinate
    pub fn time_to_x(&self, timestamp: f64) -> f64 {
        if self.time_range() == 0.0 {
            return 0.0;
        }
        let normalized = (timestamp - self.start_time) / self.time_range();
        normalized * self.width as f64
    }

    /// Convert a price to a screen Y coordinate
    pub fn price_to_y(&self, price: f64) -> f64 {
        if self.price_range() == 0.0 {
            return self.height as f64 / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        self.height as f64 * (1.0 - normalized) // Invert Y
    }

    /// Convert a screen X coordinate back to time
    pub fn x_to_time(&self, x: f64) -> f64 {
        let normalized = x / self.width as f64;
        self.start_time + self.time_range() * normalized
    }

    /// Convert a screen Y coordinate back to price
    pub fn y_to_price(&self, y: f64) -> f64 {
        let normalized = 1.0 - (y / self.height as f64); // invert Y
        self.min_price + self.price_range() * normalized
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse a CSS hex string like `#FF0000`.
    pub fn from_css(css: &str) -> Option<Self> {
        let digits = css.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let hex = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_hex(hex))
    }

    pub fn to_css(&self) -> String {
        let r = (self.r * 255.0) as u32;
        let g = (self.g * 255.0) as u32;
        let b = (self.b * 255.0) as u32;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
