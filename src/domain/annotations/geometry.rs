/// Pixel distance within which a pointer position counts as clicking a line.
pub const HIT_THRESHOLD_PX: f64 = 10.0;

/// Distance from point `(px, py)` to the segment `(x1, y1)-(x2, y2)`,
/// clamped to the segment extent: when the projection falls outside
/// `[0, 1]` the distance to the nearest endpoint is returned.
///
/// A zero-length segment degenerates to the Euclidean distance to the
/// single point (projection parameter forced to -1).
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let a = px - x1;
    let b = py - y1;
    let c = x2 - x1;
    let d = y2 - y1;

    let dot = a * c + b * d;
    let len_sq = c * c + d * d;
    let param = if len_sq != 0.0 { dot / len_sq } else { -1.0 };

    let (xx, yy) = if param < 0.0 {
        (x1, y1)
    } else if param > 1.0 {
        (x2, y2)
    } else {
        (x1 + param * c, y1 + param * d)
    };

    let dx = px - xx;
    let dy = py - yy;
    (dx * dx + dy * dy).sqrt()
}
