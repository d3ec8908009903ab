use quickcheck_macros::quickcheck;
use trendline_chart_wasm::domain::annotations::distance_to_segment;

#[test]
fn point_on_segment_has_zero_distance() {
    // Midpoint of (0,0)-(10,10)
    assert!(distance_to_segment(5.0, 5.0, 0.0, 0.0, 10.0, 10.0).abs() < 1e-9);
    // Endpoints count as on the segment
    assert!(distance_to_segment(0.0, 0.0, 0.0, 0.0, 10.0, 10.0).abs() < 1e-9);
    assert!(distance_to_segment(10.0, 10.0, 0.0, 0.0, 10.0, 10.0).abs() < 1e-9);
}

#[test]
fn perpendicular_distance_inside_extent() {
    // Horizontal segment, point straight above its middle
    let d = distance_to_segment(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
    assert!((d - 3.0).abs() < 1e-9);
}

#[test]
fn clamps_to_nearest_endpoint_outside_extent() {
    // Projection parameter < 0: nearest endpoint is (0,0)
    let d = distance_to_segment(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0);
    assert!((d - 5.0).abs() < 1e-9);

    // Projection parameter > 1: nearest endpoint is (10,0)
    let d = distance_to_segment(13.0, 4.0, 0.0, 0.0, 10.0, 0.0);
    assert!((d - 5.0).abs() < 1e-9);
}

#[test]
fn zero_length_segment_degenerates_to_point_distance() {
    let d = distance_to_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
    assert!((d - 5.0).abs() < 1e-9);
}

#[quickcheck]
fn distance_is_never_negative(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let inputs = [px, py, x1, y1, x2, y2];
    if inputs.iter().any(|v| !v.is_finite()) {
        return true;
    }
    distance_to_segment(px, py, x1, y1, x2, y2) >= 0.0
}

#[quickcheck]
fn degenerate_segment_equals_euclidean(px: f64, py: f64, x: f64, y: f64) -> bool {
    let inputs = [px, py, x, y];
    if inputs.iter().any(|v| !v.is_finite() || v.abs() > 1e6) {
        return true;
    }
    let expected = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
    (distance_to_segment(px, py, x, y, x, y) - expected).abs() < 1e-6
}

#[quickcheck]
fn distance_bounded_by_endpoint_distances(
    px: f64,
    py: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let inputs = [px, py, x1, y1, x2, y2];
    if inputs.iter().any(|v| !v.is_finite() || v.abs() > 1e6) {
        return true;
    }
    let to_start = ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    let to_end = ((px - x2).powi(2) + (py - y2).powi(2)).sqrt();
    distance_to_segment(px, py, x1, y1, x2, y2) <= to_start.min(to_end) + 1e-6
}
