use std::cell::Cell;

use trendline_chart_wasm::domain::annotations::{
    HIT_THRESHOLD_PX, NullRepository, Trendline, TrendlineStore,
};

fn empty_store() -> TrendlineStore {
    let counter = Cell::new(0u64);
    TrendlineStore::new(
        Box::new(NullRepository),
        Box::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        }),
    )
}

#[test]
fn click_on_drawn_line_matches() {
    let mut store = empty_store();
    let id = store.add(Trendline::segment(100.0, 50.0, 200.0, 150.0));

    // (150,100) lies exactly on the segment
    let hit = store.hit_test(150.0, 100.0, HIT_THRESHOLD_PX);
    assert_eq!(hit.map(|l| l.id), Some(id));
}

#[test]
fn click_far_from_line_misses() {
    let mut store = empty_store();
    store.add(Trendline::segment(100.0, 50.0, 200.0, 150.0));

    assert!(store.hit_test(150.0, 300.0, HIT_THRESHOLD_PX).is_none());
}

#[test]
fn click_just_outside_threshold_misses() {
    let mut store = empty_store();
    store.add(Trendline::segment(0.0, 0.0, 100.0, 0.0));

    assert!(store.hit_test(50.0, 9.0, HIT_THRESHOLD_PX).is_some());
    assert!(store.hit_test(50.0, 10.0, HIT_THRESHOLD_PX).is_none());
}

#[test]
fn nearest_line_wins_when_both_are_within_threshold() {
    let mut store = empty_store();
    // Two horizontal lines, 8px apart; a click at y=5 is within 10px of both.
    let far = store.add(Trendline::segment(0.0, 0.0, 100.0, 0.0));
    let near = store.add(Trendline::segment(0.0, 8.0, 100.0, 8.0));
    let _ = far;

    let hit = store.hit_test(50.0, 5.5, HIT_THRESHOLD_PX);
    assert_eq!(hit.map(|l| l.id), Some(near));
}

#[test]
fn empty_store_never_matches() {
    let store = empty_store();
    assert!(store.hit_test(0.0, 0.0, HIT_THRESHOLD_PX).is_none());
}
