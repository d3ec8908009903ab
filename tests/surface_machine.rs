use trendline_chart_wasm::domain::surface::SurfaceState;

#[test]
fn drag_gesture_runs_idle_drawing_idle() {
    let mut surface = SurfaceState::new(1000.0, 500.0);
    assert!(!surface.is_drawing());

    surface.pointer_down(100.0, 50.0);
    assert!(surface.is_drawing());
    let draft = surface.draft().unwrap();
    assert_eq!((draft.start_x, draft.start_y), (100.0, 50.0));
    assert_eq!((draft.end_x, draft.end_y), (100.0, 50.0));

    surface.pointer_move(150.0, 90.0);
    surface.pointer_move(200.0, 150.0);
    let draft = surface.draft().unwrap();
    // Start stays anchored at the press location, end tracks the pointer
    assert_eq!((draft.start_x, draft.start_y), (100.0, 50.0));
    assert_eq!((draft.end_x, draft.end_y), (200.0, 150.0));

    let committed = surface.pointer_up().unwrap();
    assert!(!surface.is_drawing());
    assert_eq!(committed.id, 0);
    assert_eq!(
        (committed.start_x, committed.start_y, committed.end_x, committed.end_y),
        (100.0, 50.0, 200.0, 150.0)
    );
}

#[test]
fn release_without_press_commits_nothing() {
    let mut surface = SurfaceState::new(1000.0, 500.0);
    assert!(surface.pointer_up().is_none());
}

#[test]
fn moving_while_idle_only_tracks_the_cursor() {
    let mut surface = SurfaceState::new(1000.0, 500.0);
    surface.pointer_move(42.0, 24.0);
    assert_eq!(surface.cursor(), Some((42.0, 24.0)));
    assert!(surface.draft().is_none());
}

#[test]
fn leaving_the_surface_abandons_the_candidate() {
    let mut surface = SurfaceState::new(1000.0, 500.0);
    surface.pointer_down(10.0, 10.0);
    surface.pointer_move(20.0, 20.0);
    surface.pointer_leave();

    assert!(!surface.is_drawing());
    assert_eq!(surface.cursor(), None);
    assert!(surface.pointer_up().is_none());
}

#[test]
fn cursor_resolves_to_candle_index_by_even_division() {
    let surface = SurfaceState::new(1000.0, 500.0);
    // 100 candles over 1000px: 10px per candle, x=505 falls in slot 50
    assert_eq!(surface.candle_index_at(505.0, 100), Some(50));
    assert_eq!(surface.candle_index_at(0.0, 100), Some(0));
    assert_eq!(surface.candle_index_at(999.9, 100), Some(99));
}

#[test]
fn candle_index_is_none_outside_bounds_or_without_data() {
    let surface = SurfaceState::new(1000.0, 500.0);
    assert_eq!(surface.candle_index_at(505.0, 0), None);
    assert_eq!(surface.candle_index_at(-1.0, 100), None);
    assert_eq!(surface.candle_index_at(1000.0, 100), None);
}
