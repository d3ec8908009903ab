use std::cell::{Cell, RefCell};
use std::rc::Rc;

use trendline_chart_wasm::domain::annotations::{
    AnnotationRepository, Trendline, TrendlineStore,
};
use trendline_chart_wasm::domain::errors::ChartError;

/// Repository that records every persisted snapshot.
struct MemoryRepo {
    snapshots: Rc<RefCell<Vec<Vec<Trendline>>>>,
    initial: Vec<Trendline>,
}

impl AnnotationRepository for MemoryRepo {
    fn load(&self) -> Vec<Trendline> {
        self.initial.clone()
    }

    fn persist(&self, lines: &[Trendline]) {
        self.snapshots.borrow_mut().push(lines.to_vec());
    }
}

fn store_with_snapshots() -> (TrendlineStore, Rc<RefCell<Vec<Vec<Trendline>>>>) {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let repo = MemoryRepo { snapshots: snapshots.clone(), initial: Vec::new() };
    let counter = Cell::new(0u64);
    let store = TrendlineStore::new(
        Box::new(repo),
        Box::new(move || {
            counter.set(counter.get() + 1);
            counter.get()
        }),
    );
    (store, snapshots)
}

#[test]
fn add_then_list_round_trips() {
    let (mut store, _) = store_with_snapshots();
    let id = store.add(Trendline::segment(1.0, 2.0, 3.0, 4.0));

    let lines = store.list();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, id);
    assert_eq!(lines[0].start_x, 1.0);
    assert_eq!(lines[0].end_y, 4.0);
    assert_eq!(lines[0].stroke.color, "#FF0000");
    assert_eq!(lines[0].stroke.thickness, 2.0);
}

#[test]
fn add_assigns_unique_ids_and_keeps_insertion_order() {
    let (mut store, _) = store_with_snapshots();
    let first = store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));
    let second = store.add(Trendline::segment(2.0, 2.0, 3.0, 3.0));

    assert_ne!(first, second);
    let order: Vec<u64> = store.list().iter().map(|l| l.id).collect();
    assert_eq!(order, vec![first, second]);
}

#[test]
fn add_reassigns_colliding_id() {
    let (mut store, _) = store_with_snapshots();
    let mut line = Trendline::segment(0.0, 0.0, 1.0, 1.0);
    line.id = 42;
    store.add(line.clone());
    let second = store.add(line);

    assert_ne!(second, 42);
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_is_idempotent() {
    let (mut store, _) = store_with_snapshots();
    let id = store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));
    store.add(Trendline::segment(5.0, 5.0, 6.0, 6.0));

    store.remove(id);
    let after_first = store.list().to_vec();
    store.remove(id);

    assert_eq!(store.list(), after_first.as_slice());
    assert_eq!(store.len(), 1);
}

#[test]
fn update_unknown_id_leaves_store_untouched() {
    let (mut store, _) = store_with_snapshots();
    store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));
    let before = store.list().to_vec();

    let mut ghost = Trendline::segment(9.0, 9.0, 9.0, 9.0);
    ghost.id = 999;
    let result = store.update(ghost);

    assert_eq!(result, Err(ChartError::NotFound(999)));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn update_replaces_full_record_by_id() {
    let (mut store, _) = store_with_snapshots();
    let id = store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));

    let mut edited = store.get(id).unwrap().clone();
    edited.stroke.color = "#00FF00".to_string();
    edited.alert.alert_name = "breakout".to_string();
    store.update(edited).unwrap();

    let stored = store.get(id).unwrap();
    assert_eq!(stored.stroke.color, "#00FF00");
    assert_eq!(stored.alert.alert_name, "breakout");
    assert_eq!(store.len(), 1);
}

#[test]
fn every_mutation_persists_the_full_collection() {
    let (mut store, snapshots) = store_with_snapshots();
    let id = store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));
    let mut edited = store.get(id).unwrap().clone();
    edited.stroke.thickness = 4.0;
    store.update(edited).unwrap();
    store.remove(id);

    let snapshots = snapshots.borrow();
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].len(), 1);
    assert_eq!(snapshots[1][0].stroke.thickness, 4.0);
    assert!(snapshots[2].is_empty());
}

#[test]
fn removing_unknown_id_does_not_rewrite_storage() {
    let (mut store, snapshots) = store_with_snapshots();
    store.add(Trendline::segment(0.0, 0.0, 1.0, 1.0));
    let writes_before = snapshots.borrow().len();

    store.remove(12345);

    assert_eq!(snapshots.borrow().len(), writes_before);
}
