use std::sync::{Arc, Mutex};
use todostore_core::{TodoItem, TodoStore};

type SnapshotLog = Arc<Mutex<Vec<Vec<TodoItem>>>>;

fn recording_subscriber(store: &mut TodoStore) -> (SnapshotLog, todostore_core::SubscriptionId) {
    let snapshots: SnapshotLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);
    let id = store.subscribe(move |items| {
        sink.lock().unwrap().push(items.to_vec());
    });
    (snapshots, id)
}

#[test]
fn subscribe_delivers_current_snapshot_immediately() {
    let mut store = TodoStore::new();
    let existing = store.add_todo("already there");

    let (snapshots, _id) = recording_subscriber(&mut store);

    let snapshots = snapshots.lock().unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0], vec![existing]);
}

#[test]
fn each_mutation_publishes_one_post_mutation_snapshot() {
    let mut store = TodoStore::new();
    let (snapshots, _id) = recording_subscriber(&mut store);

    let added = store.add_todo("groceries");
    store
        .edit_todo(added.id, Some("groceries and coffee".to_string()), None)
        .unwrap();
    store.remove_todo(added.id).unwrap();

    let snapshots = snapshots.lock().unwrap();
    // Initial delivery plus one snapshot per mutation.
    assert_eq!(snapshots.len(), 4);
    assert!(snapshots[0].is_empty());
    assert_eq!(snapshots[1][0].title, "groceries");
    assert_eq!(snapshots[2][0].title, "groceries and coffee");
    assert!(snapshots[3].is_empty());
}

#[test]
fn failed_lookup_publishes_nothing() {
    let mut store = TodoStore::new();
    store.add_todo("stable");
    let (snapshots, _id) = recording_subscriber(&mut store);

    let missing = uuid::Uuid::new_v4();
    assert!(store.edit_todo(missing, None, Some(true)).is_err());
    assert!(store.remove_todo(missing).is_err());
    assert!(store.get_todo(missing).is_err());

    assert_eq!(snapshots.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut store = TodoStore::new();
    let (snapshots, id) = recording_subscriber(&mut store);

    assert!(store.unsubscribe(id));
    store.add_todo("unseen");

    assert_eq!(snapshots.lock().unwrap().len(), 1);
    assert!(!store.unsubscribe(id));
}

#[test]
fn unsubscribing_one_subscriber_leaves_others_active() {
    let mut store = TodoStore::new();
    let (first_log, first_id) = recording_subscriber(&mut store);
    let (second_log, _second_id) = recording_subscriber(&mut store);

    store.unsubscribe(first_id);
    store.add_todo("for the second subscriber only");

    assert_eq!(first_log.lock().unwrap().len(), 1);
    assert_eq!(second_log.lock().unwrap().len(), 2);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let mut store = TodoStore::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second"] {
        let order = Arc::clone(&order);
        store.subscribe(move |_items| {
            order.lock().unwrap().push(label);
        });
    }
    order.lock().unwrap().clear();

    store.add_todo("ordered delivery");

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn snapshots_are_copies_not_views() {
    let mut store = TodoStore::new();
    let (snapshots, _id) = recording_subscriber(&mut store);

    let added = store.add_todo("v1");
    store.edit_todo(added.id, Some("v2".to_string()), None).unwrap();

    // The earlier snapshot still reflects the state it was taken at.
    let snapshots = snapshots.lock().unwrap();
    assert_eq!(snapshots[1][0].title, "v1");
    assert_eq!(snapshots[2][0].title, "v2");
}
