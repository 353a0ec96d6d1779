use goldfish_core::db::{open_db, open_db_in_memory};
use goldfish_core::{
    new_id, Birthday, CollectionKey, CollectionStore, KeyValueStore, Recurrence, RecurringEvent,
    SqliteKeyValueStore, Task, Urgency,
};
use std::collections::HashSet;

fn birthday(id: &str, name: &str, date: &str) -> Birthday {
    Birthday {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
    }
}

#[test]
fn load_of_never_saved_key_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));

    for key in CollectionKey::ALL {
        assert!(store.load::<serde_json::Value>(key).is_empty());
    }
}

#[test]
fn save_then_load_preserves_order_for_every_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));

    let birthdays = vec![
        birthday("b2", "Zoe", "30/12"),
        birthday("b1", "Ann", "05/03"),
        birthday("b3", "Bob", "not a date"),
    ];
    let tasks = vec![
        Task {
            id: "t1".to_string(),
            text: "Pay rent".to_string(),
            notes: String::new(),
            urgency: Urgency::High,
            target_date: Some("2024-04-01".to_string()),
        },
        Task {
            id: "t2".to_string(),
            text: "Call plumber".to_string(),
            notes: "after 5pm".to_string(),
            urgency: Urgency::Medium,
            target_date: None,
        },
    ];
    let events = vec![
        RecurringEvent {
            id: "e1".to_string(),
            text: "Gym".to_string(),
            recurrence: Recurrence::Weekly {
                day_of_week: Some("Monday".to_string()),
            },
            time: Some("18:30".to_string()),
        },
        RecurringEvent {
            id: "e2".to_string(),
            text: "Anniversary".to_string(),
            recurrence: Recurrence::Yearly {
                specific_date: Some("14/02".to_string()),
            },
            time: None,
        },
    ];

    store.save(CollectionKey::Birthdays, &birthdays).unwrap();
    store.save(CollectionKey::Tasks, &tasks).unwrap();
    store.save(CollectionKey::RecurringEvents, &events).unwrap();

    assert_eq!(store.load::<Birthday>(CollectionKey::Birthdays), birthdays);
    assert_eq!(store.load::<Task>(CollectionKey::Tasks), tasks);
    assert_eq!(
        store.load::<RecurringEvent>(CollectionKey::RecurringEvents),
        events
    );
}

#[test]
fn save_replaces_previous_value_entirely() {
    let conn = open_db_in_memory().unwrap();
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));

    store
        .save(
            CollectionKey::Birthdays,
            &[birthday("b1", "Ann", "05/03"), birthday("b2", "Bob", "06/03")],
        )
        .unwrap();
    store
        .save(CollectionKey::Birthdays, &[birthday("b3", "Cid", "07/03")])
        .unwrap();

    let loaded = store.load::<Birthday>(CollectionKey::Birthdays);
    assert_eq!(loaded, vec![birthday("b3", "Cid", "07/03")]);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_storage;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn collections_are_stored_under_literal_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));

    store.save::<Birthday>(CollectionKey::Birthdays, &[]).unwrap();
    store.save::<Task>(CollectionKey::Tasks, &[]).unwrap();
    store
        .save::<RecurringEvent>(CollectionKey::RecurringEvents, &[])
        .unwrap();

    let mut stmt = conn
        .prepare("SELECT key FROM local_storage ORDER BY key;")
        .unwrap();
    let keys = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(keys, vec!["birthdays", "recurringEvents", "tasks"]);
}

#[test]
fn corrupt_or_mismatched_values_load_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::new(&conn);
    kv.set_item("birthdays", "{not json").unwrap();
    kv.set_item("tasks", r#"{"id":"t1"}"#).unwrap();
    kv.set_item("recurringEvents", r#"[{"id":"e1","text":"x","periodicity":"hourly"}]"#)
        .unwrap();

    let store = CollectionStore::new(kv);
    assert!(store.load::<Birthday>(CollectionKey::Birthdays).is_empty());
    assert!(store.load::<Task>(CollectionKey::Tasks).is_empty());
    assert!(store
        .load::<RecurringEvent>(CollectionKey::RecurringEvents)
        .is_empty());
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goldfish.db");

    {
        let conn = open_db(&path).unwrap();
        let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));
        store
            .save(CollectionKey::Birthdays, &[birthday("b1", "Ann", "05/03")])
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = CollectionStore::new(SqliteKeyValueStore::new(&conn));
    assert_eq!(
        store.load::<Birthday>(CollectionKey::Birthdays),
        vec![birthday("b1", "Ann", "05/03")]
    );
}

#[test]
fn new_id_does_not_collide_over_ten_thousand_draws() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let id = new_id();
        assert!(!id.is_empty());
        assert!(seen.insert(id), "generated id collided");
    }
}
