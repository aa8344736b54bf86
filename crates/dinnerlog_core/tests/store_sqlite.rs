use dinnerlog_core::db::{open_db, open_db_in_memory};
use dinnerlog_core::{DinnerRecord, DinnerStore, SqliteDinnerStore, StoreError};
use rusqlite::Connection;

fn dinner(name: &str, date: &str, ingredients: &[&str]) -> DinnerRecord {
    DinnerRecord::new(
        name,
        date,
        ingredients.iter().map(|value| value.to_string()).collect(),
    )
}

#[test]
fn save_then_load_preserves_order_ids_and_ingredient_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    let records = vec![
        dinner("zeta", "2024-01-02", &["rice", "beans", "rice"]),
        dinner("alpha", "not a date", &[]),
        dinner("mid", "2024-01-01", &["", "Egg"]),
    ];

    store.save_all(&records).unwrap();
    assert_eq!(store.load_all().unwrap(), records);
}

#[test]
fn save_all_replaces_previous_sequence() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    let first = dinner("first", "2024-01-01", &["a"]);
    let second = dinner("second", "2024-01-02", &["b"]);
    store.save_all(&[first, second.clone()]).unwrap();

    let mut edited = second.clone();
    edited.ingredients = vec!["c".to_string(), "d".to_string()];
    store.save_all(&[edited.clone()]).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![edited]);
}

#[test]
fn removed_records_drop_their_ingredient_rows() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut store = SqliteDinnerStore::try_new(&mut conn).unwrap();
        store
            .save_all(&[dinner("gone", "2024-01-01", &["x", "y"])])
            .unwrap();
        store.save_all(&[]).unwrap();
    }

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM dinner_ingredients;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut conn = open_db_in_memory().unwrap();
    let mut store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    let record = dinner("twice", "2024-01-01", &[]);

    let err = store
        .save_all(&[record.clone(), record])
        .expect_err("duplicate ids must fail");
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn records_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dinners.db");
    let records = vec![dinner("stew", "2024-03-03", &["carrot", "beef"])];

    {
        let mut conn = open_db(&path).unwrap();
        let mut store = SqliteDinnerStore::try_new(&mut conn).unwrap();
        store.save_all(&records).unwrap();
    }

    let mut conn = open_db(&path).unwrap();
    let store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    assert_eq!(store.load_all().unwrap(), records);
}

#[test]
fn try_new_rejects_connection_without_schema() {
    let mut conn = Connection::open_in_memory().unwrap();

    let err = SqliteDinnerStore::try_new(&mut conn)
        .err()
        .expect("raw connection must be rejected");
    match err {
        StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        } => {
            assert_eq!(expected_version, 1);
            assert_eq!(actual_version, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_rejects_invalid_persisted_uuid() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO dinners (uuid, position, name, date) VALUES ('not-a-uuid', 0, 'x', '2024-01-01');",
        [],
    )
    .unwrap();

    let store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    let err = store.load_all().unwrap_err();
    assert!(err.to_string().contains("invalid uuid value `not-a-uuid`"));
}
