use chrono::NaiveDateTime;
use dinnerlog_core::db::open_db_in_memory;
use dinnerlog_core::{
    DinnerRecord, DinnerService, DinnerStore, InMemoryDinnerStore, ServiceError,
    SqliteDinnerStore, StoreResult,
};
use uuid::Uuid;

fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn names(records: &[DinnerRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[derive(Default)]
struct CountingStore {
    inner: InMemoryDinnerStore,
    saves: usize,
}

impl DinnerStore for CountingStore {
    fn load_all(&self) -> StoreResult<Vec<DinnerRecord>> {
        self.inner.load_all()
    }

    fn save_all(&mut self, records: &[DinnerRecord]) -> StoreResult<()> {
        self.saves += 1;
        self.inner.save_all(records)
    }
}

#[test]
fn add_dinner_appends_in_creation_order() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("Tacos", "2024-06-10", "beef, salsa").unwrap();
    service.add_dinner("Soup", "2024-06-11", "carrot").unwrap();

    let store = service.into_store();
    let stored = store.load_all().unwrap();
    assert_eq!(names(&stored), vec!["Tacos", "Soup"]);
    assert_eq!(stored[0].ingredients, vec!["beef", "salsa"]);
}

#[test]
fn edits_are_keyed_by_id_and_keep_positions() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    let first = service.add_dinner("Tacos", "2024-06-10", "beef").unwrap();
    let second = service.add_dinner("Soup", "2024-06-11", "carrot").unwrap();
    let third = service.add_dinner("Curry", "2024-06-12", "rice").unwrap();

    let renamed = service.rename(second.id, "Minestrone").unwrap();
    assert_eq!(renamed.id, second.id);
    assert_eq!(renamed.name, "Minestrone");

    service.reschedule(first.id, "2024-06-01").unwrap();
    let replaced = service
        .replace_ingredients(third.id, "rice, lentils ,  ")
        .unwrap();
    assert_eq!(replaced.ingredients, vec!["rice", "lentils", ""]);

    let stored = service.into_store().load_all().unwrap();
    let ids = stored.iter().map(|record| record.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(stored[0].date, "2024-06-01");
    assert_eq!(stored[1].name, "Minestrone");
}

#[test]
fn edit_changes_every_given_field_in_one_save() {
    let mut service = DinnerService::new(CountingStore::default());
    let first = service.add_dinner("Tacos", "2024-06-10", "beef").unwrap();
    let second = service.add_dinner("Soup", "2024-06-11", "carrot").unwrap();

    let edited = service
        .edit(
            second.id,
            Some("Minestrone".to_string()),
            Some("2024-06-09".to_string()),
            Some("carrot, pasta , beans"),
        )
        .unwrap();
    assert_eq!(edited.id, second.id);
    assert_eq!(edited.name, "Minestrone");
    assert_eq!(edited.date, "2024-06-09");
    assert_eq!(edited.ingredients, vec!["carrot", "pasta", "beans"]);

    let partial = service
        .edit(first.id, None, Some("2024-06-01".to_string()), None)
        .unwrap();
    assert_eq!(partial.name, "Tacos");
    assert_eq!(partial.ingredients, vec!["beef"]);

    let store = service.into_store();
    assert_eq!(store.saves, 4);
    let stored = store.load_all().unwrap();
    assert_eq!(stored, vec![partial, edited]);
}

#[test]
fn edit_of_unknown_id_writes_nothing() {
    let mut service = DinnerService::new(CountingStore::default());
    service.add_dinner("Tacos", "2024-06-10", "beef").unwrap();

    let err = service
        .edit(Uuid::new_v4(), Some("Soup".to_string()), None, None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::DinnerNotFound(_)));
    assert_eq!(service.into_store().saves, 1);
}

#[test]
fn edits_on_unknown_ids_fail_without_writing() {
    let existing = DinnerRecord::new("Tacos", "2024-06-10", vec!["beef".to_string()]);
    let mut service =
        DinnerService::new(InMemoryDinnerStore::with_records(vec![existing.clone()]));
    let missing = Uuid::new_v4();

    let err = service.reschedule(missing, "2024-01-01").unwrap_err();
    assert!(matches!(err, ServiceError::DinnerNotFound(id) if id == missing));
    assert_eq!(service.into_store().load_all().unwrap(), vec![existing]);
}

#[test]
fn get_finds_record_by_id() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    let created = service.add_dinner("Tacos", "2024-06-10", "beef").unwrap();

    assert_eq!(service.get(created.id).unwrap(), Some(created));
    assert_eq!(service.get(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn recent_filters_then_sorts_most_recent_first() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("old", "2024-05-01", "").unwrap();
    service.add_dinner("tuesday", "2024-06-11", "").unwrap();
    service.add_dinner("friday", "2024-06-14", "").unwrap();
    service.add_dinner("broken", "??", "").unwrap();

    let now = at("2024-06-15 20:00:00");
    let week = service.recent("week", now).unwrap();
    assert_eq!(names(&week), vec!["friday", "tuesday"]);

    let month = service.recent("month", now).unwrap();
    assert_eq!(names(&month), vec!["friday", "tuesday"]);

    assert!(service.recent("fortnight", now).unwrap().is_empty());
}

#[test]
fn with_ingredient_trims_query_but_stays_case_sensitive() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("Omelette", "2024-06-10", "egg, milk").unwrap();
    service.add_dinner("Pancakes", "2024-06-11", "Egg, flour").unwrap();

    let found = service.with_ingredient("  egg ").unwrap();
    assert_eq!(names(&found), vec!["Omelette"]);
}

#[test]
fn list_views_use_both_orders() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("curry", "2024-06-12", "").unwrap();
    service.add_dinner("Burrito", "2024-06-14", "").unwrap();
    service.add_dinner("apple crumble", "2024-06-10", "").unwrap();

    assert_eq!(
        names(&service.all_by_name().unwrap()),
        vec!["apple crumble", "Burrito", "curry"]
    );
    assert_eq!(
        names(&service.all_by_recency().unwrap()),
        vec!["Burrito", "curry", "apple crumble"]
    );
}

#[test]
fn ingredient_suggestions_are_distinct_and_sorted() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("a", "2024-06-10", "milk, egg").unwrap();
    service.add_dinner("b", "2024-06-11", "egg, butter").unwrap();

    assert_eq!(
        service.ingredient_suggestions().unwrap(),
        vec!["butter", "egg", "milk"]
    );
}

#[test]
fn service_runs_over_sqlite_store() {
    let mut conn = open_db_in_memory().unwrap();
    let created_id = {
        let store = SqliteDinnerStore::try_new(&mut conn).unwrap();
        let mut service = DinnerService::new(store);
        let created = service.add_dinner("Chili", "2024-02-01", "beans").unwrap();
        service.rename(created.id, "Chili con carne").unwrap();
        created.id
    };

    let store = SqliteDinnerStore::try_new(&mut conn).unwrap();
    let service = DinnerService::new(store);
    let loaded = service.get(created_id).unwrap().expect("dinner persisted");
    assert_eq!(loaded.name, "Chili con carne");
    assert_eq!(loaded.ingredients, vec!["beans"]);
}

#[test]
fn legacy_import_appends_and_export_round_trips_shape() {
    let mut service = DinnerService::new(InMemoryDinnerStore::new());
    service.add_dinner("existing", "2024-01-01", "salt").unwrap();

    let imported = service
        .import_legacy(
            r#"[
                {"name":"Lasagna","date":"2024-01-02","ingredients":["pasta","cheese"]},
                {"name":"Salad","date":"2024-01-03","ingredients":[]}
            ]"#,
        )
        .unwrap();
    assert_eq!(imported, 2);

    let exported: serde_json::Value =
        serde_json::from_str(&service.export_legacy().unwrap()).unwrap();
    assert_eq!(exported.as_array().map(Vec::len), Some(3));
    assert_eq!(exported[1]["name"], "Lasagna");
    assert_eq!(exported[1]["ingredients"], serde_json::json!(["pasta", "cheese"]));
    assert!(exported[0].get("id").is_none());
}
