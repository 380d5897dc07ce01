use crm_core::db::open_db;
use crm_core::{PersonFields, PersonStore, Sex, SqlitePersonStore, StoreError};
use rusqlite::Connection;

#[test]
fn fresh_file_is_seeded_with_example_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqlitePersonStore::open(dir.path().join("crm.db")).unwrap();

    let people = store.get_all().unwrap();
    let names: Vec<&str> = people.iter().map(|person| person.name.as_str()).collect();
    assert_eq!(names, vec!["John", "Jane", "Alice"]);
    assert_eq!(people[0].sex, Some(Sex::M));
    assert_eq!(people[0].skills, vec!["C#", "SQL", "Azure"]);
    assert_eq!(people[2].department.as_deref(), Some("Data Analytics"));
}

#[test]
fn records_survive_reopen_without_reseeding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.db");

    let added_id = {
        let store = SqlitePersonStore::open(&path).unwrap();
        store
            .add(PersonFields::new("Linus", "Torvalds", 54, ["C", "Git"]))
            .unwrap()
            .id
    };

    let store = SqlitePersonStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 4);
    let reloaded = store.get_by_id(added_id).unwrap().unwrap();
    assert_eq!(reloaded.skills, vec!["C", "Git"]);
}

#[test]
fn emptied_store_is_not_seeded_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.db");

    {
        let store = SqlitePersonStore::open(&path).unwrap();
        for person in store.get_all().unwrap() {
            assert!(store.delete(person.id).unwrap());
        }
    }

    let store = SqlitePersonStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn existing_rows_suppress_seeding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO people (id, name, surname, age, skills)
         VALUES ('00000000-0000-4000-8000-000000000001', 'Pre', 'Existing', 40, '[]');",
        [],
    )
    .unwrap();
    drop(conn);

    let store = SqlitePersonStore::open(&path).unwrap();
    let people = store.get_all().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Pre");
    assert!(people[0].skills.is_empty());
}

#[test]
fn each_in_memory_store_is_independent() {
    let first = SqlitePersonStore::open_in_memory().unwrap();
    let second = SqlitePersonStore::open_in_memory().unwrap();

    first
        .add(PersonFields::new("Only", "First", 1, ["x"]))
        .unwrap();

    assert_eq!(first.count().unwrap(), 4);
    assert_eq!(second.count().unwrap(), 3);
    assert!(first.path().is_none());
}

#[test]
fn deleted_ids_are_never_reassigned_and_order_follows_insertion() {
    let store = SqlitePersonStore::open_in_memory().unwrap();
    let doomed = store
        .add(PersonFields::new("Temp", "Person", 1, ["x"]))
        .unwrap();
    assert!(store.delete(doomed.id).unwrap());

    let next = store
        .add(PersonFields::new("Next", "Person", 2, ["y"]))
        .unwrap();
    assert_ne!(next.id, doomed.id);

    let all = store.get_all().unwrap();
    assert_eq!(all.last().unwrap().id, next.id);
}

#[test]
fn ephemeral_store_deletes_backing_file_on_drop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ephemeral.db");

    let store = SqlitePersonStore::open_ephemeral(&path).unwrap();
    assert_eq!(store.path(), Some(path.as_path()));
    assert!(path.exists());
    drop(store);

    assert!(!path.exists());
}

#[test]
fn ephemeral_store_close_deletes_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ephemeral.db");

    let store = SqlitePersonStore::open_ephemeral(&path).unwrap();
    store.close().unwrap();

    assert!(!path.exists());
}

#[test]
fn ephemeral_disposal_swallows_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ephemeral.db");

    let store = SqlitePersonStore::open_ephemeral(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    drop(store);
    assert!(!path.exists());
}

#[test]
fn durable_store_keeps_file_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.db");

    SqlitePersonStore::open(&path).unwrap().close().unwrap();

    assert!(path.exists());
}

#[test]
fn corrupt_skills_column_surfaces_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.db");
    let store = SqlitePersonStore::open(&path).unwrap();

    let conn = Connection::open(&path).unwrap();
    conn.execute("UPDATE people SET skills = 'not json' WHERE name = 'Jane';", [])
        .unwrap();
    drop(conn);

    let err = store.get_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)), "unexpected: {err}");
    assert!(store.get_by_name("John").unwrap().is_some());
}

#[test]
fn unreadable_storage_location_is_a_distinct_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("crm.db");

    let err = SqlitePersonStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Db(_)), "unexpected: {err}");
}

#[test]
fn store_can_be_shared_across_threads() {
    let store = std::sync::Arc::new(SqlitePersonStore::open_in_memory().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .add(PersonFields::new(format!("Worker{index}"), "Thread", 20, ["x"]))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.count().unwrap(), 7);
}
