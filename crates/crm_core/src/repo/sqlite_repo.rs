//! SQLite-backed person store.
//!
//! # Responsibility
//! - Provide the `PersonStore` contract over the `people` table.
//! - Seed a fresh storage location exactly once.
//! - Release (and for ephemeral locations, delete) storage on disposal.
//!
//! # Invariants
//! - `skills` is persisted as a JSON array of strings in one text column.
//! - Storage order is `seq`, an autoincrement key never reused after delete.
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::{open_db, open_db_in_memory};
use crate::model::person::{Person, PersonFields, PersonId, Sex};
use crate::query::matching;
use crate::repo::seed::seed_people;
use crate::repo::{PersonStore, StoreError, StoreResult};
use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    name,
    surname,
    age,
    sex,
    role,
    department,
    cv_summary,
    skills
FROM people";

const SEEDED_META_KEY: &str = "seeded";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Memory,
    File { path: PathBuf, delete_on_drop: bool },
}

/// Person store owning one SQLite connection behind a coarse lock.
///
/// `rusqlite::Connection` is not `Sync`, so every operation serializes on
/// the lock.
#[derive(Debug)]
pub struct SqlitePersonStore {
    conn: Mutex<Option<Connection>>,
    location: Location,
}

impl SqlitePersonStore {
    /// Opens (creating if needed) a durable store at `path`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_db(&path)?;
        Self::bootstrap(
            conn,
            Location::File {
                path,
                delete_on_drop: false,
            },
        )
    }

    /// Opens a store whose backing file is deleted when the store is
    /// disposed. Deletion is best-effort; failures are logged and ignored.
    pub fn open_ephemeral(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_db(&path)?;
        Self::bootstrap(
            conn,
            Location::File {
                path,
                delete_on_drop: true,
            },
        )
    }

    /// Opens a store backed by a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Self::bootstrap(conn, Location::Memory)
    }

    /// Backing file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::Memory => None,
            Location::File { path, .. } => Some(path.as_path()),
        }
    }

    /// Releases the storage handle and surfaces close failures.
    ///
    /// Dropping the store performs the same disposal but cannot report
    /// errors.
    pub fn close(mut self) -> StoreResult<()> {
        self.release()
    }

    fn bootstrap(mut conn: Connection, location: Location) -> StoreResult<Self> {
        seed_if_fresh(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(Some(conn)),
            location,
        })
    }

    fn with_conn<T>(&self, op: impl FnOnce(&Connection) -> StoreResult<T>) -> StoreResult<T> {
        let guard = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        op(conn)
    }

    fn query_one(&self, clause: &str, params: &[&dyn ToSql]) -> StoreResult<Option<Person>> {
        self.with_conn(|conn| query_people(conn, clause, params))
            .map(|people| people.into_iter().next())
    }

    fn query_all(&self, clause: &str, params: &[&dyn ToSql]) -> StoreResult<Vec<Person>> {
        self.with_conn(|conn| query_people(conn, clause, params))
    }

    fn release(&mut self) -> StoreResult<()> {
        let slot = match self.conn.get_mut() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };

        let result = match slot.take() {
            Some(conn) => conn.close().map_err(|(_, err)| StoreError::from(err)),
            None => return Ok(()),
        };

        if let Location::File {
            path,
            delete_on_drop: true,
        } = &self.location
        {
            remove_backing_file(path);
        }

        info!(
            "event=store_close module=repo status={}",
            if result.is_ok() { "ok" } else { "error" }
        );
        result
    }
}

impl Drop for SqlitePersonStore {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!("event=store_close module=repo status=error error={err}");
        }
    }
}

impl PersonStore for SqlitePersonStore {
    fn get_by_id(&self, id: PersonId) -> StoreResult<Option<Person>> {
        self.query_one("WHERE id = ?1", &[&id.to_string()])
    }

    fn get_by_name(&self, prefix: &str) -> StoreResult<Option<Person>> {
        self.query_one(
            "WHERE name LIKE ?1 ESCAPE '\\' ORDER BY seq ASC LIMIT 1",
            &[&like_prefix_pattern(prefix)],
        )
    }

    fn get_by_surname(&self, prefix: &str) -> StoreResult<Option<Person>> {
        self.query_one(
            "WHERE surname LIKE ?1 ESCAPE '\\' ORDER BY seq ASC LIMIT 1",
            &[&like_prefix_pattern(prefix)],
        )
    }

    fn get_by_skill(&self, skill: &str) -> StoreResult<Vec<Person>> {
        let mut people = self.get_all()?;
        people.retain(|person| matching::has_skill(person, skill));
        Ok(people)
    }

    fn get_by_department(&self, department: &str) -> StoreResult<Vec<Person>> {
        self.query_all(
            "WHERE department = ?1 COLLATE NOCASE ORDER BY seq ASC",
            &[&department],
        )
    }

    fn get_by_role(&self, role: &str) -> StoreResult<Vec<Person>> {
        self.query_all("WHERE role = ?1 COLLATE NOCASE ORDER BY seq ASC", &[&role])
    }

    fn get_all(&self) -> StoreResult<Vec<Person>> {
        self.query_all("ORDER BY seq ASC", &[])
    }

    // Skills live in a JSON column, so substring matching happens here rather
    // than with `LIKE`, which would also match across element boundaries.
    fn search(&self, query: &str) -> StoreResult<Vec<Person>> {
        if matching::is_blank_query(query) {
            return Ok(Vec::new());
        }
        let mut people = self.get_all()?;
        people.retain(|person| matching::matches_query(person, query));
        Ok(people)
    }

    fn add(&self, fields: PersonFields) -> StoreResult<Person> {
        let person = Person::from_fields(Uuid::new_v4(), fields);
        self.with_conn(|conn| insert_person(conn, &person))?;
        debug!("event=person_add module=repo status=ok backend=sqlite");
        Ok(person)
    }

    fn update(&self, id: PersonId, fields: PersonFields) -> StoreResult<Option<Person>> {
        let updated = self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE people
                 SET
                    name = ?1,
                    surname = ?2,
                    age = ?3,
                    sex = ?4,
                    role = ?5,
                    department = ?6,
                    cv_summary = ?7,
                    skills = ?8
                 WHERE id = ?9;",
                params![
                    fields.name.as_str(),
                    fields.surname.as_str(),
                    fields.age,
                    fields.sex.map(Sex::as_str),
                    fields.role.as_deref(),
                    fields.department.as_deref(),
                    fields.cv_summary.as_deref(),
                    skills_to_db(&fields.skills)?,
                    id.to_string(),
                ],
            )?;

            if changed == 0 {
                return Ok(None);
            }
            let people = query_people(conn, "WHERE id = ?1", &[&id.to_string()])?;
            Ok(people.into_iter().next())
        })?;

        debug!(
            "event=person_update module=repo status={} backend=sqlite",
            if updated.is_some() { "ok" } else { "not_found" }
        );
        Ok(updated)
    }

    fn delete(&self, id: PersonId) -> StoreResult<bool> {
        let changed = self.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM people WHERE id = ?1;", [id.to_string()])?)
        })?;
        debug!(
            "event=person_delete module=repo status=ok backend=sqlite removed={}",
            changed > 0
        );
        Ok(changed > 0)
    }

    fn count(&self) -> StoreResult<usize> {
        self.with_conn(count_people)
    }

    fn average_age(&self) -> StoreResult<f64> {
        self.with_conn(|conn| {
            let average: Option<f64> =
                conn.query_row("SELECT AVG(age) FROM people;", [], |row| row.get(0))?;
            Ok(average.unwrap_or(0.0))
        })
    }

    fn oldest_person(&self) -> StoreResult<Option<Person>> {
        self.query_one("ORDER BY age DESC, seq ASC LIMIT 1", &[])
    }

    fn most_skilled_person(&self) -> StoreResult<Option<Person>> {
        self.query_one(
            "ORDER BY json_array_length(skills) DESC, seq ASC LIMIT 1",
            &[],
        )
    }
}

fn seed_if_fresh(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;

    let already_seeded = tx
        .query_row(
            "SELECT value FROM store_meta WHERE key = ?1;",
            [SEEDED_META_KEY],
            |row| row.get::<_, String>(0),
        )
        .optional()?
        .is_some();
    if already_seeded {
        return Ok(());
    }

    let inserted = if count_people(&tx)? == 0 {
        let seed = seed_people();
        for fields in &seed {
            insert_person(&tx, &Person::from_fields(Uuid::new_v4(), fields.clone()))?;
        }
        seed.len()
    } else {
        0
    };

    tx.execute(
        "INSERT INTO store_meta (key, value) VALUES (?1, '1');",
        [SEEDED_META_KEY],
    )?;
    tx.commit()?;

    info!("event=store_seed module=repo status=ok inserted={inserted}");
    Ok(())
}

fn insert_person(conn: &Connection, person: &Person) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO people (
            id,
            name,
            surname,
            age,
            sex,
            role,
            department,
            cv_summary,
            skills
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
        params![
            person.id.to_string(),
            person.name.as_str(),
            person.surname.as_str(),
            person.age,
            person.sex.map(Sex::as_str),
            person.role.as_deref(),
            person.department.as_deref(),
            person.cv_summary.as_deref(),
            skills_to_db(&person.skills)?,
        ],
    )?;
    Ok(())
}

fn count_people(conn: &Connection) -> StoreResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM people;", [], |row| row.get(0))?;
    usize::try_from(count)
        .map_err(|_| StoreError::InvalidData(format!("invalid row count `{count}`")))
}

fn query_people(
    conn: &Connection,
    clause: &str,
    params: &[&dyn ToSql],
) -> StoreResult<Vec<Person>> {
    let mut stmt = conn.prepare(&format!("{PERSON_SELECT_SQL} {clause};"))?;
    let mut rows = stmt.query(params)?;
    let mut people = Vec::new();

    while let Some(row) = rows.next()? {
        people.push(parse_person_row(row)?);
    }

    Ok(people)
}

fn parse_person_row(row: &Row<'_>) -> StoreResult<Person> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in people.id"))
    })?;

    let age_value: i64 = row.get("age")?;
    let age = u32::try_from(age_value).map_err(|_| {
        StoreError::InvalidData(format!("invalid age value `{age_value}` in people.age"))
    })?;

    let sex = match row.get::<_, Option<String>>("sex")? {
        Some(value) => Some(Sex::parse(&value).ok_or_else(|| {
            StoreError::InvalidData(format!("invalid sex value `{value}` in people.sex"))
        })?),
        None => None,
    };

    let skills_text: String = row.get("skills")?;
    let skills = serde_json::from_str::<Vec<String>>(&skills_text).map_err(|err| {
        StoreError::InvalidData(format!("invalid skills json in people.skills: {err}"))
    })?;

    Ok(Person {
        id,
        name: row.get("name")?,
        surname: row.get("surname")?,
        age,
        sex,
        role: row.get("role")?,
        department: row.get("department")?,
        cv_summary: row.get("cv_summary")?,
        skills,
    })
}

fn skills_to_db(skills: &[String]) -> StoreResult<String> {
    serde_json::to_string(skills)
        .map_err(|err| StoreError::InvalidData(format!("cannot encode skills: {err}")))
}

/// Builds a `LIKE` pattern matching values that start with `prefix` literally.
fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn remove_backing_file(path: &Path) {
    if !path.exists() {
        return;
    }
    match std::fs::remove_file(path) {
        Ok(()) => info!("event=store_file_delete module=repo status=ok"),
        Err(err) => warn!("event=store_file_delete module=repo status=error error={err}"),
    }
}
