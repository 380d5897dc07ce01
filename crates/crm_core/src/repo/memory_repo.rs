//! In-memory person store.
//!
//! # Responsibility
//! - Offer the `PersonStore` contract without any durable storage.
//! - Serve tests and ephemeral sessions that must not touch disk.
//!
//! # Invariants
//! - Records live in an owned, mutex-guarded `Vec` kept in insertion order.
//! - Every read clones; callers never alias stored records.

use crate::model::person::{Person, PersonFields, PersonId};
use crate::query::{aggregate, matching};
use crate::repo::seed::seed_people;
use crate::repo::{PersonStore, StoreError, StoreResult};
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Mutex-guarded in-memory person store.
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    people: Mutex<Vec<Person>>,
}

impl InMemoryPersonStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the seed set.
    pub fn seeded() -> Self {
        let people = seed_people()
            .into_iter()
            .map(|fields| Person::from_fields(Uuid::new_v4(), fields))
            .collect();
        Self {
            people: Mutex::new(people),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Person>>> {
        self.people.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn first_where(&self, predicate: impl Fn(&Person) -> bool) -> StoreResult<Option<Person>> {
        Ok(self.lock()?.iter().find(|person| predicate(person)).cloned())
    }

    fn all_where(&self, predicate: impl Fn(&Person) -> bool) -> StoreResult<Vec<Person>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|person| predicate(person))
            .cloned()
            .collect())
    }
}

impl PersonStore for InMemoryPersonStore {
    fn get_by_id(&self, id: PersonId) -> StoreResult<Option<Person>> {
        self.first_where(|person| person.id == id)
    }

    fn get_by_name(&self, prefix: &str) -> StoreResult<Option<Person>> {
        self.first_where(|person| matching::starts_with_ignore_case(&person.name, prefix))
    }

    fn get_by_surname(&self, prefix: &str) -> StoreResult<Option<Person>> {
        self.first_where(|person| matching::starts_with_ignore_case(&person.surname, prefix))
    }

    fn get_by_skill(&self, skill: &str) -> StoreResult<Vec<Person>> {
        self.all_where(|person| matching::has_skill(person, skill))
    }

    fn get_by_department(&self, department: &str) -> StoreResult<Vec<Person>> {
        self.all_where(|person| {
            matching::optional_field_equals(person.department.as_deref(), department)
        })
    }

    fn get_by_role(&self, role: &str) -> StoreResult<Vec<Person>> {
        self.all_where(|person| matching::optional_field_equals(person.role.as_deref(), role))
    }

    fn get_all(&self) -> StoreResult<Vec<Person>> {
        Ok(self.lock()?.clone())
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Person>> {
        if matching::is_blank_query(query) {
            return Ok(Vec::new());
        }
        self.all_where(|person| matching::matches_query(person, query))
    }

    fn add(&self, fields: PersonFields) -> StoreResult<Person> {
        let person = Person::from_fields(Uuid::new_v4(), fields);
        self.lock()?.push(person.clone());
        debug!("event=person_add module=repo status=ok backend=memory");
        Ok(person)
    }

    fn update(&self, id: PersonId, fields: PersonFields) -> StoreResult<Option<Person>> {
        let mut people = self.lock()?;
        let Some(person) = people.iter_mut().find(|person| person.id == id) else {
            debug!("event=person_update module=repo status=not_found backend=memory");
            return Ok(None);
        };

        person.apply(fields);
        debug!("event=person_update module=repo status=ok backend=memory");
        Ok(Some(person.clone()))
    }

    fn delete(&self, id: PersonId) -> StoreResult<bool> {
        let mut people = self.lock()?;
        let before = people.len();
        people.retain(|person| person.id != id);
        let removed = people.len() != before;
        debug!("event=person_delete module=repo status=ok backend=memory removed={removed}");
        Ok(removed)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    fn skill_statistics(&self) -> StoreResult<BTreeMap<String, usize>> {
        Ok(aggregate::skill_histogram(self.lock()?.iter()))
    }

    fn average_age(&self) -> StoreResult<f64> {
        Ok(aggregate::average_age(self.lock()?.iter()))
    }

    fn oldest_person(&self) -> StoreResult<Option<Person>> {
        Ok(aggregate::oldest(&self.lock()?).cloned())
    }

    fn most_skilled_person(&self) -> StoreResult<Option<Person>> {
        Ok(aggregate::most_skilled(&self.lock()?).cloned())
    }
}
