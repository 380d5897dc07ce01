//! Person domain model.
//!
//! # Responsibility
//! - Define the record shape shared by in-memory and SQLite stores.
//! - Provide caller-side field validation for dispatch layers.
//!
//! # Invariants
//! - `id` is assigned by the store on creation and never changes.
//! - `skills` is never absent; an empty list means "no skills".
//! - `skills` keeps insertion order and duplicate entries.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a person on creation.
pub type PersonId = Uuid;

/// Sex attribute of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    /// Storage/wire representation (`"M"` or `"F"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }

    /// Parses the storage representation, accepting either letter case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "M" | "m" => Some(Self::M),
            "F" | "f" => Some(Self::F),
            _ => None,
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical stored person record.
///
/// Values handed out by stores are owned snapshots; mutating one never
/// touches store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname: String,
    pub age: u32,
    pub sex: Option<Sex>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub cv_summary: Option<String>,
    pub skills: Vec<String>,
}

impl Person {
    /// Builds a record from an id and the full mutable field set.
    pub fn from_fields(id: PersonId, fields: PersonFields) -> Self {
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
            age: fields.age,
            sex: fields.sex,
            role: fields.role,
            department: fields.department,
            cv_summary: fields.cv_summary,
            skills: fields.skills,
        }
    }

    /// Replaces every mutable field as one unit. `id` is left untouched.
    pub fn apply(&mut self, fields: PersonFields) {
        let id = self.id;
        *self = Self::from_fields(id, fields);
    }

    /// Returns the mutable field set of this record.
    pub fn fields(&self) -> PersonFields {
        PersonFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            sex: self.sex,
            role: self.role.clone(),
            department: self.department.clone(),
            cv_summary: self.cv_summary.clone(),
            skills: self.skills.clone(),
        }
    }
}

/// Every mutable attribute of a person.
///
/// Used as input to `add` and `update`; partial updates are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    pub name: String,
    pub surname: String,
    pub age: u32,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub cv_summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl PersonFields {
    /// Minimal field set: name, surname, age and skills.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: u32,
        skills: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
            skills: skills.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_cv_summary(mut self, cv_summary: impl Into<String>) -> Self {
        self.cv_summary = Some(cv_summary.into());
        self
    }

    /// Checks display-string invariants.
    ///
    /// Stores do not call this; it exists for dispatch layers that accept
    /// untyped input.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        if self.surname.trim().is_empty() {
            return Err(PersonValidationError::EmptySurname);
        }
        Ok(())
    }
}

/// Caller-side validation failures for person input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    EmptyName,
    EmptySurname,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptySurname => write!(f, "surname must not be empty"),
        }
    }
}

impl Error for PersonValidationError {}

#[cfg(test)]
mod tests {
    use super::{Person, PersonFields, PersonValidationError, Sex};
    use uuid::Uuid;

    #[test]
    fn apply_replaces_fields_and_keeps_id() {
        let id = Uuid::new_v4();
        let mut person = Person::from_fields(id, PersonFields::new("Ann", "Lee", 40, ["Go"]));

        person.apply(PersonFields::new("Bea", "Kim", 41, ["Rust", "SQL"]).with_sex(Sex::F));

        assert_eq!(person.id, id);
        assert_eq!(person.name, "Bea");
        assert_eq!(person.skills, vec!["Rust", "SQL"]);
        assert_eq!(person.sex, Some(Sex::F));
    }

    #[test]
    fn validate_rejects_blank_display_strings() {
        assert_eq!(
            PersonFields::new(" ", "Lee", 1, Vec::<String>::new()).validate(),
            Err(PersonValidationError::EmptyName)
        );
        assert_eq!(
            PersonFields::new("Ann", "", 1, Vec::<String>::new()).validate(),
            Err(PersonValidationError::EmptySurname)
        );
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let person = Person::from_fields(
            Uuid::nil(),
            PersonFields::new("Ann", "Lee", 40, ["Go"]).with_cv_summary("cv"),
        );
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["cvSummary"], "cv");
        assert_eq!(value["skills"][0], "Go");
    }

    #[test]
    fn sex_parse_accepts_both_cases() {
        assert_eq!(Sex::parse("m"), Some(Sex::M));
        assert_eq!(Sex::parse("F"), Some(Sex::F));
        assert_eq!(Sex::parse("x"), None);
    }
}
