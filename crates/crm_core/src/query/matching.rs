//! Match predicates for lookups and search.

use crate::model::person::Person;

/// Returns whether a search query should short-circuit to no results.
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive prefix test using Unicode lowercase folding.
pub fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Case-insensitive substring test using Unicode lowercase folding.
pub fn contains_ignore_case(candidate: &str, needle: &str) -> bool {
    candidate.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns whether any skill equals `skill` ignoring case.
pub fn has_skill(person: &Person, skill: &str) -> bool {
    let wanted = skill.to_lowercase();
    person
        .skills
        .iter()
        .any(|candidate| candidate.to_lowercase() == wanted)
}

/// Case-insensitive exact match on an optional scalar attribute.
pub fn optional_field_equals(field: Option<&str>, expected: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase() == expected.to_lowercase())
}

/// Substring search over name, surname, role, department, cv summary and
/// each skill.
///
/// Callers handle the blank-query short-circuit before calling this.
pub fn matches_query(person: &Person, query: &str) -> bool {
    let scalar_fields = [
        Some(person.name.as_str()),
        Some(person.surname.as_str()),
        person.role.as_deref(),
        person.department.as_deref(),
        person.cv_summary.as_deref(),
    ];

    scalar_fields
        .into_iter()
        .flatten()
        .chain(person.skills.iter().map(String::as_str))
        .any(|value| contains_ignore_case(value, query))
}

#[cfg(test)]
mod tests {
    use super::{
        contains_ignore_case, has_skill, is_blank_query, matches_query, optional_field_equals,
        starts_with_ignore_case,
    };
    use crate::model::person::{Person, PersonFields};
    use uuid::Uuid;

    #[test]
    fn prefix_match_ignores_case() {
        assert!(starts_with_ignore_case("Johnson", "joh"));
        assert!(starts_with_ignore_case("Johnson", ""));
        assert!(!starts_with_ignore_case("Jo", "john"));
        assert!(!starts_with_ignore_case("Doe", "oe"));
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("Machine Learning", "LEARN"));
        assert!(!contains_ignore_case("SQL", "sqlite"));
    }

    #[test]
    fn matching_folds_non_ascii_letters() {
        assert!(!starts_with_ignore_case("Émile", "E"));
        assert!(starts_with_ignore_case("Émile", "é"));
        assert!(contains_ignore_case("Straße Köln", "KÖLN"));
        assert!(optional_field_equals(Some("Développement"), "DÉVELOPPEMENT"));
        assert!(!optional_field_equals(None, "Développement"));

        let person = Person::from_fields(
            Uuid::new_v4(),
            PersonFields::new("Émile", "Zola", 62, ["Écriture"]),
        );
        assert!(has_skill(&person, "écriture"));
        assert!(!has_skill(&person, "ecriture"));
    }

    #[test]
    fn blank_query_detection() {
        assert!(is_blank_query(""));
        assert!(is_blank_query(" \t "));
        assert!(!is_blank_query(" a "));
    }

    #[test]
    fn search_covers_optional_fields_and_skills() {
        let person = Person::from_fields(
            Uuid::new_v4(),
            PersonFields::new("Ann", "Lee", 30, ["Node.js"])
                .with_role("Team Lead")
                .with_cv_summary("Loves distributed systems"),
        );

        assert!(matches_query(&person, "lead"));
        assert!(matches_query(&person, "DISTRIBUTED"));
        assert!(matches_query(&person, "node"));
        assert!(!matches_query(&person, "finance"));
    }
}
