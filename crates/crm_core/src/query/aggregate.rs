//! Statistics over person snapshots.

use crate::model::person::Person;
use std::collections::{BTreeMap, HashMap};

/// Case-insensitive skill histogram.
///
/// Keys use the spelling first observed in iteration order. Every list entry
/// counts, so a skill listed twice by one person contributes two.
pub fn skill_histogram<'a>(people: impl IntoIterator<Item = &'a Person>) -> BTreeMap<String, usize> {
    let mut first_spelling: HashMap<String, String> = HashMap::new();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for person in people {
        for skill in &person.skills {
            let key = first_spelling
                .entry(skill.to_lowercase())
                .or_insert_with(|| skill.clone());
            *counts.entry(key.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Arithmetic mean of ages, `0.0` for an empty input.
pub fn average_age<'a>(people: impl IntoIterator<Item = &'a Person>) -> f64 {
    let (sum, count) = people
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), person| {
            (sum + u64::from(person.age), count + 1)
        });

    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// Oldest person; the earliest record wins ties.
pub fn oldest(people: &[Person]) -> Option<&Person> {
    first_max_by_key(people, |person| person.age as usize)
}

/// Person with the longest skill list; the earliest record wins ties.
pub fn most_skilled(people: &[Person]) -> Option<&Person> {
    first_max_by_key(people, |person| person.skills.len())
}

// `Iterator::max_by_key` keeps the last maximum; storage order needs the first.
fn first_max_by_key(people: &[Person], key: impl Fn(&Person) -> usize) -> Option<&Person> {
    let mut best: Option<(&Person, usize)> = None;
    for person in people {
        let value = key(person);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((person, value)),
        }
    }
    best.map(|(person, _)| person)
}

#[cfg(test)]
mod tests {
    use super::{average_age, most_skilled, oldest, skill_histogram};
    use crate::model::person::{Person, PersonFields};
    use uuid::Uuid;

    fn person(name: &str, age: u32, skills: &[&str]) -> Person {
        Person::from_fields(
            Uuid::new_v4(),
            PersonFields::new(name, "Test", age, skills.iter().copied()),
        )
    }

    #[test]
    fn histogram_keeps_first_spelling_and_counts_duplicates() {
        let people = vec![
            person("a", 1, &["Rust", "rust"]),
            person("b", 2, &["RUST", "Go"]),
        ];

        let stats = skill_histogram(&people);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Rust"], 3);
        assert_eq!(stats["Go"], 1);
        assert!(!stats.contains_key("RUST"));
    }

    #[test]
    fn histogram_folds_non_ascii_case() {
        let people = vec![person("a", 1, &["Écriture"]), person("b", 2, &["écriture"])];

        let stats = skill_histogram(&people);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats["Écriture"], 2);
    }

    #[test]
    fn average_of_empty_input_is_zero() {
        assert_eq!(average_age(std::iter::empty()), 0.0);
    }

    #[test]
    fn average_age_is_arithmetic_mean() {
        let people = vec![person("a", 30, &[]), person("b", 25, &[]), person("c", 28, &[])];
        assert!((average_age(&people) - 83.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_to_first_record() {
        let people = vec![
            person("first", 40, &["x", "y"]),
            person("second", 40, &["x", "y"]),
            person("third", 10, &["x"]),
        ];

        assert_eq!(oldest(&people).unwrap().name, "first");
        assert_eq!(most_skilled(&people).unwrap().name, "first");
    }

    #[test]
    fn most_skilled_is_strict_maximum() {
        let people = vec![person("a", 1, &["x"]), person("b", 1, &["x", "y", "z"])];
        assert_eq!(most_skilled(&people).unwrap().name, "b");
        assert!(oldest(&[]).is_none());
    }
}
