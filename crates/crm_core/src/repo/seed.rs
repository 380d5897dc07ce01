//! Fixed example records applied to fresh stores.

use crate::model::person::{PersonFields, Sex};

/// Returns the seed set in insertion order.
pub fn seed_people() -> Vec<PersonFields> {
    vec![
        PersonFields::new("John", "Doe", 30, ["C#", "SQL", "Azure"])
            .with_sex(Sex::M)
            .with_role("Senior Developer")
            .with_department("Engineering")
            .with_cv_summary(
                "Experienced software engineer with 10+ years in backend development, \
                 specializing in C# and cloud technologies.",
            ),
        PersonFields::new("Jane", "Smith", 25, ["JavaScript", "React", "Node.js"])
            .with_sex(Sex::F)
            .with_role("Frontend Developer")
            .with_department("Engineering")
            .with_cv_summary(
                "Creative frontend developer focused on modern web technologies and user \
                 experience design.",
            ),
        PersonFields::new("Alice", "Johnson", 28, ["Python", "Django", "Machine Learning"])
            .with_sex(Sex::F)
            .with_role("Data Scientist")
            .with_department("Data Analytics")
            .with_cv_summary(
                "Data scientist with expertise in machine learning and Python-based data \
                 analysis tools.",
            ),
    ]
}
