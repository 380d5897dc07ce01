//! Static, read-only CRM resources (schema and lookup lists).

use serde::Serialize;
use serde_json::{json, Value};

/// Resource descriptor with its reader.
#[derive(Clone, Copy)]
pub struct ResourceSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub kind: &'static str,
    pub read: fn() -> Value,
}

impl std::fmt::Debug for ResourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceSpec")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

pub static RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        name: "PersonSchema",
        description: "Describes the structure of a Person entity in the CRM system.",
        category: "crm-schema",
        kind: "schema",
        read: person_schema,
    },
    ResourceSpec {
        name: "Departments",
        description: "List of departments available in the CRM system.",
        category: "crm-lookup",
        kind: "enumeration",
        read: || json!(DEPARTMENTS),
    },
    ResourceSpec {
        name: "Roles",
        description: "List of possible roles/job titles used in the CRM system.",
        category: "crm-lookup",
        kind: "enumeration",
        read: || json!(ROLES),
    },
    ResourceSpec {
        name: "Skills",
        description: "List of skill categories commonly used in the CRM system.",
        category: "crm-lookup",
        kind: "enumeration",
        read: || json!(SKILL_CATALOG),
    },
    ResourceSpec {
        name: "DatabaseInfo",
        description: "Describes metadata about the CRM database itself.",
        category: "crm-metadata",
        kind: "system",
        read: database_info,
    },
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Sales",
    "Marketing",
    "Finance",
    "HR",
    "Management",
    "Support",
];

pub const ROLES: &[&str] = &[
    "Developer",
    "Manager",
    "Analyst",
    "Sales Representative",
    "HR Specialist",
    "Designer",
    "Team Lead",
];

pub const SKILL_CATALOG: &[&str] = &[
    "C#",
    "JavaScript",
    "SQL",
    "Project Management",
    "Communication",
    "Leadership",
    "Data Analysis",
    "Customer Service",
    "UI/UX Design",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldDescription {
    name: &'static str,
    description: &'static str,
    optional: bool,
}

/// Field-level description of `Person`.
pub fn person_schema() -> Value {
    let fields = [
        ("id", "Unique UUID identifier for the person.", false),
        ("name", "First name of the person.", false),
        ("surname", "Last name of the person.", false),
        ("age", "Age in years.", false),
        ("sex", "Sex of the person (M/F).", true),
        ("role", "Job title or position.", true),
        ("department", "Department where the person works.", true),
        ("cvSummary", "Short summary of their CV or background.", true),
        ("skills", "Ordered list of skills or competencies.", false),
    ]
    .map(|(name, description, optional)| FieldDescription {
        name,
        description,
        optional,
    });

    json!({
        "name": "Person",
        "description": "Represents a person (employee or contact) in the CRM database.",
        "fields": fields,
    })
}

pub fn database_info() -> Value {
    json!({
        "name": "MyCRM",
        "version": env!("CARGO_PKG_VERSION"),
        "dataSource": "SQLite local DB",
        "schemaVersion": crate::db::migrations::latest_version(),
        "description": "Demo CRM database used for testing and analytics purposes.",
    })
}

/// Finds a resource by name.
pub fn find_resource(name: &str) -> Option<&'static ResourceSpec> {
    RESOURCES.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::{find_resource, person_schema, RESOURCES};

    #[test]
    fn schema_lists_every_person_field() {
        let schema = person_schema();
        let names: Vec<&str> = schema["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|field| field["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "id",
                "name",
                "surname",
                "age",
                "sex",
                "role",
                "department",
                "cvSummary",
                "skills"
            ]
        );
    }

    #[test]
    fn every_resource_is_readable_by_name() {
        for spec in RESOURCES {
            let found = find_resource(spec.name).unwrap();
            assert!(!(found.read)().is_null());
        }
        assert!(find_resource("Missing").is_none());
    }
}
