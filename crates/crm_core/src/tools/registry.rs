//! Tool registration table and name/alias lookup.

use crate::repo::PersonStore;
use crate::tools::{handlers, ToolError};
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Adapter from JSON arguments to one store operation.
pub type ToolHandler = fn(&dyn PersonStore, &Value) -> Result<Value, ToolError>;

/// Descriptive routing metadata; has no effect on store behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub operation: &'static str,
    pub result_type: &'static str,
    pub context: &'static str,
    pub aliases: &'static [&'static str],
}

/// One registered tool.
#[derive(Clone, Copy)]
pub struct ToolSpec {
    pub metadata: ToolMetadata,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

#[allow(clippy::too_many_arguments)]
const fn tool(
    name: &'static str,
    description: &'static str,
    category: &'static str,
    operation: &'static str,
    result_type: &'static str,
    context: &'static str,
    aliases: &'static [&'static str],
    handler: ToolHandler,
) -> ToolSpec {
    ToolSpec {
        metadata: ToolMetadata {
            name,
            description,
            category,
            operation,
            result_type,
            context,
            aliases,
        },
        handler,
    }
}

/// Every store operation exposed to dispatchers.
pub static BUILTIN_TOOLS: &[ToolSpec] = &[
    tool(
        "GetPersonById",
        "Get personal information by ID.",
        "crm",
        "read",
        "Person",
        "person-lookup",
        &["find-by-id", "lookup-by-id"],
        handlers::get_person_by_id,
    ),
    tool(
        "GetPersonByName",
        "Find a person by their first name. Returns detailed CRM record.",
        "crm",
        "read",
        "Person",
        "employee-search",
        &["find-person", "lookup-person"],
        handlers::get_person_by_name,
    ),
    tool(
        "GetPersonBySurname",
        "Find a person by their surname. Returns detailed CRM record.",
        "crm",
        "read",
        "Person",
        "employee-search",
        &["find-by-surname", "lookup-surname"],
        handlers::get_person_by_surname,
    ),
    tool(
        "GetPersonsBySkill",
        "Get personal information for all persons with given skill.",
        "crm",
        "read",
        "List<Person>",
        "skill-search",
        &["find-by-skill", "search-by-skill"],
        handlers::get_persons_by_skill,
    ),
    tool(
        "GetPersonsByDepartment",
        "Get all persons working in the given department.",
        "crm",
        "read",
        "List<Person>",
        "department-search",
        &["find-by-department", "list-department"],
        handlers::get_persons_by_department,
    ),
    tool(
        "GetPersonsByRole",
        "Get all persons holding the given role or job title.",
        "crm",
        "read",
        "List<Person>",
        "role-search",
        &["find-by-role", "list-role"],
        handlers::get_persons_by_role,
    ),
    tool(
        "GetAllPersons",
        "Get all persons from the CRM system.",
        "crm",
        "read",
        "List<Person>",
        "list-all",
        &["list-persons", "get-all-contacts"],
        handlers::get_all_persons,
    ),
    tool(
        "GetSkillStatistics",
        "Get skill statistics showing how many people have each skill.",
        "analytics",
        "aggregate",
        "Dictionary",
        "skill-analytics",
        &["skill-stats", "skill-distribution"],
        handlers::get_skill_statistics,
    ),
    tool(
        "GetAverageAge",
        "Get the average age of all persons in the CRM system.",
        "analytics",
        "aggregate",
        "double",
        "age-analytics",
        &["avg-age", "mean-age"],
        handlers::get_average_age,
    ),
    tool(
        "GetOldestPerson",
        "Get the oldest person in the CRM system.",
        "crm",
        "read",
        "Person",
        "age-ranking",
        &["find-oldest", "get-senior"],
        handlers::get_oldest_person,
    ),
    tool(
        "GetMostSkilledPerson",
        "Get the person with the most skills in the CRM system.",
        "crm",
        "read",
        "Person",
        "skill-ranking",
        &["find-most-skilled", "get-expert"],
        handlers::get_most_skilled_person,
    ),
    tool(
        "SearchPersons",
        "Search for persons by full-text query in name, surname, role, department, CV summary and skills.",
        "crm",
        "search",
        "List<Person>",
        "full-text-search",
        &["find-persons", "search-contacts", "query-persons"],
        handlers::search_persons,
    ),
    tool(
        "AddPerson",
        "Add a new person to the CRM system.",
        "crm",
        "create",
        "Person",
        "person-management",
        &["create-person", "insert-person", "new-contact"],
        handlers::add_person,
    ),
    tool(
        "UpdatePerson",
        "Update an existing person's information in the CRM system.",
        "crm",
        "update",
        "Person",
        "person-management",
        &["modify-person", "edit-person", "update-contact"],
        handlers::update_person,
    ),
    tool(
        "DeletePerson",
        "Delete a person from the CRM system by ID.",
        "crm",
        "delete",
        "bool",
        "person-management",
        &["remove-person", "delete-contact", "remove-contact"],
        handlers::delete_person,
    ),
];

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "tool name or alias already registered: {name}"),
        }
    }
}

impl Error for RegistryError {}

/// In-process tool table with alias index.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    entries: BTreeMap<&'static str, ToolSpec>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every entry of [`BUILTIN_TOOLS`].
    pub fn with_builtin_tools() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for spec in BUILTIN_TOOLS {
            registry.register(*spec)?;
        }
        Ok(registry)
    }

    /// Registers one tool; its name and aliases must not collide with any
    /// existing name or alias.
    pub fn register(&mut self, spec: ToolSpec) -> Result<(), RegistryError> {
        let metadata = spec.metadata;
        for key in std::iter::once(metadata.name).chain(metadata.aliases.iter().copied()) {
            if self.entries.contains_key(key) || self.aliases.contains_key(key) {
                return Err(RegistryError::DuplicateName(key.to_string()));
            }
        }

        for alias in metadata.aliases.iter().copied() {
            self.aliases.insert(alias, metadata.name);
        }
        self.entries.insert(metadata.name, spec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a tool by canonical name or alias.
    pub fn get(&self, name_or_alias: &str) -> Option<&ToolSpec> {
        let name = self
            .aliases
            .get(name_or_alias)
            .copied()
            .unwrap_or(name_or_alias);
        self.entries.get(name)
    }

    /// Metadata of every tool, ordered by name.
    pub fn list(&self) -> Vec<ToolMetadata> {
        self.entries.values().map(|spec| spec.metadata).collect()
    }

    pub fn list_by_category(&self, category: &str) -> Vec<ToolMetadata> {
        self.entries
            .values()
            .filter(|spec| spec.metadata.category == category)
            .map(|spec| spec.metadata)
            .collect()
    }

    /// Invokes a tool against `store` with JSON arguments.
    pub fn invoke(
        &self,
        store: &dyn PersonStore,
        name_or_alias: &str,
        args: &Value,
    ) -> Result<Value, ToolError> {
        let Some(spec) = self.get(name_or_alias) else {
            warn!("event=tool_invoke module=tools status=unknown_tool");
            return Err(ToolError::UnknownTool(name_or_alias.to_string()));
        };

        let result = (spec.handler)(store, args);
        debug!(
            "event=tool_invoke module=tools status={} tool={}",
            if result.is_ok() { "ok" } else { "error" },
            spec.metadata.name
        );
        result
    }
}
