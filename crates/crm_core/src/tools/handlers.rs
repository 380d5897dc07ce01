//! JSON adapters between dispatch arguments and `PersonStore` calls.

use crate::model::person::{PersonFields, PersonId};
use crate::repo::PersonStore;
use crate::tools::ToolError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: PersonId,
}

#[derive(Debug, Deserialize)]
struct NameArgs {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SurnameArgs {
    surname: String,
}

#[derive(Debug, Deserialize)]
struct SkillArgs {
    skill: String,
}

#[derive(Debug, Deserialize)]
struct DepartmentArgs {
    department: String,
}

#[derive(Debug, Deserialize)]
struct RoleArgs {
    role: String,
}

#[derive(Debug, Deserialize)]
struct QueryArgs {
    query: String,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs {
    id: PersonId,
    #[serde(flatten)]
    fields: PersonFields,
}

pub fn get_person_by_id(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: IdArgs = parse_args("GetPersonById", args)?;
    encode(store.get_by_id(args.id)?)
}

pub fn get_person_by_name(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: NameArgs = parse_args("GetPersonByName", args)?;
    encode(store.get_by_name(&args.name)?)
}

pub fn get_person_by_surname(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: SurnameArgs = parse_args("GetPersonBySurname", args)?;
    encode(store.get_by_surname(&args.surname)?)
}

pub fn get_persons_by_skill(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: SkillArgs = parse_args("GetPersonsBySkill", args)?;
    encode(store.get_by_skill(&args.skill)?)
}

pub fn get_persons_by_department(
    store: &dyn PersonStore,
    args: &Value,
) -> Result<Value, ToolError> {
    let args: DepartmentArgs = parse_args("GetPersonsByDepartment", args)?;
    encode(store.get_by_department(&args.department)?)
}

pub fn get_persons_by_role(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: RoleArgs = parse_args("GetPersonsByRole", args)?;
    encode(store.get_by_role(&args.role)?)
}

pub fn get_all_persons(store: &dyn PersonStore, _args: &Value) -> Result<Value, ToolError> {
    encode(store.get_all()?)
}

pub fn search_persons(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: QueryArgs = parse_args("SearchPersons", args)?;
    encode(store.search(&args.query)?)
}

pub fn add_person(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let fields: PersonFields = parse_args("AddPerson", args)?;
    fields.validate()?;
    encode(store.add(fields)?)
}

pub fn update_person(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: UpdateArgs = parse_args("UpdatePerson", args)?;
    args.fields.validate()?;
    encode(store.update(args.id, args.fields)?)
}

pub fn delete_person(store: &dyn PersonStore, args: &Value) -> Result<Value, ToolError> {
    let args: IdArgs = parse_args("DeletePerson", args)?;
    encode(store.delete(args.id)?)
}

pub fn get_skill_statistics(store: &dyn PersonStore, _args: &Value) -> Result<Value, ToolError> {
    encode(store.skill_statistics()?)
}

pub fn get_average_age(store: &dyn PersonStore, _args: &Value) -> Result<Value, ToolError> {
    encode(store.average_age()?)
}

pub fn get_oldest_person(store: &dyn PersonStore, _args: &Value) -> Result<Value, ToolError> {
    encode(store.oldest_person()?)
}

pub fn get_most_skilled_person(store: &dyn PersonStore, _args: &Value) -> Result<Value, ToolError> {
    encode(store.most_skilled_person()?)
}

fn parse_args<T: DeserializeOwned>(tool: &'static str, args: &Value) -> Result<T, ToolError> {
    T::deserialize(args).map_err(|err| ToolError::InvalidArguments {
        tool,
        message: err.to_string(),
    })
}

fn encode(value: impl Serialize) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(ToolError::Encode)
}
