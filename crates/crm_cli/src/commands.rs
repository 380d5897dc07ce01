//! Subcommand implementations.

use clap::Args;
use crm_core::tools::resources::{find_resource, RESOURCES};
use crm_core::{StoreConfig, ToolRegistry};
use log::info;
use serde_json::{json, Value};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Only list tools in this category (e.g. `crm`, `analytics`)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name or alias, e.g. `GetPersonByName` or `find-person`
    pub tool: String,

    /// JSON object with tool arguments
    #[arg(default_value = "{}")]
    pub args: String,
}

#[derive(Debug, Args)]
pub struct ResourcesArgs {
    /// Print a single resource instead of all of them
    pub name: Option<String>,
}

pub fn list_tools(args: ToolsArgs) -> CommandResult {
    let registry = ToolRegistry::with_builtin_tools()?;
    let tools = match args.category.as_deref() {
        Some(category) => registry.list_by_category(category),
        None => registry.list(),
    };
    print_json(&serde_json::to_value(tools)?)
}

pub fn call_tool(config: &StoreConfig, args: CallArgs) -> CommandResult {
    config.init_logging()?;

    let tool_args: Value = serde_json::from_str(&args.args)
        .map_err(|err| format!("tool arguments must be a JSON object: {err}"))?;
    let registry = ToolRegistry::with_builtin_tools()?;
    let store = config.open_store()?;

    let result = registry.invoke(store.as_ref(), &args.tool, &tool_args)?;
    info!("event=cli_call module=cli status=ok");
    print_json(&result)
}

pub fn print_resources(args: ResourcesArgs) -> CommandResult {
    let value = match args.name {
        Some(name) => {
            let spec = find_resource(&name).ok_or_else(|| format!("unknown resource: {name}"))?;
            (spec.read)()
        }
        None => {
            let all: serde_json::Map<String, Value> = RESOURCES
                .iter()
                .map(|spec| {
                    (
                        spec.name.to_string(),
                        json!({
                            "description": spec.description,
                            "category": spec.category,
                            "type": spec.kind,
                            "value": (spec.read)(),
                        }),
                    )
                })
                .collect();
            Value::Object(all)
        }
    };
    print_json(&value)
}

fn print_json(value: &Value) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
