//! CRM store command-line host.
//!
//! # Responsibility
//! - Build the configured person store explicitly.
//! - Invoke registered tools by name and print JSON results.

use clap::{Args, Parser, Subcommand};
use crm_core::{Backend, StoreConfig, DEFAULT_DB_PATH};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "crm")]
#[command(about = "Person record store - lookup, search, mutation and statistics", long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct StoreArgs {
    /// SQLite database file
    #[arg(long, global = true, env = "CRM_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Delete the database file when the command finishes
    #[arg(long, global = true, conflicts_with = "memory")]
    ephemeral: bool,

    /// Use a seeded in-memory store instead of SQLite
    #[arg(long, global = true)]
    memory: bool,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "CRM_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CRM_LOG_LEVEL")]
    log_level: Option<String>,
}

impl StoreArgs {
    fn into_config(self) -> StoreConfig {
        let backend = if self.memory {
            Backend::Memory { seeded: true }
        } else {
            Backend::Sqlite {
                path: self.db,
                ephemeral: self.ephemeral,
            }
        };
        StoreConfig {
            backend,
            log_level: self.log_level,
            log_dir: self.log_dir,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered tools and their metadata
    Tools(commands::ToolsArgs),
    /// Invoke a tool by name or alias
    Call(commands::CallArgs),
    /// Print static CRM resources
    Resources(commands::ResourcesArgs),
    /// Print the core version
    Version,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.store.into_config();

    let result = match cli.command {
        Commands::Tools(args) => commands::list_tools(args),
        Commands::Call(args) => commands::call_tool(&config, args),
        Commands::Resources(args) => commands::print_resources(args),
        Commands::Version => {
            println!("crm_core version={}", crm_core::core_version());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
