use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use spa_router::config::loader::load_config;
use spa_router::observability::logging::init_logging;
use spa_router::{ComponentRegistry, RouteTable, StaticView};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspect and resolve SPA route tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a route table file
    Validate { file: PathBuf },
    /// List the entries of a route table
    List { file: PathBuf },
    /// Resolve a location against a route table
    Resolve { file: PathBuf, location: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("routes_cli=info,spa_router=info");
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => {
            let config = load_config(&file)?;
            print_json(&json!({
                "valid": true,
                "routes": config.routes.len(),
            }))?;
        }
        Commands::List { file } => {
            let table = load_table(&file)?;
            let entries: Vec<Value> = table
                .entries()
                .map(|entry| {
                    json!({
                        "path": entry.path(),
                        "name": entry.name(),
                        "component": entry.component().label(),
                    })
                })
                .collect();
            print_json(&Value::Array(entries))?;
        }
        Commands::Resolve { file, location } => {
            let table = load_table(&file)?;
            match table.resolve(&location) {
                Some(entry) => print_json(&json!({
                    "matched": true,
                    "path": entry.path(),
                    "name": entry.name(),
                    "component": entry.component().label(),
                }))?,
                None => print_json(&json!({
                    "matched": false,
                    "location": location,
                }))?,
            }
        }
    }

    Ok(())
}

/// Compile a table from a file, standing in placeholder views for every
/// component key the table references.
fn load_table(file: &Path) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let config = load_config(file)?;

    let mut registry = ComponentRegistry::new();
    for route in &config.routes {
        if !registry.contains(&route.component) {
            registry.register(route.component.clone(), StaticView::new(route.component.clone()));
        }
    }

    Ok(RouteTable::from_config(&config, &registry)?)
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
