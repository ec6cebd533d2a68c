pub mod api;
pub mod bracket;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;
use clap_complete::Shell;
use log::info;
use std::path::Path;

use crate::api::models::{BracketResponse, DivisionBracket};
use crate::bracket::BuildMode;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::DivisionCollection;
use crate::services::bracket::BracketService;
use crate::services::report::{render_bracket, render_summaries};
use crate::services::server::ServerService;
use crate::store::{is_valid_key, read_snapshot_file, SnapshotStore};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_build(
    input: &Path,
    division: Option<&str>,
    mode: BuildMode,
    allow_date_order_fallback: Option<bool>,
    json: bool,
) -> Result<()> {
    let snapshot = read_snapshot_file(input)?;
    info!("Loaded {} divisions from {}", snapshot.divisions.len(), input.display());

    let collection = DivisionCollection::from(snapshot);
    let service = BracketService::new(AppConfig::from_env());

    let selected = match division {
        Some(name) => vec![collection.get(name).with_context(|| {
            format!(
                "Unknown division: {} (available: {})",
                name,
                collection.names().join(", ")
            )
        })?],
        None => collection.iter().collect(),
    };

    let mut outputs = Vec::with_capacity(selected.len());
    for division in selected {
        let bracket = service.build(division, mode, allow_date_order_fallback);
        if json {
            outputs.push(serde_json::to_value(DivisionBracket {
                division: &division.name,
                bracket: BracketResponse::from(bracket),
            })?);
        } else {
            print!("{}", render_bracket(&division.name, &bracket));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    }
    Ok(())
}

pub fn handle_divisions(input: &Path) -> Result<()> {
    let snapshot = read_snapshot_file(input)?;
    let collection = DivisionCollection::from(snapshot);
    let service = BracketService::new(AppConfig::from_env());

    print!("{}", render_summaries(&service.summarize(&collection)));
    Ok(())
}

pub fn handle_import(input: &Path, key: &str) -> Result<()> {
    if !is_valid_key(key) {
        anyhow::bail!("Invalid snapshot key {:?}: use letters, digits, '-' and '_'", key);
    }

    let snapshot = read_snapshot_file(input)?;
    let config = AppConfig::from_env();
    let store = SnapshotStore::new(&config.store.snapshot_dir)?;

    if store.exists(key) {
        info!("Replacing existing snapshot {}", key);
    }
    store.save(key, &snapshot)?;
    info!("  → Imported {} divisions as {}", snapshot.divisions.len(), key);
    Ok(())
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
