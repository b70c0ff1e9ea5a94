//! `pyxis-sync` publishes a container image repository description to the
//! Pyxis catalog API.
//!
//! The tool resolves a description file from a configured base path
//! (`<base>.html` preferred, `<base>.md` rendered to HTML otherwise),
//! truncates it to the API's field limit, and submits it as a single HTTP
//! PATCH carrying the API key. It is meant to run inside a CI job: expected
//! misconfiguration (missing variables, missing description) exits with a
//! clear message, and any transport or response failure fails the job.

pub mod cli;
pub mod config;
pub mod description;
pub mod error;
pub mod payload;
pub mod pyxis;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::SyncError;
use crate::payload::UpdatePayload;
use crate::pyxis::PyxisClient;
use clap::Parser;
use std::io::{self, Write};

/// Entry point shared by the binary.
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let html = description::resolve(&config.description_file)?.into_html()?;
    if html.is_empty() {
        return Err(SyncError::EmptyDescription.into());
    }

    let payload = UpdatePayload::new(&html);

    if cli.dry_run {
        io::stdout().write_all(payload.container.repository_description.as_bytes())?;
        return Ok(());
    }

    let client = PyxisClient::new(config.api_url, config.api_token)?;
    let outcome = client.update_description(&config.project_id, &payload)?;
    log::info!("last_update_date: {}", outcome.last_update_date);

    Ok(())
}
