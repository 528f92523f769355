//! Onboard CLI Application
//!
//! Line-driven front-end for the account setup wizard.

mod args;
mod commands;
mod renderer;
mod session;

use std::time::Duration;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use onboard_core::WizardBuilder;
use renderer::TerminalRenderer;
use session::Session;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        script,
        submit_delay_ms,
        json,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_submit_delay(submit_delay_ms.map(Duration::from_millis))
        .build()
        .context("Failed to initialize wizard")?;

    let session = Session::new(wizard, TerminalRenderer::new(!no_color)).with_json(json);

    info!("Onboard started");

    match script {
        Some(path) => {
            info!("Reading commands from {}", path.display());
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file)).await?;
        }
        None => {
            session.run(BufReader::new(tokio::io::stdin())).await?;
        }
    }

    Ok(())
}
