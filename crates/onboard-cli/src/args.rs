use std::path::PathBuf;

use clap::Parser;

/// Interactive account setup wizard
///
/// Walks through four steps (personal information, company details, goals and
/// preferences) driven by one command per line, read from stdin or from a
/// script file. Type `help` at any point for the list of commands.
#[derive(Parser)]
#[command(version, about, name = "onboard")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Read commands from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Simulated account creation delay in milliseconds. Defaults to 2000
    #[arg(long, value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    /// Print the submitted form as JSON once setup completes
    #[arg(long)]
    pub json: bool,
}
