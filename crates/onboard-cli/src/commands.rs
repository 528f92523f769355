//! Line commands accepted by the wizard session.
//!
//! Each input line is parsed into a [`Command`] before anything touches the
//! wizard, so a malformed line never changes state:
//!
//! ```text
//! input line → Command (this module) → Wizard operation → rendered screen
//! ```
//!
//! Field values are parsed by [`FieldKey::parse_update`], the same conversion
//! any other front-end would use.

use anyhow::{anyhow, bail, Result};
use onboard_core::models::{parse_flag, Feature, FieldKey, FieldUpdate, NotificationChannel};

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a top-level field
    Set(FieldUpdate),
    /// Add a feature of interest
    Check(Feature),
    /// Remove a feature of interest
    Uncheck(Feature),
    /// Toggle one notification channel
    Notify {
        channel: NotificationChannel,
        enabled: bool,
    },
    Next,
    Back,
    Submit,
    /// Re-render the current screen
    Show,
    /// Render the review summary
    Summary,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the problem for unknown commands, unknown
    /// fields and values that do not fit their field.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let command = match verb.to_lowercase().as_str() {
            "set" => {
                let (key, value) = split_word(rest);
                if key.is_empty() {
                    bail!("Usage: set <field> [value]");
                }
                let key: FieldKey = key.parse()?;
                Command::Set(key.parse_update(value)?)
            }
            "check" => Command::Check(parse_feature(rest)?),
            "uncheck" => Command::Uncheck(parse_feature(rest)?),
            "notify" => {
                let (channel, value) = split_word(rest);
                let channel: NotificationChannel = channel.parse().map_err(|e: String| anyhow!(e))?;
                let enabled = parse_flag(value)
                    .ok_or_else(|| anyhow!("Usage: notify <email|sms|push> <on|off>"))?;
                Command::Notify { channel, enabled }
            }
            "next" | "n" => Command::Next,
            "back" | "b" | "prev" | "previous" => Command::Back,
            "submit" => Command::Submit,
            "show" => Command::Show,
            "summary" => Command::Summary,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("Unknown command '{other}'. Type 'help' for the list of commands"),
        };

        Ok(Some(command))
    }
}

/// Splits off the first whitespace-separated word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_feature(input: &str) -> Result<Feature> {
    if input.is_empty() {
        bail!("Usage: check|uncheck <feature>");
    }
    input.parse().map_err(|e: String| anyhow!(e))
}

/// Markdown help listing every command.
pub const HELP: &str = "\
# Commands

- `set <field> [value]`: change a field, e.g. `set firstName Jane` (no value clears it)
- `check <feature>` / `uncheck <feature>`: select features of interest
- `notify <email|sms|push> <on|off>`: notification preferences
- `next` / `back`: move between steps
- `submit`: create the account (last step, requires `set dataProcessing yes`)
- `show`: show the current step again
- `summary`: review what you entered
- `quit`: leave without completing setup
";
