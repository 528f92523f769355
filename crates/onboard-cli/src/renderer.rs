//! Terminal rendering for wizard screens
//!
//! Screens arrive as markdown from `onboard_core::display`. With color enabled
//! they are styled through termimad; otherwise the markdown is printed as is.

use std::io::{self, Write};

use anyhow::{Context, Result};
use onboard_core::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                // Headers keep their hashes so step titles stand out
                if line.starts_with('#') {
                    println!("\x1b[1;34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush().context("Failed to flush stdout")
    }

    /// Render an operation status line, separated from the previous output
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        self.render(&status.to_string())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
