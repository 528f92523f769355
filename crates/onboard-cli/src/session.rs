//! Drives one wizard session from line commands.

use anyhow::{Context, Result};
use log::{debug, info};
use onboard_core::{
    models::Choice, CompletionView, OperationStatus, Provisioner, StepScreen, SubmittingNotice,
    Wizard,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    commands::{Command, HELP},
    renderer::TerminalRenderer,
};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive wizard bound to a renderer.
pub struct Session<P> {
    wizard: Wizard<P>,
    renderer: TerminalRenderer,
    print_json: bool,
}

impl<P: Provisioner> Session<P> {
    pub fn new(wizard: Wizard<P>, renderer: TerminalRenderer) -> Self {
        Self {
            wizard,
            renderer,
            print_json: false,
        }
    }

    /// Print the submitted form as JSON after the completion view.
    pub fn with_json(mut self, print_json: bool) -> Self {
        self.print_json = print_json;
        self
    }

    /// Reads commands until setup completes, the user quits or input ends.
    ///
    /// Returns whether setup completed.
    pub async fn run<R>(mut self, input: R) -> Result<bool>
    where
        R: AsyncBufRead + Unpin,
    {
        self.show_screen()?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read command")? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.renderer.render_status(&OperationStatus::failure(e.to_string()))?;
                    continue;
                }
            };

            debug!("Command: {command:?}");
            if self.handle(command).await? == Flow::Stop {
                break;
            }
        }

        if !self.wizard.is_complete() {
            info!("Session ended on step {}", self.wizard.current_step().number());
            self.renderer.render("Setup not completed.\n")?;
        }
        Ok(self.wizard.is_complete())
    }

    async fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Set(update) => {
                let key = update.key();
                self.wizard.update_field(update);
                self.success(format!("Updated {key}"))?;
            }
            Command::Check(feature) => {
                if self.wizard.toggle_use_case(feature, true) {
                    self.success(format!("Selected {}", feature.label()))?;
                } else {
                    self.failure(format!("{} is already selected", feature.label()))?;
                }
            }
            Command::Uncheck(feature) => {
                if self.wizard.toggle_use_case(feature, false) {
                    self.success(format!("Deselected {}", feature.label()))?;
                } else {
                    self.failure(format!("{} is not selected", feature.label()))?;
                }
            }
            Command::Notify { channel, enabled } => {
                self.wizard.update_notification(channel, enabled);
                let state = if enabled { "on" } else { "off" };
                self.success(format!("{} turned {state}", channel.label()))?;
            }
            Command::Next => {
                if self.wizard.advance() {
                    self.show_screen()?;
                } else {
                    self.failure("Already on the last step; use 'submit' to finish")?;
                }
            }
            Command::Back => {
                if self.wizard.retreat() {
                    self.show_screen()?;
                } else {
                    self.failure("Already on the first step")?;
                }
            }
            Command::Submit => return self.submit().await,
            Command::Show => self.show_screen()?,
            Command::Summary => self.renderer.render(&self.wizard.summary().to_string())?,
            Command::Help => self.renderer.render(HELP)?,
            Command::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    async fn submit(&mut self) -> Result<Flow> {
        if !self.wizard.submit() {
            let reason = if !self.wizard.current_step().is_last() {
                "Setup can only be completed from the last step"
            } else {
                "Consent to data processing is required: set dataProcessing yes"
            };
            self.failure(reason)?;
            return Ok(Flow::Continue);
        }

        self.renderer.render(&SubmittingNotice.to_string())?;
        if let Err(e) = self.wizard.settle().await {
            self.failure(e.to_string())?;
            self.show_screen()?;
            return Ok(Flow::Continue);
        }

        let view = CompletionView {
            completed_at: self.wizard.completed_at(),
        };
        self.renderer.render(&view.to_string())?;

        if self.print_json {
            let json = self
                .wizard
                .form()
                .to_json()
                .context("Failed to serialize form")?;
            println!("{json}");
        }
        Ok(Flow::Stop)
    }

    fn show_screen(&self) -> Result<()> {
        let step = self.wizard.current_step();
        self.renderer
            .render(&StepScreen::new(self.wizard.form(), step).to_string())?;

        let hint = if step.is_first() {
            "Type `next` to continue or `help` for all commands."
        } else if step.is_last() {
            "Type `back` to revise or `submit` to complete setup."
        } else {
            "Type `back` or `next` to move between steps."
        };
        self.renderer.render(&format!("\n{hint}\n"))
    }

    fn success(&self, message: impl Into<String>) -> Result<()> {
        self.renderer.render_status(&OperationStatus::success(message))
    }

    fn failure(&self, message: impl Into<String>) -> Result<()> {
        self.renderer.render_status(&OperationStatus::failure(message))
    }
}
