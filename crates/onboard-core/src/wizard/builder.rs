//! Builder for creating and configuring Wizard instances.

use std::time::Duration;

use log::debug;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    provision::{Provisioner, SimulatedProvisioner, DEFAULT_SUBMIT_DELAY, MAX_SUBMIT_DELAY},
};

/// Builder for creating and configuring Wizard instances.
#[derive(Debug, Clone)]
pub struct WizardBuilder {
    submit_delay: Option<Duration>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { submit_delay: None }
    }

    /// Sets the simulated account-creation delay.
    ///
    /// If not specified, uses [`DEFAULT_SUBMIT_DELAY`].
    pub fn with_submit_delay(mut self, delay: Option<Duration>) -> Self {
        if let Some(delay) = delay {
            self.submit_delay = Some(delay);
        }
        self
    }

    /// Builds a wizard backed by a [`SimulatedProvisioner`].
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Configuration` if the delay exceeds
    /// [`MAX_SUBMIT_DELAY`]
    pub fn build(self) -> Result<Wizard<SimulatedProvisioner>> {
        let delay = self.submit_delay.unwrap_or(DEFAULT_SUBMIT_DELAY);
        if delay > MAX_SUBMIT_DELAY {
            return Err(WizardError::Configuration {
                message: format!(
                    "submit delay of {}ms exceeds the {}s limit",
                    delay.as_millis(),
                    MAX_SUBMIT_DELAY.as_secs()
                ),
            });
        }

        debug!("Building wizard with a {}ms submit delay", delay.as_millis());
        Ok(Wizard::new(SimulatedProvisioner::new(delay)))
    }

    /// Builds a wizard that submits through the given provisioner.
    ///
    /// The submit delay only applies to the simulated provisioner and is
    /// ignored here.
    pub fn build_with<P: Provisioner>(self, provisioner: P) -> Wizard<P> {
        Wizard::new(provisioner)
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
