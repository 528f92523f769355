//! Account provisioning collaborators.
//!
//! The wizard hands the final form snapshot to a [`Provisioner`] when the user
//! submits, and waits for its single completion. Provisioning has no failure
//! branch: once started it always finishes.

use std::{future::Future, time::Duration};

use log::info;

use crate::models::FormState;

/// Default simulated account-creation delay.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Longest simulated delay a wizard accepts.
pub const MAX_SUBMIT_DELAY: Duration = Duration::from_secs(60);

/// Performs account creation for a submitted form.
pub trait Provisioner: Send + Sync + 'static {
    /// Creates the account described by `form`. Resolves exactly once.
    fn provision(&self, form: FormState) -> impl Future<Output = ()> + Send;
}

/// Stands in for a real backend by sleeping for a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedProvisioner {
    delay: Duration,
}

impl SimulatedProvisioner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedProvisioner {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Provisioner for SimulatedProvisioner {
    async fn provision(&self, form: FormState) {
        tokio::time::sleep(self.delay).await;
        info!(
            "Created account for {} <{}> at '{}'",
            form.full_name().trim(),
            form.email,
            form.company_name
        );
    }
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantProvisioner;

impl Provisioner for InstantProvisioner {
    async fn provision(&self, _form: FormState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedProvisioner::default().delay(), DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_provisioner_waits_for_delay() {
        let provisioner = SimulatedProvisioner::new(Duration::from_secs(5));
        let started = tokio::time::Instant::now();
        provisioner.provision(FormState::default()).await;
        assert!(started.elapsed() >= Duration::from_secs(5));
    }
}
