//! Submission for the Wizard.

use std::sync::Arc;

use jiff::Timestamp;
use log::{debug, info, warn};
use tokio::{runtime::Handle, sync::watch};

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    models::SubmitStatus,
    provision::Provisioner,
};

impl<P: Provisioner> Wizard<P> {
    /// Whether [`submit`](Self::submit) would start provisioning: the last
    /// step is showing, consent is given and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.status == SubmitStatus::Idle && self.step.is_last() && self.form.data_processing
    }

    /// Starts account creation with a snapshot of the current form.
    ///
    /// On success the wizard reports `Submitting` until the provisioner
    /// finishes, then `Complete`. Returns false, changing nothing, when
    /// [`can_submit`](Self::can_submit) does not hold or when no Tokio runtime
    /// is available to run the provisioner. A second call while submitting
    /// never provisions twice.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            debug!(
                "Ignoring submit on step {} (consent: {}, status: {:?})",
                self.step.number(),
                self.form.data_processing,
                self.status
            );
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("Ignoring submit outside a Tokio runtime");
            return false;
        };

        let provisioner = Arc::clone(&self.provisioner);
        let form = self.form.clone();
        let (done_tx, done_rx) = watch::channel(None);

        runtime.spawn(async move {
            provisioner.provision(form).await;
            // The wizard may have been dropped; nobody is left to notify.
            let _ = done_tx.send(Some(Timestamp::now()));
        });

        self.status = SubmitStatus::Submitting;
        self.pending = Some(done_rx);
        info!("Submitting onboarding form");
        true
    }

    /// Waits for provisioning to finish and records the completion.
    ///
    /// Returns `Ok(false)` when nothing is in flight. Dropping the returned
    /// future early leaves the submission pending, so it can be settled later.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Provisioning` if the provisioning task ended
    /// without completing (it panicked). The wizard then returns to the last
    /// step so the user can submit again.
    pub async fn settle(&mut self) -> Result<bool> {
        let Some(done_rx) = self.pending.as_mut() else {
            return Ok(false);
        };

        let outcome = done_rx.wait_for(Option::is_some).await.map(|done| *done);
        self.pending = None;
        match outcome {
            Ok(Some(at)) => {
                self.finish(at);
                Ok(true)
            }
            Ok(None) | Err(_) => Err(self.abandon()),
        }
    }

    /// Records the completion if provisioning has already finished.
    ///
    /// Never waits. Returns whether the session became complete.
    ///
    /// # Errors
    ///
    /// Same as [`settle`](Self::settle).
    pub fn try_settle(&mut self) -> Result<bool> {
        let Some(done_rx) = self.pending.as_ref() else {
            return Ok(false);
        };

        let published = *done_rx.borrow();
        let closed = done_rx.has_changed().is_err();

        if let Some(at) = published {
            self.pending = None;
            self.finish(at);
            return Ok(true);
        }

        if closed {
            self.pending = None;
            return Err(self.abandon());
        }
        Ok(false)
    }

    /// Completion time published by the provisioning task, if it has finished.
    pub(super) fn provisioned_at(&self) -> Option<Timestamp> {
        self.pending.as_ref().and_then(|done_rx| *done_rx.borrow())
    }

    fn finish(&mut self, at: Timestamp) {
        self.status = SubmitStatus::Complete;
        self.completed_at = Some(at);
        info!("Onboarding complete at {at}");
    }

    fn abandon(&mut self) -> WizardError {
        warn!("Provisioning task ended without completing");
        self.status = SubmitStatus::Idle;
        WizardError::Provisioning {
            message: "account creation did not complete".to_string(),
        }
    }
}
