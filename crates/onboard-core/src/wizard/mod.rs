//! The wizard controller.
//!
//! [`Wizard`] owns the [`FormState`] of one onboarding session together with
//! its navigation and submission status, and exposes the only operations that
//! may change them. Screens read a snapshot through the accessors below and
//! route user events back into the named operations.
//!
//! # Guarded operations
//!
//! No state operation returns an error. A call whose preconditions do not hold
//! (moving past the last step, submitting without consent, editing while the
//! account is being created) is ignored and reported as `false`.
//!
//! ```text
//!  Editing(1) ⇄ Editing(2) ⇄ Editing(3) ⇄ Editing(4) ──submit──▶ Submitting ──provisioned──▶ Complete
//! ```
//!
//! The accessors report `Complete` as soon as the provisioning task finishes.
//! [`Wizard::settle`] waits for that moment and surfaces a task that died
//! without completing.
//!
//! # Submodules
//!
//! - [`builder`]: [`WizardBuilder`] for configuring the provisioning delay
//! - [`fields`]: field, notification and feature mutations
//! - [`navigation`]: step movement
//! - [`submit`]: the consent-gated submission and its completion
//!
//! # Example
//!
//! ```rust
//! use onboard_core::{
//!     models::{FieldUpdate, Step},
//!     provision::InstantProvisioner,
//!     Wizard,
//! };
//!
//! # async fn example() -> onboard_core::Result<()> {
//! let mut wizard = Wizard::new(InstantProvisioner);
//! wizard.update_field(FieldUpdate::FirstName("Ada".to_string()));
//! while wizard.advance() {}
//! assert_eq!(wizard.current_step(), Step::Preferences);
//!
//! wizard.update_field(FieldUpdate::DataProcessing(true));
//! assert!(wizard.submit());
//! wizard.settle().await?;
//! assert!(wizard.is_complete());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::watch;

use crate::{
    display::Summary,
    models::{FormState, Step, SubmitStatus, WizardPhase},
    provision::{Provisioner, SimulatedProvisioner},
};

pub mod builder;
pub mod fields;
pub mod navigation;
pub mod submit;


pub use builder::WizardBuilder;

/// Controller for one onboarding session.
pub struct Wizard<P = SimulatedProvisioner> {
    form: FormState,
    step: Step,
    status: SubmitStatus,
    completed_at: Option<Timestamp>,
    provisioner: Arc<P>,
    pending: Option<watch::Receiver<Option<Timestamp>>>,
}

impl<P: Provisioner> Wizard<P> {
    /// Starts a session on the first step with the default form snapshot.
    pub fn new(provisioner: P) -> Self {
        Self {
            form: FormState::default(),
            step: Step::default(),
            status: SubmitStatus::Idle,
            completed_at: None,
            provisioner: Arc::new(provisioner),
            pending: None,
        }
    }

    /// Read-only view of the form.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Consumes the wizard, returning the accumulated form.
    pub fn into_form(self) -> FormState {
        self.form
    }

    /// The step shown while editing; stays on the last step once submitted.
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Submission status, `Complete` once the provisioner has finished.
    pub fn status(&self) -> SubmitStatus {
        if self.status == SubmitStatus::Submitting && self.provisioned_at().is_some() {
            SubmitStatus::Complete
        } else {
            self.status
        }
    }

    pub fn phase(&self) -> WizardPhase {
        match self.status() {
            SubmitStatus::Idle => WizardPhase::Editing(self.step),
            SubmitStatus::Submitting => WizardPhase::Submitting,
            SubmitStatus::Complete => WizardPhase::Complete,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == SubmitStatus::Submitting
    }

    pub fn is_complete(&self) -> bool {
        self.status() == SubmitStatus::Complete
    }

    /// Current step over the number of steps, in `[0.25, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.step.progress()
    }

    /// When provisioning finished, once the session is complete.
    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at.or_else(|| self.provisioned_at())
    }

    /// Summary of the form for the review section of the last step.
    pub fn summary(&self) -> Summary<'_> {
        Summary::new(&self.form)
    }

    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }

    fn is_editable(&self) -> bool {
        self.phase().is_editable()
    }
}

impl<P: Provisioner + Default> Default for Wizard<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
