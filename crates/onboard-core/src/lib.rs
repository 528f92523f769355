//! Core library for the Onboard account setup wizard.
//!
//! This crate provides the wizard state machine that collects a new user's
//! details over four steps (personal information, company details, goals and
//! preferences) and then creates their account through an injected
//! provisioning collaborator.
//!
//! # Architecture
//!
//! - **Controller** ([`wizard`]): owns the form and the navigation/submission
//!   status; all mutation goes through its named operations
//! - **Models** ([`models`]): the form, the choice catalogs and the typed
//!   field updates
//! - **Provisioning** ([`provision`]): the asynchronous account-creation seam
//! - **Views** ([`display`]): markdown `Display` wrappers over read-only
//!   snapshots, rendered by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use onboard_core::{
//!     models::{Feature, FieldKey, NotificationChannel},
//!     WizardBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().build()?;
//!
//! // Text front-ends parse raw input into typed updates
//! let update = "companyName".parse::<FieldKey>()?.parse_update("Acme Inc.")?;
//! wizard.update_field(update);
//!
//! wizard.toggle_use_case(Feature::Automation, true);
//! wizard.update_notification(NotificationChannel::Sms, true);
//!
//! while wizard.advance() {}
//! wizard.update_field(FieldKey::DataProcessing.parse_update("yes")?);
//!
//! if wizard.submit() {
//!     wizard.settle().await?;
//! }
//! println!("{}", wizard.summary());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod provision;
pub mod wizard;

// Re-export commonly used types
pub use display::{CompletionView, OperationStatus, StepScreen, SubmittingNotice, Summary};
pub use error::{Result, WizardError};
pub use models::{
    Feature, FeatureSet, FieldKey, FieldUpdate, FormState, NotificationChannel, Notifications,
    Step, WizardPhase,
};
pub use provision::{InstantProvisioner, Provisioner, SimulatedProvisioner};
pub use wizard::{Wizard, WizardBuilder};
