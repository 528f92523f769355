//! Data models for the onboarding form.
//!
//! - [`form`]: the accumulated [`FormState`] and its nested records
//! - [`choices`]: the fixed catalogs behind every select, radio group and
//!   feature checkbox
//! - [`field`]: field keys and typed updates routed into the wizard
//! - [`step`]: the four steps and the derived [`WizardPhase`]
//!
//! Display implementations live in [`crate::display`].

pub mod choices;
pub mod field;
pub mod form;
pub mod step;

#[cfg(test)]
mod tests;

pub use choices::{
    parse_choice, Choice, CompanySize, Feature, Industry, MonthlyBudget, PrimaryGoal, Role,
};
pub use field::{parse_flag, FieldKey, FieldUpdate, NotificationChannel};
pub use form::{FeatureSet, FormState, Notifications};
pub use step::{Step, SubmitStatus, WizardPhase};
