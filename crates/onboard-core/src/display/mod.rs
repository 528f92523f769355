//! Markdown views of the wizard.
//!
//! Every view is a `Display` wrapper around a borrowed snapshot; none of them
//! hold state of their own. Front-ends pick the view from the wizard phase:
//!
//! ```text
//! Editing(step) ──▶ StepScreen    (StepHeader + fields, Summary on the last step)
//! Submitting    ──▶ SubmittingNotice
//! Complete      ──▶ CompletionView
//! ```
//!
//! - [`screens`]: per-step screens and the step header
//! - [`summary`]: the review summary of the last step
//! - [`status`]: feedback lines and the submission/completion views

pub mod screens;
pub mod status;
pub mod summary;

pub use screens::{StepHeader, StepScreen};
pub use status::{CompletionView, OperationStatus, SubmittingNotice};
pub use summary::Summary;
