//! Status messages and the submission/completion views.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Feedback line for a user action.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

/// Shown while account creation is in flight.
pub struct SubmittingNotice;

impl fmt::Display for SubmittingNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Creating Account...")
    }
}

/// Terminal success view.
pub struct CompletionView {
    pub completed_at: Option<Timestamp>,
}

impl fmt::Display for CompletionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Welcome aboard!")?;
        writeln!(f)?;
        writeln!(
            f,
            "Your account has been set up successfully. You can now start using our platform."
        )?;
        if let Some(at) = &self.completed_at {
            writeln!(f)?;
            writeln!(
                f,
                "- **Completed:** {}",
                at.to_zoned(TimeZone::system()).strftime("%Y-%m-%d %H:%M:%S %Z")
            )?;
        }
        Ok(())
    }
}
