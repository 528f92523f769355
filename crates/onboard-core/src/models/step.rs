//! Wizard steps and phases.

use serde::{Deserialize, Serialize};

/// One screen of the wizard.
///
/// Progresses linearly: Personal → Company → Goals → Preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Personal,
    Company,
    Goals,
    Preferences,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 4] = [
        Step::Personal,
        Step::Company,
        Step::Goals,
        Step::Preferences,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: u8 = 4;

    /// 1-based position of the step.
    pub fn number(&self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Company => 2,
            Step::Goals => 3,
            Step::Preferences => 4,
        }
    }

    /// Step at a 1-based position, if any.
    pub fn from_number(number: u8) -> Option<Step> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any.
    pub fn prev(&self) -> Option<Step> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Fraction of the wizard reached on this step, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        f64::from(self.number()) / f64::from(Self::COUNT)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Information",
            Step::Company => "Company Details",
            Step::Goals => "Goals & Use Case",
            Step::Preferences => "Preferences",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Personal => "Tell us about yourself",
            Step::Company => "Information about your organization",
            Step::Goals => "How will you use our platform?",
            Step::Preferences => "Customize your experience",
        }
    }
}

/// Where the final submission stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Account creation is in flight
    Submitting,
    /// Account creation finished; terminal
    Complete,
}

/// Navigation and submission status of a session.
///
/// Transitions: `Editing(n) → Editing(n±1)` by navigation,
/// `Editing(Preferences) → Submitting` on a consented submit,
/// `Submitting → Complete` once provisioning finishes. `Complete` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "phase", content = "step")]
pub enum WizardPhase {
    Editing(Step),
    Submitting,
    Complete,
}

impl WizardPhase {
    /// Whether this phase is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Whether form fields and navigation accept changes in this phase.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

impl Default for WizardPhase {
    fn default() -> Self {
        Self::Editing(Step::default())
    }
}
