//! Review summary shown on the last step.

use std::fmt;

use crate::models::{Choice, Feature, FormState};

/// Review of what the user entered.
///
/// Name is the first and last name joined by a space, role is the stored
/// value and the primary goal has its hyphens replaced by spaces. Interested
/// features are listed only when at least one is selected.
///
/// ```rust
/// use onboard_core::{display::Summary, models::{FormState, PrimaryGoal}};
///
/// let form = FormState {
///     first_name: "Jane".to_string(),
///     last_name: "Doe".to_string(),
///     primary_goal: Some(PrimaryGoal::IncreaseProductivity),
///     ..FormState::default()
/// };
/// let summary = Summary::new(&form);
/// assert_eq!(summary.name(), "Jane Doe");
/// assert_eq!(summary.primary_goal(), "increase productivity");
/// ```
pub struct Summary<'a> {
    form: &'a FormState,
}

impl<'a> Summary<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    pub fn name(&self) -> String {
        self.form.full_name()
    }

    pub fn company(&self) -> &str {
        &self.form.company_name
    }

    pub fn role(&self) -> &'static str {
        self.form.role.as_ref().map_or("", Choice::as_str)
    }

    pub fn primary_goal(&self) -> String {
        self.form
            .primary_goal
            .as_ref()
            .map_or("", Choice::as_str)
            .replace('-', " ")
    }

    pub fn features(&self) -> &[Feature] {
        self.form.use_case.as_slice()
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        writeln!(f, "- **Name:** {}", self.name())?;
        writeln!(f, "- **Company:** {}", self.company())?;
        writeln!(f, "- **Role:** {}", self.role())?;
        writeln!(f, "- **Primary Goal:** {}", self.primary_goal())?;

        if !self.features().is_empty() {
            let names: Vec<&str> = self
                .form
                .use_case
                .iter()
                .map(|feature| feature.label())
                .collect();
            writeln!(f, "- **Interested Features:** {}", names.join(", "))?;
        }

        writeln!(f)
    }
}
