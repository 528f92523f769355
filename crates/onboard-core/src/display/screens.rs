//! Markdown screens for each wizard step.

use std::fmt;

use super::summary::Summary;
use crate::models::{
    Choice, CompanySize, Feature, FieldKey, FormState, Industry, MonthlyBudget,
    NotificationChannel, PrimaryGoal, Role, Step,
};

/// Step indicator, progress and title of a screen.
///
/// ```rust
/// use onboard_core::{display::StepHeader, models::Step};
///
/// let header = format!("{}", StepHeader(Step::Company));
/// assert!(header.contains("Step 2 of 4: Company Details"));
/// assert!(header.contains("50%"));
/// ```
pub struct StepHeader(pub Step);

impl fmt::Display for StepHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.0;
        writeln!(
            f,
            "# Step {} of {}: {}",
            step.number(),
            Step::COUNT,
            step.title()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", step.description())?;
        writeln!(f)?;

        let indicator: String = Step::ALL
            .iter()
            .map(|s| if *s <= step { '●' } else { '○' })
            .collect();
        writeln!(f, "Progress: {indicator} {:.0}%", step.progress() * 100.0)?;
        writeln!(f)
    }
}

/// A full screen: header plus the fields of one step with their values.
pub struct StepScreen<'a> {
    pub form: &'a FormState,
    pub step: Step,
}

impl<'a> StepScreen<'a> {
    pub fn new(form: &'a FormState, step: Step) -> Self {
        Self { form, step }
    }

    fn fmt_text(&self, f: &mut fmt::Formatter<'_>, key: FieldKey, value: &str) -> fmt::Result {
        if value.is_empty() {
            let hint = key.placeholder().unwrap_or("");
            writeln!(f, "- **{}** (`{key}`): _e.g. {hint}_", key.label())
        } else {
            writeln!(f, "- **{}** (`{key}`): {value}", key.label())
        }
    }

    fn fmt_select<T: Choice>(
        &self,
        f: &mut fmt::Formatter<'_>,
        key: FieldKey,
        value: Option<T>,
    ) -> fmt::Result {
        match value {
            Some(choice) => writeln!(f, "- **{}** (`{key}`): {}", key.label(), choice.label())?,
            None => writeln!(f, "- **{}** (`{key}`): _not selected_", key.label())?,
        }
        let options: Vec<String> = T::ALL
            .iter()
            .map(|choice| format!("`{}` {}", choice.as_str(), choice.label()))
            .collect();
        writeln!(f, "  - Options: {}", options.join(", "))
    }

    fn fmt_goal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = FieldKey::PrimaryGoal;
        writeln!(f, "- **{}** (`{key}`)", key.label())?;
        for goal in PrimaryGoal::ALL {
            let mark = if self.form.primary_goal == Some(*goal) { "(•)" } else { "( )" };
            writeln!(f, "  - {mark} {} (`{}`)", goal.label(), goal.as_str())?;
        }
        Ok(())
    }

    fn fmt_features(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = FieldKey::UseCase;
        writeln!(f, "- **{}** (`{key}`, select all that apply)", key.label())?;
        for feature in Feature::ALL {
            writeln!(
                f,
                "  - {} {}",
                checkbox(self.form.use_case.contains(*feature)),
                feature.label()
            )?;
        }
        Ok(())
    }

    fn fmt_preferences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notifications = &self.form.notifications;
        writeln!(f, "## Notification Preferences")?;
        writeln!(f)?;
        for channel in NotificationChannel::ALL {
            let enabled = match channel {
                NotificationChannel::Email => notifications.email,
                NotificationChannel::Sms => notifications.sms,
                NotificationChannel::Push => notifications.push,
            };
            writeln!(
                f,
                "- {} {} (`{}`)",
                checkbox(enabled),
                channel.label(),
                channel.as_str()
            )?;
        }
        writeln!(f)?;

        for (key, value) in [
            (FieldKey::Newsletter, self.form.newsletter),
            (FieldKey::DataProcessing, self.form.data_processing),
        ] {
            writeln!(f, "- {} {} (`{key}`)", checkbox(value), key.label())?;
        }
        writeln!(f)?;

        write!(f, "{}", Summary::new(self.form))
    }
}

impl fmt::Display for StepScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", StepHeader(self.step))?;

        let form = self.form;
        match self.step {
            Step::Personal => {
                self.fmt_text(f, FieldKey::FirstName, &form.first_name)?;
                self.fmt_text(f, FieldKey::LastName, &form.last_name)?;
                self.fmt_text(f, FieldKey::Email, &form.email)?;
                self.fmt_text(f, FieldKey::Phone, &form.phone)?;
            }
            Step::Company => {
                self.fmt_text(f, FieldKey::CompanyName, &form.company_name)?;
                self.fmt_select::<CompanySize>(f, FieldKey::CompanySize, form.company_size)?;
                self.fmt_select::<Industry>(f, FieldKey::Industry, form.industry)?;
                self.fmt_select::<Role>(f, FieldKey::Role, form.role)?;
            }
            Step::Goals => {
                self.fmt_goal(f)?;
                self.fmt_features(f)?;
                self.fmt_select::<MonthlyBudget>(f, FieldKey::MonthlyBudget, form.monthly_budget)?;
            }
            Step::Preferences => self.fmt_preferences(f)?,
        }

        Ok(())
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
