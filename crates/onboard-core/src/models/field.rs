//! Field keys and typed field updates.
//!
//! [`FieldUpdate`] is what the wizard accepts; [`FieldKey`] is how text
//! front-ends name a field before they have a typed value for it.

use std::{fmt, str::FromStr};

use super::{
    choices::{parse_choice, Choice, CompanySize, Feature, Industry, MonthlyBudget, PrimaryGoal, Role},
    form::FeatureSet,
    step::Step,
};
use crate::error::{Result, WizardError};

/// Replacement value for one top-level form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    CompanyName(String),
    CompanySize(Option<CompanySize>),
    Industry(Option<Industry>),
    Role(Option<Role>),
    PrimaryGoal(Option<PrimaryGoal>),
    UseCase(FeatureSet),
    MonthlyBudget(Option<MonthlyBudget>),
    Newsletter(bool),
    DataProcessing(bool),
}

impl FieldUpdate {
    /// Key of the field this update replaces.
    pub fn key(&self) -> FieldKey {
        match self {
            Self::FirstName(_) => FieldKey::FirstName,
            Self::LastName(_) => FieldKey::LastName,
            Self::Email(_) => FieldKey::Email,
            Self::Phone(_) => FieldKey::Phone,
            Self::CompanyName(_) => FieldKey::CompanyName,
            Self::CompanySize(_) => FieldKey::CompanySize,
            Self::Industry(_) => FieldKey::Industry,
            Self::Role(_) => FieldKey::Role,
            Self::PrimaryGoal(_) => FieldKey::PrimaryGoal,
            Self::UseCase(_) => FieldKey::UseCase,
            Self::MonthlyBudget(_) => FieldKey::MonthlyBudget,
            Self::Newsletter(_) => FieldKey::Newsletter,
            Self::DataProcessing(_) => FieldKey::DataProcessing,
        }
    }
}

/// Name of a top-level form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    Phone,
    CompanyName,
    CompanySize,
    Industry,
    Role,
    PrimaryGoal,
    UseCase,
    MonthlyBudget,
    Newsletter,
    DataProcessing,
}

impl FieldKey {
    pub const ALL: [FieldKey; 13] = [
        FieldKey::FirstName,
        FieldKey::LastName,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::CompanyName,
        FieldKey::CompanySize,
        FieldKey::Industry,
        FieldKey::Role,
        FieldKey::PrimaryGoal,
        FieldKey::UseCase,
        FieldKey::MonthlyBudget,
        FieldKey::Newsletter,
        FieldKey::DataProcessing,
    ];

    /// camelCase key used by the form snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::CompanyName => "companyName",
            FieldKey::CompanySize => "companySize",
            FieldKey::Industry => "industry",
            FieldKey::Role => "role",
            FieldKey::PrimaryGoal => "primaryGoal",
            FieldKey::UseCase => "useCase",
            FieldKey::MonthlyBudget => "monthlyBudget",
            FieldKey::Newsletter => "newsletter",
            FieldKey::DataProcessing => "dataProcessing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::FirstName => "First Name",
            FieldKey::LastName => "Last Name",
            FieldKey::Email => "Email Address",
            FieldKey::Phone => "Phone Number (Optional)",
            FieldKey::CompanyName => "Company Name",
            FieldKey::CompanySize => "Company Size",
            FieldKey::Industry => "Industry",
            FieldKey::Role => "Your Role",
            FieldKey::PrimaryGoal => "What's your primary goal?",
            FieldKey::UseCase => "Which features are you most interested in?",
            FieldKey::MonthlyBudget => "Monthly Budget Range",
            FieldKey::Newsletter => "Subscribe to our newsletter for product updates",
            FieldKey::DataProcessing => {
                "I agree to the processing of my personal data for service improvement"
            }
        }
    }

    /// Example value shown while a text field is empty.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldKey::FirstName => Some("John"),
            FieldKey::LastName => Some("Doe"),
            FieldKey::Email => Some("john@example.com"),
            FieldKey::Phone => Some("+1 (555) 123-4567"),
            FieldKey::CompanyName => Some("Acme Inc."),
            _ => None,
        }
    }

    /// The screen the field is edited on.
    pub fn step(&self) -> Step {
        match self {
            FieldKey::FirstName | FieldKey::LastName | FieldKey::Email | FieldKey::Phone => {
                Step::Personal
            }
            FieldKey::CompanyName | FieldKey::CompanySize | FieldKey::Industry | FieldKey::Role => {
                Step::Company
            }
            FieldKey::PrimaryGoal | FieldKey::UseCase | FieldKey::MonthlyBudget => Step::Goals,
            FieldKey::Newsletter | FieldKey::DataProcessing => Step::Preferences,
        }
    }

    /// Fields edited on the given screen, in display order.
    pub fn on_step(step: Step) -> impl Iterator<Item = FieldKey> {
        Self::ALL.into_iter().filter(move |key| key.step() == step)
    }

    /// Turns raw text into a typed update for this field.
    ///
    /// Text fields take the input verbatim. Choice fields accept a wire value
    /// or label, and blank input clears them. Flags accept yes/no, true/false,
    /// on/off and 1/0. The feature list is comma separated.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidValue` if the input does not fit the field.
    pub fn parse_update(&self, raw: &str) -> Result<FieldUpdate> {
        let update = match self {
            FieldKey::FirstName => FieldUpdate::FirstName(raw.to_string()),
            FieldKey::LastName => FieldUpdate::LastName(raw.to_string()),
            FieldKey::Email => FieldUpdate::Email(raw.to_string()),
            FieldKey::Phone => FieldUpdate::Phone(raw.to_string()),
            FieldKey::CompanyName => FieldUpdate::CompanyName(raw.to_string()),
            FieldKey::CompanySize => FieldUpdate::CompanySize(self.parse_optional(raw)?),
            FieldKey::Industry => FieldUpdate::Industry(self.parse_optional(raw)?),
            FieldKey::Role => FieldUpdate::Role(self.parse_optional(raw)?),
            FieldKey::PrimaryGoal => FieldUpdate::PrimaryGoal(self.parse_optional(raw)?),
            FieldKey::MonthlyBudget => FieldUpdate::MonthlyBudget(self.parse_optional(raw)?),
            FieldKey::UseCase => FieldUpdate::UseCase(self.parse_features(raw)?),
            FieldKey::Newsletter => FieldUpdate::Newsletter(self.parse_flag(raw)?),
            FieldKey::DataProcessing => FieldUpdate::DataProcessing(self.parse_flag(raw)?),
        };
        Ok(update)
    }

    fn parse_optional<T: Choice>(&self, raw: &str) -> Result<Option<T>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        parse_choice(raw).map(Some).ok_or_else(|| {
            let options: Vec<&str> = T::ALL.iter().map(Choice::as_str).collect();
            WizardError::invalid_value(self.as_str())
                .with_reason(format!("expected one of: {}", options.join(", ")))
        })
    }

    fn parse_features(&self, raw: &str) -> Result<FeatureSet> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<Feature>()
                    .map_err(|reason| WizardError::invalid_value(self.as_str()).with_reason(reason))
            })
            .collect()
    }

    fn parse_flag(&self, raw: &str) -> Result<bool> {
        parse_flag(raw).ok_or_else(|| {
            WizardError::invalid_value(self.as_str()).with_reason(format!("'{raw}' is not yes or no"))
        })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = WizardError;

    /// Accepts camelCase, snake_case and kebab-case keys.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == normalized)
            .ok_or_else(|| WizardError::unknown_field(s.trim()))
    }
}

/// One of the three notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [
        NotificationChannel::Email,
        NotificationChannel::Sms,
        NotificationChannel::Push,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
            NotificationChannel::Push => "push",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email notifications",
            NotificationChannel::Sms => "SMS notifications",
            NotificationChannel::Push => "Push notifications",
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            "push" => Ok(NotificationChannel::Push),
            _ => Err(format!("Invalid notification channel: {s}")),
        }
    }
}

/// Parses a yes/no style flag.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" => Some(true),
        "no" | "n" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
