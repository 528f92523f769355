//! Fixed choice catalogs offered by the wizard screens.
//!
//! Each catalog enum has a wire value (what the form stores and serializes)
//! and a human label (what a screen shows next to the option).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A value picked from one of the fixed catalogs.
pub trait Choice: Copy + Eq + 'static {
    /// Every option of the catalog, in display order.
    const ALL: &'static [Self];

    /// Wire value stored in the form.
    fn as_str(&self) -> &'static str;

    /// Human-readable label shown by the screens.
    fn label(&self) -> &'static str;
}

/// Looks up a catalog option by wire value or label, ignoring case.
pub fn parse_choice<T: Choice>(input: &str) -> Option<T> {
    let needle = input.trim();
    T::ALL.iter().copied().find(|choice| {
        choice.as_str().eq_ignore_ascii_case(needle) || choice.label().eq_ignore_ascii_case(needle)
    })
}

/// Number of employees bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-1000")]
    Large,
    #[serde(rename = "1000+")]
    Enterprise,
}

impl Choice for CompanySize {
    const ALL: &'static [Self] = &[
        Self::Micro,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Enterprise,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-1000",
            Self::Enterprise => "1000+",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Micro => "1-10 employees",
            Self::Small => "11-50 employees",
            Self::Medium => "51-200 employees",
            Self::Large => "201-1000 employees",
            Self::Enterprise => "1000+ employees",
        }
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid company size: {s}"))
    }
}

/// Industry the company operates in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    Manufacturing,
    Other,
}

impl Choice for Industry {
    const ALL: &'static [Self] = &[
        Self::Technology,
        Self::Healthcare,
        Self::Finance,
        Self::Education,
        Self::Retail,
        Self::Manufacturing,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Retail => "retail",
            Self::Manufacturing => "manufacturing",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid industry: {s}"))
    }
}

/// The user's role within the company.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ceo,
    Cto,
    Manager,
    Developer,
    Designer,
    Marketing,
    Sales,
    Other,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[
        Self::Ceo,
        Self::Cto,
        Self::Manager,
        Self::Developer,
        Self::Designer,
        Self::Marketing,
        Self::Sales,
        Self::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Cto => "cto",
            Self::Manager => "manager",
            Self::Developer => "developer",
            Self::Designer => "designer",
            Self::Marketing => "marketing",
            Self::Sales => "sales",
            Self::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO/Founder",
            Self::Cto => "CTO",
            Self::Manager => "Manager",
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid role: {s}"))
    }
}

/// The single primary goal picked on the goals screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryGoal {
    IncreaseProductivity,
    ReduceCosts,
    ImproveCollaboration,
    ScaleBusiness,
}

impl Choice for PrimaryGoal {
    const ALL: &'static [Self] = &[
        Self::IncreaseProductivity,
        Self::ReduceCosts,
        Self::ImproveCollaboration,
        Self::ScaleBusiness,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::IncreaseProductivity => "increase-productivity",
            Self::ReduceCosts => "reduce-costs",
            Self::ImproveCollaboration => "improve-collaboration",
            Self::ScaleBusiness => "scale-business",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::IncreaseProductivity => "Increase team productivity",
            Self::ReduceCosts => "Reduce operational costs",
            Self::ImproveCollaboration => "Improve team collaboration",
            Self::ScaleBusiness => "Scale business operations",
        }
    }
}

impl FromStr for PrimaryGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid primary goal: {s}"))
    }
}

/// Platform feature the user can express interest in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Feature {
    #[serde(rename = "Project Management")]
    ProjectManagement,
    #[serde(rename = "Team Collaboration")]
    TeamCollaboration,
    #[serde(rename = "Analytics & Reporting")]
    AnalyticsReporting,
    #[serde(rename = "Automation")]
    Automation,
    #[serde(rename = "Integration Tools")]
    IntegrationTools,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
}

impl Choice for Feature {
    const ALL: &'static [Self] = &[
        Self::ProjectManagement,
        Self::TeamCollaboration,
        Self::AnalyticsReporting,
        Self::Automation,
        Self::IntegrationTools,
        Self::CustomerSupport,
    ];

    /// Features are stored under their display name.
    fn as_str(&self) -> &'static str {
        self.label()
    }

    fn label(&self) -> &'static str {
        match self {
            Self::ProjectManagement => "Project Management",
            Self::TeamCollaboration => "Team Collaboration",
            Self::AnalyticsReporting => "Analytics & Reporting",
            Self::Automation => "Automation",
            Self::IntegrationTools => "Integration Tools",
            Self::CustomerSupport => "Customer Support",
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid feature: {s}"))
    }
}

/// Monthly budget range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MonthlyBudget {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "501-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl Choice for MonthlyBudget {
    const ALL: &'static [Self] = &[
        Self::UpTo50,
        Self::UpTo200,
        Self::UpTo500,
        Self::UpTo1000,
        Self::Over1000,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo50 => "0-50",
            Self::UpTo200 => "51-200",
            Self::UpTo500 => "201-500",
            Self::UpTo1000 => "501-1000",
            Self::Over1000 => "1000+",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::UpTo50 => "$0 - $50",
            Self::UpTo200 => "$51 - $200",
            Self::UpTo500 => "$201 - $500",
            Self::UpTo1000 => "$501 - $1,000",
            Self::Over1000 => "$1,000+",
        }
    }
}

impl FromStr for MonthlyBudget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s).ok_or_else(|| format!("Invalid monthly budget: {s}"))
    }
}

/// Serde adapter storing an unselected choice as the empty string.
pub(crate) mod blank_choice {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_choice, Choice};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Choice,
        S: Serializer,
    {
        serializer.serialize_str(value.as_ref().map_or("", Choice::as_str))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Choice,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        parse_choice(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown choice '{raw}'")))
    }
}
