//! The accumulated form state of one wizard session.

use serde::{Deserialize, Serialize};

use super::choices::{
    blank_choice, CompanySize, Feature, Industry, MonthlyBudget, PrimaryGoal, Role,
};

/// Independent notification channel toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notifications {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
        }
    }
}

/// Insertion-ordered set of features.
///
/// Inserting a present feature and removing an absent one leave the set
/// unchanged; removal never reorders the remaining features.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FeatureSet(Vec<Feature>);

impl FeatureSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature at the end. Returns false if it was already present.
    pub fn insert(&mut self, feature: Feature) -> bool {
        if self.contains(feature) {
            return false;
        }
        self.0.push(feature);
        true
    }

    /// Removes a feature. Returns false if it was absent.
    pub fn remove(&mut self, feature: Feature) -> bool {
        let before = self.0.len();
        self.0.retain(|f| *f != feature);
        self.0.len() != before
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Feature] {
        &self.0
    }
}

impl FromIterator<Feature> for FeatureSet {
    /// Keeps the first occurrence of each feature.
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = Self::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

/// Everything the user entered across the four screens.
///
/// Serializes with the camelCase keys of the onboarding form; unselected
/// choices serialize as `""`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    // Company information
    pub company_name: String,
    #[serde(with = "blank_choice")]
    pub company_size: Option<CompanySize>,
    #[serde(with = "blank_choice")]
    pub industry: Option<Industry>,
    #[serde(with = "blank_choice")]
    pub role: Option<Role>,

    // Goals and use case
    #[serde(with = "blank_choice")]
    pub primary_goal: Option<PrimaryGoal>,
    pub use_case: FeatureSet,
    #[serde(with = "blank_choice")]
    pub monthly_budget: Option<MonthlyBudget>,

    // Preferences
    pub notifications: Notifications,
    pub newsletter: bool,
    pub data_processing: bool,
}

impl Default for FormState {
    /// The snapshot every session starts from.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company_name: String::new(),
            company_size: None,
            industry: None,
            role: None,
            primary_goal: None,
            use_case: FeatureSet::new(),
            monthly_budget: None,
            notifications: Notifications::default(),
            newsletter: true,
            data_processing: false,
        }
    }
}

impl FormState {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Renders the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
