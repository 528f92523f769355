//! Field mutations for the Wizard.

use log::debug;

use super::Wizard;
use crate::{
    models::{Feature, FieldUpdate, NotificationChannel},
    provision::Provisioner,
};

impl<P: Provisioner> Wizard<P> {
    /// Replaces one top-level field, leaving every other field untouched.
    ///
    /// Content is not validated. Returns false, without changing anything,
    /// once the form has been submitted.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        let key = update.key();
        if !self.is_editable() {
            debug!("Ignoring update to {key} in phase {:?}", self.phase());
            return false;
        }

        let form = &mut self.form;
        match update {
            FieldUpdate::FirstName(value) => form.first_name = value,
            FieldUpdate::LastName(value) => form.last_name = value,
            FieldUpdate::Email(value) => form.email = value,
            FieldUpdate::Phone(value) => form.phone = value,
            FieldUpdate::CompanyName(value) => form.company_name = value,
            FieldUpdate::CompanySize(value) => form.company_size = value,
            FieldUpdate::Industry(value) => form.industry = value,
            FieldUpdate::Role(value) => form.role = value,
            FieldUpdate::PrimaryGoal(value) => form.primary_goal = value,
            FieldUpdate::UseCase(value) => form.use_case = value,
            FieldUpdate::MonthlyBudget(value) => form.monthly_budget = value,
            FieldUpdate::Newsletter(value) => form.newsletter = value,
            FieldUpdate::DataProcessing(value) => form.data_processing = value,
        }

        debug!("Updated field {key}");
        true
    }

    /// Sets one notification toggle; the other two keep their values.
    pub fn update_notification(&mut self, channel: NotificationChannel, enabled: bool) -> bool {
        if !self.is_editable() {
            debug!("Ignoring {} notification toggle in phase {:?}", channel.as_str(), self.phase());
            return false;
        }

        let notifications = &mut self.form.notifications;
        match channel {
            NotificationChannel::Email => notifications.email = enabled,
            NotificationChannel::Sms => notifications.sms = enabled,
            NotificationChannel::Push => notifications.push = enabled,
        }

        debug!("Set {} notifications to {enabled}", channel.as_str());
        true
    }

    /// Adds (`included`) or removes a feature of interest.
    ///
    /// Both directions are idempotent and removal keeps the order of the
    /// remaining features. Returns whether the selection changed.
    pub fn toggle_use_case(&mut self, feature: Feature, included: bool) -> bool {
        if !self.is_editable() {
            debug!("Ignoring feature toggle in phase {:?}", self.phase());
            return false;
        }

        let changed = if included {
            self.form.use_case.insert(feature)
        } else {
            self.form.use_case.remove(feature)
        };

        if changed {
            debug!("Feature {feature:?} included: {included}");
        }
        changed
    }
}
