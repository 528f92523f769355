#[cfg(test)]
mod model_tests {
    use crate::{
        error::WizardError,
        models::{
            parse_flag, Choice, CompanySize, Feature, FeatureSet, FieldKey, FieldUpdate, FormState,
            Industry, MonthlyBudget, NotificationChannel, PrimaryGoal, Role, Step,
        },
    };

    #[test]
    fn test_default_form_snapshot() {
        let form = FormState::default();
        assert!(form.first_name.is_empty());
        assert!(form.last_name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.company_name.is_empty());
        assert_eq!(form.company_size, None);
        assert_eq!(form.industry, None);
        assert_eq!(form.role, None);
        assert_eq!(form.primary_goal, None);
        assert!(form.use_case.is_empty());
        assert_eq!(form.monthly_budget, None);
        assert!(form.notifications.email);
        assert!(!form.notifications.sms);
        assert!(form.notifications.push);
        assert!(form.newsletter);
        assert!(!form.data_processing);
    }

    #[test]
    fn test_default_form_serializes_blank_choices() {
        let json = serde_json::to_value(FormState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "",
                "lastName": "",
                "email": "",
                "phone": "",
                "companyName": "",
                "companySize": "",
                "industry": "",
                "role": "",
                "primaryGoal": "",
                "useCase": [],
                "monthlyBudget": "",
                "notifications": { "email": true, "sms": false, "push": true },
                "newsletter": true,
                "dataProcessing": false
            })
        );
    }

    #[test]
    fn test_filled_form_uses_wire_values() {
        let form = FormState {
            company_size: Some(CompanySize::Enterprise),
            primary_goal: Some(PrimaryGoal::ReduceCosts),
            use_case: [Feature::AnalyticsReporting].into_iter().collect(),
            ..FormState::default()
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["companySize"], "1000+");
        assert_eq!(json["primaryGoal"], "reduce-costs");
        assert_eq!(json["useCase"], serde_json::json!(["Analytics & Reporting"]));

        let parsed: FormState = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, form);
    }

    #[test]
    fn test_unknown_choice_is_rejected_on_deserialize() {
        let mut json = serde_json::to_value(FormState::default()).unwrap();
        json["industry"] = serde_json::json!("mining");
        assert!(serde_json::from_value::<FormState>(json).is_err());
    }

    #[test]
    fn test_feature_set_insert_is_idempotent() {
        let mut set = FeatureSet::new();
        assert!(set.insert(Feature::Automation));
        assert!(!set.insert(Feature::Automation));
        assert_eq!(set.as_slice(), &[Feature::Automation]);
    }

    #[test]
    fn test_feature_set_remove_keeps_order() {
        let mut set: FeatureSet = [
            Feature::CustomerSupport,
            Feature::Automation,
            Feature::ProjectManagement,
        ]
        .into_iter()
        .collect();

        assert!(set.remove(Feature::Automation));
        assert!(!set.remove(Feature::Automation));
        assert_eq!(
            set.as_slice(),
            &[Feature::CustomerSupport, Feature::ProjectManagement]
        );
    }

    #[test]
    fn test_feature_set_collect_drops_duplicates() {
        let set: FeatureSet = [Feature::Automation, Feature::IntegrationTools, Feature::Automation]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.as_slice(),
            &[Feature::Automation, Feature::IntegrationTools]
        );
    }

    #[test]
    fn test_choice_parsing_accepts_value_and_label() {
        assert_eq!("11-50".parse::<CompanySize>(), Ok(CompanySize::Small));
        assert_eq!("CEO/Founder".parse::<Role>(), Ok(Role::Ceo));
        assert_eq!("cto".parse::<Role>(), Ok(Role::Cto));
        assert_eq!("HEALTHCARE".parse::<Industry>(), Ok(Industry::Healthcare));
        assert_eq!("$1,000+".parse::<MonthlyBudget>(), Ok(MonthlyBudget::Over1000));
        assert_eq!("analytics & reporting".parse::<Feature>(), Ok(Feature::AnalyticsReporting));
        assert!("huge".parse::<CompanySize>().is_err());
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CompanySize::ALL.len(), 5);
        assert_eq!(Industry::ALL.len(), 7);
        assert_eq!(Role::ALL.len(), 8);
        assert_eq!(PrimaryGoal::ALL.len(), 4);
        assert_eq!(Feature::ALL.len(), 6);
        assert_eq!(MonthlyBudget::ALL.len(), 5);
    }

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(Step::Personal.prev(), None);
        assert_eq!(Step::Personal.next(), Some(Step::Company));
        assert_eq!(Step::Goals.prev(), Some(Step::Company));
        assert_eq!(Step::Preferences.next(), None);
        assert!(Step::Personal.is_first());
        assert!(Step::Preferences.is_last());
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
        assert_eq!(Step::from_number(3), Some(Step::Goals));
    }

    #[test]
    fn test_step_progress() {
        assert_eq!(Step::Personal.progress(), 0.25);
        assert_eq!(Step::Company.progress(), 0.5);
        assert_eq!(Step::Preferences.progress(), 1.0);
    }

    #[test]
    fn test_field_key_accepts_several_spellings() {
        assert_eq!("firstName".parse::<FieldKey>().unwrap(), FieldKey::FirstName);
        assert_eq!("first_name".parse::<FieldKey>().unwrap(), FieldKey::FirstName);
        assert_eq!("data-processing".parse::<FieldKey>().unwrap(), FieldKey::DataProcessing);
        assert!(matches!(
            "favouriteColour".parse::<FieldKey>(),
            Err(WizardError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_field_key_steps_cover_every_screen() {
        let personal: Vec<_> = FieldKey::on_step(Step::Personal).collect();
        assert_eq!(
            personal,
            vec![FieldKey::FirstName, FieldKey::LastName, FieldKey::Email, FieldKey::Phone]
        );
        assert_eq!(FieldKey::on_step(Step::Company).count(), 4);
        assert_eq!(FieldKey::on_step(Step::Goals).count(), 3);
        assert_eq!(FieldKey::on_step(Step::Preferences).count(), 2);
    }

    #[test]
    fn test_parse_update_text_is_verbatim() {
        let update = FieldKey::Email.parse_update("not an email").unwrap();
        assert_eq!(update, FieldUpdate::Email("not an email".to_string()));
        assert_eq!(update.key(), FieldKey::Email);
    }

    #[test]
    fn test_parse_update_blank_choice_clears() {
        assert_eq!(
            FieldKey::Role.parse_update("  ").unwrap(),
            FieldUpdate::Role(None)
        );
        assert_eq!(
            FieldKey::PrimaryGoal.parse_update("scale-business").unwrap(),
            FieldUpdate::PrimaryGoal(Some(PrimaryGoal::ScaleBusiness))
        );
    }

    #[test]
    fn test_parse_update_invalid_choice() {
        let err = FieldKey::CompanySize.parse_update("12").unwrap_err();
        assert!(err.to_string().contains("companySize"));
        assert!(err.to_string().contains("1-10"));
    }

    #[test]
    fn test_parse_update_feature_list() {
        let update = FieldKey::UseCase
            .parse_update("Automation, Customer Support,Automation")
            .unwrap();
        let FieldUpdate::UseCase(set) = update else {
            panic!("expected a use case update");
        };
        assert_eq!(
            set.as_slice(),
            &[Feature::Automation, Feature::CustomerSupport]
        );
    }

    #[test]
    fn test_parse_update_flags() {
        assert_eq!(
            FieldKey::DataProcessing.parse_update("yes").unwrap(),
            FieldUpdate::DataProcessing(true)
        );
        assert_eq!(
            FieldKey::Newsletter.parse_update("off").unwrap(),
            FieldUpdate::Newsletter(false)
        );
        assert!(FieldKey::Newsletter.parse_update("maybe").is_err());
        assert_eq!(parse_flag("TRUE"), Some(true));
    }

    #[test]
    fn test_notification_channel_parsing() {
        assert_eq!("SMS".parse::<NotificationChannel>(), Ok(NotificationChannel::Sms));
        assert!("fax".parse::<NotificationChannel>().is_err());
    }
}
