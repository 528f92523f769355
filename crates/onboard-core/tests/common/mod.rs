use onboard_core::{InstantProvisioner, Wizard};

/// Helper function to create a wizard that completes submissions immediately
pub fn create_test_wizard() -> Wizard<InstantProvisioner> {
    Wizard::new(InstantProvisioner)
}
