use serde::{Deserialize, Serialize};

use super::state::{ContactField, Step};
use crate::pricing::BillingCadence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardAction {
    // Navigation
    Next,
    Back,
    Confirm,
    ChangePlan,
    GoToStep { step: Step },

    // Selection
    SelectPlan { plan_id: String },
    SetBillingCadence { cadence: BillingCadence },
    ToggleBilling { checked: bool },
    ToggleAddon { addon_id: String, checked: bool },

    // Contact form input
    UpdateField { field: ContactField, value: String },
}

impl WizardAction {
    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::Next => "Advancing to next step",
            WizardAction::Back => "Going back to previous step",
            WizardAction::Confirm => "Confirming order",
            WizardAction::ChangePlan => "Returning to plan selection",
            WizardAction::GoToStep { .. } => "Jumping to specific step",
            WizardAction::SelectPlan { .. } => "Selecting plan",
            WizardAction::SetBillingCadence { .. } | WizardAction::ToggleBilling { .. } => {
                "Changing billing cadence"
            }
            WizardAction::ToggleAddon { .. } => "Toggling add-on",
            WizardAction::UpdateField { .. } => "Updating contact field",
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            WizardAction::Next
                | WizardAction::Back
                | WizardAction::Confirm
                | WizardAction::ChangePlan
                | WizardAction::GoToStep { .. }
        )
    }
}
