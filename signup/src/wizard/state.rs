use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::summary::OrderSummary;
use crate::meta::CatalogOption;
use crate::pricing::BillingCadence;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    ContactInfo,
    SelectPlan,
    AddOns,
    Summary,
    ThankYou,
}

impl Step {
    pub const FIRST: Step = Step::ContactInfo;

    /// Position shown in the step indicator; the thank-you screen has none.
    pub fn number(self) -> Option<u8> {
        match self {
            Step::ContactInfo => Some(1),
            Step::SelectPlan => Some(2),
            Step::AddOns => Some(3),
            Step::Summary => Some(4),
            Step::ThankYou => None,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::ContactInfo),
            2 => Some(Step::SelectPlan),
            3 => Some(Step::AddOns),
            4 => Some(Step::Summary),
            _ => None,
        }
    }

    pub fn numbered() -> [Step; 4] {
        [Step::ContactInfo, Step::SelectPlan, Step::AddOns, Step::Summary]
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::ContactInfo => "Your info",
            Step::SelectPlan => "Select plan",
            Step::AddOns => "Add-ons",
            Step::Summary => "Summary",
            Step::ThankYou => "Thank you",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSelection {
    pub id: String,
    pub name: String,
    pub monthly_price: u32,
    pub yearly_price: u32,
}

impl PlanSelection {
    pub fn price(&self, cadence: BillingCadence) -> u32 {
        cadence.pick(self.monthly_price, self.yearly_price)
    }
}

impl From<&CatalogOption> for PlanSelection {
    fn from(option: &CatalogOption) -> Self {
        Self {
            id: option.id.clone(),
            name: option.name.clone(),
            monthly_price: option.monthly,
            yearly_price: option.yearly,
        }
    }
}

/// An add-on with the price that applied when it was ticked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddonSelection {
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw text of the step-1 inputs, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step: Step,
    pub billing_cadence: BillingCadence,
    pub selected_plan: PlanSelection,
    // Insertion order, at most one entry per name
    pub selected_addons: Vec<AddonSelection>,
    // Set once step 1 validates, never cleared
    pub user: Option<ContactInfo>,

    pub form: ContactForm,
    pub field_errors: FieldErrors,

    pub summary: Option<OrderSummary>,
    pub confirmation_id: Option<Uuid>,
}

impl WizardState {
    pub fn new(default_plan: &CatalogOption) -> Self {
        Self {
            current_step: Step::FIRST,
            billing_cadence: BillingCadence::default(),
            selected_plan: PlanSelection::from(default_plan),
            selected_addons: Vec::new(),
            user: None,
            form: ContactForm::default(),
            field_errors: FieldErrors::default(),
            summary: None,
            confirmation_id: None,
        }
    }

    pub fn plan_price(&self) -> u32 {
        self.selected_plan.price(self.billing_cadence)
    }

    pub fn has_addon(&self, name: &str) -> bool {
        self.selected_addons.iter().any(|a| a.name == name)
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == Step::ThankYou
    }
}
