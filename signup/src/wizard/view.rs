use serde::Serialize;
use uuid::Uuid;

use super::manager::SignupWizard;
use super::state::{FieldErrors, Step};
use crate::pricing::{addon_price_label, plan_price_label, BillingCadence};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: u8,
    pub title: String,
    pub active: bool,
}

/// A plan card or add-on row with its label for the current cadence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionView {
    pub id: String,
    pub name: String,
    pub price_label: String,
    pub selected: bool,
}

/// Everything the presentation layer needs, derived from wizard state only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WizardView {
    pub visible_panel: Step,
    pub indicators: Vec<StepIndicator>,
    pub billing_cadence: BillingCadence,
    pub billing_toggle_checked: bool,
    pub plans: Vec<OptionView>,
    pub addons: Vec<OptionView>,
    pub field_errors: FieldErrors,
    pub summary_html: Option<String>,
    pub confirmation_id: Option<Uuid>,
}

pub fn render_view(wizard: &SignupWizard) -> WizardView {
    let state = wizard.state();
    let catalog = wizard.catalog();
    let cadence = state.billing_cadence;
    let active = state.current_step.number();

    let indicators = Step::numbered()
        .into_iter()
        .filter_map(|step| {
            step.number().map(|number| StepIndicator {
                number,
                title: step.title().to_string(),
                active: active == Some(number),
            })
        })
        .collect();

    let plans = catalog
        .plans
        .iter()
        .map(|plan| OptionView {
            id: plan.id.clone(),
            name: plan.name.clone(),
            price_label: plan_price_label(plan, cadence),
            selected: plan.id == state.selected_plan.id,
        })
        .collect();

    let addons = catalog
        .addons
        .iter()
        .map(|addon| OptionView {
            id: addon.id.clone(),
            name: addon.name.clone(),
            price_label: addon_price_label(addon, cadence),
            selected: state.has_addon(&addon.name),
        })
        .collect();

    let summary_html = match state.current_step {
        Step::Summary | Step::ThankYou => state.summary.as_ref().map(|s| s.to_html()),
        _ => None,
    };

    WizardView {
        visible_panel: state.current_step,
        indicators,
        billing_cadence: cadence,
        billing_toggle_checked: cadence == BillingCadence::Yearly,
        plans,
        addons,
        field_errors: state.field_errors.clone(),
        summary_html,
        confirmation_id: state.confirmation_id,
    }
}
