use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

use super::state::{AddonSelection, ContactField, PlanSelection, Step, WizardState};
use super::summary::render_summary;
use super::validator::validate_contact_info;
use super::WizardAction;
use crate::meta::Catalog;
use crate::pricing::BillingCadence;
use crate::util::Result;

/// Outcome of a single action.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Navigation that is a no-op from the current step.
    Stayed,
    /// Step 1 validation failed; field errors are set.
    Rejected,
    /// Selection or form data changed without a step move.
    Updated,
}

pub struct SignupWizard {
    // Current state - single source of truth
    state: WizardState,

    catalog: Catalog,

    // Processed strictly in dispatch order
    pending_actions: VecDeque<WizardAction>,
}

impl SignupWizard {
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        let state = WizardState::new(catalog.default_plan()?);
        Ok(Self {
            state,
            catalog,
            pending_actions: VecDeque::new(),
        })
    }

    /// Queues an action; nothing changes until `update` or `run_pending`.
    pub fn dispatch(&mut self, action: WizardAction) {
        tracing::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes the oldest queued action, if any.
    pub fn update(&mut self) -> Result<Option<Transition>> {
        match self.pending_actions.pop_front() {
            Some(action) => self.apply(action).map(Some),
            None => Ok(None),
        }
    }

    /// Drains the queue. Stops at the first failing action, leaving the rest queued.
    pub fn run_pending(&mut self) -> Result<Vec<Transition>> {
        let mut transitions = Vec::with_capacity(self.pending_actions.len());
        while let Some(transition) = self.update()? {
            transitions.push(transition);
        }
        Ok(transitions)
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    pub fn apply(&mut self, action: WizardAction) -> Result<Transition> {
        tracing::debug!("Processing action: {}", action.description());

        let transition = match action {
            WizardAction::Next => self.next(),
            WizardAction::Back => self.back(),
            WizardAction::Confirm => self.confirm(),
            WizardAction::ChangePlan => self.change_plan(),
            WizardAction::GoToStep { step } => self.jump_to_step(step),
            WizardAction::SelectPlan { plan_id } => self.select_plan(&plan_id)?,
            WizardAction::SetBillingCadence { cadence } => self.set_billing_cadence(cadence),
            WizardAction::ToggleBilling { checked } => {
                self.set_billing_cadence(BillingCadence::from_toggle(checked))
            }
            WizardAction::ToggleAddon { addon_id, checked } => {
                self.toggle_addon(&addon_id, checked)?
            }
            WizardAction::UpdateField { field, value } => self.update_field(field, value),
        };

        Ok(transition)
    }
}

// Step controller
impl SignupWizard {
    /// Shows `target` and records it as the current step. Entering the
    /// summary or the thank-you screen recomputes the order summary.
    pub fn go_to_step(&mut self, target: Step) -> Transition {
        let from = self.state.current_step;
        self.state.current_step = target;

        if matches!(target, Step::Summary | Step::ThankYou) {
            self.state.summary = Some(render_summary(&self.state));
        }

        tracing::info!("Moved from {:?} to {:?}", from, target);
        Transition::Moved { from, to: target }
    }

    pub fn next(&mut self) -> Transition {
        let current = self.state.current_step;
        if current == Step::ContactInfo && !self.validate_contact_step() {
            tracing::warn!("Contact details invalid, staying on step 1");
            return Transition::Rejected;
        }

        match current.number().map(|n| n + 1).and_then(Step::from_number) {
            Some(next) => self.go_to_step(next),
            // Summary needs an explicit confirm; ThankYou is terminal
            None => Transition::Stayed,
        }
    }

    pub fn back(&mut self) -> Transition {
        let previous = self
            .state
            .current_step
            .number()
            .and_then(|n| n.checked_sub(1))
            .and_then(Step::from_number);

        match previous {
            Some(step) => self.go_to_step(step),
            None => Transition::Stayed,
        }
    }

    pub fn confirm(&mut self) -> Transition {
        if self.state.current_step != Step::Summary {
            tracing::warn!(
                "Confirm ignored on {:?}: only available on the summary",
                self.state.current_step
            );
            return Transition::Stayed;
        }

        let id = Uuid::new_v4();
        self.state.confirmation_id = Some(id);
        tracing::info!("Order confirmed: {}", id);
        self.go_to_step(Step::ThankYou)
    }

    /// The summary's "Change" link: back to plan selection, selections kept.
    /// Leaving the thank-you screen reopens the order for editing.
    pub fn change_plan(&mut self) -> Transition {
        match self.state.current_step {
            Step::Summary => self.go_to_step(Step::SelectPlan),
            Step::ThankYou => {
                self.state.confirmation_id = None;
                self.go_to_step(Step::SelectPlan)
            }
            other => {
                tracing::warn!("Change ignored on {:?}: no summary shown", other);
                Transition::Stayed
            }
        }
    }

    fn jump_to_step(&mut self, step: Step) -> Transition {
        if self.state.current_step == Step::ThankYou {
            tracing::warn!("Jump to {:?} refused: order already confirmed", step);
            return Transition::Stayed;
        }
        if step == Step::ThankYou {
            tracing::warn!("Thank-you screen is only reachable by confirming");
            return Transition::Stayed;
        }
        if step != Step::ContactInfo && self.state.user.is_none() {
            tracing::warn!("Jump to {:?} refused: contact details not validated", step);
            return Transition::Stayed;
        }
        self.go_to_step(step)
    }

    /// Validates the raw form, replacing any errors from the previous
    /// attempt. On success commits the trimmed values to `user`.
    fn validate_contact_step(&mut self) -> bool {
        let form = &self.state.form;
        let result = validate_contact_info(&form.name, &form.email, &form.phone);
        self.state.field_errors = result.errors;

        match result.contact {
            Some(contact) => {
                self.state.user = Some(contact);
                true
            }
            None => false,
        }
    }
}

// Plan and add-on selection
impl SignupWizard {
    pub fn select_plan(&mut self, plan_id: &str) -> Result<Transition> {
        let option = self.catalog.plan(plan_id)?;
        self.state.selected_plan = PlanSelection::from(option);
        tracing::info!("Selected plan: {}", option.name);
        Ok(Transition::Updated)
    }

    /// Changes which price column applies. Add-ons already selected keep the
    /// price they were selected at.
    pub fn set_billing_cadence(&mut self, cadence: BillingCadence) -> Transition {
        self.state.billing_cadence = cadence;
        tracing::info!("Billing cadence: {}", cadence.label());
        Transition::Updated
    }

    pub fn toggle_addon(&mut self, addon_id: &str, checked: bool) -> Result<Transition> {
        let option = self.catalog.addon(addon_id)?;

        if checked {
            if !self.state.has_addon(&option.name) {
                self.state.selected_addons.push(AddonSelection {
                    name: option.name.clone(),
                    price: self.state.billing_cadence.price_of(option),
                });
                tracing::info!("Add-on selected: {}", option.name);
            }
        } else {
            self.state.selected_addons.retain(|a| a.name != option.name);
            tracing::info!("Add-on removed: {}", option.name);
        }

        Ok(Transition::Updated)
    }

    pub fn update_field(&mut self, field: ContactField, value: String) -> Transition {
        self.state.form.set(field, value);
        Transition::Updated
    }
}
