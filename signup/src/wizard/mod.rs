pub mod actions;
pub mod manager;
pub mod state;
pub mod summary;
pub mod validator;
pub mod view;

#[cfg(test)]
mod tests;

pub use actions::WizardAction;
pub use manager::{SignupWizard, Transition};
pub use state::{
    AddonSelection, ContactField, ContactForm, ContactInfo, FieldErrors, PlanSelection, Step,
    WizardState,
};
pub use summary::{render_summary, OrderSummary, SummaryAddon};
pub use validator::{validate_contact_info, ContactValidation};
pub use view::{render_view, OptionView, StepIndicator, WizardView};
