//! Subscription signup wizard: contact details, plan and billing cadence,
//! add-ons, and an order summary before confirmation.

pub mod meta;
pub mod pricing;
pub mod util;
pub mod wizard;

pub use meta::{load_from_path, Catalog, CatalogOption};
pub use pricing::BillingCadence;
pub use util::{Result, SignupError};
pub use wizard::{render_summary, render_view, SignupWizard, Transition, WizardAction};

pub mod prelude {
    pub use crate::meta::{Catalog, CatalogOption};
    pub use crate::pricing::BillingCadence;
    pub use crate::util::SignupError;
    pub use crate::wizard::{
        render_summary, render_view, validate_contact_info, ContactField, OrderSummary,
        SignupWizard, Step, Transition, WizardAction, WizardState, WizardView,
    };
}
