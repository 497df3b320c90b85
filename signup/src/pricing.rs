use serde::{Deserialize, Serialize};

use crate::meta::CatalogOption;

/// Billing period; selects which price column of an option applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingCadence {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCadence {
    /// The billing switch reads "yearly" when checked.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Yearly => "yr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }

    pub fn pick(self, monthly: u32, yearly: u32) -> u32 {
        match self {
            Self::Monthly => monthly,
            Self::Yearly => yearly,
        }
    }

    pub fn price_of(self, option: &CatalogOption) -> u32 {
        self.pick(option.monthly, option.yearly)
    }
}

/// `$9/mo`, `$90/yr`
pub fn format_price(amount: u32, cadence: BillingCadence) -> String {
    format!("${}/{}", amount, cadence.suffix())
}

/// `+$1/mo`, `+$10/yr`
pub fn format_addon_price(amount: u32, cadence: BillingCadence) -> String {
    format!("+{}", format_price(amount, cadence))
}

pub fn plan_price_label(option: &CatalogOption, cadence: BillingCadence) -> String {
    format_price(cadence.price_of(option), cadence)
}

pub fn addon_price_label(option: &CatalogOption, cadence: BillingCadence) -> String {
    format_addon_price(cadence.price_of(option), cadence)
}
