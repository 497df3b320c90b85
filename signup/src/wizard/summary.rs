//! Order summary shown on the last step and re-asserted on confirmation.
//!
//! The summary is derived from [`WizardState`] alone, so rendering it any
//! number of times without intervening actions yields identical output.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::state::WizardState;
use crate::pricing::{format_addon_price, format_price, BillingCadence};
use crate::util::escape_html;

pub const CHANGE_LINK_ID: &str = "summaryChange";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryAddon {
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub plan_name: String,
    pub cadence: BillingCadence,
    pub plan_price: u32,
    pub addons: Vec<SummaryAddon>,
    pub total: u32,
}

pub fn render_summary(state: &WizardState) -> OrderSummary {
    let plan_price = state.plan_price();
    let addons: Vec<SummaryAddon> = state
        .selected_addons
        .iter()
        .map(|a| SummaryAddon {
            name: a.name.clone(),
            price: a.price,
        })
        .collect();
    let total = addons
        .iter()
        .fold(plan_price, |sum, a| sum.saturating_add(a.price));

    OrderSummary {
        plan_name: state.selected_plan.name.clone(),
        cadence: state.billing_cadence,
        plan_price,
        addons,
        total,
    }
}

impl OrderSummary {
    /// "Arcade (Monthly)"
    pub fn plan_title(&self) -> String {
        format!("{} ({})", self.plan_name, self.cadence.label())
    }

    pub fn plan_price_label(&self) -> String {
        format_price(self.plan_price, self.cadence)
    }

    // Snapshot price, labelled with the cadence currently in effect
    pub fn addon_price_label(&self, addon: &SummaryAddon) -> String {
        format_addon_price(addon.price, self.cadence)
    }

    pub fn total_label(&self) -> String {
        format!("Total (per {})", self.cadence.period())
    }

    pub fn total_price_label(&self) -> String {
        format_price(self.total, self.cadence)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "<div class=\"summary-top\"><div><div class=\"summary-plan-name\">{} ({})</div>\
             <a class=\"summary-change\" id=\"{}\">Change</a></div>\
             <div class=\"summary-plan-price\">{}</div></div>",
            escape_html(&self.plan_name),
            self.cadence.label(),
            CHANGE_LINK_ID,
            self.plan_price_label(),
        );
        for addon in &self.addons {
            let _ = write!(
                html,
                "\n<div class=\"summary-addon\"><div>{}</div><div>{}</div></div>",
                escape_html(&addon.name),
                self.addon_price_label(addon),
            );
        }
        let _ = write!(
            html,
            "\n<div class=\"summary-total\"><div class=\"total-label\">{}</div>\
             <div class=\"total-value\">{}</div></div>",
            self.total_label(),
            self.total_price_label(),
        );
        html
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<32} {:>10}", self.plan_title(), self.plan_price_label())?;
        for addon in &self.addons {
            writeln!(f, "  {:<30} {:>10}", addon.name, self.addon_price_label(addon))?;
        }
        write!(f, "{:<32} {:>10}", self.total_label(), self.total_price_label())
    }
}
