use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::util::{Result, SignupError};

/// A selectable plan or add-on with both cadence prices, in whole dollars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: String,
    pub name: String,
    pub monthly: u32,
    pub yearly: u32,
}

impl CatalogOption {
    pub fn new(id: &str, name: &str, monthly: u32, yearly: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            monthly,
            yearly,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub plans: Vec<CatalogOption>,
    #[serde(default)]
    pub addons: Vec<CatalogOption>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The plans and add-ons offered on the signup page.
    pub fn builtin() -> Self {
        Self {
            plans: vec![
                CatalogOption::new("arcade", "Arcade", 9, 90),
                CatalogOption::new("advanced", "Advanced", 12, 120),
                CatalogOption::new("pro", "Pro", 15, 150),
            ],
            addons: vec![
                CatalogOption::new("online-service", "Online service", 1, 10),
                CatalogOption::new("larger-storage", "Larger storage", 2, 20),
                CatalogOption::new("customizable-profile", "Customizable profile", 2, 20),
            ],
        }
    }

    pub fn plan(&self, id: &str) -> Result<&CatalogOption> {
        self.plans
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SignupError::UnknownPlan(id.to_string()))
    }

    pub fn addon(&self, id: &str) -> Result<&CatalogOption> {
        self.addons
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| SignupError::UnknownAddon(id.to_string()))
    }

    /// First plan in catalog order; selected when the wizard starts.
    pub fn default_plan(&self) -> Result<&CatalogOption> {
        self.plans
            .first()
            .ok_or_else(|| SignupError::InvalidCatalog("catalog has no plans".to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.plans.is_empty() {
            return Err(SignupError::InvalidCatalog("catalog has no plans".to_string()));
        }
        check_section("plan", &self.plans)?;
        check_section("add-on", &self.addons)?;
        // Selected add-ons are keyed by name
        check_unique_names("add-on", &self.addons)?;
        Ok(())
    }
}

fn check_section(kind: &str, options: &[CatalogOption]) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if option.id.trim().is_empty() {
            return Err(SignupError::InvalidCatalog(format!("{kind} with empty id")));
        }
        if option.name.trim().is_empty() {
            return Err(SignupError::InvalidCatalog(format!(
                "{kind} '{}' has an empty name",
                option.id
            )));
        }
        if !seen.insert(option.id.as_str()) {
            return Err(SignupError::InvalidCatalog(format!(
                "duplicate {kind} id '{}'",
                option.id
            )));
        }
    }
    Ok(())
}

fn check_unique_names(kind: &str, options: &[CatalogOption]) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.name.trim()) {
            return Err(SignupError::InvalidCatalog(format!(
                "duplicate {kind} name '{}'",
                option.name
            )));
        }
    }
    Ok(())
}
