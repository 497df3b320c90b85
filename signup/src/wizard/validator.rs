use lazy_static::lazy_static;
use regex::Regex;

use super::state::{ContactInfo, FieldErrors};

pub const NAME_ERROR: &str = "Please enter your name";
pub const EMAIL_ERROR: &str = "Please enter a valid email";
pub const PHONE_ERROR: &str = "Please enter a valid phone";

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 6;

lazy_static! {
    // Permissive: something@something.something with no whitespace
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidation {
    pub errors: FieldErrors,
    /// Trimmed values, present only when every field passed.
    pub contact: Option<ContactInfo>,
}

impl ContactValidation {
    pub fn is_ok(&self) -> bool {
        self.contact.is_some()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_contact_info(name: &str, email: &str, phone: &str) -> ContactValidation {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();

    let mut errors = FieldErrors::default();
    if name.chars().count() < MIN_NAME_LEN {
        errors.name = Some(NAME_ERROR.to_string());
    }
    if !is_valid_email(email) {
        errors.email = Some(EMAIL_ERROR.to_string());
    }
    if phone.chars().count() < MIN_PHONE_LEN {
        errors.phone = Some(PHONE_ERROR.to_string());
    }

    let contact = errors.is_empty().then(|| ContactInfo {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    });

    ContactValidation { errors, contact }
}
