// =====================================================================================
// FIELD VALIDATION - SHARED BY LIVE (ADVISORY) AND SUBMIT (BLOCKING) CHECKS
// =====================================================================================

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{CreatePatientForm, UpdatePatientForm};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 100;
pub const MAX_BLOOD_TYPE_LENGTH: usize = 3;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\-]{4,15}$").expect("phone pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\.-]+@[\w\.-]+\.\w+$").expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Invalid {field}: {expected}")]
    InvalidFormat { field: &'static str, expected: &'static str },

    #[error("Invalid {field}: maximum {max} characters, got {actual}")]
    TooLong { field: &'static str, max: usize, actual: usize },

    #[error("Invalid {field}: must be between {min} and {max}, got {actual}")]
    OutOfRange { field: &'static str, min: u32, max: u32, actual: u32 },

    #[error("Please enter a {field}")]
    Required { field: &'static str },
}

impl ValidationIssue {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationIssue::InvalidFormat { field, .. }
            | ValidationIssue::TooLong { field, .. }
            | ValidationIssue::OutOfRange { field, .. }
            | ValidationIssue::Required { field } => field,
        }
    }
}

pub type FieldCheck = Result<(), ValidationIssue>;

pub fn validate_name(name: &str) -> FieldCheck {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationIssue::InvalidFormat {
            field: "name",
            expected: "only letters and spaces allowed",
        })
    }
}

/// Empty means "not yet provided" and passes; see [`require_blood_type`].
pub fn validate_blood_type(blood_type: &str) -> FieldCheck {
    let actual = blood_type.chars().count();
    if actual > MAX_BLOOD_TYPE_LENGTH {
        return Err(ValidationIssue::TooLong {
            field: "blood type",
            max: MAX_BLOOD_TYPE_LENGTH,
            actual,
        });
    }
    Ok(())
}

pub fn require_blood_type(blood_type: &str) -> FieldCheck {
    if blood_type.is_empty() {
        return Err(ValidationIssue::Required { field: "blood type" });
    }
    validate_blood_type(blood_type)
}

pub fn validate_phone(phone: &str) -> FieldCheck {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationIssue::InvalidFormat {
            field: "phone number",
            expected: "4-15 characters, only digits and '-' allowed",
        })
    }
}

/// Optional field: empty passes.
pub fn validate_email(email: &str) -> FieldCheck {
    if email.is_empty() || EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationIssue::InvalidFormat {
            field: "email address",
            expected: "expected local@domain.tld",
        })
    }
}

pub fn validate_age(age: u32) -> FieldCheck {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(ValidationIssue::OutOfRange {
            field: "age",
            min: MIN_AGE,
            max: MAX_AGE,
            actual: age,
        })
    }
}

pub fn validate_patient_id(id: &str) -> FieldCheck {
    if id.trim().is_empty() {
        Err(ValidationIssue::Required { field: "patient ID" })
    } else {
        Ok(())
    }
}

/// Text fields that are checked as they are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    BloodType,
    Phone,
    Email,
}

impl TextField {
    /// The rule shared by live advice and the submit check.
    pub fn check(self, value: &str) -> FieldCheck {
        match self {
            TextField::Name => require_name(value),
            TextField::BloodType => validate_blood_type(value),
            TextField::Phone => validate_phone(value),
            TextField::Email => validate_email(value),
        }
    }
}

/// Like [`validate_name`], but a blank or whitespace-only name is `Required`.
pub fn require_name(name: &str) -> FieldCheck {
    if name.trim().is_empty() {
        return Err(ValidationIssue::Required { field: "name" });
    }
    validate_name(name)
}

/// Advice for one field as entered. A field left empty is not flagged.
pub fn advise_field(field: TextField, value: &str) -> Option<ValidationIssue> {
    if value.is_empty() {
        return None;
    }
    field.check(value).err()
}

/// Blocking check run on submit. Reports the first failing field.
pub fn check_create_form(form: &CreatePatientForm) -> FieldCheck {
    require_name(&form.name)?;
    validate_age(form.age)?;
    require_blood_type(&form.blood_type)?;
    validate_phone(&form.contact_phone)?;
    validate_email(&form.contact_email)?;
    Ok(())
}

/// Advisory check over a whole create form, in submit order.
pub fn advise_create_form(form: &CreatePatientForm) -> Vec<ValidationIssue> {
    [
        advise_field(TextField::Name, &form.name),
        validate_age(form.age).err(),
        advise_field(TextField::BloodType, &form.blood_type),
        advise_field(TextField::Phone, &form.contact_phone),
        advise_field(TextField::Email, &form.contact_email),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Advisory check over the fields an update changes, in submit order.
pub fn advise_update_form(form: &UpdatePatientForm) -> Vec<ValidationIssue> {
    [
        advise_field(TextField::Name, &form.name),
        form.age.and_then(|age| validate_age(age).err()),
        advise_field(TextField::BloodType, &form.blood_type),
        advise_field(TextField::Phone, &form.contact_phone),
        advise_field(TextField::Email, &form.contact_email),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Blocking check on the fields an update actually changes.
pub fn check_update_form(form: &UpdatePatientForm) -> FieldCheck {
    if !form.name.is_empty() {
        require_name(&form.name)?;
    }
    if let Some(age) = form.age {
        validate_age(age)?;
    }
    validate_blood_type(&form.blood_type)?;
    if !form.contact_phone.is_empty() {
        validate_phone(&form.contact_phone)?;
    }
    validate_email(&form.contact_email)?;
    Ok(())
}
