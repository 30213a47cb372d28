//! Input validation for patient and staff records.
//!
//! Measurements are not validated here: the scoring engine
//! tolerates any numeric value and simply skips what it cannot use.

use crate::error::CoreError;
use crate::models::patient::{NewPatient, PatientChanges, PatientInput, Sex};

pub const MAX_AGE: i64 = 150;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a registration. Name, age and sex are required.
pub fn validate_new_patient(input: PatientInput) -> Result<NewPatient, CoreError> {
    let name = input.name.map(|n| n.trim().to_string()).unwrap_or_default();
    let (Some(age), Some(sex)) = (input.age, input.sex.as_deref()) else {
        return Err(required_fields());
    };
    if name.is_empty() || sex.is_empty() {
        return Err(required_fields());
    }

    Ok(NewPatient {
        name,
        age: validate_age(age)?,
        sex: sex.parse()?,
        phone: validate_optional_phone(input.phone)?,
        email: non_blank(input.email),
    })
}

/// Validate a partial update. At least one field must be present.
///
/// A blank phone or email clears the stored value.
pub fn validate_patient_changes(input: PatientInput) -> Result<PatientChanges, CoreError> {
    let name = match input.name {
        Some(name) if name.trim().is_empty() => {
            return Err(CoreError::InvalidField("Name must not be empty".to_string()));
        }
        Some(name) => Some(name.trim().to_string()),
        None => None,
    };

    let changes = PatientChanges {
        name,
        age: input.age.map(validate_age).transpose()?,
        sex: input.sex.as_deref().map(str::parse::<Sex>).transpose()?,
        phone: match input.phone {
            Some(phone) => Some(validate_optional_phone(Some(phone))?.unwrap_or_default()),
            None => None,
        },
        email: input.email.map(|e| e.trim().to_string()),
    };

    if changes.is_empty() {
        return Err(CoreError::EmptyUpdate);
    }
    Ok(changes)
}

/// Accepts `+919963721999`, `919963721999`, `9963721999` and spaced
/// variants such as `+91 99637 21999`.
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact
        .strip_prefix("+91")
        .or_else(|| compact.strip_prefix("91").filter(|rest| rest.len() == 10))
        .unwrap_or(&compact);

    digits.len() == 10
        && digits.bytes().all(|b| b.is_ascii_digit())
        && matches!(digits.as_bytes()[0], b'6'..=b'9')
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidField("Email address is invalid".to_string()))
    }
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::InvalidField(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_age(age: i64) -> Result<u8, CoreError> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(CoreError::InvalidField(format!(
            "Age must be between 0 and {MAX_AGE}"
        )));
    }
    Ok(age as u8)
}

/// Blank input means "no phone"; anything else must be a valid mobile number.
pub fn validate_optional_phone(phone: Option<String>) -> Result<Option<String>, CoreError> {
    let Some(phone) = non_blank(phone) else {
        return Ok(None);
    };
    if !is_valid_indian_mobile(&phone) {
        return Err(CoreError::InvalidField(
            "Phone must be a valid Indian mobile number (10 digits starting with 6-9)"
                .to_string(),
        ));
    }
    Ok(Some(phone))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required_fields() -> CoreError {
    CoreError::MissingField("Name, age, and sex are required".to_string())
}
