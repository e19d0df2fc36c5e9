//! Submission validation and normalization.
//!
//! Pure: no I/O, no clock. Required fields are checked before
//! `experienceYears`. Email, phone and `startDate` are opaque strings; the
//! store is the only judge of whether a start date is a date.

use thiserror::Error;

use crate::applications::model::{
    ApplicationSubmission, ExperienceInput, InsuranceAnswer, NewApplication,
};

/// Client input errors. The `Display` text is returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields.")]
    MissingRequiredFields,

    #[error("experienceYears must be a non-negative number.")]
    InvalidExperienceYears,
}

/// Validate a raw submission and produce the normalized record to store.
pub fn validate(submission: ApplicationSubmission) -> Result<NewApplication, ValidationError> {
    let ApplicationSubmission {
        full_name,
        email,
        phone,
        city,
        state,
        vehicle_type,
        experience_years,
        has_commercial_insurance,
        start_date,
        notes,
    } = submission;

    let (
        Some(full_name),
        Some(email),
        Some(phone),
        Some(city),
        Some(state),
        Some(vehicle_type),
        Some(insurance),
    ) = (
        required(full_name),
        required(email),
        required(phone),
        required(city),
        required(state),
        required(vehicle_type),
        has_commercial_insurance.filter(InsuranceAnswer::is_present),
    )
    else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let experience_years = parse_experience(experience_years.as_ref())?;

    Ok(NewApplication {
        full_name,
        email,
        phone,
        city,
        state: state.to_uppercase(),
        vehicle_type,
        experience_years,
        has_commercial_insurance: insurance.to_flag(),
        start_date: start_date.filter(|text| !text.is_empty()),
        notes: notes.filter(|text| !text.is_empty()),
    })
}

/// Trimmed value of a required text field, or `None` when absent or blank.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Absent or null means zero years. Blank strings count as zero too.
///
/// Fractional values round half away from zero, like an integer column.
/// Values beyond `u32` are treated as invalid numbers.
fn parse_experience(input: Option<&ExperienceInput>) -> Result<u32, ValidationError> {
    let years = match input {
        None => return Ok(0),
        Some(ExperienceInput::Number(n)) => *n,
        Some(ExperienceInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>()
                    .map_err(|_| ValidationError::InvalidExperienceYears)?
            }
        }
    };

    if !years.is_finite() || years < 0.0 {
        return Err(ValidationError::InvalidExperienceYears);
    }
    let rounded = years.round();
    if rounded > f64::from(u32::MAX) {
        return Err(ValidationError::InvalidExperienceYears);
    }
    Ok(rounded as u32)
}
