//! Driver application types: the raw submission, the validated record and
//! the stored row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw `POST /applications` body.
///
/// Every field is optional at the type level; presence is decided by
/// [`crate::applications::validation::validate`], not by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub vehicle_type: Option<String>,
    pub experience_years: Option<ExperienceInput>,
    pub has_commercial_insurance: Option<InsuranceAnswer>,
    pub start_date: Option<String>,
    pub notes: Option<String>,
}

/// `experienceYears` as sent by web forms: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExperienceInput {
    Number(f64),
    Text(String),
}

/// `hasCommercialInsurance` as sent by clients: `"yes"`/`"no"` or a checkbox boolean.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InsuranceAnswer {
    Text(String),
    Checked(bool),
}

impl InsuranceAnswer {
    /// Whether the answer counts as provided at all.
    pub fn is_present(&self) -> bool {
        match self {
            InsuranceAnswer::Text(text) => !text.trim().is_empty(),
            InsuranceAnswer::Checked(checked) => *checked,
        }
    }

    /// Only the exact answer `"yes"` maps to [`InsuranceFlag::Yes`]; padding
    /// or a different case does not.
    pub fn to_flag(&self) -> InsuranceFlag {
        match self {
            InsuranceAnswer::Text(text) if text == "yes" => InsuranceFlag::Yes,
            _ => InsuranceFlag::No,
        }
    }
}

/// Stored commercial-insurance answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceFlag {
    Yes,
    No,
}

impl InsuranceFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceFlag::Yes => "yes",
            InsuranceFlag::No => "no",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown insurance flag '{0}'")]
pub struct UnknownInsuranceFlag(pub String);

impl TryFrom<String> for InsuranceFlag {
    type Error = UnknownInsuranceFlag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "yes" => Ok(InsuranceFlag::Yes),
            "no" => Ok(InsuranceFlag::No),
            _ => Err(UnknownInsuranceFlag(value)),
        }
    }
}

/// A validated, normalized application ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub vehicle_type: String,
    pub experience_years: u32,
    pub has_commercial_insurance: InsuranceFlag,
    /// Sent to the store as given; the `DATE` column decides what it accepts.
    pub start_date: Option<String>,
    pub notes: Option<String>,
}

/// A row of `driver_applications`, serialized with its column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DriverApplication {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub vehicle_type: String,
    pub experience_years: u32,
    #[sqlx(try_from = "String")]
    pub has_commercial_insurance: InsuranceFlag,
    pub start_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `201` acknowledgment for an accepted submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAccepted {
    pub message: &'static str,
    pub application_id: u64,
}
