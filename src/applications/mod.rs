//! Driver application intake.
//!
//! # Data Flow
//! ```text
//! POST /applications
//!     → http::extract::JsonBody (decode into ApplicationSubmission)
//!     → validation.rs (required fields, experience, start date; normalize)
//!     → NewApplication
//!     → db::store::ApplicationStore::insert
//!     → 201 {message, applicationId}
//!
//! GET /applications
//!     → db::store::ApplicationStore::list_newest_first
//!     → 200 [DriverApplication, ...]
//! ```

pub mod handlers;
pub mod model;
pub mod validation;

pub use model::{
    ApplicationSubmission, DriverApplication, InsuranceFlag, NewApplication, SubmissionAccepted,
};
pub use validation::{validate, ValidationError};
