//! Rust client for the driver applications API.

mod client;

pub use client::{
    ApplicationRecord, ApplicationRequest, DriverApiClient, SdkError, ServiceStatus,
    SubmissionReceipt,
};
