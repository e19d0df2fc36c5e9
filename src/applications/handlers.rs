//! `POST /applications` and `GET /applications`.

use axum::{extract::State, http::StatusCode, Json};

use crate::applications::model::{ApplicationSubmission, DriverApplication, SubmissionAccepted};
use crate::applications::validation::validate;
use crate::http::error::ApiError;
use crate::http::extract::JsonBody;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Validate, normalize and insert one submission.
pub async fn submit_application(
    State(state): State<AppState>,
    JsonBody(submission): JsonBody<ApplicationSubmission>,
) -> Result<(StatusCode, Json<SubmissionAccepted>), ApiError> {
    let application = validate(submission).inspect_err(|e| {
        tracing::debug!(reason = %e, "Rejected application");
        metrics::record_submission("rejected");
    })?;

    let application_id = state.store.insert(&application).await.inspect_err(|e| {
        tracing::error!(error = %e, "Error inserting application");
        metrics::record_submission("failed");
    })?;

    metrics::record_submission("accepted");
    tracing::info!(application_id, "Application submitted");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionAccepted {
            message: "Application submitted successfully.",
            application_id,
        }),
    ))
}

/// Every stored application, newest first.
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverApplication>>, ApiError> {
    let applications = state
        .store
        .list_newest_first()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching applications"))?;

    tracing::debug!(count = applications.len(), "Listed applications");
    Ok(Json(applications))
}
