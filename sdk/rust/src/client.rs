use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body for `POST /applications`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub vehicle_type: String,
    pub has_commercial_insurance: String, // "yes" or "no"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub message: String,
    pub application_id: u64,
}

/// A stored application as returned by `GET /applications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub vehicle_type: String,
    pub experience_years: u32,
    pub has_commercial_insurance: String,
    pub start_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer; `message` is the server's `{message}` field when present.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct DriverApiClient {
    client: Client,
    base_url: String,
}

impl DriverApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /`
    pub async fn status(&self) -> Result<ServiceStatus, SdkError> {
        let resp = self.client.get(format!("{}/", self.base_url)).send().await?;
        decode(resp).await
    }

    /// `POST /applications`
    pub async fn submit_application(
        &self,
        req: &ApplicationRequest,
    ) -> Result<SubmissionReceipt, SdkError> {
        let resp = self
            .client
            .post(format!("{}/applications", self.base_url))
            .json(req)
            .send()
            .await?;
        decode(resp).await
    }

    /// `GET /applications`, newest first.
    pub async fn list_applications(&self) -> Result<Vec<ApplicationRecord>, SdkError> {
        let resp = self
            .client
            .get(format!("{}/applications", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: for<'de> Deserialize<'de>>(resp: Response) -> Result<T, SdkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let text = resp.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    Err(SdkError::Api {
        status: status.as_u16(),
        message,
    })
}
