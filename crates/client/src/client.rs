//! HTTP client for `POST /api/reimbursements`.
//!
//! Wraps the submit endpoint using [`reqwest`]. Input that fails the form
//! rules is rejected locally and never reaches the network.

use chrono::NaiveDate;
use reimburse_core::form::{FormErrors, FormInput};
use reimburse_core::receipt;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Path of the submit endpoint relative to the server's base URL.
const SUBMIT_PATH: &str = "/api/reimbursements";

/// Record returned by the server after a successful submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedReimbursement {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub receipt_file: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Errors from submitting a reimbursement request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form did not pass validation; nothing was sent.
    #[error("Invalid form: {0}")]
    Invalid(#[from] FormErrors),

    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server rejected submission ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client for one reimbursement server.
pub struct ReimbursementClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReimbursementClient {
    /// Create a client for the server at `base_url`, e.g. `http://host:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Full URL of the submit endpoint.
    pub fn submit_url(&self) -> String {
        format!("{}{SUBMIT_PATH}", self.base_url)
    }

    /// Validate `input` and submit it as a multipart request.
    pub async fn submit(&self, input: &FormInput) -> Result<SubmittedReimbursement, ClientError> {
        input.check()?;
        let form = build_form(input)?;

        let response = self
            .client
            .post(self.submit_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Assemble the multipart body. Only called on checked input.
fn build_form(input: &FormInput) -> Result<Form, ClientError> {
    let mut form = Form::new()
        .text("date", input.date.clone())
        .text("amount", input.amount.trim().to_string())
        .text("description", input.description.clone());

    if let Some(upload) = &input.receipt {
        let part = Part::bytes(upload.data.clone())
            .file_name(upload.file_name.clone())
            .mime_str(receipt::content_type_for(&upload.file_name))?;
        form = form.part("receipt", part);
    }
    Ok(form)
}
