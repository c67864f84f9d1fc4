//! Report delivery over the Resend email API.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

pub const REPORT_SUBJECT: &str = "Your Career Acceleration Readiness Report";
pub const REPORT_BODY: &str = "Hi,\n\nAttached is your CARR report.\n\n– DeepThought Team";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resend API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A finished report on its way to the candidate.
#[derive(Debug, Clone)]
pub struct OutgoingReport {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub attachment: Attachment,
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content: Bytes,
}

/// Sends a report email; returns the provider's message id.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send(&self, report: OutgoingReport) -> Result<String, DeliveryError>;
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    attachments: Vec<SendEmailAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct SendEmailAttachment<'a> {
    filename: &'a str,
    /// Base64 of the file bytes.
    content: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Result<Self, DeliveryError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
        })
    }
}

fn build_request(report: &OutgoingReport) -> SendEmailRequest<'_> {
    SendEmailRequest {
        from: &report.from,
        to: vec![report.to.as_str()],
        subject: &report.subject,
        text: &report.text,
        attachments: vec![SendEmailAttachment {
            filename: &report.attachment.filename,
            content: STANDARD.encode(&report.attachment.content),
        }],
    }
}

#[async_trait]
impl ReportMailer for ResendMailer {
    async fn send(&self, report: OutgoingReport) -> Result<String, DeliveryError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&build_request(&report))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(DeliveryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendEmailResponse = response.json().await?;
        info!(id = %sent.id, to = %report.to, "Resend email sent");
        Ok(sent.id)
    }
}
