/// LLM Client — the single point of entry for all Gemini API calls in the CARR service.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All LLM interactions go through the `TextGenerator` trait implemented here.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all report generation.
pub const MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Failure modes of a generation call. The `Display` text is what ends up in a
/// dimension's sentinel report (`"error: {e}"`).
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure. The request URL is stripped before this is built.
    #[error("{0}")]
    Http(reqwest::Error),

    #[error("{status} - {body}")]
    Api { status: u16, body: String },

    #[error("no candidates")]
    NoCandidates,

    #[error("no parts")]
    NoParts,

    #[error("empty response")]
    EmptyContent,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.without_url())
    }
}

/// Anything that turns a prompt into report text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the trimmed text of the first part of the first candidate.
    pub fn text(&self) -> Result<String, LlmError> {
        let candidate = self.candidates.first().ok_or(LlmError::NoCandidates)?;
        let part = candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.first())
            .ok_or(LlmError::NoParts)?;
        match part.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{MODEL}:generateContent")
    }

    /// The key travels in a header so it never appears in the request URL.
    fn request(&self, url: &str, body: &GenerateContentRequest<'_>) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Single call, no retry: a failed call becomes the dimension's sentinel report.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .request(&self.endpoint(), &request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text()?;
        debug!(chars = text.len(), "Gemini call succeeded");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_from_first_candidate_part_is_trimmed() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"  1. CSA Score: L3\n"},{"text":"ignored"}]}}]}"#,
        );
        assert_eq!(response.text().unwrap(), "1. CSA Score: L3");
    }

    #[test]
    fn test_text_without_candidates() {
        let response = parse(r#"{"candidates":[]}"#);
        assert!(matches!(response.text(), Err(LlmError::NoCandidates)));
        let response = parse(r#"{}"#);
        assert!(matches!(response.text(), Err(LlmError::NoCandidates)));
    }

    #[test]
    fn test_text_without_parts() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#);
        assert!(matches!(response.text(), Err(LlmError::NoParts)));
        let response = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(response.text(), Err(LlmError::NoParts)));
    }

    #[test]
    fn test_text_empty_part() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#);
        assert!(matches!(response.text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_error_display_matches_sentinel_format() {
        let err = LlmError::Api {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert_eq!(format!("error: {err}"), "error: 429 - quota exceeded");
        assert_eq!(format!("error: {}", LlmError::NoCandidates), "error: no candidates");
    }

    fn sample_body() -> GenerateContentRequest<'static> {
        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "prompt" }],
            }],
        }
    }

    #[test]
    fn test_api_key_sent_as_header_not_query() {
        let client = GeminiClient::new("SECRET_GEMINI_KEY".to_string()).unwrap();
        let request = client
            .request(&client.endpoint(), &sample_body())
            .build()
            .unwrap();
        assert!(request.url().query().is_none());
        assert!(!request.url().as_str().contains("SECRET_GEMINI_KEY"));
        assert_eq!(request.headers()[API_KEY_HEADER], "SECRET_GEMINI_KEY");
    }

    #[tokio::test]
    async fn test_transport_error_text_omits_url_and_key() {
        let client = GeminiClient::new("SECRET_GEMINI_KEY".to_string()).unwrap();
        // Nothing listens on the discard port, so the connect fails.
        let url = "http://127.0.0.1:9/v1beta/models/gemini-2.0-flash:generateContent?key=SECRET_GEMINI_KEY";
        let err = client
            .request(url, &sample_body())
            .send()
            .await
            .map_err(LlmError::from)
            .unwrap_err();

        let report_text = format!("error: {err}");
        assert!(matches!(err, LlmError::Http(_)));
        assert!(!report_text.contains("SECRET_GEMINI_KEY"), "{report_text}");
        assert!(!report_text.contains("for url"), "{report_text}");
    }

    #[test]
    fn test_endpoint_uses_hardcoded_model() {
        let client = GeminiClient::new("key".to_string()).unwrap();
        assert!(client.endpoint().ends_with("/gemini-2.0-flash:generateContent"));
    }
}
