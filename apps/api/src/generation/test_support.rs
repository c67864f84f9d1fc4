//! Stub collaborators shared by the generation, pipeline and route tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::llm_client::{LlmError, TextGenerator};
use crate::mailer::{DeliveryError, OutgoingReport, ReportMailer};
use crate::models::submission::DimensionResponses;
use crate::rubric::{ExtractError, TextExtractor};
use crate::state::AppState;

pub const SIX_SECTION_REPORT: &str = "1. CSA Score: L4 – Self-Designer (UBS: Strategist).\n\
    2. CSA Summary: The candidate plans deliberately and explains trade-offs.\n\
    3. RCA (Root Cause Analysis): Hesitation to delegate under time pressure.\n\
    4. Growth Nudge: Hand one recurring decision to a teammate this quarter.\n\
    5. Role Readiness Mapping: Strategist, given the consistent long-range framing.\n\
    6. Suggested Milestone or Drill: Facilitate a cross-team planning session.";

/// Returns a fixed report, or fails every call, and records every prompt.
pub struct StubGenerator {
    response: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn fixed(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone().ok_or(LlmError::NoCandidates)
    }
}

/// Returns `"text of {file name}"`, failing for any file whose name contains `fail_on`.
#[derive(Default)]
pub struct StubExtractor {
    pub fail_on: Option<String>,
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if let Some(fail_on) = &self.fail_on {
            if name.contains(fail_on.as_str()) {
                return Err(ExtractError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                });
            }
        }
        Ok(format!("text of {name}"))
    }
}

/// What the stub mailer saw for one send.
#[derive(Debug, Clone)]
pub struct SentReport {
    pub to: String,
    pub filename: String,
    pub content: Vec<u8>,
    /// Whether the report file was on disk while it was being sent.
    pub file_existed: bool,
}

pub struct StubMailer {
    succeed: bool,
    reports_dir: PathBuf,
    pub sent: Mutex<Vec<SentReport>>,
}

impl StubMailer {
    pub fn new(succeed: bool, reports_dir: &Path) -> Self {
        Self {
            succeed,
            reports_dir: reports_dir.to_path_buf(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReportMailer for StubMailer {
    async fn send(&self, report: OutgoingReport) -> Result<String, DeliveryError> {
        let file_existed = self.reports_dir.join(&report.attachment.filename).exists();
        self.sent.lock().unwrap().push(SentReport {
            to: report.to.clone(),
            filename: report.attachment.filename.clone(),
            content: report.attachment.content.to_vec(),
            file_existed,
        });
        if self.succeed {
            Ok("stub-message-id".to_string())
        } else {
            Err(DeliveryError::Api {
                status: 422,
                message: "stub rejected the message".to_string(),
            })
        }
    }
}

pub fn test_config(reports_dir: &Path) -> Config {
    Config {
        gemini_api_key: "test-gemini-key".to_string(),
        resend_api_key: "test-resend-key".to_string(),
        docs_dir: PathBuf::from("docs"),
        reports_dir: reports_dir.to_path_buf(),
        email_from: "CARR Reports <noreply@example.com>".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(
    reports_dir: &Path,
    generator: StubGenerator,
    extractor: StubExtractor,
    mail_succeeds: bool,
) -> (AppState, Arc<StubMailer>) {
    let mailer = Arc::new(StubMailer::new(mail_succeeds, reports_dir));
    let state = AppState {
        generator: Arc::new(generator),
        extractor: Arc::new(extractor),
        mailer: mailer.clone(),
        config: test_config(reports_dir),
        page_config: default_page_config(),
    };
    (state, mailer)
}

pub fn answers(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(q, a)| (q.to_string(), json!(a)))
        .collect()
}

pub fn dimension(name: &str) -> DimensionResponses {
    DimensionResponses {
        dimension: name.to_string(),
        candidate_answers: answers(&[("Q1", "A1")]),
    }
}
