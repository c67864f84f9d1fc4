use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_DOCS_DIR: &str = "./CARR Docs";
const DEFAULT_REPORTS_DIR: &str = "./reports";
const DEFAULT_EMAIL_FROM: &str = "DeepThought CARR Reports <noreply@ashubh.dev>";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub resend_api_key: String,
    /// Directory holding the rubric PDFs and the CARR template.
    pub docs_dir: PathBuf,
    /// Directory for transient rendered reports.
    pub reports_dir: PathBuf,
    pub email_from: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            resend_api_key: require_env("RESEND_API_KEY")?,
            docs_dir: env_or("CARR_DOCS_DIR", DEFAULT_DOCS_DIR).into(),
            reports_dir: env_or("REPORTS_DIR", DEFAULT_REPORTS_DIR).into(),
            email_from: env_or("EMAIL_FROM", DEFAULT_EMAIL_FROM),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
