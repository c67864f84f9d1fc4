use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::llm_client::TextGenerator;
use crate::mailer::ReportMailer;
use crate::rubric::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds only immutable config and shared clients; each request's reports and
/// document are local to that request.
#[derive(Clone)]
pub struct AppState {
    /// Report text generator. Default: Gemini.
    pub generator: Arc<dyn TextGenerator>,
    /// Rubric/template reader. Default: pdf-extract.
    pub extractor: Arc<dyn TextExtractor>,
    /// Report delivery. Default: Resend.
    pub mailer: Arc<dyn ReportMailer>,
    pub config: Config,
    /// Page geometry and type sizes for the report paginator.
    pub page_config: PageConfig,
}
