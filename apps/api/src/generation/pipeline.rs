//! Request pipeline: generate → lay out → render → save → send → delete.
//!
//! A request either fully succeeds or fails as a whole. The saved report is
//! deleted after the send attempt whether or not the send succeeded.

use std::path::Path;

use bytes::Bytes;
use tracing::{error, info};

use crate::artifacts::{delete_report, save_report};
use crate::errors::AppError;
use crate::generation::generator::generate_carr_reports;
use crate::layout::{layout_document, PageConfig};
use crate::mailer::{Attachment, OutgoingReport, REPORT_BODY, REPORT_SUBJECT};
use crate::models::report::CarrResult;
use crate::models::submission::DimensionResponses;
use crate::render::render_pdf;
use crate::rubric::ReferenceDocs;
use crate::state::AppState;

/// Runs one candidate submission end to end.
pub async fn process_submission(
    state: &AppState,
    email: &str,
    responses: &[DimensionResponses],
) -> Result<(), AppError> {
    let docs = ReferenceDocs::new(&state.config.docs_dir);
    let result = generate_carr_reports(
        email,
        responses,
        state.extractor.as_ref(),
        state.generator.as_ref(),
        &docs,
    )
    .await?;

    let pdf_bytes = render_report(result, state.page_config.clone()).await?;
    let path = save_report(&state.config.reports_dir, email, &pdf_bytes).await?;
    info!("Report saved: {}", path.display());

    let sent = send_report(state, email, &path).await;
    delete_report(&path).await;

    if sent {
        Ok(())
    } else {
        Err(AppError::Delivery)
    }
}

/// Lays out and serializes the report on a blocking thread.
async fn render_report(result: CarrResult, config: PageConfig) -> Result<Vec<u8>, AppError> {
    let rendered = tokio::task::spawn_blocking(move || {
        let doc = layout_document(&result.email, &result.reports, &config);
        render_pdf(&doc, &config)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed rendering report: {e}")))?;

    Ok(rendered?)
}

/// Reads the saved report and hands it to the mailer. Any failure is logged and
/// reported as `false`.
async fn send_report(state: &AppState, email: &str, path: &Path) -> bool {
    let content = match tokio::fs::read(path).await {
        Ok(bytes) => Bytes::from(bytes),
        Err(e) => {
            error!("Failed to read report {} for sending: {e}", path.display());
            return false;
        }
    };
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let report = OutgoingReport {
        from: state.config.email_from.clone(),
        to: email.to_string(),
        subject: REPORT_SUBJECT.to_string(),
        text: REPORT_BODY.to_string(),
        attachment: Attachment { filename, content },
    };

    match state.mailer.send(report).await {
        Ok(_) => true,
        Err(e) => {
            error!("Resend failed: {e}");
            false
        }
    }
}
