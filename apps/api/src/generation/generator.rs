//! CARR report generation — one LLM call per dimension, strictly in order.
//!
//! Flow: extract template → for each dimension: extract rubric → build prompt →
//!       generate → collect `Report`.
//!
//! A failed generation call does not abort the loop: its error becomes the
//! dimension's report text (`"error: ..."`) and is printed into the PDF. A rubric
//! or template that cannot be read aborts the whole request.

use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::prompts::build_carr_prompt;
use crate::llm_client::TextGenerator;
use crate::models::report::{CarrResult, Report};
use crate::models::submission::DimensionResponses;
use crate::rubric::{is_valid_dimension_name, ReferenceDocs, TextExtractor};

/// Generates every dimension's report for one candidate.
///
/// Calls are awaited one at a time so reports come back in submission order.
pub async fn generate_carr_reports(
    email: &str,
    responses: &[DimensionResponses],
    extractor: &dyn TextExtractor,
    generator: &dyn TextGenerator,
    docs: &ReferenceDocs,
) -> Result<CarrResult, AppError> {
    let template_text = extractor.extract_text(&docs.template_path()).await?;
    let mut reports = Vec::with_capacity(responses.len());

    if let Some(bad) = responses
        .iter()
        .find(|entry| !is_valid_dimension_name(&entry.dimension))
    {
        return Err(AppError::Validation(format!(
            "Invalid dimension name: {:?}",
            bad.dimension
        )));
    }

    for entry in responses {
        info!("Generating report for: {}", entry.dimension);

        let rubric_text = extractor
            .extract_text(&docs.rubric_path(&entry.dimension))
            .await
            .map_err(|e| {
                error!("Error generating CARR for {}: {e}", entry.dimension);
                e
            })?;

        let prompt = build_carr_prompt(
            &entry.dimension,
            &entry.candidate_answers,
            &rubric_text,
            &template_text,
        );

        let report = match generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("LLM call failed for {}: {e}", entry.dimension);
                format!("error: {e}")
            }
        };

        reports.push(Report {
            dimension: entry.dimension.clone(),
            report,
        });
        info!("Completed: {}", entry.dimension);
    }

    Ok(CarrResult {
        email: email.to_string(),
        reports,
    })
}
