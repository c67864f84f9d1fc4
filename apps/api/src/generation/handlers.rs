//! Axum route handlers for the CARR generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::pipeline::process_submission;
use crate::models::submission::{DimensionResponses, GenerateCarrRequest, GenerateCarrResponse};
use crate::rubric::is_valid_dimension_name;
use crate::state::AppState;

const INVALID_PAYLOAD: &str = "Invalid payload. Expecting email and responsesByDimension.";
const SUCCESS_MESSAGE: &str = "CARR report generated and emailed successfully.";

/// POST /generate-carr
///
/// Generates one report per dimension, renders the PDF, emails it to the
/// candidate and removes the local copy.
pub async fn handle_generate_carr(
    State(state): State<AppState>,
    payload: Result<Json<GenerateCarrRequest>, JsonRejection>,
) -> Result<Json<GenerateCarrResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!("{INVALID_PAYLOAD} ({})", rejection.body_text()))
    })?;
    let (email, responses) = validate_request(request)?;

    let span = info_span!("generate_carr", request_id = %Uuid::new_v4(), email = %email);
    async {
        info!(dimensions = responses.len(), "Processing CARR request");
        process_submission(&state, &email, &responses).await
    }
    .instrument(span)
    .await?;

    Ok(Json(GenerateCarrResponse {
        message: SUCCESS_MESSAGE.to_string(),
    }))
}

/// Requires a non-empty `email`, a present `responsesByDimension`, and dimension
/// names that resolve to a file inside the docs directory.
fn validate_request(
    request: GenerateCarrRequest,
) -> Result<(String, Vec<DimensionResponses>), AppError> {
    let (email, responses) = match (request.email, request.responses_by_dimension) {
        (Some(email), Some(responses)) if !email.trim().is_empty() => (email, responses),
        _ => return Err(AppError::Validation(INVALID_PAYLOAD.to_string())),
    };

    if let Some(bad) = responses
        .iter()
        .find(|entry| !is_valid_dimension_name(&entry.dimension))
    {
        return Err(AppError::Validation(format!(
            "Invalid dimension name: {:?}",
            bad.dimension
        )));
    }

    Ok((email, responses))
}
