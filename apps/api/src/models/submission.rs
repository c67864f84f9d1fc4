use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /generate-carr`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error (400) rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCarrRequest {
    pub email: Option<String>,
    pub responses_by_dimension: Option<Vec<DimensionResponses>>,
}

/// The candidate's answers for one dimension.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionResponses {
    pub dimension: String,
    /// Question → answer, in the order the form submitted them.
    #[serde(default)]
    pub candidate_answers: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateCarrResponse {
    pub message: String,
}
