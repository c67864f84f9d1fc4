use serde::{Deserialize, Serialize};

/// Raw AI-generated text for one competency dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub dimension: String,
    pub report: String,
}

/// Every dimension's report for one candidate, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrResult {
    pub email: String,
    pub reports: Vec<Report>,
}
