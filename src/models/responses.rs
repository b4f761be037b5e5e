use serde::{Deserialize, Serialize};

use crate::models::domain::RankedCandidate;

/// Top candidates for one request, best first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    #[serde(rename = "requestId")]
    pub request_id: String,
    /// Interest label inferred from the request title, if any
    #[serde(rename = "inferredInterest")]
    pub inferred_interest: Option<String>,
    pub candidates: Vec<RankedCandidate>,
}

/// Result of ranking every request in a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingReport {
    pub shortlists: Vec<Shortlist>,
    /// Shortlist length the run was configured for
    #[serde(rename = "topK")]
    pub top_k: usize,
    #[serde(rename = "totalRequests")]
    pub total_requests: usize,
    #[serde(rename = "scoredPairs")]
    pub scored_pairs: usize,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl MatchingReport {
    /// Shortlist for a request, if it was ranked in this run
    pub fn shortlist(&self, request_id: &str) -> Option<&Shortlist> {
        self.shortlists.iter().find(|s| s.request_id == request_id)
    }
}
