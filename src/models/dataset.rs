use serde::{Deserialize, Serialize};

use crate::models::domain::{Application, InterestLabel, Request, Volunteer};

/// In-memory tables consumed by a scoring run
///
/// Loaded once and treated as immutable for the duration of the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub requests: Vec<Request>,
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
    #[serde(default)]
    pub applications: Vec<Application>,
    /// Interest catalog, in catalog order
    #[serde(default)]
    pub interests: Vec<InterestLabel>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty() && self.volunteers.is_empty()
    }
}
