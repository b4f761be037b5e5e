use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Normalized interest label, e.g. `"meal delivery"`
pub type InterestLabel = String;

/// Beneficiary service request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    pub id: String,
    pub title: String,
    #[validate(length(min = 1))]
    #[serde(rename = "cityId", alias = "city_id")]
    pub city_id: String,
    /// Required skills, in the order the request lists them
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "startDate", alias = "start_date", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", alias = "end_date", default)]
    pub end_date: Option<NaiveDate>,
}

impl Request {
    /// Whether the request's open window contains `date`.
    /// Missing bounds are treated as open-ended.
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        let started = self.start_date.map_or(true, |start| start <= date);
        let not_ended = self.end_date.map_or(true, |end| date <= end);
        started && not_ended
    }
}

/// Volunteer profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Volunteer {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "cityId", alias = "city_id")]
    pub city_id: String,
    /// Minutes the volunteer is willing to travel
    #[serde(rename = "travelReadiness", alias = "travel_readiness", default)]
    pub travel_readiness: u32,
    #[serde(default)]
    pub skills: HashSet<String>,
    #[serde(default)]
    pub interests: HashSet<InterestLabel>,
    /// Cities the volunteer declared as reachable (the volunteer range)
    #[serde(rename = "reachableCities", alias = "reachable_cities", default)]
    pub reachable_cities: HashSet<String>,
}

/// Volunteer application to a request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Application {
    #[validate(length(min = 1))]
    #[serde(rename = "requestId", alias = "request_id")]
    pub request_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "volunteerId", alias = "volunteer_id")]
    pub volunteer_id: String,
    #[serde(rename = "isValid", alias = "is_valid", default)]
    pub is_valid: bool,
}

/// Per-pair score split into its weighted components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub travel: f64,
    pub interest: f64,
    /// Sum of the components divided by the maximum attainable sum, in `[0, 1]`
    pub total: f64,
}

/// Transient score of a (request, volunteer) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "volunteerId")]
    pub volunteer_id: String,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
}

/// Ranked shortlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "volunteerId")]
    pub volunteer_id: String,
    pub score: f64,
}

/// Maximum points of each sub-score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub travel: f64,
    pub interest: f64,
}

impl ScoringWeights {
    /// Denominator used to normalize totals into `[0, 1]`
    #[inline]
    pub fn max_total(&self) -> f64 {
        self.skill + self.travel + self.interest
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 40.0,
            travel: 20.0,
            interest: 20.0,
        }
    }
}

/// Thresholds of the travel feasibility rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelPolicy {
    /// Readiness strictly above this counts as willing to travel
    pub short_minutes: u32,
    /// Readiness strictly above this counts as willing to travel far
    pub long_minutes: u32,
    /// Score for a willing volunteer outside their range
    pub near_flat: f64,
}

impl Default for TravelPolicy {
    fn default() -> Self {
        Self {
            short_minutes: 10,
            long_minutes: 120,
            near_flat: 4.0,
        }
    }
}
