//! Volunteer Match - matching and scoring engine for volunteer coordination
//!
//! This library scores volunteers against beneficiary service requests and
//! returns a ranked shortlist per request. Each (request, volunteer) pair is
//! scored on skill overlap, travel feasibility and interest match; the interest
//! a request implies is inferred from its title by text similarity.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Eligibility, InterestInferencer, Matcher, StopWordSet, StopWords};
pub use crate::models::{
    Dataset, MatchingReport, RankedCandidate, Request, ScoringWeights, Shortlist, TravelPolicy,
    Volunteer,
};
