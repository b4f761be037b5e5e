// Model exports
pub mod dataset;
pub mod domain;
pub mod responses;

pub use dataset::Dataset;
pub use domain::{
    Application, InterestLabel, RankedCandidate, Request, ScoreBreakdown, ScoreRecord,
    ScoringWeights, TravelPolicy, Volunteer,
};
pub use responses::{MatchingReport, Shortlist};
