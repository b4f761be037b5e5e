// Core algorithm exports
pub mod eligibility;
pub mod interest;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod text;
pub mod travel;

pub use eligibility::Eligibility;
pub use interest::{InterestInferencer, DEFAULT_INTEREST_THRESHOLD};
pub use matcher::{Matcher, DEFAULT_TOP_K};
pub use scoring::calculate_match_score;
pub use similarity::{similarity, similarity_or_zero, SimilarityError, StopWordSet, StopWords};
pub use text::{normalize, strip_needed_suffix};
pub use travel::{travel_score, DEFAULT_TRAVEL_SCALE};
