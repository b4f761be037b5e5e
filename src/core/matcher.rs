use chrono::NaiveDate;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{
    eligibility::Eligibility, interest::InterestInferencer, scoring::calculate_match_score,
};
use crate::models::{
    Dataset, InterestLabel, MatchingReport, RankedCandidate, Request, ScoreRecord, ScoringWeights,
    Shortlist, TravelPolicy, Volunteer,
};

/// Number of candidates suggested per request
pub const DEFAULT_TOP_K: usize = 5;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Interest inference, once per request
/// 2. Scoring of every eligible volunteer
/// 3. Stable top-K selection
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    travel_policy: TravelPolicy,
    inferencer: InterestInferencer,
    top_k: usize,
}

impl Matcher {
    pub fn new(
        weights: ScoringWeights,
        travel_policy: TravelPolicy,
        inferencer: InterestInferencer,
        top_k: usize,
    ) -> Self {
        Self {
            weights,
            travel_policy,
            inferencer,
            top_k,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            ScoringWeights::default(),
            TravelPolicy::default(),
            InterestInferencer::default(),
            DEFAULT_TOP_K,
        )
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Interest label implied by the request title, if any
    pub fn infer_interest<'a>(
        &self,
        request: &Request,
        interests: &'a [InterestLabel],
    ) -> Option<&'a InterestLabel> {
        self.inferencer.infer(&request.title, interests)
    }

    /// Score every eligible volunteer against a request, in input order
    pub fn score_candidates(
        &self,
        request: &Request,
        inferred_interest: Option<&str>,
        eligible: &[&Volunteer],
    ) -> Vec<ScoreRecord> {
        eligible
            .iter()
            .map(|volunteer| {
                let breakdown = calculate_match_score(
                    request,
                    inferred_interest,
                    volunteer,
                    &self.weights,
                    &self.travel_policy,
                );
                tracing::trace!(
                    "Request {} / volunteer {}: skill={} travel={} interest={} total={:.4}",
                    request.id,
                    volunteer.id,
                    breakdown.skill,
                    breakdown.travel,
                    breakdown.interest,
                    breakdown.total
                );
                ScoreRecord {
                    request_id: request.id.clone(),
                    volunteer_id: volunteer.id.clone(),
                    total_score: breakdown.total,
                }
            })
            .collect()
    }

    /// Rank the eligible volunteers for a request
    ///
    /// # Returns
    /// At most `top_k` candidates, best first. Equal scores keep their input
    /// order.
    pub fn rank(
        &self,
        request: &Request,
        eligible: &[&Volunteer],
        interests: &[InterestLabel],
    ) -> Vec<RankedCandidate> {
        let inferred = self.infer_interest(request, interests);
        self.rank_with_interest(request, inferred.map(String::as_str), eligible)
    }

    /// Rank with an interest already inferred for this request
    pub fn rank_with_interest(
        &self,
        request: &Request,
        inferred_interest: Option<&str>,
        eligible: &[&Volunteer],
    ) -> Vec<RankedCandidate> {
        let records = self.score_candidates(request, inferred_interest, eligible);
        select_top(records, self.top_k)
    }

    /// Rank every request against its eligible volunteers
    ///
    /// When `open_on` is set, only requests open on that date are ranked.
    /// Shortlists follow the order of `requests`.
    pub fn rank_all(
        &self,
        requests: &[Request],
        volunteers: &[Volunteer],
        eligibility: &Eligibility,
        interests: &[InterestLabel],
        open_on: Option<NaiveDate>,
    ) -> MatchingReport {
        let open: Vec<&Request> = requests
            .iter()
            .filter(|request| open_on.map_or(true, |date| request.is_open_on(date)))
            .collect();

        tracing::info!(
            "Ranking {} of {} requests against {} volunteers",
            open.len(),
            requests.len(),
            volunteers.len()
        );

        let shortlist_for = |request: &&Request| -> (Shortlist, usize) {
            let eligible = eligibility.eligible_volunteers(&request.id, volunteers);
            let inferred = self.infer_interest(request, interests);
            let candidates =
                self.rank_with_interest(request, inferred.map(String::as_str), &eligible);

            tracing::debug!(
                "Request {}: inferred interest {:?}, {} eligible, {} shortlisted",
                request.id,
                inferred,
                eligible.len(),
                candidates.len()
            );

            let shortlist = Shortlist {
                request_id: request.id.clone(),
                inferred_interest: inferred.cloned(),
                candidates,
            };
            (shortlist, eligible.len())
        };

        #[cfg(feature = "parallel")]
        let ranked: Vec<(Shortlist, usize)> = open.par_iter().map(shortlist_for).collect();
        #[cfg(not(feature = "parallel"))]
        let ranked: Vec<(Shortlist, usize)> = open.iter().map(shortlist_for).collect();

        let scored_pairs: usize = ranked.iter().map(|(_, scored)| scored).sum();
        let shortlists: Vec<Shortlist> = ranked.into_iter().map(|(s, _)| s).collect();

        MatchingReport {
            total_requests: shortlists.len(),
            shortlists,
            top_k: self.top_k,
            scored_pairs,
            generated_at: chrono::Utc::now(),
        }
    }

    /// [`Matcher::rank_all`] over a loaded dataset
    pub fn rank_dataset(&self, dataset: &Dataset, open_on: Option<NaiveDate>) -> MatchingReport {
        let eligibility = Eligibility::from_applications(&dataset.applications);
        self.rank_all(
            &dataset.requests,
            &dataset.volunteers,
            &eligibility,
            &dataset.interests,
            open_on,
        )
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Keep the `limit` best records, descending by score
///
/// `sort_by` is stable, so ties stay in first-seen order.
fn select_top(mut records: Vec<ScoreRecord>, limit: usize) -> Vec<RankedCandidate> {
    records.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    records.truncate(limit);

    records
        .into_iter()
        .map(|record| RankedCandidate {
            volunteer_id: record.volunteer_id,
            score: record.total_score,
        })
        .collect()
}
