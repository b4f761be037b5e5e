use crate::core::travel::travel_score;
use crate::models::{Request, ScoreBreakdown, ScoringWeights, TravelPolicy, Volunteer};

/// Calculate the fitness of a volunteer for a request
///
/// Scoring formula:
/// total = (
///     skill_score +       # share of required skills held * weights.skill
///     travel_score +      # travel feasibility, at most weights.travel
///     interest_score      # weights.interest if the inferred interest is held
/// ) / (weights.skill + weights.travel + weights.interest)
///
/// `inferred_interest` is computed once per request by the caller and reused
/// for every volunteer scored against it.
pub fn calculate_match_score(
    request: &Request,
    inferred_interest: Option<&str>,
    volunteer: &Volunteer,
    weights: &ScoringWeights,
    travel_policy: &TravelPolicy,
) -> ScoreBreakdown {
    let skill = calculate_skill_score(&request.skills, volunteer, weights.skill);

    let travel = travel_score(
        &volunteer.city_id,
        &request.city_id,
        volunteer.travel_readiness,
        &volunteer.reachable_cities,
        travel_policy,
        weights.travel,
    );

    let interest = match inferred_interest {
        Some(label) if volunteer.interests.contains(label) => weights.interest,
        _ => 0.0,
    };

    let max_total = weights.max_total();
    let total = if max_total > 0.0 {
        ((skill + travel + interest) / max_total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    ScoreBreakdown {
        skill,
        travel,
        interest,
        total,
    }
}

/// Share of the request's required skills the volunteer holds, scaled to `weight`
///
/// A request without required skills scores 0.
#[inline]
fn calculate_skill_score(required: &[String], volunteer: &Volunteer, weight: f64) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let matched = required
        .iter()
        .filter(|skill| volunteer.skills.contains(skill.as_str()))
        .count();

    matched as f64 / required.len() as f64 * weight
}
