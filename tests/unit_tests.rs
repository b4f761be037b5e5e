// Unit tests for Volunteer Match

use std::collections::HashSet;

use volunteer_match::core::{
    normalize, similarity, similarity_or_zero, strip_needed_suffix, travel_score,
    InterestInferencer, SimilarityError, StopWordSet, DEFAULT_TRAVEL_SCALE,
};
use volunteer_match::core::scoring::calculate_match_score;
use volunteer_match::models::{Request, ScoringWeights, TravelPolicy, Volunteer};

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn travel(volunteer_city: &str, minutes: u32, reachable: &[&str]) -> f64 {
    travel_score(
        volunteer_city,
        "vantaa",
        minutes,
        &set(reachable),
        &TravelPolicy::default(),
        DEFAULT_TRAVEL_SCALE,
    )
}

#[test]
fn test_normalize_label() {
    assert_eq!(normalize("ChildCareSupport"), "child care support");
    assert_eq!(normalize("Tutoring"), "tutoring");
}

#[test]
fn test_request_title_preprocessing() {
    let title = strip_needed_suffix("Child care support needed");
    assert_eq!(title, "Child care support");
}

#[test]
fn test_similarity_symmetric() {
    let stop_words = StopWordSet::english();
    let texts = [
        "meal delivery",
        "help with the meal delivery",
        "elderly care",
        "care of elderly people at home",
        "gardening",
    ];

    for a in texts {
        for b in texts {
            assert_eq!(
                similarity(a, b, &stop_words).unwrap(),
                similarity(b, a, &stop_words).unwrap()
            );
        }
    }
}

#[test]
fn test_similarity_identity() {
    let stop_words = StopWordSet::english();
    assert_eq!(similarity("food bank", "food bank", &stop_words).unwrap(), 1.0);
}

#[test]
fn test_similarity_degenerate_input_clamped() {
    let stop_words = StopWordSet::english();

    assert!(matches!(
        similarity("", "meal delivery", &stop_words),
        Err(SimilarityError::UndefinedSimilarity(_))
    ));
    assert_eq!(similarity_or_zero("meal delivery", "of the", &stop_words), 0.0);
}

#[test]
fn test_travel_short_boundary() {
    // in range: 10 is not willing, 11 is
    assert_eq!(travel("espoo", 10, &["vantaa"]), 10.0);
    assert_eq!(travel("espoo", 11, &["vantaa"]), 20.0);
    // out of range
    assert_eq!(travel("espoo", 10, &[]), 0.0);
    assert_eq!(travel("espoo", 11, &[]), 4.0);
}

#[test]
fn test_travel_long_boundary() {
    assert_eq!(travel("oulu", 120, &[]), 4.0);
    assert_eq!(travel("oulu", 121, &[]), 10.0);
}

#[test]
fn test_same_city_ignores_readiness() {
    assert_eq!(travel("vantaa", 0, &[]), 20.0);
}

#[test]
fn test_inferencer_with_controlled_stop_words() {
    let stop_words = StopWordSet::new(["help"]);
    let inferencer = InterestInferencer::new(0.49, std::sync::Arc::new(stop_words));
    let interests = vec!["gardening".to_string(), "garden help".to_string()];

    // "garden help" reduces to {garden}, same as the title
    let inferred = inferencer.infer("garden", &interests);

    assert_eq!(inferred.map(String::as_str), Some("garden help"));
}

#[test]
fn test_only_perfect_pair_scores_one() {
    let request = Request {
        id: "r1".to_string(),
        title: "Meal Delivery".to_string(),
        city_id: "vantaa".to_string(),
        skills: vec!["cook".to_string(), "drive".to_string()],
        start_date: None,
        end_date: None,
    };
    let perfect = Volunteer {
        id: "v1".to_string(),
        city_id: "vantaa".to_string(),
        travel_readiness: 0,
        skills: set(&["cook", "drive"]),
        interests: set(&["meal delivery"]),
        reachable_cities: HashSet::new(),
    };
    let in_range = Volunteer {
        city_id: "espoo".to_string(),
        reachable_cities: set(&["vantaa"]),
        ..perfect.clone()
    };

    let weights = ScoringWeights::default();
    let policy = TravelPolicy::default();

    let top = calculate_match_score(&request, Some("meal delivery"), &perfect, &weights, &policy);
    let near = calculate_match_score(&request, Some("meal delivery"), &in_range, &weights, &policy);

    assert_eq!(top.total, 1.0);
    assert!(near.total < 1.0);
    assert_eq!(near.travel, 10.0);
}
