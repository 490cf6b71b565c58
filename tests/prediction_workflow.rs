//! Integration tests for the elo-predictor library
//!
//! These tests validate the public API end to end, including:
//! - The full prediction pipeline (delta -> probability -> projection)
//! - Both prediction entry points converging on the same merge rule
//! - K-factor estimation over a realistic match history
//! - Error handling for malformed histories
//! - Serialization of results for the presentation layer

use elo_predictor::{
    implied_k_factor, rating_delta, win_probability, EloConfig, EloPredictor, KFactorEstimate,
    MatchOutcome, PredictionError, PredictionResult,
};

/// A season of ranked matches for one player, as the presentation layer
/// would hand it over
fn ranked_season() -> (Vec<i32>, Vec<MatchOutcome>, Vec<i32>, Vec<i32>) {
    let own = vec![2783, 2761, 2738, 2760, 2783, 2762, 2739];
    let outcomes = [false, false, true, true, false, false, false]
        .iter()
        .map(|&won| MatchOutcome::from(won))
        .collect();
    let first_team = vec![2833, 2773, 2767, 2712, 2760, 2774, 2759];
    let second_team = vec![2842, 2763, 2758, 2721, 2780, 2769, 2761];

    (own, outcomes, first_team, second_team)
}

#[test]
fn test_curve_pipeline() {
    let delta = rating_delta(2833, 2842);
    assert_eq!(delta, -9);

    assert_eq!(win_probability(0), 0.5);

    // The underdog's probability feeds both projections
    let p = win_probability(delta);
    let predictor = EloPredictor::default();
    let result = predictor.predict_from_probability(2783, p);
    assert_eq!(result.win, 2806);
    assert_eq!(result.lose, 2761);
    assert_eq!(result.prediction, result.lose);
}

#[test]
fn test_prediction_by_probability() {
    let predictor = EloPredictor::default();

    let result = predictor.predict_from_probability(2783, 0.4712494361);
    assert_eq!(
        result,
        PredictionResult {
            win: 2807,
            lose: 2762,
            prediction: 2762,
        }
    );
}

#[test]
fn test_prediction_by_teams() {
    let predictor = EloPredictor::default();

    let result = predictor.predict_from_teams(2762, 2774, 2769);
    assert_eq!(
        result,
        PredictionResult {
            win: 2784,
            lose: 2739,
            prediction: 2784,
        }
    );
}

#[test]
fn test_entry_points_agree() {
    let predictor = EloPredictor::default();

    let by_teams = predictor.predict_from_teams(2762, 2774, 2769);
    let p = win_probability(rating_delta(2774, 2769));
    let by_probability = predictor.predict_from_probability(2762, p);

    assert_eq!(by_teams, by_probability);
}

#[test]
fn test_even_match_prediction_is_input_rating() {
    let predictor = EloPredictor::default();

    let result = predictor.predict_from_teams(2783, 2800, 2800);
    assert_eq!(result.prediction, 2783);
    assert_ne!(result.prediction, result.win);
    assert_ne!(result.prediction, result.lose);
}

#[test]
fn test_k_factor_estimation_over_season() {
    let (own, outcomes, first_team, second_team) = ranked_season();

    let estimate = implied_k_factor(&own, &outcomes, &first_team, &second_team).unwrap();
    assert_eq!(
        estimate,
        KFactorEstimate {
            average: 45,
            actual: 45,
        }
    );
}

#[test]
fn test_custom_k_factor() {
    let predictor = EloPredictor::new(EloConfig::with_k_factor(32)).unwrap();

    // p = 0.5 splits K evenly between the two projections
    let result = predictor.predict_from_probability(2000, 0.5);
    assert_eq!(result.win, 2016);
    assert_eq!(result.lose, 1984);
}

#[test]
fn test_truncated_history_is_rejected() {
    let (own, outcomes, first_team, second_team) = ranked_season();

    let err = implied_k_factor(&own[..5], &outcomes, &first_team, &second_team).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PredictionError>(),
        Some(PredictionError::ShapeMismatch { own: 5, .. })
    ));

    let err = implied_k_factor(
        &own[..1],
        &outcomes[..1],
        &first_team[..1],
        &second_team[..1],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PredictionError>(),
        Some(PredictionError::InsufficientHistory { observed: 1 })
    ));
}

#[test]
fn test_results_serialize_for_presentation() {
    let predictor = EloPredictor::default();

    let prediction = predictor.predict_from_teams(2762, 2774, 2769);
    let json = serde_json::to_value(prediction).unwrap();
    assert_eq!(json["win"], 2784);
    assert_eq!(json["lose"], 2739);
    assert_eq!(json["prediction"], 2784);

    let (own, outcomes, first_team, second_team) = ranked_season();
    let estimate = implied_k_factor(&own, &outcomes, &first_team, &second_team).unwrap();
    let json = serde_json::to_value(estimate).unwrap();
    assert_eq!(json["average"], 45);
    assert_eq!(json["actual"], 45);
}
