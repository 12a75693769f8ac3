//! Tests for configuration validation.
//!
//! Invalid staircase settings are rejected when a controller or a session
//! is created, with the specific reason.

use staircase::{
    ComparisonSelector, Config, ConfigError, ListeningSession, SessionError, SnrRange,
    StaircaseConfig, StaircaseController, StaircaseError,
};

fn reset_err(config: StaircaseConfig) -> ConfigError {
    match StaircaseController::reset(config) {
        Err(StaircaseError::InvalidConfig(e)) => e,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

// =============================================================================
// RANGE
// =============================================================================

#[test]
fn inverted_range_rejected() {
    let err = reset_err(StaircaseConfig::new(SnrRange::new(21, 1), 10));
    assert_eq!(err, ConfigError::InvertedRange { start: 21, end: 1 });
}

#[test]
fn single_level_range_valid() {
    let controller = StaircaseController::reset(StaircaseConfig::new(SnrRange::new(5, 5), 5));
    assert!(controller.is_ok());
}

#[test]
fn start_below_range_rejected() {
    let err = reset_err(StaircaseConfig::new(SnrRange::new(30, 50), 29));
    assert!(matches!(err, ConfigError::StartOutOfRange { start_snr: 29, .. }));
}

#[test]
fn start_above_range_rejected() {
    let err = reset_err(StaircaseConfig::new(SnrRange::new(30, 50), 51));
    assert!(matches!(err, ConfigError::StartOutOfRange { start_snr: 51, .. }));
}

#[test]
fn start_at_range_edges_valid() {
    assert!(StaircaseController::reset(StaircaseConfig::new(SnrRange::new(1, 21), 1)).is_ok());
    assert!(StaircaseController::reset(StaircaseConfig::new(SnrRange::new(1, 21), 21)).is_ok());
}

// =============================================================================
// LIMITS
// =============================================================================

#[test]
fn zero_max_questions_rejected() {
    let err = reset_err(StaircaseConfig::default().max_questions(0));
    assert_eq!(err, ConfigError::ZeroMaxQuestions);
}

#[test]
fn zero_reversals_rejected() {
    let err = reset_err(StaircaseConfig::default().reversals_to_finish(0));
    assert_eq!(err, ConfigError::ZeroReversalsToFinish);
}

#[test]
fn one_question_valid() {
    let controller = StaircaseController::reset(StaircaseConfig::default().max_questions(1));
    assert!(controller.is_ok());
}

// =============================================================================
// SESSION
// =============================================================================

#[test]
fn session_rejects_invalid_config() {
    let config = Config::quality_comparison().snr_range(SnrRange::new(30, 50), 10);
    let selector = ComparisonSelector::for_config(&config);
    let err = ListeningSession::new(config, selector).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Staircase(StaircaseError::InvalidConfig(
            ConfigError::StartOutOfRange { .. }
        ))
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let err = reset_err(StaircaseConfig::new(SnrRange::new(1, 21), 0));
    let msg = err.to_string();
    assert!(msg.contains('0'), "message should name the level: {}", msg);
}
