//! Scripted end-to-end runs with hand-computed reversals and thresholds.
//!
//! The script uses a range 1..=21 starting at 10 with lower levels harder,
//! and the answer sequence F T T T T F T T F F:
//!
//! | trial | level | answer | move | reversal |
//! |-------|-------|--------|------|----------|
//! | 1     | 10    | F      | 11   | 10       |
//! | 2     | 11    | T      | -    |          |
//! | 3     | 11    | T      | 10   | 11       |
//! | 4     | 10    | T      | -    |          |
//! | 5     | 10    | T      | 9    |          |
//! | 6     | 9     | F      | 10   | 9        |
//! | 7     | 10    | T      | -    |          |
//! | 8     | 10    | T      | 9    | 10       |
//! | 9     | 9     | F      | 10   | 9        |
//! | 10    | 10    | F      | 11   |          |

use staircase::{
    Decision, Direction, FinishReason, Polarity, SnrRange, StaircaseConfig, StaircaseController,
};

const ANSWERS: [bool; 10] = [false, true, true, true, true, false, true, true, false, false];

fn scripted_config() -> StaircaseConfig {
    StaircaseConfig::new(SnrRange::new(1, 21), 10).polarity(Polarity::HarderIsLower)
}

fn run(config: StaircaseConfig) -> (StaircaseController, Vec<Decision>) {
    let mut controller = StaircaseController::reset(config).unwrap();
    let mut decisions = Vec::new();
    for (i, &answer) in ANSWERS.iter().enumerate() {
        let decision = controller.record_answer(answer, i as u64).unwrap();
        decisions.push(decision);
        if decision.is_finished() {
            break;
        }
    }
    (controller, decisions)
}

#[test]
fn scripted_levels_and_reversals() {
    let (controller, decisions) = run(scripted_config());

    let levels: Vec<i32> = decisions.iter().filter_map(|d| d.next_snr()).collect();
    assert_eq!(levels, vec![11, 11, 10, 10, 9, 10, 10, 9, 10, 11]);
    assert_eq!(controller.reversals(), &[10, 11, 9, 10, 9]);
    assert_eq!(controller.direction(), Direction::Easier);
    assert_eq!(controller.trial_number(), 11);
    assert!(!controller.is_finished());
}

#[test]
fn scripted_question_limit() {
    let (controller, decisions) = run(scripted_config().max_questions(10));

    assert_eq!(decisions.len(), 10);
    assert_eq!(decisions[9], Decision::Finished);

    let summary = controller.summary().unwrap();
    assert_eq!(summary.finish_reason, FinishReason::QuestionLimit);
    // Final level appended as the closing reversal.
    assert_eq!(summary.reversals, vec![10, 11, 9, 10, 9, 11]);
    assert_eq!(summary.target_snr, 10);
    assert_eq!(summary.kept_reversals(), &[11, 9, 10, 9, 11]);

    let counts = |level: i32| {
        let stats = summary.level(level).unwrap();
        (stats.asked, stats.correct)
    };
    assert_eq!(counts(10), (6, 4));
    assert_eq!(counts(11), (2, 2));
    assert_eq!(counts(9), (2, 0));
    assert_eq!(counts(12), (0, 0));
    assert_eq!(summary.trials_presented(), 10);

    assert_eq!(summary.success_ratio(10), Some(67));
    assert_eq!(summary.success_ratio(11), Some(100));
    assert_eq!(summary.success_ratio(9), Some(0));
    assert_eq!(summary.success_ratio(12), None);
}

#[test]
fn scripted_reversal_target() {
    let (controller, decisions) = run(scripted_config().reversals_to_finish(5));

    assert_eq!(decisions.len(), 9);
    let summary = controller.summary().unwrap();
    assert_eq!(summary.finish_reason, FinishReason::ReversalsReached);
    assert_eq!(summary.reversals, vec![10, 11, 9, 10, 9]);
    // mean(11, 9, 10, 9) = 9.75
    assert_eq!(summary.mean_reversal, Some(9.75));
    assert_eq!(summary.target_snr, 10);
    assert_eq!(summary.log.len(), 9);
}

#[test]
fn mirrored_polarity_mirrors_levels() {
    let config = StaircaseConfig::new(SnrRange::new(1, 21), 10);
    let (controller, _) = run(config.reversals_to_finish(5));

    // Same walk reflected around the start level.
    assert_eq!(controller.reversals(), &[10, 9, 11, 10, 11]);
    assert_eq!(controller.summary().unwrap().target_snr, 10);
}

#[test]
fn incorrect_at_easiest_level_clamps() {
    let config = StaircaseConfig::new(SnrRange::new(30, 50), 30);
    let mut controller = StaircaseController::reset(config).unwrap();

    // Easier would be 29: pulled back to 30 with a reversal at 30, and the
    // only way on from the floor is harder.
    assert_eq!(controller.record_answer(false, 0).unwrap(), Decision::Continue(30));
    assert_eq!(controller.reversals(), &[30]);
    assert_eq!(controller.direction(), Direction::Harder);

    // Another miss flips direction again: one reversal per bounce.
    assert_eq!(controller.record_answer(false, 1).unwrap(), Decision::Continue(30));
    assert_eq!(controller.reversals(), &[30, 30]);
    assert_eq!(controller.direction(), Direction::Harder);
}

#[test]
fn climbing_off_the_floor_is_not_a_reversal() {
    let config = StaircaseConfig::new(SnrRange::new(1, 21), 1);
    let mut controller = StaircaseController::reset(config).unwrap();

    for (i, answer) in [false, false, true, true].into_iter().enumerate() {
        controller.record_answer(answer, i as u64).unwrap();
    }

    assert_eq!(controller.current_snr(), 2);
    assert_eq!(controller.reversals(), &[1, 1]);
    assert_eq!(controller.direction(), Direction::Harder);
}

#[test]
fn correct_at_hardest_level_clamps() {
    let config = StaircaseConfig::new(SnrRange::new(30, 50), 50);
    let mut controller = StaircaseController::reset(config).unwrap();

    controller.record_answer(true, 0).unwrap();
    assert_eq!(controller.record_answer(true, 1).unwrap(), Decision::Continue(50));
    assert_eq!(controller.reversals(), &[50]);
    assert_eq!(controller.direction(), Direction::Easier);

    // Dropping back from the ceiling continues the easier leg.
    assert_eq!(controller.record_answer(false, 2).unwrap(), Decision::Continue(49));
    assert_eq!(controller.reversals(), &[50]);
}
