//! Listening sessions driven through the public API.

use staircase::{
    Choice, Clock, ComparisonSelector, Config, DigitSelector, ListeningSession, Next, Response,
    SessionError, Stimulus, StimulusParams,
};

/// Fixed clock for reproducible logs.
struct FixedClock(u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

fn better_choice(stimulus: &Stimulus) -> Choice {
    match stimulus {
        Stimulus::Comparison { a, reference_snr, .. } if a.snr == *reference_snr => Choice::A,
        Stimulus::Comparison { .. } => Choice::B,
        other => panic!("expected a comparison, got {:?}", other),
    }
}

#[test]
fn comparison_session_runs_to_completion() {
    let config = Config::quality_comparison().seed(21);
    let selector = ComparisonSelector::for_config(&config);
    let mut session = ListeningSession::with_clock(config, selector, FixedClock(42)).unwrap();

    // Always pick the better sample: the level climbs to the reference and
    // every bounce off it records a reversal until the session ends.
    let summary = loop {
        let choice = better_choice(&session.current_trial().unwrap().stimulus);
        match session.submit(Response::Choice(choice)).unwrap() {
            Next::Trial(trial) => assert!((30..=50).contains(&trial.snr)),
            Next::Finished(summary) => break summary,
        }
    };

    assert!(summary.log.len() <= 45);
    assert!(summary.log.iter().all(|r| r.is_correct));
    assert!(summary.log.iter().all(|r| r.timestamp_millis == 42));
    assert_eq!(summary.trials_presented() as usize, summary.log.len());
    assert_eq!(session.summary().unwrap(), summary);
}

#[test]
fn comparison_log_records_samples_and_choice() {
    let config = Config::quality_comparison().seed(3);
    let selector = ComparisonSelector::for_config(&config);
    let mut session = ListeningSession::with_clock(config, selector, FixedClock(7)).unwrap();

    let trial = session.current_trial().unwrap().clone();
    session
        .submit(Response::Choice(Choice::NotDetectable))
        .unwrap();

    let record = &session.controller().log()[0];
    let Stimulus::Comparison { a, b, .. } = &trial.stimulus else {
        panic!("expected a comparison");
    };
    assert_eq!(record.stimulus, StimulusParams::Comparison { a: a.snr, b: b.snr });
    assert_eq!(record.response, "-1");
    assert!(!record.is_correct);
    assert_eq!(
        record.csv_fields(),
        vec![
            "1".to_string(),
            a.snr.to_string(),
            b.snr.to_string(),
            "-1".to_string(),
            "false".to_string(),
            "7".to_string()
        ]
    );
}

#[test]
fn digit_session_respects_question_limit() {
    let config = Config::digit_identification().seed(8).max_questions(12);
    let selector = DigitSelector::for_config(&config);
    let mut session = ListeningSession::new(config, selector).unwrap();

    // Alternate correct and wrong answers: the staircase drifts easier and
    // never collects seven reversals in twelve trials.
    let mut answered = 0;
    let summary = loop {
        let trial = session.current_trial().unwrap().clone();
        let Stimulus::Digits { digits, .. } = &trial.stimulus else {
            panic!("expected digits");
        };
        let response = if answered % 2 == 0 {
            digits.clone()
        } else {
            "999 ".to_string()
        };
        answered += 1;
        match session.submit(Response::Digits(response)).unwrap() {
            Next::Trial(next) => assert_eq!(next.number, answered + 1),
            Next::Finished(summary) => break summary,
        }
    };

    assert_eq!(summary.log.len(), 12);
    assert_eq!(
        summary.finish_reason,
        staircase::FinishReason::QuestionLimit
    );
    assert!(session.is_finished());
}

#[test]
fn missing_response_keeps_trial_pending() {
    let config = Config::digit_identification().seed(1);
    let selector = DigitSelector::for_config(&config);
    let mut session = ListeningSession::new(config, selector).unwrap();
    let before = session.current_trial().unwrap().clone();

    let err = session.submit(Response::Digits(String::new())).unwrap_err();
    assert!(matches!(err, SessionError::MissingResponse { trial: 1 }));
    assert_eq!(session.current_trial(), Some(&before));
    assert_eq!(session.controller().trial_number(), 1);
}
