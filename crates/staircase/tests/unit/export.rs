//! CSV export of real sessions.

use staircase::export::{load_summary_csv, parse_summary_csv, to_csv, write_csv};
use staircase::{
    Config, DigitSelector, ListeningSession, Next, Polarity, Response, SnrRange,
    StaircaseConfig, StaircaseController, Summary,
};
use tempfile::TempDir;

fn scripted_summary() -> Summary {
    let config = StaircaseConfig::new(SnrRange::new(1, 21), 10)
        .polarity(Polarity::HarderIsLower)
        .max_questions(10);
    let mut controller = StaircaseController::reset(config).unwrap();
    let answers = [false, true, true, true, true, false, true, true, false, false];
    for (i, &answer) in answers.iter().enumerate() {
        controller
            .record_answer(answer, 1_000 * (i as u64 + 1))
            .unwrap();
    }
    controller.summary().unwrap()
}

#[test]
fn trial_block_has_one_row_per_trial() {
    let summary = scripted_summary();
    let text = to_csv(&summary, None);
    let lines: Vec<&str> = text.lines().collect();

    let blank = lines.iter().position(|l| l.is_empty()).unwrap();
    assert_eq!(blank, summary.log.len() + 1);
    assert_eq!(lines[0], "questionNumber,SNR,isCorrect,t");
    assert_eq!(lines[1], "1,10,false,1000");
    assert_eq!(lines[10], "10,10,false,10000");
}

#[test]
fn summary_block_matches_session() {
    let text = to_csv(&scripted_summary(), None);

    assert!(text.contains("\n\nTargeted SNR,10\nReversals,10,11,9,10,9,11\n\nSNRs,1,2,"));
    let ratio_line = text
        .lines()
        .find(|l| l.starts_with("success ratio,"))
        .unwrap();
    let ratios: Vec<&str> = ratio_line.split(',').skip(1).collect();
    assert_eq!(ratios.len(), 21);
    // Levels 9, 10, 11 sit at indices 8, 9, 10.
    assert_eq!(&ratios[8..11], &["0", "67", "100"]);
    assert_eq!(ratios[0], "NaN");
    assert!(text.ends_with('\n'));
}

#[test]
fn written_file_loads_back() {
    let summary = scripted_summary();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.csv");

    write_csv(&summary, None, &path).unwrap();
    let loaded = load_summary_csv(&path).unwrap();

    assert_eq!(loaded.target_snr, summary.target_snr);
    assert_eq!(loaded.reversals, summary.reversals);
    assert_eq!(loaded.levels, (1..=21).collect::<Vec<_>>());
    assert_eq!(loaded.asked.iter().sum::<u32>(), summary.trials_presented());
    assert_eq!(loaded.ratio_at(10), Some(67));
    assert_eq!(loaded.ratio_at(1), None);
    assert_eq!(loaded.trials.len(), summary.log.len());
}

#[test]
fn typed_commas_survive_export() {
    let config = Config::digit_identification().seed(4).max_questions(1);
    let selector = DigitSelector::for_config(&config);
    let mut session = ListeningSession::new(config, selector).unwrap();

    let Next::Finished(summary) = session.submit(Response::Digits("1,3,5".to_string())).unwrap()
    else {
        panic!("one question should finish the session");
    };
    assert_eq!(summary.log[0].response, "1,3,5");

    let text = to_csv(&summary, None);
    assert!(text.lines().nth(1).unwrap().starts_with("1,10,\"1,3,5\","));

    let parsed = parse_summary_csv(&text).unwrap();
    assert_eq!(parsed.trials.len(), 1);
    assert_eq!(parsed.trials[0].len(), parsed.header.len());
    assert_eq!(parsed.trials[0][2], "1,3,5");
    assert_eq!(parsed.target_snr, summary.target_snr);
}
