//! Grading of listener responses.

use staircase_core::GradedAnswer;

use super::{Choice, Response, Stimulus};

/// Value logged for a "not detectable" answer.
const NOT_DETECTABLE: &str = "-1";

/// Grade `response` against `stimulus`.
///
/// Comparison: correct when the better (reference-level) sample is chosen,
/// and always correct when both samples share a level. The logged response
/// is the level of the chosen sample, or `-1` for "not detectable".
///
/// Digits: correct when the response with all whitespace removed equals the
/// expected digits. The logged response is the stripped text.
///
/// Returns `None` when the response does not belong to the stimulus' task.
pub fn grade(stimulus: &Stimulus, response: &Response) -> Option<GradedAnswer> {
    let params = stimulus.params();
    match (stimulus, response) {
        (Stimulus::Comparison { a, b, reference_snr }, Response::Choice(choice)) => {
            let chosen = match choice {
                Choice::A => Some(a.snr),
                Choice::B => Some(b.snr),
                Choice::NotDetectable => None,
            };
            let is_correct = a.snr == b.snr || chosen == Some(*reference_snr);
            let logged = match chosen {
                Some(snr) => snr.to_string(),
                None => NOT_DETECTABLE.to_string(),
            };
            Some(GradedAnswer {
                stimulus: params,
                response: logged,
                is_correct,
            })
        }
        (Stimulus::Digits { digits, .. }, Response::Digits(text)) => {
            let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            Some(GradedAnswer {
                stimulus: params,
                is_correct: stripped == *digits,
                response: stripped,
            })
        }
        _ => None,
    }
}
