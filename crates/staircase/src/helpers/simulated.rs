//! Simulated listener with a logistic psychometric function.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use staircase_core::{Direction, Polarity};

use crate::task::{Choice, Response, Stimulus};

/// A listener whose probability of a correct answer depends only on the level.
///
/// ```text
/// p(level) = guess + (1 - guess) / (1 + exp(slope * d))
/// ```
///
/// where `d` is the signed distance from `threshold` toward the harder side.
/// At `threshold` the listener is halfway between guessing and perfect.
#[derive(Debug, Clone)]
pub struct SimulatedListener {
    threshold: f64,
    slope: f64,
    guess_rate: f64,
    polarity: Polarity,
    rng: Xoshiro256PlusPlus,
}

impl SimulatedListener {
    /// Listener with the given midpoint and slope (per level), no guessing.
    ///
    /// # Panics
    ///
    /// Panics if `slope` is not positive.
    pub fn new(threshold: f64, slope: f64, polarity: Polarity, seed: u64) -> Self {
        assert!(slope > 0.0, "slope must be > 0");
        Self {
            threshold,
            slope,
            guess_rate: 0.0,
            polarity,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Builder method to set the floor probability of a correct answer.
    ///
    /// # Panics
    ///
    /// Panics if `guess_rate` is outside `[0, 1)`.
    pub fn guess_rate(mut self, guess_rate: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&guess_rate),
            "guess_rate must be in [0, 1)"
        );
        self.guess_rate = guess_rate;
        self
    }

    fn harder_sign(&self) -> f64 {
        self.polarity.step(Direction::Harder) as f64
    }

    /// Probability of a correct answer at `level`.
    pub fn p_correct(&self, level: i32) -> f64 {
        let d = self.harder_sign() * (level as f64 - self.threshold);
        self.guess_rate + (1.0 - self.guess_rate) / (1.0 + (self.slope * d).exp())
    }

    /// The level (fractional) where the listener is correct with probability `p`.
    ///
    /// Returns `None` for `p` outside `(guess_rate, 1)`.
    pub fn level_at(&self, p: f64) -> Option<f64> {
        if p <= self.guess_rate || p >= 1.0 {
            return None;
        }
        let q = (p - self.guess_rate) / (1.0 - self.guess_rate);
        let d = (1.0 / q - 1.0).ln() / self.slope;
        Some(self.threshold + self.harder_sign() * d)
    }

    /// Draw whether the answer at `level` is correct.
    pub fn answer(&mut self, level: i32) -> bool {
        let p = self.p_correct(level);
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    /// Produce a response to `stimulus`.
    ///
    /// A correct comparison answer names the reference sample; an incorrect
    /// one is "not detectable". A correct digit answer repeats the digits; an
    /// incorrect one is a wrong guess of the same length.
    pub fn respond(&mut self, stimulus: &Stimulus) -> Response {
        match stimulus {
            Stimulus::Comparison { a, b, reference_snr } => {
                let test_level = if a.snr == *reference_snr { b.snr } else { a.snr };
                if self.answer(test_level) {
                    let choice = if a.snr == *reference_snr {
                        Choice::A
                    } else {
                        Choice::B
                    };
                    Response::Choice(choice)
                } else {
                    Response::Choice(Choice::NotDetectable)
                }
            }
            Stimulus::Digits { snr, digits, .. } => {
                if self.answer(*snr) {
                    Response::Digits(digits.clone())
                } else {
                    Response::Digits(wrong_guess(digits))
                }
            }
        }
    }
}

/// Same length as `digits`, differing in every position.
fn wrong_guess(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_digit((d + 1) % 10, 10).unwrap_or('0'),
            None => '0',
        })
        .collect()
}
