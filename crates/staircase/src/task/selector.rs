//! Stimulus selection for each task.
//!
//! Selectors own their RNG so a fixed seed gives a reproducible session.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Sample, Stimulus};
use crate::config::Config;

/// Clip templates of the four comparison speakers. `{snr}` is replaced by the level.
pub const DEFAULT_SPEAKER_TEMPLATES: [&str; 4] = [
    "assets/jnd_noise/{snr}S_female1.wav",
    "assets/jnd_noise/{snr}S_female2.wav",
    "assets/jnd_noise/{snr}S_male1.wav",
    "assets/jnd_noise/{snr}S_male2.wav",
];

/// Digit triplets available as recorded clips.
pub const DEFAULT_DIGITS: [&str; 21] = [
    "024", "093", "135", "156", "246", "282", "286", "289", "340", "359", "401", "468", "534",
    "591", "626", "628", "680", "802", "815", "913", "962",
];

/// Clip template of the digit task. `{snr}` and `{digits}` are substituted.
pub const DEFAULT_DIGIT_TEMPLATE: &str = "assets/en_num_snr/{snr}S_{digits}.wav";

/// Chooses what to present at a given level.
pub trait StimulusSelector {
    /// Stimulus for trial `trial_number`, presented at level `snr`.
    fn select(&mut self, trial_number: u32, snr: i32) -> Stimulus;
}

fn rng_for(seed: Option<u64>) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn clip_path(template: &str, snr: i32) -> String {
    template.replace("{snr}", &snr.to_string())
}

/// Quality comparison selector.
///
/// Every trial picks a speaker at random and plays the test level and the
/// reference level in random order.
#[derive(Debug, Clone)]
pub struct ComparisonSelector {
    rng: Xoshiro256PlusPlus,
    reference_snr: i32,
    speakers: Vec<String>,
}

impl ComparisonSelector {
    /// Selector with the default speaker clips.
    pub fn new(reference_snr: i32, seed: Option<u64>) -> Self {
        Self {
            rng: rng_for(seed),
            reference_snr,
            speakers: DEFAULT_SPEAKER_TEMPLATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Selector matching `config`'s reference level and seed.
    pub fn for_config(config: &Config) -> Self {
        Self::new(config.reference_snr(), config.seed)
    }

    /// Replace the speaker clip templates.
    ///
    /// # Panics
    ///
    /// Panics if `templates` is empty.
    pub fn speakers<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speakers = templates.into_iter().map(Into::into).collect();
        assert!(!self.speakers.is_empty(), "at least one speaker is required");
        self
    }

    /// The reference level.
    pub fn reference_snr(&self) -> i32 {
        self.reference_snr
    }
}

impl StimulusSelector for ComparisonSelector {
    fn select(&mut self, _trial_number: u32, snr: i32) -> Stimulus {
        let speaker = &self.speakers[self.rng.random_range(0..self.speakers.len())];
        let test = Sample {
            snr,
            clip: clip_path(speaker, snr),
        };
        let reference = Sample {
            snr: self.reference_snr,
            clip: clip_path(speaker, self.reference_snr),
        };
        let (a, b) = if self.rng.random_bool(0.5) {
            (reference, test)
        } else {
            (test, reference)
        };
        Stimulus::Comparison {
            a,
            b,
            reference_snr: self.reference_snr,
        }
    }
}

/// Digit identification selector.
///
/// Picks one of the digit triplets uniformly, never the same one twice in a row.
#[derive(Debug, Clone)]
pub struct DigitSelector {
    rng: Xoshiro256PlusPlus,
    digits: Vec<String>,
    template: String,
    last: Option<usize>,
}

impl DigitSelector {
    /// Selector with the default digit clips.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_for(seed),
            digits: DEFAULT_DIGITS.iter().map(|s| s.to_string()).collect(),
            template: DEFAULT_DIGIT_TEMPLATE.to_string(),
            last: None,
        }
    }

    /// Selector seeded from `config`.
    pub fn for_config(config: &Config) -> Self {
        Self::new(config.seed)
    }

    /// Replace the digit triplets.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty.
    pub fn digits<I, S>(mut self, digits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.digits = digits.into_iter().map(Into::into).collect();
        assert!(!self.digits.is_empty(), "at least one digit clip is required");
        self.last = None;
        self
    }

    /// Replace the clip path template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    fn next_index(&mut self) -> usize {
        let n = self.digits.len();
        match self.last {
            // Draw from the other n - 1 entries and skip over the last one.
            Some(last) if n > 1 => {
                let idx = self.rng.random_range(0..n - 1);
                if idx >= last {
                    idx + 1
                } else {
                    idx
                }
            }
            _ => self.rng.random_range(0..n),
        }
    }
}

impl StimulusSelector for DigitSelector {
    fn select(&mut self, _trial_number: u32, snr: i32) -> Stimulus {
        let idx = self.next_index();
        self.last = Some(idx);
        let digits = self.digits[idx].clone();
        let clip = clip_path(&self.template, snr).replace("{digits}", &digits);
        Stimulus::Digits { snr, digits, clip }
    }
}
