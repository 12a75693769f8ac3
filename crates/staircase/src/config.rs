//! Session configuration: staircase limits plus task and export settings.

use serde::{Deserialize, Serialize};

use staircase_core::{Polarity, SnrRange, StaircaseConfig};

use crate::task::TaskKind;

/// Linear mapping from a level index to dB SNR: `dB = offset + scale * level`.
///
/// The digit clips are numbered so that level 1 is +5 dB and level 21 is
/// -15 dB (`dB = 6 - level`). The comparison clips are numbered in dB
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DbMapping {
    /// dB value at level 0.
    pub offset: f64,
    /// dB change per level.
    pub scale: f64,
}

impl DbMapping {
    /// Levels are dB values.
    pub const IDENTITY: DbMapping = DbMapping {
        offset: 0.0,
        scale: 1.0,
    };

    /// Convert a level to dB SNR.
    pub fn to_db(&self, level: f64) -> f64 {
        self.offset + self.scale * level
    }
}

/// Configuration options for a [`ListeningSession`](crate::ListeningSession).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Staircase limits and polarity.
    pub staircase: StaircaseConfig,

    /// Which task variant is presented.
    pub task: TaskKind,

    /// How levels translate to dB SNR for reports. Default: identity.
    pub db_mapping: DbMapping,

    /// File name suggested for the CSV export. Default: `export.csv`.
    pub export_file_name: String,

    /// Optional deterministic seed for stimulus selection.
    ///
    /// When set, the order of samples, the speaker and the digit clips are
    /// reproducible. Default: None (seeded from the OS).
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::digit_identification()
    }
}

impl Config {
    /// Digit identification preset.
    ///
    /// - levels 1 (+5 dB) to 21 (-15 dB), starting at 10
    /// - 45 questions, 7 reversals
    pub fn digit_identification() -> Self {
        Self {
            staircase: StaircaseConfig::new(SnrRange::new(1, 21), 10)
                .polarity(Polarity::HarderIsHigher),
            task: TaskKind::DigitIdentification,
            db_mapping: DbMapping {
                offset: 6.0,
                scale: -1.0,
            },
            export_file_name: "export.csv".to_string(),
            seed: None,
        }
    }

    /// Quality comparison (3AFC) preset.
    ///
    /// - levels 30 dB (worst quality) to 50 dB (best quality, the reference)
    /// - starts at the easiest comparison, 30 dB against 50 dB
    /// - 45 questions, 7 reversals
    pub fn quality_comparison() -> Self {
        Self {
            staircase: StaircaseConfig::new(SnrRange::new(30, 50), 30)
                .polarity(Polarity::HarderIsHigher),
            task: TaskKind::QualityComparison,
            db_mapping: DbMapping::IDENTITY,
            export_file_name: "export.csv".to_string(),
            seed: None,
        }
    }

    /// Builder method to set the level range and start level.
    pub fn snr_range(mut self, range: SnrRange, start_snr: i32) -> Self {
        self.staircase.snr_range = range;
        self.staircase.start_snr = start_snr;
        self
    }

    /// Builder method to set the question cap.
    pub fn max_questions(mut self, max: u32) -> Self {
        self.staircase.max_questions = max;
        self
    }

    /// Builder method to set the number of reversals that ends a session.
    pub fn reversals_to_finish(mut self, reversals: usize) -> Self {
        self.staircase.reversals_to_finish = reversals;
        self
    }

    /// Builder method to set how many leading reversals are discarded.
    pub fn discard_reversals(mut self, discard: usize) -> Self {
        self.staircase.discard_reversals = discard;
        self
    }

    /// Builder method to set the polarity.
    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.staircase.polarity = polarity;
        self
    }

    /// Builder method to set the dB mapping.
    pub fn db_mapping(mut self, mapping: DbMapping) -> Self {
        self.db_mapping = mapping;
        self
    }

    /// Builder method to set the export file name.
    pub fn export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    /// Builder method to set a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Best-quality level, used as the comparison reference.
    pub fn reference_snr(&self) -> i32 {
        self.staircase
            .polarity
            .hardest(self.staircase.snr_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_preset() {
        let config = Config::digit_identification();
        assert_eq!(config.staircase.snr_range, SnrRange::new(1, 21));
        assert_eq!(config.staircase.start_snr, 10);
        assert_eq!(config.staircase.max_questions, 45);
        assert_eq!(config.staircase.reversals_to_finish, 7);
        assert_eq!(config.task, TaskKind::DigitIdentification);
        assert_eq!(config.db_mapping.to_db(1.0), 5.0);
        assert_eq!(config.db_mapping.to_db(21.0), -15.0);
        assert!(config.staircase.validate().is_ok());
    }

    #[test]
    fn test_comparison_preset() {
        let config = Config::quality_comparison();
        assert_eq!(config.staircase.snr_range, SnrRange::new(30, 50));
        assert_eq!(config.staircase.start_snr, 30);
        assert_eq!(config.reference_snr(), 50);
        assert_eq!(config.db_mapping.to_db(42.0), 42.0);
        assert!(config.staircase.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = Config::digit_identification()
            .snr_range(SnrRange::new(1, 5), 3)
            .max_questions(20)
            .reversals_to_finish(4)
            .discard_reversals(2)
            .export_file_name("p01_jnd_d3t.csv")
            .seed(42);

        assert_eq!(config.staircase.snr_range, SnrRange::new(1, 5));
        assert_eq!(config.staircase.start_snr, 3);
        assert_eq!(config.staircase.max_questions, 20);
        assert_eq!(config.staircase.reversals_to_finish, 4);
        assert_eq!(config.staircase.discard_reversals, 2);
        assert_eq!(config.export_file_name, "p01_jnd_d3t.csv");
        assert_eq!(config.seed, Some(42));
    }
}
