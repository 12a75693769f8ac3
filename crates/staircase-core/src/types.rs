//! Level range, step direction and polarity.

use core::fmt;
use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Inclusive range of SNR levels a session may present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnrRange {
    /// First level of the range (`snrStart`).
    pub start: i32,
    /// Last level of the range (`snrEnd`), inclusive.
    pub end: i32,
}

impl SnrRange {
    /// Create a new range. Not validated; see [`StaircaseConfig::validate`].
    ///
    /// [`StaircaseConfig::validate`]: crate::StaircaseConfig::validate
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether `start <= end`.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Whether `level` lies within the range.
    pub fn contains(&self, level: i32) -> bool {
        self.start <= level && level <= self.end
    }

    /// Number of levels in the range (0 for an inverted range).
    pub fn len(&self) -> usize {
        if self.is_valid() {
            (self.end as i64 - self.start as i64 + 1) as usize
        } else {
            0
        }
    }

    /// Whether the range holds no level at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of `level` in per-level tables, if it is inside the range.
    pub fn index_of(&self, level: i32) -> Option<usize> {
        if self.contains(level) {
            Some((level as i64 - self.start as i64) as usize)
        } else {
            None
        }
    }

    /// All levels from `start` to `end`.
    pub fn levels(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl fmt::Display for SnrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Direction of a level change.
///
/// `Harder` is the "down" leg of 2-down/1-up (two correct answers in a row),
/// `Easier` the "up" leg (one incorrect answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward lower accuracy.
    Harder,
    /// Toward higher accuracy.
    Easier,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Harder => Direction::Easier,
            Direction::Easier => Direction::Harder,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Harder => write!(f, "harder"),
            Direction::Easier => write!(f, "easier"),
        }
    }
}

/// Which numeric direction of the level makes a trial harder.
///
/// In the digit task a higher level index means more noise. In the quality
/// comparison a higher level means the test sample is closer to the
/// best-quality reference and therefore harder to tell apart. Both tasks use
/// `HarderIsHigher`; `HarderIsLower` serves scales expressed directly in
/// dB SNR, where less signal is harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Polarity {
    /// Increasing the level makes the task harder.
    #[default]
    HarderIsHigher,
    /// Decreasing the level makes the task harder.
    HarderIsLower,
}

impl Polarity {
    /// Signed one-level step toward `direction`.
    pub fn step(self, direction: Direction) -> i32 {
        match (self, direction) {
            (Polarity::HarderIsHigher, Direction::Harder) => 1,
            (Polarity::HarderIsHigher, Direction::Easier) => -1,
            (Polarity::HarderIsLower, Direction::Harder) => -1,
            (Polarity::HarderIsLower, Direction::Easier) => 1,
        }
    }

    /// The hardest level of `range` under this polarity.
    pub fn hardest(self, range: SnrRange) -> i32 {
        match self {
            Polarity::HarderIsHigher => range.end,
            Polarity::HarderIsLower => range.start,
        }
    }

    /// The easiest level of `range` under this polarity.
    pub fn easiest(self, range: SnrRange) -> i32 {
        match self {
            Polarity::HarderIsHigher => range.start,
            Polarity::HarderIsLower => range.end,
        }
    }
}
