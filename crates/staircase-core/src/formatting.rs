//! Plain-text formatting of a session summary.
//!
//! The `staircase` crate adds colors on top of this for terminal output;
//! this version is usable without `std`.

use alloc::string::String;
use core::fmt::Write;

use crate::summary::Summary;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Format a summary for human-readable output (no colors).
pub fn format_summary_plain(summary: &Summary) -> String {
    let mut out = String::new();

    writeln!(out, "staircase").unwrap();
    writeln!(out, "{}", SEPARATOR).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "  Target SNR:   {}", summary.target_snr).unwrap();
    if let Some(mean) = summary.mean_reversal {
        writeln!(out, "  Mean reversal: {:.2}", mean).unwrap();
    }
    writeln!(
        out,
        "  Trials:       {} ({} correct)",
        summary.trials_presented(),
        summary.total_correct()
    )
    .unwrap();
    writeln!(out, "  Finished:     {}", summary.finish_reason).unwrap();
    writeln!(out).unwrap();

    format_reversals(&mut out, summary);
    format_level_table(&mut out, summary);

    writeln!(out, "{}", SEPARATOR).unwrap();
    out
}

fn format_reversals(out: &mut String, summary: &Summary) {
    write!(out, "  Reversals:").unwrap();
    if summary.reversals.is_empty() {
        write!(out, " none").unwrap();
    }
    for (i, level) in summary.reversals.iter().enumerate() {
        if i < summary.discarded_reversals {
            write!(out, " ({})", level).unwrap();
        } else {
            write!(out, " {}", level).unwrap();
        }
    }
    writeln!(out).unwrap();
    writeln!(out).unwrap();
}

fn format_level_table(out: &mut String, summary: &Summary) {
    writeln!(out, "    {:>5}  {:>5}  {:>7}  {:>6}", "SNR", "asked", "correct", "ratio").unwrap();
    for level in &summary.levels {
        // Unvisited levels have no ratio.
        let Some(ratio) = level.success_ratio() else {
            continue;
        };
        writeln!(
            out,
            "    {:>5}  {:>5}  {:>7}  {:>5}%",
            level.snr, level.asked, level.correct, ratio
        )
        .unwrap();
    }
    writeln!(out).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptive::FinishReason;
    use crate::summary::LevelStats;
    use crate::types::SnrRange;
    use alloc::vec;

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            target_snr: 11,
            mean_reversal: Some(10.5),
            reversals: vec![9, 10, 11],
            discarded_reversals: 1,
            snr_range: SnrRange::new(9, 11),
            levels: vec![
                LevelStats { snr: 9, asked: 2, correct: 1 },
                LevelStats { snr: 10, asked: 0, correct: 0 },
                LevelStats { snr: 11, asked: 1, correct: 1 },
            ],
            log: vec![],
            finish_reason: FinishReason::ReversalsReached,
        };

        let text = format_summary_plain(&summary);

        assert!(text.contains("Target SNR:   11"));
        assert!(text.contains("Reversals: (9) 10 11"));
        assert!(text.contains("reversal target reached"));
        assert!(text.contains("50%"));
        // Unvisited levels are left out of the table.
        assert!(!text.contains("   10      0"));
    }
}
