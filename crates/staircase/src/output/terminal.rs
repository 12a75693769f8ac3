//! Terminal report of a finished session, with colors and box drawing.
//!
//! Colors come from the `colored` crate, which honors `NO_COLOR` and TTY
//! detection.

use colored::Colorize;

use staircase_core::formatting::SEPARATOR;
use staircase_core::{FinishReason, LevelStats, Summary};

use crate::config::DbMapping;

/// Format a summary for human-readable terminal output.
///
/// With `db` set, the threshold is also shown in dB SNR.
pub fn format_summary(summary: &Summary, db: Option<&DbMapping>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Staircase result".bold()));
    out.push_str(SEPARATOR);
    out.push_str("\n\n");

    let target = summary.target_snr.to_string();
    match db {
        Some(mapping) => out.push_str(&format!(
            "  Target SNR:    {} ({} dB)\n",
            target.bold().cyan(),
            mapping.to_db(summary.target_snr as f64)
        )),
        None => out.push_str(&format!("  Target SNR:    {}\n", target.bold().cyan())),
    }
    if let Some(mean) = summary.mean_reversal {
        out.push_str(&format!("  Mean reversal: {:.2}\n", mean));
    }
    out.push_str(&format!(
        "  Trials:        {} ({} correct)\n",
        summary.trials_presented(),
        summary.total_correct()
    ));
    let reason = match summary.finish_reason {
        FinishReason::ReversalsReached => summary.finish_reason.to_string().green(),
        FinishReason::QuestionLimit => summary.finish_reason.to_string().yellow(),
    };
    out.push_str(&format!("  Finished:      {}\n\n", reason));

    out.push_str("  Reversals:    ");
    if summary.reversals.is_empty() {
        out.push_str(&format!(" {}", "none".dimmed()));
    }
    for (i, level) in summary.reversals.iter().enumerate() {
        if i < summary.discarded_reversals {
            // Discarded warm-up reversals.
            out.push_str(&format!(" {}", format!("({})", level).dimmed()));
        } else {
            out.push_str(&format!(" {}", level));
        }
    }
    out.push_str("\n\n");

    out.push_str(&format_level_table(&summary.levels));
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Per-level table of visited levels.
pub fn format_level_table(levels: &[LevelStats]) -> String {
    let mut out = format!(
        "    {:>5}  {:>5}  {:>7}  {:>6}\n",
        "SNR", "asked", "correct", "ratio"
    );
    for level in levels {
        let Some(ratio) = level.success_ratio() else {
            continue;
        };
        let cell = format!("{:>5}%", ratio);
        // 70.7% is where 2-down/1-up settles.
        let cell = if ratio >= 71 {
            cell.green()
        } else if ratio >= 50 {
            cell.yellow()
        } else {
            cell.red()
        };
        out.push_str(&format!(
            "    {:>5}  {:>5}  {:>7}  {}\n",
            level.snr, level.asked, level.correct, cell
        ));
    }
    out.push('\n');
    out
}
