//! Writing and reading the CSV export.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use staircase_core::{StimulusParams, Summary};

use super::{
    ExportError, ASKED_LABEL, CORRECT_LABEL, LEVELS_LABEL, RATIO_LABEL, REVERSALS_LABEL,
    TARGET_LABEL,
};
use crate::config::DbMapping;

const NAN: &str = "NaN";
const DB_PREFIX: &str = "i.e. :";

/// Render a finished session as a CSV document.
///
/// With `db` set, the threshold row carries the dB value as an extra
/// `i.e. : <dB>` field. Trial fields holding a comma or a double quote are
/// quoted, with inner quotes doubled.
pub fn to_csv(summary: &Summary, db: Option<&DbMapping>) -> String {
    let mut out = String::new();

    let header = summary
        .log
        .first()
        .map(|r| r.stimulus.csv_header())
        .unwrap_or_else(|| StimulusParams::Level.csv_header());
    writeln!(out, "{}", join_fields(header)).unwrap();
    for record in &summary.log {
        writeln!(out, "{}", join_fields(&record.csv_fields())).unwrap();
    }
    writeln!(out).unwrap();

    write!(out, "{},{}", TARGET_LABEL, summary.target_snr).unwrap();
    if let Some(mapping) = db {
        write!(out, ",{} {}", DB_PREFIX, mapping.to_db(summary.target_snr as f64)).unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{},{}", REVERSALS_LABEL, join(&summary.reversals)).unwrap();
    writeln!(out).unwrap();

    let levels: Vec<i32> = summary.levels.iter().map(|l| l.snr).collect();
    let asked: Vec<u32> = summary.levels.iter().map(|l| l.asked).collect();
    let correct: Vec<u32> = summary.levels.iter().map(|l| l.correct).collect();
    let ratios: Vec<String> = summary
        .levels
        .iter()
        .map(|l| match l.success_ratio() {
            Some(r) => r.to_string(),
            None => NAN.to_string(),
        })
        .collect();

    writeln!(out, "{},{}", LEVELS_LABEL, join(&levels)).unwrap();
    writeln!(out, "{},{}", ASKED_LABEL, join(&asked)).unwrap();
    writeln!(out, "{},{}", CORRECT_LABEL, join(&correct)).unwrap();
    writeln!(out, "{},{}", RATIO_LABEL, ratios.join(",")).unwrap();

    out
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write the CSV export of `summary` to `path`.
pub fn write_csv(
    summary: &Summary,
    db: Option<&DbMapping>,
    path: &Path,
) -> Result<(), ExportError> {
    std::fs::write(path, to_csv(summary, db))?;
    Ok(())
}

/// An export read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedSummary {
    /// Column names of the trial block.
    pub header: Vec<String>,
    /// Raw trial rows, one entry per field.
    pub trials: Vec<Vec<String>>,
    /// Threshold level.
    pub target_snr: i32,
    /// Threshold in dB, when the export carries it.
    pub target_db: Option<f64>,
    /// Recorded reversals.
    pub reversals: Vec<i32>,
    /// Levels of the range, ascending.
    pub levels: Vec<i32>,
    /// Trials presented per level.
    pub asked: Vec<u32>,
    /// Correct answers per level.
    pub correct: Vec<u32>,
    /// Success percentage per level, `None` for unvisited levels.
    pub success_ratio: Vec<Option<u32>>,
}

impl ExportedSummary {
    /// Success percentage at `level`, if the level was visited.
    pub fn ratio_at(&self, level: i32) -> Option<u32> {
        let idx = self.levels.iter().position(|&l| l == level)?;
        self.success_ratio.get(idx).copied().flatten()
    }
}

/// Load an export written by [`write_csv`].
pub fn load_summary_csv(path: &Path) -> Result<ExportedSummary, ExportError> {
    let text = std::fs::read_to_string(path)?;
    parse_summary_csv(&text)
}

/// Parse an export document.
///
/// # Errors
///
/// Returns [`ExportError`] if the document has no header, a summary row is
/// missing, a value is not a number, or the per-level rows differ in length.
pub fn parse_summary_csv(text: &str) -> Result<ExportedSummary, ExportError> {
    let mut lines = text.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => split(line),
        _ => {
            return Err(ExportError::Parse {
                line: 1,
                message: "expected a header row".to_string(),
            })
        }
    };

    let mut trials = Vec::new();
    for (idx, line) in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        let fields = split(line);
        if fields.len() != header.len() {
            return Err(ExportError::Parse {
                line: idx + 1,
                message: format!("expected {} fields, got {}", header.len(), fields.len()),
            });
        }
        trials.push(fields);
    }

    // Remaining non-empty lines are labelled summary rows.
    let mut rows = Rows::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = split(line);
        let label = fields.remove(0);
        rows.insert(label, (idx + 1, fields));
    }

    let (target_line, target_fields) = row(&rows, TARGET_LABEL)?;
    let target_snr = match target_fields.first() {
        Some(value) => parse_value(*target_line, value)?,
        None => {
            return Err(ExportError::Parse {
                line: *target_line,
                message: "threshold row has no value".to_string(),
            })
        }
    };
    let target_db = match target_fields.get(1) {
        Some(field) => match field.strip_prefix(DB_PREFIX) {
            Some(db) => Some(parse_value(*target_line, db.trim())?),
            None => None,
        },
        None => None,
    };

    let (line, fields) = row(&rows, REVERSALS_LABEL)?;
    let reversals = parse_values(*line, fields)?;

    let (levels_line, fields) = row(&rows, LEVELS_LABEL)?;
    let levels: Vec<i32> = parse_values(*levels_line, fields)?;

    let (line, fields) = row(&rows, ASKED_LABEL)?;
    let asked = parse_values(*line, fields)?;
    check_width(*line, levels.len(), &asked)?;

    let (line, fields) = row(&rows, CORRECT_LABEL)?;
    let correct = parse_values(*line, fields)?;
    check_width(*line, levels.len(), &correct)?;

    let (line, fields) = row(&rows, RATIO_LABEL)?;
    let success_ratio = fields
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| {
            if f == NAN {
                Ok(None)
            } else {
                parse_value(*line, f).map(Some)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    check_width(*line, levels.len(), &success_ratio)?;

    Ok(ExportedSummary {
        header,
        trials,
        target_snr,
        target_db,
        reversals,
        levels,
        asked,
        correct,
        success_ratio,
    })
}

type Rows = HashMap<String, (usize, Vec<String>)>;

fn row<'a>(
    rows: &'a Rows,
    label: &'static str,
) -> Result<&'a (usize, Vec<String>), ExportError> {
    rows.get(label).ok_or(ExportError::MissingRow { label })
}

/// Split one line into fields, honoring quoted fields.
fn split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

fn parse_value<T: FromStr>(line: usize, value: &str) -> Result<T, ExportError> {
    value.parse().map_err(|_| ExportError::InvalidValue {
        line,
        value: value.to_string(),
    })
}

fn parse_values<T: FromStr>(line: usize, fields: &[String]) -> Result<Vec<T>, ExportError> {
    // An empty list is written as a lone trailing comma.
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| parse_value(line, f))
        .collect()
}

fn check_width<T>(line: usize, expected: usize, values: &[T]) -> Result<(), ExportError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ExportError::Parse {
            line,
            message: format!("expected {} values, got {}", expected, values.len()),
        })
    }
}
