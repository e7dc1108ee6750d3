// Date handling for the export: every row is moved into the fiscal reference year.
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use shared::models::ValidatedRow;
use tracing::debug;

pub const EXPORT_DATE_FORMAT: &str = "%d/%m/%Y";

// Native spreadsheet date cells arrive from the loader as "%Y-%m-%d %H:%M:%S".
// Slash dates are read day-first, as typed in Brazilian spreadsheets.
const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

// Order matters: "%Y" accepts short years, so "%Y/%m/%d" would read "31/01/23"
// as year 31, and "%d/%m/%Y" would read "31/01/23" as year 23.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d/%m/%y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Parses `raw` and re-dates it into `target_year`, formatted `dd/mm/yyyy`.
///
/// Returns `None` when the text is not a date, and for 29 February when the
/// target year has no such day.
pub fn normalize_date(raw: Option<&str>, target_year: i32) -> Option<String> {
    let date = parse_date(raw?)?;
    let moved = date.with_year(target_year)?;
    Some(moved.format(EXPORT_DATE_FORMAT).to_string())
}

/// Rewrites the date of every row, dropping the rows whose date cannot be read.
/// Returns the kept rows in order and the number dropped.
pub fn normalize_row_dates(rows: Vec<ValidatedRow>, target_year: i32) -> (Vec<ValidatedRow>, usize) {
    let total = rows.len();
    let kept: Vec<ValidatedRow> = rows
        .into_iter()
        .filter_map(|mut row| match normalize_date(row.date.as_deref(), target_year) {
            Some(date) => {
                row.date = Some(date);
                Some(row)
            }
            None => {
                debug!(date = ?row.date, payer = %row.payer_id, "Dropping row with unreadable date");
                None
            }
        })
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}
