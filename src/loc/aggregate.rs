use crate::error::{GitlocError, Result};
use crate::model::WeeklyChurn;
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMIT_DATE: Regex = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
    static ref INSERTIONS: Regex = Regex::new(r"(\d+)\sinsertion").unwrap();
    static ref DELETIONS: Regex = Regex::new(r"(\d+)\sdeletion").unwrap();
}

/// Fold raw `git log` lines into per-week insertion/deletion totals.
///
/// A date line sets the week that later change summary lines are
/// attributed to, until the next date line. A single line may carry
/// both a date and a change summary; the date applies first.
pub fn count_loc<'a, I>(lines: I) -> Result<WeeklyChurn>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut week: Option<u32> = None;
    let mut churn = WeeklyChurn::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some(m) = COMMIT_DATE.find(line) {
            let date = NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d")
                .map_err(|_| GitlocError::InvalidDate(m.as_str().to_string()))?;
            week = Some(date.iso_week().week());
        }

        if line.contains("changed") {
            let insertions = captured_count(&INSERTIONS, line);
            let deletions = captured_count(&DELETIONS, line);
            let week = week.ok_or(GitlocError::SummaryBeforeDate)?;
            churn.entry(week).or_default().add(insertions, deletions);
        }
    }

    Ok(churn)
}

/// First `N insertion`/`N deletion` count on the line, 0 when absent.
fn captured_count(pattern: &Regex, line: &str) -> u64 {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
