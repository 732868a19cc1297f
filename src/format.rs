// src/format.rs
//! Pure display formatters: relative posted time and salary ranges.

use crate::types::job::Salary;
use chrono::{DateTime, Utc};

/// Relative "posted" label from an ISO-8601 timestamp, computed against
/// an injected `now` in whole days. Unparseable timestamps fall back to
/// the raw string.
pub fn relative_time(timestamp: &str, now: DateTime<Utc>) -> String {
    let parsed = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(_) => return timestamp.to_string(),
    };

    let days = (now - parsed).num_days().max(0);

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => format!("{} weeks ago", days / 7),
        30..=364 => format!("{} months ago", days / 30),
        _ => format!("{} years ago", days / 365),
    }
}

/// "negotiable" when no bounds are known, otherwise a thousands-grouped
/// range with the pay-period suffix.
pub fn format_salary(salary: &Salary) -> String {
    let suffix = salary.period.suffix();
    match (salary.min, salary.max) {
        (None, None) => "negotiable".to_string(),
        (Some(min), Some(max)) => format!(
            "{} {} - {}{}",
            salary.currency,
            group_thousands(min),
            group_thousands(max),
            suffix
        ),
        (Some(min), None) => format!("{} {}+{}", salary.currency, group_thousands(min), suffix),
        (None, Some(max)) => format!(
            "{} {}{} or below",
            salary.currency,
            group_thousands(max),
            suffix
        ),
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
