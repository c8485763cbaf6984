//! Display helpers shared by the dashboard views.

use crate::stats::StatField;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    InvalidWeek(u8),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidWeek(week) => write!(f, "invalid week number: {week}"),
        }
    }
}

impl std::error::Error for FormatError {}

pub fn format_record(wins: u16, losses: u16, ties: u16) -> String {
    if ties == 0 {
        format!("{wins}-{losses}")
    } else {
        format!("{wins}-{losses}-{ties}")
    }
}

pub fn format_money(amount: u64) -> String {
    if amount >= 1_000_000 {
        format!("${:.2}M", amount as f64 / 1_000_000.0)
    } else {
        format!("${}K", (amount as f64 / 1_000.0).round())
    }
}

/// Label for a 1-based schedule week. Week 22 is the bye before the
/// Super Bowl and has no label.
pub fn week_label(week: u8) -> Result<String, FormatError> {
    match week {
        1..=18 => Ok(format!("Week {week}")),
        19 => Ok("Wildcard Round".to_string()),
        20 => Ok("Divisional Round".to_string()),
        21 => Ok("Conference Championship Round".to_string()),
        23 => Ok("Super Bowl".to_string()),
        _ => Err(FormatError::InvalidWeek(week)),
    }
}

pub fn season_label(years_pro: u8) -> String {
    if years_pro == 0 {
        return "Rookie".to_string();
    }
    let season = u32::from(years_pro) + 1;
    format!("{season}{} Season", ordinal_suffix(season))
}

fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn format_win_pct(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p.is_finite() => format!("{p:.3}"),
        _ => "N/A".to_string(),
    }
}

pub fn format_stat(field: StatField, value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if field.is_rate() => format!("{v:.1}"),
        // Half sacks.
        Some(v) if field == StatField::DefSacks && v.fract() != 0.0 => format!("{v:.1}"),
        Some(v) => format!("{v:.0}"),
    }
}
