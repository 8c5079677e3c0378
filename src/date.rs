//! Date-range label parsing
//!
//! Turns loosely formatted, human-entered labels such as `"7 Sep - 9 Sep"`,
//! `"Aug 10 - 12"` or `"29 Dec - 2"` into a pair of calendar dates. Missing
//! month and year context is inferred from the check-in date and the clock.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};

/// Placeholder shown when no complete date range is selected
pub const SELECT_DATE_PLACEHOLDER: &str = "Select date";

/// Formats tried by [`Strategy::Direct`]; every one of them carries a year.
///
/// `%B` accepts both full month names and three-letter abbreviations.
const DATED_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
];

lazy_static! {
    static ref RANGE_SEPARATOR: Regex = Regex::new(r"\s*-\s*").unwrap();
    static ref DAY_MONTH: Regex = Regex::new(r"^(\d{1,2}) ([A-Za-z]+)\.?$").unwrap();
    static ref DAY_ONLY: Regex = Regex::new(r"(?i)^(\d{1,2})(?:st|nd|rd|th)?$").unwrap();
}

/// A check-in/check-out pair; either side may be unresolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl DateRange {
    /// A fully resolved range
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
        }
    }

    /// A range with neither side resolved
    pub fn empty() -> Self {
        Self::default()
    }

    /// Coerce two optional ISO strings (`2026-09-07` or RFC 3339) into a range.
    /// Values that do not parse become `None`.
    pub fn from_iso(check_in: Option<&str>, check_out: Option<&str>) -> Self {
        Self {
            check_in: check_in.and_then(coerce_date),
            check_out: check_out.and_then(coerce_date),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Number of nights between check-in and check-out, if both are known
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_days()),
            _ => None,
        }
    }

    /// Display label, e.g. `"7 Sep - 9 Sep"`, or the select-date placeholder
    pub fn label(&self) -> String {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                format!("{} - {}", format_day(&check_in), format_day(&check_out))
            }
            _ => SELECT_DATE_PLACEHOLDER.to_string(),
        }
    }
}

/// Format a date as day and abbreviated month: "7 Sep"
pub fn format_day(date: &NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

fn coerce_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// One way of reading a single side of a range label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The text already names a full date, year included
    Direct,
    /// The text names day and month; the context year is appended
    /// (the clock's for check-in, check-in's for check-out)
    AppendYear,
    /// `<day> <month>` rewritten to `<month> <day> <year>`
    DayMonthSwap,
    /// A bare or ordinal day (`"12"`, `"15th"`) placed in a hinted month
    MonthHint,
}

impl Strategy {
    /// Default order; the first strategy that yields a date wins
    pub const CHAIN: [Strategy; 4] = [
        Strategy::Direct,
        Strategy::AppendYear,
        Strategy::DayMonthSwap,
        Strategy::MonthHint,
    ];

    /// Whether dates produced by this strategy carry a guessed year
    pub fn infers_year(self) -> bool {
        self != Strategy::Direct
    }

    fn apply(self, text: &str, year: i32, hint: (i32, u32)) -> Option<NaiveDate> {
        match self {
            Strategy::Direct => parse_dated(text),
            Strategy::AppendYear => parse_dated(&format!("{} {}", text, year)),
            Strategy::DayMonthSwap => {
                let caps = DAY_MONTH.captures(text)?;
                parse_dated(&format!("{} {} {}", &caps[2], &caps[1], year))
            }
            Strategy::MonthHint => {
                let day = parse_day_only(text)?;
                day_in_month(hint.0, hint.1, day)
            }
        }
    }
}

fn parse_dated(text: &str) -> Option<NaiveDate> {
    DATED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_day_only(text: &str) -> Option<u32> {
    DAY_ONLY.captures(text)?[1].parse().ok()
}

/// Day `day` counted from the first of the month, so out-of-range days roll
/// over into the neighbouring month (day 31 of September is October 1).
fn day_in_month(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(day as i64 - 1))
}

/// Split a label into its two sides after normalizing dashes and whitespace
fn split_range(raw: &str) -> Option<(String, String)> {
    let normalized = raw
        .replace(['\u{2013}', '\u{2014}'], "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    trace!(%normalized, "normalized range label");

    let parts: Vec<&str> = RANGE_SEPARATOR.split(&normalized).collect();
    match parts.as_slice() {
        [first, second] => Some((first.trim().to_string(), second.trim().to_string())),
        _ => None,
    }
}

/// Parses range labels against an injected clock
#[derive(Debug, Clone)]
pub struct DateRangeParser<C = SystemClock> {
    clock: C,
    strategies: Vec<Strategy>,
}

impl Default for DateRangeParser<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> DateRangeParser<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            strategies: Strategy::CHAIN.to_vec(),
        }
    }

    /// Replace the strategy chain (tried in the given order)
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Parse a range label into check-in and check-out dates
    ///
    /// Supported shapes:
    /// - `"7 Sep - 9 Sep"`, `"Aug 10 - Aug 12"` (current year assumed)
    /// - `"Aug 10 - 12"`, `"7 Sep - 9th"` (check-out day in check-in's month)
    /// - `"15 Mar - 10"` (a check-out day on or before check-in moves to the next month: 10 Apr)
    /// - `"12 - 15"` (both days in the current month)
    /// - `"29 Dec - 2"`, `"Dec 29 - Jan 2"` (check-out wraps into the next month or year)
    /// - `"7 Sep 2027 - 9 Sep 2027"`, `"09/07/2026 – 09/09/2026"`
    /// - `"7 Sep 2028 - 9 Sep"` (check-out takes check-in's year)
    ///
    /// Returns `None` for empty input, anything that is not exactly one
    /// dash-separated pair, or a side that no strategy can read.
    pub fn parse<'a>(&self, raw: impl Into<Option<&'a str>>) -> Option<DateRange> {
        let raw = raw.into()?;
        if raw.trim().is_empty() {
            return None;
        }

        let (first, second) = split_range(raw)?;
        let year = self.clock.year();
        let month = self.clock.today().month();

        let (check_in, _) = self.resolve_side(&first, year, (year, month))?;
        debug!(%check_in, "resolved check-in");

        let (check_out, inferred) = match parse_day_only(&second) {
            Some(day) => {
                let mut date = day_in_month(check_in.year(), check_in.month(), day)?;
                if date <= check_in {
                    // "29 Dec - 2" means the 2nd of the following month
                    let next = check_in.with_day(1)?.checked_add_months(Months::new(1))?;
                    date = day_in_month(next.year(), next.month(), day)?;
                }
                (date, true)
            }
            None => {
                let hint = (check_in.year(), check_in.month());
                self.resolve_side(&second, check_in.year(), hint)?
            }
        };

        let check_out = if inferred && check_out <= check_in {
            match check_out.checked_add_months(Months::new(12)) {
                Some(next_year) if next_year > check_in => next_year,
                _ => check_out,
            }
        } else {
            check_out
        };
        debug!(%check_out, "resolved check-out");

        Some(DateRange::new(check_in, check_out))
    }

    /// Run the strategy chain over one side, reporting whether the year was guessed
    fn resolve_side(&self, text: &str, year: i32, hint: (i32, u32)) -> Option<(NaiveDate, bool)> {
        self.strategies.iter().find_map(|strategy| {
            let date = strategy.apply(text, year, hint)?;
            trace!(?strategy, text, %date, "strategy matched");
            Some((date, strategy.infers_year()))
        })
    }
}
