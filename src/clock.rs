//! Time source used for year inference
//!
//! Anything that needs "the current year" asks a [`Clock`] instead of reading the
//! system time directly, so parsing is deterministic under test.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Source of the current date and time
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current calendar year
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Reads the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixed at midnight of the given date
    pub fn on(date: NaiveDate) -> Self {
        FixedClock(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Fixed at midnight of an ISO `YYYY-MM-DD` date
    pub fn parse(iso: &str) -> Result<Self> {
        NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d")
            .map(Self::on)
            .map_err(|e| Error::InvalidDate(format!("{}: {}", iso, e)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
