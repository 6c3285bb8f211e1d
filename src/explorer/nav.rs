use std::fmt;

use thiserror::Error;
use time::Month;

use super::index::{DayKey, GroupedIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Years,
    Months,
    Days,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Years => "years",
            Level::Months => "months",
            Level::Days => "days",
        })
    }
}

/// Current drill-down position. A year is present from `Months` down and a
/// month only at `Days`; guarded transitions keep both inside the index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Years,
    Months {
        year: i32,
    },
    Days {
        year: i32,
        month: Month,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("year {0} has no editorials")]
    UnknownYear(i32),
    #[error("{month} {year} has no editorials")]
    UnknownMonth { year: i32, month: Month },
    #[error("{month} {day:02}, {year} has no editorials")]
    UnknownDay { year: i32, month: Month, day: u8 },
    #[error("{action} is not available at the {level} level")]
    WrongLevel { action: &'static str, level: Level },
}

impl NavigationState {
    pub fn level(&self) -> Level {
        match self {
            NavigationState::Years => Level::Years,
            NavigationState::Months { .. } => Level::Months,
            NavigationState::Days { .. } => Level::Days,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match *self {
            NavigationState::Years => None,
            NavigationState::Months { year } | NavigationState::Days { year, .. } => Some(year),
        }
    }

    pub fn month(&self) -> Option<Month> {
        match *self {
            NavigationState::Days { month, .. } => Some(month),
            _ => None,
        }
    }

    pub fn select_year(self, index: &GroupedIndex, year: i32) -> Result<Self, NavigationError> {
        if self != NavigationState::Years {
            return Err(self.wrong_level("select year"));
        }
        if index.year(year).is_none() {
            return Err(NavigationError::UnknownYear(year));
        }
        Ok(NavigationState::Months { year })
    }

    pub fn select_month(
        self,
        index: &GroupedIndex,
        month: Month,
    ) -> Result<Self, NavigationError> {
        let NavigationState::Months { year } = self else {
            return Err(self.wrong_level("select month"));
        };
        if index.month(year, month).is_none() {
            return Err(NavigationError::UnknownMonth { year, month });
        }
        Ok(NavigationState::Days { year, month })
    }

    /// Validates a day pick. The level does not change; the caller shows the
    /// returned bucket.
    pub fn select_day(self, index: &GroupedIndex, day: u8) -> Result<DayKey, NavigationError> {
        let NavigationState::Days { year, month } = self else {
            return Err(self.wrong_level("select day"));
        };
        let key = DayKey { year, month, day };
        if index.day(key).is_none() {
            return Err(NavigationError::UnknownDay { year, month, day });
        }
        Ok(key)
    }

    /// One level up; a no-op at the root.
    pub fn back(self) -> Self {
        match self {
            NavigationState::Years | NavigationState::Months { .. } => NavigationState::Years,
            NavigationState::Days { year, .. } => NavigationState::Months { year },
        }
    }

    pub fn go_home(self) -> Self {
        NavigationState::Years
    }

    fn wrong_level(self, action: &'static str) -> NavigationError {
        NavigationError::WrongLevel {
            action,
            level: self.level(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/explorer/nav_tests.rs"]
mod tests;
