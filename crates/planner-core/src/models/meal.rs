// ABOUTME: Day-of-week and meal-type enums that together identify one of 28 weekly meal slots
// ABOUTME: Provides ordered iteration, display names and case-insensitive parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unrecognized day or meal name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseSlotError {
    /// "day" or "meal"
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Day {
    /// All days in plan order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Display name ("Monday")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Zero-based position in the week
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Plan day a calendar date falls on
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Plan day of the local calendar date
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSlotError {
                kind: "day",
                value: s.to_owned(),
            })
    }
}

/// Meal within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meals in plan order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Display name ("Breakfast")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }

    /// Zero-based position within a day
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSlotError {
                kind: "meal",
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parsing_is_case_insensitive() {
        assert_eq!("monday".parse::<Day>(), Ok(Day::Monday));
        assert_eq!(" SUNDAY ".parse::<Day>(), Ok(Day::Sunday));
        assert!("Funday".parse::<Day>().is_err());
    }

    #[test]
    fn test_meal_parsing_and_order() {
        assert_eq!("snack".parse::<MealType>(), Ok(MealType::Snack));
        assert_eq!(MealType::ALL.map(MealType::index), [0, 1, 2, 3]);
        let err = "brunch".parse::<MealType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown meal: brunch");
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from(Weekday::Wed), Day::Wednesday);
        assert_eq!(Day::from(Weekday::Sun).index(), 6);
    }

    #[test]
    fn test_day_from_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(Day::from_date(date), Day::Friday);
        assert_eq!(Day::from_date(date.succ_opt().unwrap()), Day::Saturday);
    }
}
