use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::aggregate::sessions_on_date;
use crate::types::{ParseError, Session};

/// Day on which training sessions are normally held.
pub const DEFAULT_TRAINING_WEEKDAY: Weekday = Weekday::Wed;

// ---------------------------------------------------------------------------
// MonthCursor
// ---------------------------------------------------------------------------

/// A calendar month being displayed. Always holds the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| ParseError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn next(self) -> Self {
        Self {
            first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn prev(self) -> Self {
        Self {
            first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        (self.next().first - self.first).num_days().max(0) as u32
    }

    /// Display label, e.g. `"August 2025"`.
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl Default for MonthCursor {
    /// August 2025, the first month of the upcoming plan.
    fn default() -> Self {
        Self {
            first: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap_or_default(),
        }
    }
}

impl FromStr for MonthCursor {
    type Err = ParseError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ParseError::InvalidMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        MonthCursor::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

// ---------------------------------------------------------------------------
// MonthGrid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub iso_date: String,
    pub sessions: Vec<&'a Session>,
    /// Falls on the training weekday.
    pub highlighted: bool,
}

/// A Sunday-first month layout with the sessions placed on each day.
#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    pub cursor: MonthCursor,
    /// Empty cells before day 1 (0 when the month starts on a Sunday).
    pub leading_blanks: u32,
    pub days: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn build<I>(cursor: MonthCursor, sessions: I, highlight: Weekday) -> Self
    where
        I: IntoIterator<Item = &'a Session>,
    {
        let pool: Vec<&Session> = sessions.into_iter().collect();
        let days = cursor
            .first_day()
            .iter_days()
            .take(cursor.days_in_month() as usize)
            .map(|date| {
                let iso_date = date.format("%Y-%m-%d").to_string();
                DayCell {
                    day: date.day(),
                    date,
                    sessions: sessions_on_date(pool.iter().copied(), &iso_date),
                    iso_date,
                    highlighted: date.weekday() == highlight,
                }
            })
            .collect();

        Self {
            cursor,
            leading_blanks: cursor.first_day().weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Week rows of seven cells; `None` pads before day 1 and after the last day.
    pub fn weeks(&self) -> Vec<[Option<&DayCell<'a>>; 7]> {
        let mut cells: Vec<Option<&DayCell<'a>>> = Vec::new();
        cells.extend((0..self.leading_blanks).map(|_| None));
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| [week[0], week[1], week[2], week[3], week[4], week[5], week[6]])
            .collect()
    }

    /// Number of sessions placed anywhere in the month.
    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    #[test]
    fn cursor_wraps_across_years() {
        let dec = MonthCursor::new(2025, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2026, 1).unwrap());
        assert_eq!(MonthCursor::new(2026, 1).unwrap().prev(), dec);
    }

    #[test]
    fn parse_rejects_bad_months() {
        assert!("2025-13".parse::<MonthCursor>().is_err());
        assert!("2025-8".parse::<MonthCursor>().is_err());
        assert!("august".parse::<MonthCursor>().is_err());
        assert_eq!("2025-08".parse::<MonthCursor>().unwrap(), MonthCursor::default());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCursor::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCursor::new(2025, 8).unwrap().days_in_month(), 31);
    }

    #[test]
    fn grid_places_sessions_and_highlights_wednesdays() {
        let sessions = vec![
            Session::new("a", "A", Theme::Sales).scheduled("2025-08-06"),
            Session::new("b", "B", Theme::Product),
        ];
        let grid = MonthGrid::build(MonthCursor::default(), &sessions, Weekday::Wed);

        // 1 August 2025 is a Friday.
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.session_count(), 1);
        assert_eq!(grid.days[5].sessions[0].id, "a");
        assert!(grid.days[5].highlighted);
        assert!(!grid.days[6].highlighted);
    }

    #[test]
    fn weeks_are_padded_to_full_rows() {
        let grid = MonthGrid::build(MonthCursor::default(), std::iter::empty(), Weekday::Wed);
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 6);
        assert!(weeks[0][4].is_none());
        assert_eq!(weeks[0][5].map(|d| d.day), Some(1));
    }
}
