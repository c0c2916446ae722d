//! Week record model and the ISO week key it is stored under.
//!
//! A [`WeekRecord`] holds one employee's five planned weekdays plus the balance
//! carried into the week. Records are keyed by [`WeekKey`], a validated
//! `(ISO year, ISO week)` pair rendered as `YYYY-WW`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DayEntry;

/// The five weekdays a week record plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkWeekday {
    /// Monday.
    #[serde(alias = "Montag")]
    Monday,
    /// Tuesday.
    #[serde(alias = "Dienstag")]
    Tuesday,
    /// Wednesday.
    #[serde(alias = "Mittwoch")]
    Wednesday,
    /// Thursday.
    #[serde(alias = "Donnerstag")]
    Thursday,
    /// Friday.
    #[serde(alias = "Freitag")]
    Friday,
}

impl WorkWeekday {
    /// Every planned weekday, Monday first. A week always has exactly these.
    pub const ALL: [WorkWeekday; 5] = [
        WorkWeekday::Monday,
        WorkWeekday::Tuesday,
        WorkWeekday::Wednesday,
        WorkWeekday::Thursday,
        WorkWeekday::Friday,
    ];

    /// The matching `chrono` weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            WorkWeekday::Monday => Weekday::Mon,
            WorkWeekday::Tuesday => Weekday::Tue,
            WorkWeekday::Wednesday => Weekday::Wed,
            WorkWeekday::Thursday => Weekday::Thu,
            WorkWeekday::Friday => Weekday::Fri,
        }
    }

    /// Display name used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            WorkWeekday::Monday => "Monday",
            WorkWeekday::Tuesday => "Tuesday",
            WorkWeekday::Wednesday => "Wednesday",
            WorkWeekday::Thursday => "Thursday",
            WorkWeekday::Friday => "Friday",
        }
    }
}

static EMPTY_DAY: DayEntry = DayEntry {
    status: super::DayStatus::Workday,
    start1: None,
    end1: None,
    start2: None,
    end2: None,
};

/// One employee's plan for one ISO week.
///
/// `WeekRecord::default()` is the fully populated record handed out for a
/// week that was never stored: zero carry and five empty workdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    /// Balance carried into this week, in minutes.
    #[serde(default, alias = "carry_prev_min")]
    pub carry_prev_minutes: i64,
    /// The planned days; a missing weekday reads as an empty workday.
    #[serde(default)]
    pub days: BTreeMap<WorkWeekday, DayEntry>,
}

impl Default for WeekRecord {
    fn default() -> Self {
        Self {
            carry_prev_minutes: 0,
            days: WorkWeekday::ALL
                .iter()
                .map(|day| (*day, DayEntry::default()))
                .collect(),
        }
    }
}

impl WeekRecord {
    /// A default record entering the week with the given carry.
    pub fn with_carry(carry_prev_minutes: i64) -> Self {
        Self {
            carry_prev_minutes,
            ..Self::default()
        }
    }

    /// Builder-style setter for one day.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_engine::models::{DayEntry, WeekRecord, WorkWeekday};
    ///
    /// let week = WeekRecord::default()
    ///     .with_day(WorkWeekday::Monday, DayEntry::workday("08:00", "16:30"));
    /// assert_eq!(week.day(WorkWeekday::Monday).start1.as_deref(), Some("08:00"));
    /// assert_eq!(week.day(WorkWeekday::Friday).start1, None);
    /// ```
    pub fn with_day(mut self, day: WorkWeekday, entry: DayEntry) -> Self {
        self.days.insert(day, entry);
        self
    }

    /// Returns the entry for a weekday, or an empty workday if none is stored.
    pub fn day(&self, day: WorkWeekday) -> &DayEntry {
        self.days.get(&day).unwrap_or(&EMPTY_DAY)
    }

    /// Returns a copy with every missing weekday filled in with an empty workday.
    pub fn normalized(mut self) -> Self {
        for day in WorkWeekday::ALL {
            self.days.entry(day).or_default();
        }
        self
    }
}

/// An ISO calendar week, e.g. `2026-03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekKey {
    year: i32,
    week: u32,
    monday: NaiveDate,
}

impl WeekKey {
    /// Creates a key, rejecting week numbers the ISO year does not have.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_engine::models::WeekKey;
    ///
    /// assert!(WeekKey::new(2026, 53).is_ok());
    /// assert!(WeekKey::new(2025, 53).is_err());
    /// assert_eq!(WeekKey::new(2026, 3).unwrap().to_string(), "2026-03");
    /// ```
    pub fn new(year: i32, week: u32) -> EngineResult<Self> {
        let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .ok_or(EngineError::InvalidWeek { year, week })?;
        Ok(Self { year, week, monday })
    }

    /// The ISO week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        let offset = u64::from(date.weekday().num_days_from_monday());
        Self {
            year: iso.year(),
            week: iso.week(),
            monday: date - Days::new(offset),
        }
    }

    /// The ISO year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The ISO week number.
    pub fn week(&self) -> u32 {
        self.week
    }

    /// The calendar date of the given weekday in this week.
    pub fn date_of(&self, day: WorkWeekday) -> NaiveDate {
        self.monday + Days::new(u64::from(day.weekday().num_days_from_monday()))
    }

    /// The Monday of this week.
    pub fn monday(&self) -> NaiveDate {
        self.monday
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.week)
    }
}

/// `YYYY-WW`, with a one- or two-digit week.
static WEEK_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{1,2})$").expect("valid week key pattern"));

impl FromStr for WeekKey {
    type Err = EngineError;

    /// Parses `YYYY-WW`. Text of another shape is [`EngineError::InvalidWeekKey`];
    /// a well-formed key naming a week the year lacks is [`EngineError::InvalidWeek`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || EngineError::InvalidWeekKey {
            text: trimmed.to_string(),
        };
        let caps = WEEK_KEY_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        let year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let week: u32 = caps[2].parse().map_err(|_| invalid())?;
        Self::new(year, week)
    }
}

impl TryFrom<String> for WeekKey {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayStatus;

    #[test]
    fn test_default_record_has_exactly_five_empty_workdays() {
        let week = WeekRecord::default();
        assert_eq!(week.carry_prev_minutes, 0);
        assert_eq!(week.days.len(), 5);
        for day in WorkWeekday::ALL {
            assert_eq!(week.day(day), &DayEntry::default());
        }
    }

    #[test]
    fn test_missing_day_reads_as_empty_workday() {
        let week = WeekRecord {
            carry_prev_minutes: 15,
            days: BTreeMap::new(),
        };
        assert_eq!(week.day(WorkWeekday::Wednesday).status, DayStatus::Workday);
        assert_eq!(week.normalized().days.len(), 5);
    }

    #[test]
    fn test_deserialize_stored_week_with_legacy_keys() {
        let json = r#"{
            "carry_prev_min": -30,
            "days": {
                "Montag": {"status": "Arbeitstag", "start1": "08:00", "end1": "16:30", "start2": "", "end2": ""},
                "Freitag": {"status": "Feiertag", "start1": "", "end1": "", "start2": "", "end2": ""}
            }
        }"#;

        let week: WeekRecord = serde_json::from_str(json).unwrap();
        assert_eq!(week.carry_prev_minutes, -30);
        assert_eq!(
            week.day(WorkWeekday::Monday).end1.as_deref(),
            Some("16:30")
        );
        assert_eq!(week.day(WorkWeekday::Friday).status, DayStatus::Holiday);
    }

    #[test]
    fn test_week_key_display_and_parse() {
        let key: WeekKey = "2026-07".parse().unwrap();
        assert_eq!(key.year(), 2026);
        assert_eq!(key.week(), 7);
        assert_eq!(key.to_string(), "2026-07");
    }

    #[test]
    fn test_week_key_rejects_garbage() {
        assert!("2026".parse::<WeekKey>().is_err());
        assert!("2026-xx".parse::<WeekKey>().is_err());
        assert!("2026-00".parse::<WeekKey>().is_err());
        assert!(WeekKey::new(2026, 54).is_err());
    }

    #[test]
    fn test_week_key_parse_error_names_text() {
        for text in ["garbage", "2026-+3", "2026--3", "+2026-03", "2026-003", "2026-3a"] {
            match text.parse::<WeekKey>() {
                Err(EngineError::InvalidWeekKey { text: offending }) => assert_eq!(offending, text),
                other => panic!("Expected InvalidWeekKey for {:?}, got {:?}", text, other),
            }
        }
        assert!(
            " nope "
                .parse::<WeekKey>()
                .unwrap_err()
                .to_string()
                .contains("'nope'")
        );
    }

    #[test]
    fn test_week_key_out_of_calendar_keeps_numbers() {
        assert_eq!("2026-3".parse::<WeekKey>().unwrap(), WeekKey::new(2026, 3).unwrap());
        match "2026-54".parse::<WeekKey>() {
            Err(EngineError::InvalidWeek { year, week }) => assert_eq!((year, week), (2026, 54)),
            other => panic!("Expected InvalidWeek, got {:?}", other),
        }
    }

    #[test]
    fn test_week_key_containing_uses_iso_year() {
        // 2027-01-01 is a Friday in ISO week 53 of 2026.
        let key = WeekKey::containing(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        assert_eq!(key, WeekKey::new(2026, 53).unwrap());
    }

    #[test]
    fn test_week_key_dates() {
        let key = WeekKey::new(2026, 3).unwrap();
        assert_eq!(key.monday(), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        assert_eq!(
            key.date_of(WorkWeekday::Friday),
            NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_week_key_serializes_as_string() {
        let key = WeekKey::new(2026, 3).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2026-03\"");
        let back: WeekKey = serde_json::from_str("\"2026-03\"").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_week_key_ordering_is_chronological() {
        let a = WeekKey::new(2025, 52).unwrap();
        let b = WeekKey::new(2026, 1).unwrap();
        assert!(a < b);
    }
}
