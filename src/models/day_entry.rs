//! Day entry model: a status tag plus up to two clock-time spans.

use serde::{Deserialize, Serialize};

/// The status of a single planned day.
///
/// Only [`DayStatus::Workday`] contributes worked minutes. The German tags
/// written by older data files are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// A regular working day.
    #[default]
    #[serde(alias = "Arbeitstag")]
    Workday,
    /// Paid leave.
    #[serde(alias = "Urlaub")]
    Vacation,
    /// Sick leave.
    #[serde(alias = "Krank")]
    Sick,
    /// Public holiday.
    #[serde(alias = "Feiertag")]
    Holiday,
}

impl DayStatus {
    /// Returns true for the statuses that never contribute worked minutes.
    pub fn is_non_work(self) -> bool {
        self != DayStatus::Workday
    }
}

/// One calendar day of one employee's week.
///
/// Times are kept as entered (`"08:00"`, blank, or absent). Stored text is
/// not re-validated: a malformed boundary simply makes its span count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The status of the day.
    #[serde(default)]
    pub status: DayStatus,
    /// Start of the first span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start1: Option<String>,
    /// End of the first span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end1: Option<String>,
    /// Start of the second span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start2: Option<String>,
    /// End of the second span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end2: Option<String>,
}

impl DayEntry {
    /// A workday with a single span.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_engine::models::{DayEntry, DayStatus};
    ///
    /// let day = DayEntry::workday("08:00", "16:30");
    /// assert_eq!(day.status, DayStatus::Workday);
    /// assert_eq!(day.start2, None);
    /// ```
    pub fn workday(start: &str, end: &str) -> Self {
        Self {
            status: DayStatus::Workday,
            start1: Some(start.to_string()),
            end1: Some(end.to_string()),
            start2: None,
            end2: None,
        }
    }

    /// A workday split into two spans, e.g. around a lunch break.
    pub fn split_workday(start1: &str, end1: &str, start2: &str, end2: &str) -> Self {
        Self {
            status: DayStatus::Workday,
            start1: Some(start1.to_string()),
            end1: Some(end1.to_string()),
            start2: Some(start2.to_string()),
            end2: Some(end2.to_string()),
        }
    }

    /// A day with the given status and no times.
    pub fn with_status(status: DayStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Returns both spans as (start, end) pairs of optional text.
    pub fn spans(&self) -> [(Option<&str>, Option<&str>); 2] {
        [
            (self.start1.as_deref(), self.end1.as_deref()),
            (self.start2.as_deref(), self.end2.as_deref()),
        ]
    }
}
