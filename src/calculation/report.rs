//! Export rows for a weekly report.
//!
//! A report row is a reconciled week rendered for display: per-day counted time,
//! weekly total, target, difference and new carry as `HH:MM` text, plus the
//! total and difference as decimal hours for payroll spreadsheets. Layout and
//! pagination are left to whatever consumes the rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayStatus, Employee, WeekKey, WeeklyResult, WorkWeekday};

use super::clock::format_minutes;

/// One day cell of a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDay {
    /// The weekday.
    pub day: WorkWeekday,
    /// The calendar date within the reported week.
    pub date: NaiveDate,
    /// The day's status.
    pub status: DayStatus,
    /// Time the day counts toward the week, `HH:MM`: net worked time, or
    /// the credit for a non-work day when such days are counted.
    pub counted: String,
}

/// One employee's line in a weekly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReportRow {
    /// The employee id.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// Monday to Friday.
    pub days: Vec<ReportDay>,
    /// Weekly total, `HH:MM`.
    pub weekly_total: String,
    /// Weekly target, `HH:MM`.
    pub weekly_target: String,
    /// Total minus target, signed `HH:MM`.
    pub difference: String,
    /// New carried balance, signed `HH:MM`.
    pub new_balance: String,
    /// Weekly total in hours, two decimal places.
    pub weekly_total_hours: Decimal,
    /// Difference in hours, two decimal places.
    pub difference_hours: Decimal,
}

/// Builds the report row for one employee's reconciled week.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::{build_report_row, reconcile};
/// use worktime_engine::config::PauseRules;
/// use worktime_engine::models::{DayEntry, Employee, WeekKey, WeekRecord, WorkWeekday};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Mia".to_string(),
///     weekly_target_minutes: 2310,
///     active: true,
///     balance_minutes: 0,
/// };
/// let week = WeekRecord::default()
///     .with_day(WorkWeekday::Monday, DayEntry::workday("08:00", "16:30"));
/// let result = reconcile(&week, &employee, &PauseRules::default());
///
/// let row = build_report_row(&employee, WeekKey::new(2026, 3).unwrap(), &result);
/// assert_eq!(row.days[0].counted, "08:00");
/// assert_eq!(row.weekly_target, "38:30");
/// assert_eq!(row.difference, "-30:30");
/// assert_eq!(row.weekly_total_hours, Decimal::new(800, 2));
/// ```
pub fn build_report_row(employee: &Employee, week: WeekKey, result: &WeeklyResult) -> WeeklyReportRow {
    let days = result
        .days
        .iter()
        .map(|day| ReportDay {
            day: day.day,
            date: week.date_of(day.day),
            status: day.status,
            counted: format_minutes(day.counted_minutes(), false),
        })
        .collect();

    WeeklyReportRow {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        days,
        weekly_total: format_minutes(result.weekly_total_minutes, false),
        weekly_target: format_minutes(result.weekly_target_minutes, false),
        difference: format_minutes(result.difference_minutes, true),
        new_balance: format_minutes(result.new_balance_minutes, true),
        weekly_total_hours: minutes_to_hours(result.weekly_total_minutes),
        difference_hours: minutes_to_hours(result.difference_minutes),
    }
}

/// Converts minutes to hours with exactly two decimal places.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    let mut hours = (Decimal::from(minutes) / Decimal::from(60)).round_dp(2);
    hours.rescale(2);
    hours
}
