//! Calculation logic for the working-time engine.
//!
//! This module contains the pure functions that turn stored day entries into
//! minutes: `HH:MM` parsing and formatting, per-day break deduction, the
//! Monday-to-Friday weekly total, non-work day credit, balance reconciliation
//! against the weekly target, and report rows for export.

mod balance;
mod clock;
mod day_minutes;
mod non_work_credit;
mod report;
mod weekly_total;

pub use balance::reconcile;
pub use clock::{MAX_DURATION_MINUTES, format_minutes, parse_clock, parse_duration};
pub use day_minutes::{DayMinutesResult, calculate_day, net_minutes, raw_minutes};
pub use non_work_credit::non_work_day_credit;
pub use report::{ReportDay, WeeklyReportRow, build_report_row, minutes_to_hours};
pub use weekly_total::{WeeklyBreakdown, weekly_breakdown, weekly_total};
