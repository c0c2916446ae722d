//! Weekly result models.
//!
//! This module contains the [`WeeklyResult`] produced by reconciling a week,
//! the per-day [`DayCalculation`] rows it is built from, and the [`AuditStep`]
//! records that explain each rule decision. Results are derived data: they are
//! recomputed on demand and carry no ids or timestamps, so recomputing the
//! same inputs yields an identical value.

use serde::{Deserialize, Serialize};

use super::{DayStatus, WorkWeekday};

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The computed minutes of one planned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCalculation {
    /// Which weekday this row is for.
    pub day: WorkWeekday,
    /// The day's status.
    pub status: DayStatus,
    /// Sum of both span lengths before break deduction; 0 on a non-work day.
    pub raw_minutes: i64,
    /// The break that was deducted (0 when nothing was worked).
    pub pause_minutes: i64,
    /// Worked minutes after break deduction.
    pub net_minutes: i64,
    /// Minutes credited toward the target for a non-work day.
    pub credited_minutes: i64,
}

impl DayCalculation {
    /// The minutes this day contributes to the weekly total.
    pub fn counted_minutes(&self) -> i64 {
        self.net_minutes + self.credited_minutes
    }
}

/// The outcome of reconciling one employee's week against their target.
///
/// # Example
///
/// ```
/// use worktime_engine::models::WeeklyResult;
///
/// let result = WeeklyResult {
///     employee_id: "emp_001".to_string(),
///     worked_minutes: 2400,
///     credited_minutes: 0,
///     weekly_total_minutes: 2400,
///     weekly_target_minutes: 2310,
///     difference_minutes: 90,
///     carry_in_minutes: 0,
///     new_balance_minutes: 90,
///     days: vec![],
///     audit_steps: vec![],
/// };
/// assert!(result.is_surplus());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyResult {
    /// The employee the week belongs to.
    pub employee_id: String,
    /// Net worked minutes over the five weekdays.
    pub worked_minutes: i64,
    /// Minutes credited for non-work days (0 unless enabled in the pause rules).
    pub credited_minutes: i64,
    /// Worked plus credited minutes; the value compared against the target.
    pub weekly_total_minutes: i64,
    /// The employee's weekly target at computation time.
    pub weekly_target_minutes: i64,
    /// `weekly_total_minutes - weekly_target_minutes`.
    pub difference_minutes: i64,
    /// Balance carried into the week.
    pub carry_in_minutes: i64,
    /// `carry_in_minutes + difference_minutes`; the proposed running balance.
    pub new_balance_minutes: i64,
    /// Per-day breakdown, Monday first.
    pub days: Vec<DayCalculation>,
    /// Rule decisions, in the order they were made.
    pub audit_steps: Vec<AuditStep>,
}

impl WeeklyResult {
    /// Returns true if the week ended above target.
    pub fn is_surplus(&self) -> bool {
        self.difference_minutes > 0
    }
}
