//! Weekly balance reconciliation.
//!
//! This module compares a week's total against the employee's contractual
//! target and rolls the difference into the carried balance. It is a pure
//! function of its inputs: the employee is only read, and the proposed new
//! balance is returned for the caller to commit (or not).

use crate::config::PauseRules;
use crate::models::{AuditStep, Employee, WeekRecord, WeeklyResult};

use super::non_work_credit::non_work_day_credit;
use super::weekly_total::weekly_breakdown;

/// Reconciles one employee's week.
///
/// - `weekly_total = worked + credited` (credited is 0 unless non-work days
///   count toward the target)
/// - `difference = weekly_total - target`
/// - `new_balance = week.carry_prev_minutes + difference`, saturating at the
///   bounds of `i64`
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::reconcile;
/// use worktime_engine::config::PauseRules;
/// use worktime_engine::models::{DayEntry, Employee, WeekRecord, WorkWeekday};
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Mia".to_string(),
///     weekly_target_minutes: 2310, // 38:30
///     active: true,
///     balance_minutes: 0,
/// };
/// let week = WorkWeekday::ALL.iter().fold(WeekRecord::default(), |week, day| {
///     week.with_day(*day, DayEntry::workday("08:00", "16:30"))
/// });
///
/// let result = reconcile(&week, &employee, &PauseRules::default());
/// assert_eq!(result.weekly_total_minutes, 2400);
/// assert_eq!(result.difference_minutes, 90);
/// assert_eq!(result.new_balance_minutes, 90);
/// ```
pub fn reconcile(week: &WeekRecord, employee: &Employee, rules: &PauseRules) -> WeeklyResult {
    let credit = non_work_day_credit(rules, employee.weekly_target_minutes);
    let breakdown = weekly_breakdown(week, rules, credit, 1);

    let weekly_total = breakdown.total_minutes();
    let target = employee.weekly_target();
    let difference = weekly_total - target;
    let new_balance = week.carry_prev_minutes.saturating_add(difference);

    let mut audit_steps = breakdown.audit_steps;
    let step_number = audit_steps.len() as u32 + 1;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "balance_reconciliation".to_string(),
        rule_name: "Weekly Balance Reconciliation".to_string(),
        input: serde_json::json!({
            "employee_id": employee.id,
            "weekly_total_minutes": weekly_total,
            "weekly_target_minutes": target,
            "carry_in_minutes": week.carry_prev_minutes
        }),
        output: serde_json::json!({
            "difference_minutes": difference,
            "new_balance_minutes": new_balance
        }),
        reasoning: format!(
            "{} min total - {} min target = {:+} min; carry {:+} min becomes {:+} min",
            weekly_total, target, difference, week.carry_prev_minutes, new_balance
        ),
    });

    WeeklyResult {
        employee_id: employee.id.clone(),
        worked_minutes: breakdown.worked_minutes,
        credited_minutes: breakdown.credited_minutes,
        weekly_total_minutes: weekly_total,
        weekly_target_minutes: target,
        difference_minutes: difference,
        carry_in_minutes: week.carry_prev_minutes,
        new_balance_minutes: new_balance,
        days: breakdown.days,
        audit_steps,
    }
}
