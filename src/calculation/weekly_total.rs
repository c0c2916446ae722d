//! Weekly aggregation over the five planned weekdays.

use crate::config::PauseRules;
use crate::models::{AuditStep, DayCalculation, WeekRecord, WorkWeekday};

use super::day_minutes::{calculate_day, net_minutes};

/// The per-day rows and sums of one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBreakdown {
    /// One row per weekday, Monday first.
    pub days: Vec<DayCalculation>,
    /// Sum of net worked minutes.
    pub worked_minutes: i64,
    /// Sum of non-work day credits.
    pub credited_minutes: i64,
    /// One audit step per day followed by the weekly sum.
    pub audit_steps: Vec<AuditStep>,
}

impl WeeklyBreakdown {
    /// Worked plus credited minutes.
    pub fn total_minutes(&self) -> i64 {
        self.worked_minutes + self.credited_minutes
    }
}

/// Sums net worked minutes over Monday to Friday.
///
/// Exactly the five weekdays are summed; a weekday without an entry counts
/// as an empty workday. Credits for non-work days are not included.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::weekly_total;
/// use worktime_engine::config::PauseRules;
/// use worktime_engine::models::{DayEntry, WeekRecord, WorkWeekday};
///
/// let mut week = WeekRecord::default();
/// for day in WorkWeekday::ALL {
///     week = week.with_day(day, DayEntry::workday("08:00", "16:30"));
/// }
/// assert_eq!(weekly_total(&week, &PauseRules::default()), 2400);
/// ```
pub fn weekly_total(week: &WeekRecord, rules: &PauseRules) -> i64 {
    WorkWeekday::ALL
        .iter()
        .map(|day| net_minutes(week.day(*day), rules))
        .sum()
}

/// Calculates every weekday of a week and sums the results.
///
/// `non_work_credit` is the per-day credit for non-work days (0 when
/// crediting is disabled). Audit steps are numbered from `start_step_number`.
pub fn weekly_breakdown(
    week: &WeekRecord,
    rules: &PauseRules,
    non_work_credit: i64,
    start_step_number: u32,
) -> WeeklyBreakdown {
    let mut days = Vec::with_capacity(WorkWeekday::ALL.len());
    let mut audit_steps = Vec::with_capacity(WorkWeekday::ALL.len() + 1);
    let mut current_step = start_step_number;

    for weekday in WorkWeekday::ALL {
        let result = calculate_day(weekday, week.day(weekday), rules, non_work_credit, current_step);
        days.push(result.calculation);
        audit_steps.push(result.audit_step);
        current_step += 1;
    }

    let worked_minutes: i64 = days.iter().map(|d| d.net_minutes).sum();
    let credited_minutes: i64 = days.iter().map(|d| d.credited_minutes).sum();

    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "weekly_total".to_string(),
        rule_name: "Weekly Total".to_string(),
        input: serde_json::json!({
            "net_minutes": days.iter().map(|d| d.net_minutes).collect::<Vec<_>>(),
            "credited_minutes": days.iter().map(|d| d.credited_minutes).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "worked_minutes": worked_minutes,
            "credited_minutes": credited_minutes,
            "weekly_total_minutes": worked_minutes + credited_minutes
        }),
        reasoning: format!(
            "Summed five weekdays: {} min worked + {} min credited = {} min",
            worked_minutes,
            credited_minutes,
            worked_minutes + credited_minutes
        ),
    });

    WeeklyBreakdown {
        days,
        worked_minutes,
        credited_minutes,
        audit_steps,
    }
}
