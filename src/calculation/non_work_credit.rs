//! Credit for vacation, sick and holiday days.
//!
//! With `count_non_work_as_work` off (the default) non-work days count 0.
//! With it on, each such day is credited a fixed number of minutes: the
//! configured `non_work_day_credit_minutes`, or else the daily share of the
//! employee's weekly target over five workdays.

use crate::config::PauseRules;
use crate::models::WorkWeekday;

/// Returns the minutes credited per non-work day for an employee's target.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::non_work_day_credit;
/// use worktime_engine::config::PauseRules;
///
/// let off = PauseRules::default();
/// assert_eq!(non_work_day_credit(&off, 2310), 0);
///
/// let share = PauseRules { count_non_work_as_work: true, ..PauseRules::default() };
/// assert_eq!(non_work_day_credit(&share, 2310), 462);
///
/// let fixed = PauseRules { non_work_day_credit_minutes: Some(450), ..share };
/// assert_eq!(non_work_day_credit(&fixed, 2310), 450);
/// ```
pub fn non_work_day_credit(rules: &PauseRules, weekly_target_minutes: u32) -> i64 {
    if !rules.count_non_work_as_work {
        return 0;
    }
    match rules.non_work_day_credit_minutes {
        Some(credit) => i64::from(credit),
        None => i64::from(weekly_target_minutes) / WorkWeekday::ALL.len() as i64,
    }
}
