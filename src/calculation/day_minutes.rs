//! Per-day worked minutes and break deduction.
//!
//! This module turns one [`DayEntry`] into raw minutes (the two spans added
//! up) and net minutes (after the pause rule). Stored time text is never
//! re-validated here: a span with an absent, blank, negative or unparseable
//! boundary counts as zero so one bad record cannot block a week's report.

use crate::config::PauseRules;
use crate::models::{AuditStep, DayCalculation, DayEntry, DayStatus, WorkWeekday};

use super::clock::parse_clock;

/// The result of calculating one day, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMinutesResult {
    /// The computed row for the day.
    pub calculation: DayCalculation,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the lengths of both spans of a day.
///
/// Each span contributes `max(end - start, 0)` when both boundaries parse
/// as clock times, otherwise 0. The status is not consulted.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::raw_minutes;
/// use worktime_engine::models::DayEntry;
///
/// assert_eq!(raw_minutes(&DayEntry::workday("08:00", "16:30")), 510);
/// assert_eq!(raw_minutes(&DayEntry::split_workday("07:00", "11:00", "12:00", "14:00")), 360);
/// assert_eq!(raw_minutes(&DayEntry::workday("16:00", "08:00")), 0);
/// assert_eq!(raw_minutes(&DayEntry::workday("8h", "16:00")), 0);
/// ```
pub fn raw_minutes(day: &DayEntry) -> i64 {
    day.spans()
        .iter()
        .map(|(start, end)| span_minutes(*start, *end))
        .sum()
}

/// Worked minutes of a day after deducting the break.
///
/// Non-work statuses yield 0 whatever times were entered. A workday with no
/// raw minutes yields 0; otherwise the short pause is deducted at or below
/// the threshold and the long pause above it, never going below 0.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::net_minutes;
/// use worktime_engine::config::PauseRules;
/// use worktime_engine::models::{DayEntry, DayStatus};
///
/// let rules = PauseRules::default();
/// assert_eq!(net_minutes(&DayEntry::workday("08:00", "17:15"), &rules), 525); // 555 raw
/// assert_eq!(net_minutes(&DayEntry::workday("08:00", "17:16"), &rules), 511); // 556 raw
///
/// let mut vacation = DayEntry::workday("08:00", "16:00");
/// vacation.status = DayStatus::Vacation;
/// assert_eq!(net_minutes(&vacation, &rules), 0);
/// ```
pub fn net_minutes(day: &DayEntry, rules: &PauseRules) -> i64 {
    let (_, _, net) = deduct_pause(day, rules);
    net
}

/// Calculates one day of a week, recording the decision as an audit step.
///
/// `non_work_credit` is the credit for this day if it is a non-work day and
/// crediting is enabled (see [`super::non_work_day_credit`]); it is ignored
/// for workdays.
pub fn calculate_day(
    weekday: WorkWeekday,
    day: &DayEntry,
    rules: &PauseRules,
    non_work_credit: i64,
    step_number: u32,
) -> DayMinutesResult {
    let (raw, pause, net) = deduct_pause(day, rules);
    let credited = if day.status.is_non_work() {
        non_work_credit.max(0)
    } else {
        0
    };

    let reasoning = match day.status {
        DayStatus::Workday if raw <= 0 => {
            format!("{} has no worked time, nothing counted", weekday.name())
        }
        DayStatus::Workday => format!(
            "{} raw {} min is {} the {} min threshold, {} min break deducted, {} min net",
            weekday.name(),
            raw,
            if raw <= i64::from(rules.threshold_minutes) {
                "at or below"
            } else {
                "above"
            },
            rules.threshold_minutes,
            pause,
            net
        ),
        status => format!(
            "{} is {:?}, entered times ignored, {} min credited",
            weekday.name(),
            status,
            credited
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_net_minutes".to_string(),
        rule_name: "Daily Break Deduction".to_string(),
        input: serde_json::json!({
            "day": weekday,
            "status": day.status,
            "spans": day.spans(),
            "threshold_minutes": rules.threshold_minutes,
            "short_pause_minutes": rules.short_pause_minutes,
            "long_pause_minutes": rules.long_pause_minutes
        }),
        output: serde_json::json!({
            "raw_minutes": raw,
            "pause_minutes": pause,
            "net_minutes": net,
            "credited_minutes": credited
        }),
        reasoning,
    };

    DayMinutesResult {
        calculation: DayCalculation {
            day: weekday,
            status: day.status,
            raw_minutes: raw,
            pause_minutes: pause,
            net_minutes: net,
            credited_minutes: credited,
        },
        audit_step,
    }
}

/// Returns (raw, pause, net) for a day. Non-work days report all three as 0;
/// their entered times stay visible in the audit input only.
fn deduct_pause(day: &DayEntry, rules: &PauseRules) -> (i64, i64, i64) {
    if day.status.is_non_work() {
        return (0, 0, 0);
    }
    let raw = raw_minutes(day);
    if raw <= 0 {
        return (raw, 0, 0);
    }
    let pause = rules.pause_for(raw);
    (raw, pause, (raw - pause).max(0))
}

fn span_minutes(start: Option<&str>, end: Option<&str>) -> i64 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    if start.trim().is_empty() || end.trim().is_empty() {
        return 0;
    }
    match (parse_clock(start), parse_clock(end)) {
        (Ok(start), Ok(end)) if start >= 0 && end >= 0 => (end - start).max(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> PauseRules {
        PauseRules::default()
    }

    fn day_with_status(status: DayStatus, start: &str, end: &str) -> DayEntry {
        DayEntry {
            status,
            ..DayEntry::workday(start, end)
        }
    }

    #[test]
    fn test_empty_day_is_zero() {
        let day = DayEntry::default();
        assert_eq!(raw_minutes(&day), 0);
        assert_eq!(net_minutes(&day, &rules()), 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 08:00-17:15 is exactly 555 minutes.
        let at = DayEntry::workday("08:00", "17:15");
        assert_eq!(raw_minutes(&at), 555);
        assert_eq!(net_minutes(&at, &rules()), 525);

        let above = DayEntry::workday("08:00", "17:16");
        assert_eq!(raw_minutes(&above), 556);
        assert_eq!(net_minutes(&above, &rules()), 511);
    }

    #[test]
    fn test_ten_hour_day_deducts_long_pause() {
        let day = DayEntry::workday("07:00", "17:00");
        assert_eq!(raw_minutes(&day), 600);
        assert_eq!(net_minutes(&day, &rules()), 555);
    }

    #[test]
    fn test_pause_is_applied_to_sum_of_both_spans() {
        // 5h + 4h30 = 570 raw, above threshold.
        let day = DayEntry::split_workday("06:00", "11:00", "12:00", "16:30");
        assert_eq!(raw_minutes(&day), 570);
        assert_eq!(net_minutes(&day, &rules()), 525);
    }

    #[test]
    fn test_reversed_span_is_clamped_to_zero() {
        let day = DayEntry::split_workday("16:00", "08:00", "08:00", "10:00");
        assert_eq!(raw_minutes(&day), 120);
    }

    #[test]
    fn test_short_work_never_goes_negative() {
        let day = DayEntry::workday("08:00", "08:10");
        assert_eq!(net_minutes(&day, &rules()), 0);
    }

    #[test]
    fn test_missing_or_blank_boundary_contributes_zero() {
        let mut day = DayEntry::workday("08:00", "12:00");
        day.end1 = None;
        assert_eq!(raw_minutes(&day), 0);

        let blank_start = DayEntry::workday("", "16:30");
        assert_eq!(raw_minutes(&blank_start), 0);
    }

    #[test]
    fn test_malformed_stored_time_degrades_to_zero() {
        let day = DayEntry::split_workday("8.00", "12:00", "13:00", "17:00");
        assert_eq!(raw_minutes(&day), 240);
        assert_eq!(net_minutes(&day, &rules()), 210);
    }

    #[test]
    fn test_negative_boundary_is_treated_as_malformed() {
        let day = DayEntry::workday("-01:00", "08:00");
        assert_eq!(raw_minutes(&day), 0);
    }

    #[test]
    fn test_late_shift_past_midnight_uses_extended_hours() {
        let day = DayEntry::workday("18:00", "26:00");
        assert_eq!(raw_minutes(&day), 480);
        assert_eq!(net_minutes(&day, &rules()), 450);
    }

    #[test]
    fn test_non_work_statuses_ignore_stray_times() {
        for status in [DayStatus::Vacation, DayStatus::Sick, DayStatus::Holiday] {
            let day = day_with_status(status, "08:00", "16:00");
            assert_eq!(net_minutes(&day, &rules()), 0, "{:?}", status);
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = PauseRules {
            threshold_minutes: 360,
            short_pause_minutes: 0,
            long_pause_minutes: 30,
            ..PauseRules::default()
        };
        assert_eq!(net_minutes(&DayEntry::workday("08:00", "14:00"), &rules), 360);
        assert_eq!(net_minutes(&DayEntry::workday("08:00", "14:01"), &rules), 331);
    }

    #[test]
    fn test_calculate_day_workday_row_and_audit() {
        let result = calculate_day(
            WorkWeekday::Monday,
            &DayEntry::workday("08:00", "16:30"),
            &rules(),
            462,
            4,
        );

        assert_eq!(
            result.calculation,
            DayCalculation {
                day: WorkWeekday::Monday,
                status: DayStatus::Workday,
                raw_minutes: 510,
                pause_minutes: 30,
                net_minutes: 480,
                credited_minutes: 0,
            }
        );
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "day_net_minutes");
        assert_eq!(result.audit_step.output["net_minutes"], 480);
        assert!(result.audit_step.reasoning.contains("at or below"));
    }

    #[test]
    fn test_calculate_day_credits_non_work_day() {
        let result = calculate_day(
            WorkWeekday::Friday,
            &day_with_status(DayStatus::Holiday, "08:00", "16:00"),
            &rules(),
            462,
            1,
        );

        assert_eq!(result.calculation.raw_minutes, 0);
        assert_eq!(result.calculation.net_minutes, 0);
        assert_eq!(result.calculation.pause_minutes, 0);
        assert_eq!(result.calculation.credited_minutes, 462);
        assert_eq!(result.calculation.counted_minutes(), 462);
        assert!(result.audit_step.reasoning.contains("Holiday"));
    }

    #[test]
    fn test_calculate_day_non_work_row_reports_no_raw_time() {
        for status in [DayStatus::Vacation, DayStatus::Sick, DayStatus::Holiday] {
            let day = day_with_status(status, "08:00", "16:00");
            let result = calculate_day(WorkWeekday::Monday, &day, &rules(), 0, 1);

            assert_eq!(result.calculation.raw_minutes, 0, "{:?}", status);
            assert_eq!(result.calculation.counted_minutes(), 0, "{:?}", status);
            assert_eq!(result.audit_step.output["raw_minutes"], 0);
            assert_eq!(result.audit_step.input["spans"][0][0], "08:00");
        }
    }

    #[test]
    fn test_calculate_day_reports_empty_workday() {
        let result = calculate_day(WorkWeekday::Tuesday, &DayEntry::default(), &rules(), 0, 1);
        assert_eq!(result.calculation.counted_minutes(), 0);
        assert!(result.audit_step.reasoning.contains("no worked time"));
    }
}
