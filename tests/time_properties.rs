//! Property tests for time text conversion and the day/week rules.

use proptest::prelude::*;

use worktime_engine::calculation::{
    format_minutes, net_minutes, parse_clock, parse_duration, raw_minutes, reconcile, weekly_total,
};
use worktime_engine::config::PauseRules;
use worktime_engine::models::{DayEntry, DayStatus, Employee, WeekRecord, WorkWeekday};

const CLOCK_MAX: i64 = 29 * 60 + 59;

fn clock_text() -> impl Strategy<Value = String> {
    (0..=CLOCK_MAX).prop_map(|m| format_minutes(m, false))
}

fn status() -> impl Strategy<Value = DayStatus> {
    prop_oneof![
        Just(DayStatus::Workday),
        Just(DayStatus::Vacation),
        Just(DayStatus::Sick),
        Just(DayStatus::Holiday),
    ]
}

fn day_entry() -> impl Strategy<Value = DayEntry> {
    (status(), clock_text(), clock_text(), clock_text(), clock_text()).prop_map(
        |(status, start1, end1, start2, end2)| DayEntry {
            status,
            ..DayEntry::split_workday(&start1, &end1, &start2, &end2)
        },
    )
}

fn week_record() -> impl Strategy<Value = WeekRecord> {
    (-6000i64..6000, proptest::collection::vec(day_entry(), 5)).prop_map(|(carry, days)| {
        WorkWeekday::ALL
            .iter()
            .zip(days)
            .fold(WeekRecord::with_carry(carry), |week, (day, entry)| {
                week.with_day(*day, entry)
            })
    })
}

fn pause_rules() -> impl Strategy<Value = PauseRules> {
    (0u32..900, 0u32..120, 0u32..120).prop_map(|(threshold, short, long)| PauseRules {
        threshold_minutes: threshold,
        short_pause_minutes: short,
        long_pause_minutes: long,
        ..PauseRules::default()
    })
}

proptest! {
    #[test]
    fn clock_round_trips_unsigned(m in 0..=CLOCK_MAX) {
        prop_assert_eq!(parse_clock(&format_minutes(m, false)).unwrap(), m);
    }

    #[test]
    fn clock_round_trips_signed(m in -CLOCK_MAX..=CLOCK_MAX) {
        prop_assert_eq!(parse_clock(&format_minutes(m, true)).unwrap(), m);
    }

    #[test]
    fn duration_round_trips_signed(m in -1_000_000i64..1_000_000) {
        prop_assert_eq!(parse_duration(&format_minutes(m, true)).unwrap(), m);
    }

    #[test]
    fn formatted_minutes_are_always_two_digits(m in 0i64..60) {
        let text = format_minutes(m, false);
        prop_assert!(text.starts_with("00:"));
        prop_assert_eq!(text.len(), 5);
    }

    #[test]
    fn net_never_negative_nor_above_raw(day in day_entry(), rules in pause_rules()) {
        let net = net_minutes(&day, &rules);
        prop_assert!(net >= 0);
        prop_assert!(net <= raw_minutes(&day).max(0));
    }

    #[test]
    fn non_work_days_contribute_nothing(day in day_entry(), rules in pause_rules()) {
        prop_assume!(day.status != DayStatus::Workday);
        prop_assert_eq!(net_minutes(&day, &rules), 0);
    }

    #[test]
    fn weekly_total_is_sum_of_five_days(week in week_record(), rules in pause_rules()) {
        let sum: i64 = WorkWeekday::ALL.iter().map(|d| net_minutes(week.day(*d), &rules)).sum();
        prop_assert_eq!(weekly_total(&week, &rules), sum);
    }

    #[test]
    fn reconcile_balances_carry_and_difference(
        week in week_record(),
        target in 0u32..4000,
    ) {
        let employee = Employee {
            id: "emp_p".to_string(),
            name: "P".to_string(),
            weekly_target_minutes: target,
            active: true,
            balance_minutes: 0,
        };
        let rules = PauseRules::default();
        let result = reconcile(&week, &employee, &rules);

        prop_assert_eq!(result.weekly_total_minutes, weekly_total(&week, &rules));
        prop_assert_eq!(result.difference_minutes, result.weekly_total_minutes - i64::from(target));
        prop_assert_eq!(result.new_balance_minutes, week.carry_prev_minutes + result.difference_minutes);
        prop_assert_eq!(&result, &reconcile(&week, &employee, &rules));
    }
}
