//! Performance benchmarks for the working-time engine.
//!
//! This benchmark suite covers the calculation path from a single day up to
//! a whole team's week report:
//! - Net minutes for one day
//! - Weekly total and reconciliation for one employee
//! - `POST /calculate` through the router
//! - Weekly report for teams of growing size
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use worktime_engine::api::{AppState, CalculationRequest, create_router};
use worktime_engine::calculation::{net_minutes, reconcile, weekly_total};
use worktime_engine::config::PauseRules;
use worktime_engine::models::{DayEntry, DayStatus, Employee, EmployeeDraft, WeekKey, WeekRecord, WorkWeekday};
use worktime_engine::store::Ledger;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// A week with a split Monday, a long Tuesday and a vacation Friday.
fn create_mixed_week() -> WeekRecord {
    WeekRecord::with_carry(45)
        .with_day(
            WorkWeekday::Monday,
            DayEntry::split_workday("07:00", "11:30", "12:00", "16:15"),
        )
        .with_day(WorkWeekday::Tuesday, DayEntry::workday("07:00", "17:00"))
        .with_day(WorkWeekday::Wednesday, DayEntry::workday("08:00", "16:30"))
        .with_day(WorkWeekday::Thursday, DayEntry::workday("08:00", "17:15"))
        .with_day(WorkWeekday::Friday, DayEntry::with_status(DayStatus::Vacation))
}

fn create_employee() -> Employee {
    Employee {
        id: "emp_bench_001".to_string(),
        name: "Bench".to_string(),
        weekly_target_minutes: 2310,
        active: true,
        balance_minutes: 0,
    }
}

/// Creates a ledger with `team_size` employees, each with a stored week.
fn create_team_ledger(team_size: usize, key: WeekKey) -> Ledger {
    let mut ledger = Ledger::default();
    for i in 0..team_size {
        let employee = ledger
            .add_employee(EmployeeDraft {
                name: format!("Employee {:03}", i + 1),
                weekly_target_minutes: 2310,
                active: true,
                balance_minutes: 0,
            })
            .unwrap();
        ledger
            .put_week_record(&employee.id, key, create_mixed_week())
            .unwrap();
    }
    ledger
}

fn bench_day(c: &mut Criterion) {
    let rules = PauseRules::default();
    let day = DayEntry::split_workday("07:00", "11:30", "12:00", "16:15");

    c.bench_function("net_minutes_split_day", |b| {
        b.iter(|| net_minutes(black_box(&day), black_box(&rules)))
    });
}

fn bench_week(c: &mut Criterion) {
    let rules = PauseRules::default();
    let week = create_mixed_week();
    let employee = create_employee();

    c.bench_function("weekly_total", |b| {
        b.iter(|| weekly_total(black_box(&week), black_box(&rules)))
    });

    c.bench_function("reconcile_with_audit", |b| {
        b.iter(|| reconcile(black_box(&week), black_box(&employee), black_box(&rules)))
    });
}

fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(Ledger::default()));
    let request = CalculationRequest {
        employee: create_employee(),
        week: create_mixed_week(),
        pause_rules: None,
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("calculate_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

fn bench_report_scaling(c: &mut Criterion) {
    let key = WeekKey::new(2026, 3).unwrap();
    let mut group = c.benchmark_group("weekly_report");

    for team_size in [1usize, 10, 50, 200] {
        let ledger = create_team_ledger(team_size, key);
        group.throughput(Throughput::Elements(team_size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(team_size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.weekly_report(key)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_day,
    bench_week,
    bench_calculate_endpoint,
    bench_report_scaling,
);
criterion_main!(benches);
