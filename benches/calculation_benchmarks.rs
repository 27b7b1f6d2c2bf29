//! Performance benchmarks for the payroll calculation engine.
//!
//! Verifies that payroll calculation stays comfortably in-budget for the
//! intended scale (a few hundred attendance records per run):
//! - Single employee, one month: well under a millisecond
//! - Batch of 100 employees: low single-digit milliseconds
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use payroll_engine::config::StatutoryConfig;
use payroll_engine::engine::{WeekSelection, calculate_month_for_all, calculate_period};
use payroll_engine::models::{AttendanceEvent, CompensationProfile, PayrollMonth};

fn profile(employee_id: String) -> CompensationProfile {
    CompensationProfile {
        employee_id,
        hourly_rate: Decimal::new(15000, 2),
        basic_monthly_salary: Decimal::new(3000000, 2),
        rice_subsidy: Decimal::new(150000, 2),
        phone_allowance: Decimal::new(100000, 2),
        clothing_allowance: Decimal::new(80000, 2),
    }
}

/// Four Monday-to-Friday weeks of June 2024 attendance for one employee.
fn month_of_attendance(employee_id: &str) -> Vec<AttendanceEvent> {
    let mondays = [
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 24).unwrap(),
    ];

    mondays
        .iter()
        .flat_map(|monday| {
            (0..5).map(|offset| AttendanceEvent {
                employee_id: employee_id.to_string(),
                date: *monday + Duration::days(offset),
                time_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                time_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            })
        })
        .collect()
}

fn bench_single_employee_month(c: &mut Criterion) {
    let profiles = vec![profile("10001".to_string())];
    let records = month_of_attendance("10001");
    let config = StatutoryConfig::fiscal_2023();
    let month = PayrollMonth { year: 2024, month: 6 };

    c.bench_function("single_employee_month", |b| {
        b.iter(|| {
            calculate_period(
                black_box(&profiles),
                black_box(&records),
                black_box("10001"),
                month,
                WeekSelection::All,
                &config,
            )
            .unwrap()
        })
    });
}

fn bench_batch_sizes(c: &mut Criterion) {
    let config = StatutoryConfig::fiscal_2023();
    let month = PayrollMonth { year: 2024, month: 6 };

    let mut group = c.benchmark_group("batch_month");
    for employee_count in [10usize, 100] {
        let profiles: Vec<CompensationProfile> = (0..employee_count)
            .map(|i| profile(format!("{:05}", 10000 + i)))
            .collect();
        let records: Vec<AttendanceEvent> = profiles
            .iter()
            .flat_map(|p| month_of_attendance(&p.employee_id))
            .collect();

        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employee_count,
            |b, _| {
                b.iter(|| {
                    calculate_month_for_all(
                        black_box(&profiles),
                        black_box(&records),
                        month,
                        WeekSelection::All,
                        &config,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_employee_month, bench_batch_sizes);
criterion_main!(benches);
