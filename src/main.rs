//! Demonstration entry point for the payroll engine.
//!
//! Builds a roster with employees of every compensation scheme, prints the
//! full payslip for each one, and closes with a roster total.
//!
//! Run with: `cargo run`

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::error::PayrollResult;
use payroll_engine::models::{
    CommissionEmployee, Employee, HourlyEmployee, SalariedEmployee, TemporaryEmployee,
};

fn main() -> PayrollResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let today = Local::now().date_naive();
    info!(%today, "building demonstration roster");

    let employees = build_roster(today)?;

    for employee in &employees {
        print_payslip(employee.as_ref(), today);
    }

    let total: Decimal = employees.iter().map(|e| e.net_pay(today)).sum();
    println!("\n{}", "=".repeat(80));
    println!("{:.<40} {}", "Total employees", employees.len());
    println!("{:.<40} ${}", "Total monthly payroll", total);

    info!(employee_count = employees.len(), %total, "payroll run complete");
    Ok(())
}

/// One employee per scheme, plus the contrasting cases that show each bonus
/// rule switching on and off.
fn build_roster(today: NaiveDate) -> PayrollResult<Vec<Box<dyn Employee>>> {
    Ok(vec![
        Box::new(SalariedEmployee::new(
            "001",
            "Juan Pérez",
            ymd(2018, 1, 15),
            Decimal::new(5_000_000, 0),
            today,
        )?),
        Box::new(SalariedEmployee::new(
            "002",
            "María González",
            ymd(2022, 6, 1),
            Decimal::new(4_500_000, 0),
            today,
        )?),
        Box::new(HourlyEmployee::new(
            "003",
            "Carlos Rodríguez",
            ymd(2022, 3, 10),
            Decimal::new(50_000, 0),
            Decimal::new(45, 0),
            true,
            today,
        )?),
        Box::new(HourlyEmployee::new(
            "004",
            "Ana Martínez",
            ymd(2024, 8, 1),
            Decimal::new(45_000, 0),
            Decimal::new(35, 0),
            false,
            today,
        )?),
        Box::new(CommissionEmployee::new(
            "005",
            "Luis Torres",
            ymd(2020, 5, 20),
            Decimal::new(2_000_000, 0),
            Decimal::new(5, 2),
            Decimal::new(25_000_000, 0),
            today,
        )?),
        Box::new(CommissionEmployee::new(
            "006",
            "Patricia Silva",
            ymd(2021, 9, 15),
            Decimal::new(2_500_000, 0),
            Decimal::new(4, 2),
            Decimal::new(15_000_000, 0),
            today,
        )?),
        Box::new(TemporaryEmployee::new(
            "007",
            "Roberto Díaz",
            ymd(2024, 10, 1),
            Decimal::new(3_000_000, 0),
            ymd(2025, 12, 31),
            today,
        )?),
    ])
}

fn print_payslip(employee: &dyn Employee, today: NaiveDate) {
    println!("\n{}", "=".repeat(80));
    println!(
        "{} — {} (ID: {}, {} years of service)",
        employee.kind().label(),
        employee.name(),
        employee.id(),
        employee.tenure_years(today),
    );
    println!("{}", "-".repeat(80));

    for line in employee.payslip(today).lines() {
        println!("{:.<40} {}", title_case(&line.field), line.value);
    }
}

fn title_case(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
