// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use myspend::ledger::health_report;
use myspend::models::{Expense, Income};
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn income(amount: &str, date: NaiveDate) -> Income {
    Income {
        id: 1,
        user_id: 1,
        source: "Salary".to_string(),
        amount: dec(amount),
        date,
        icon: None,
    }
}

fn expense(amount: &str, date: NaiveDate) -> Expense {
    Expense {
        id: 1,
        user_id: 1,
        title: "Spend".to_string(),
        amount: dec(amount),
        date,
        category: "Other".to_string(),
    }
}

#[test]
fn healthy_month_scores_one_hundred() {
    let today = date(2024, 1, 15);
    let incomes = vec![income("5000", date(2024, 1, 5))];
    let expenses = vec![expense("2000", date(2024, 1, 10))];
    let report = health_report(&incomes, &expenses, today);
    assert_eq!(report.score, 100);
    assert_eq!(report.savings_rate, 60);
    assert_eq!(report.expense_ratio, 40);
    assert_eq!(report.budget_overshoot, 0);
    assert_eq!(report.emergency_spending, 0);
}

#[test]
fn zero_income_with_expenses_scores_seventy() {
    let today = date(2024, 6, 15);
    let expenses = vec![expense("1000", date(2024, 6, 10))];
    let report = health_report(&[], &expenses, today);
    assert_eq!(report.total_income, Decimal::ZERO);
    // Zero-income guards force every ratio to 0 instead of dividing.
    assert_eq!(report.expense_ratio, 0);
    assert_eq!(report.budget_overshoot, 0);
    assert_eq!(report.emergency_spending, 0);
    // savings_rate = 0 still trips the < 10 penalty.
    assert_eq!(report.savings_rate, 0);
    assert_eq!(report.score, 70);
}

#[test]
fn brand_new_empty_month_also_scores_seventy() {
    let report = health_report(&[], &[], date(2025, 3, 1));
    assert_eq!(report.score, 70);
}

#[test]
fn stacked_penalties_use_unrounded_intermediates() {
    // income 1000, spent 850: savings 15 (-15), ratio 85 (-15),
    // emergency (850-800)/1000*100 = 5 (-1.5) => 68.5, rounded to 69.
    let today = date(2024, 2, 20);
    let incomes = vec![income("1000", date(2024, 2, 1))];
    let expenses = vec![expense("850", date(2024, 2, 10))];
    let report = health_report(&incomes, &expenses, today);
    assert_eq!(report.savings_rate, 15);
    assert_eq!(report.expense_ratio, 85);
    assert_eq!(report.emergency_spending, 5);
    assert_eq!(report.score, 69);
}

#[test]
fn overspending_clamps_score_to_zero() {
    // income 1000, spent 1500: -30 -25, overshoot 50 (-25),
    // emergency 70 (-21) => -1, clamped to 0.
    let today = date(2024, 2, 20);
    let incomes = vec![income("1000", date(2024, 2, 1))];
    let expenses = vec![expense("1500", date(2024, 2, 10))];
    let report = health_report(&incomes, &expenses, today);
    assert_eq!(report.budget_overshoot, 50);
    assert_eq!(report.emergency_spending, 70);
    assert_eq!(report.score, 0);
}

#[test]
fn score_never_leaves_the_zero_hundred_range() {
    let today = date(2024, 2, 20);
    for spent in ["0", "100", "799", "800", "950", "1000", "2500", "99999"] {
        let incomes = vec![income("1000", date(2024, 2, 1))];
        let expenses = vec![expense(spent, date(2024, 2, 10))];
        let report = health_report(&incomes, &expenses, today);
        assert!((0..=100).contains(&report.score), "spent {}", spent);
    }
}

#[test]
fn score_is_non_increasing_as_spending_grows() {
    let today = date(2024, 2, 20);
    let incomes = vec![income("1000", date(2024, 2, 1))];
    let mut last = 101;
    for spent in ["100", "300", "500", "750", "850", "950", "1100", "1400"] {
        let expenses = vec![expense(spent, date(2024, 2, 10))];
        let score = health_report(&incomes, &expenses, today).score;
        assert!(score <= last, "score rose at spent {}", spent);
        last = score;
    }
}

#[test]
fn only_current_month_records_count() {
    let today = date(2024, 5, 15);
    let incomes = vec![income("5000", date(2024, 5, 1))];
    let expenses = vec![
        expense("100", date(2024, 5, 2)),
        // Last month's blowout must not affect this month's score.
        expense("90000", date(2024, 4, 28)),
    ];
    let report = health_report(&incomes, &expenses, today);
    assert_eq!(report.total_expenses, dec("100"));
    assert_eq!(report.score, 100);
}

#[test]
fn quiet_month_gets_two_positive_insights() {
    let today = date(2024, 1, 15);
    let incomes = vec![income("5000", date(2024, 1, 5))];
    let expenses = vec![expense("2000", date(2024, 1, 10))];
    let report = health_report(&incomes, &expenses, today);
    assert_eq!(report.insights.len(), 2);
    assert!(report.insights[0].contains("Great job"));
}

#[test]
fn overspending_month_collects_every_triggered_insight() {
    let today = date(2024, 2, 20);
    let incomes = vec![income("1000", date(2024, 2, 1))];
    let expenses = vec![expense("1500", date(2024, 2, 10))];
    let insights = health_report(&incomes, &expenses, today).insights;
    assert_eq!(insights.len(), 4);
    assert!(insights[0].contains("savings rate"));
    assert!(insights[1].contains("expenses are high"));
    assert!(insights[2].contains("spending more than you earn"));
    assert!(insights[3].contains("emergency"));
}

#[test]
fn health_report_serializes_with_upstream_field_names() {
    let report = health_report(&[], &[], date(2025, 3, 1));
    let v = serde_json::to_value(&report).unwrap();
    for key in [
        "score",
        "totalIncome",
        "totalExpenses",
        "savingsRate",
        "expenseRatio",
        "budgetOvershoot",
        "emergencySpending",
        "insights",
    ] {
        assert!(v.get(key).is_some(), "missing key {}", key);
    }
}
