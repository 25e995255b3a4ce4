// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly financial health score. Fixed penalty rules over the current
//! month's totals; zero income is a normal state (new user) and every ratio
//! guards it by reporting 0 instead of dividing.
//!
//! Known oddity kept for compatibility: with zero income the savings rate is
//! reported as 0, which still trips the `< 10` penalty, so an empty month
//! scores 70 rather than 100.

use crate::ledger::totals::monthly_totals;
use crate::models::{Expense, Income};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const INSIGHT_SAVINGS: &str = "Increasing savings rate can significantly improve your score.";
const INSIGHT_EXPENSES: &str = "Your expenses are high relative to income. Consider budgeting.";
const INSIGHT_OVERSHOOT: &str = "You're spending more than you earn. Review your budget.";
const INSIGHT_EMERGENCY: &str = "High emergency spending detected. Build an emergency fund.";
const INSIGHT_GOOD_SHAPE: &str = "Great job! Your financial health is in good shape.";
const INSIGHT_KEEP_IT_UP: &str = "Continue maintaining your savings rate and budget.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub score: i64,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub savings_rate: i64,
    pub expense_ratio: i64,
    pub budget_overshoot: i64,
    pub emergency_spending: i64,
    pub insights: Vec<String>,
}

pub fn health_report(incomes: &[Income], expenses: &[Expense], today: NaiveDate) -> HealthReport {
    let month = monthly_totals(incomes, expenses, today);
    let income = month.total_income;
    let spent = month.total_expenses;
    let hundred = Decimal::ONE_HUNDRED;

    let has_income = income > Decimal::ZERO;
    let savings_rate = if has_income {
        (income - spent) / income * hundred
    } else {
        Decimal::ZERO
    };
    let expense_ratio = if has_income {
        spent / income * hundred
    } else {
        Decimal::ZERO
    };
    let budget_overshoot = if has_income && spent > income {
        (spent - income) / income * hundred
    } else {
        Decimal::ZERO
    };
    // Spending above 80% of income counts as emergency spending.
    let emergency_threshold = income * Decimal::new(8, 1);
    let emergency_spending = if has_income && spent > emergency_threshold {
        (spent - emergency_threshold) / income * hundred
    } else {
        Decimal::ZERO
    };

    // Penalties in fixed order, applied to the unrounded intermediates.
    let mut score = hundred;
    if savings_rate < Decimal::from(10) {
        score -= Decimal::from(30);
    } else if savings_rate < Decimal::from(20) {
        score -= Decimal::from(15);
    }
    if expense_ratio > Decimal::from(90) {
        score -= Decimal::from(25);
    } else if expense_ratio > Decimal::from(80) {
        score -= Decimal::from(15);
    } else if expense_ratio > Decimal::from(70) {
        score -= Decimal::from(5);
    }
    score -= budget_overshoot * Decimal::new(5, 1);
    score -= emergency_spending * Decimal::new(3, 1);
    let score = round_pct(score.clamp(Decimal::ZERO, hundred));

    let savings_rate = round_pct(savings_rate);
    let expense_ratio = round_pct(expense_ratio);
    let budget_overshoot = round_pct(budget_overshoot);
    let emergency_spending = round_pct(emergency_spending);

    let mut insights = Vec::new();
    if savings_rate < 15 {
        insights.push(INSIGHT_SAVINGS.to_string());
    }
    if expense_ratio > 80 {
        insights.push(INSIGHT_EXPENSES.to_string());
    }
    if budget_overshoot > 0 {
        insights.push(INSIGHT_OVERSHOOT.to_string());
    }
    if emergency_spending > 10 {
        insights.push(INSIGHT_EMERGENCY.to_string());
    }
    if insights.is_empty() {
        insights.push(INSIGHT_GOOD_SHAPE.to_string());
        insights.push(INSIGHT_KEEP_IT_UP.to_string());
    }

    HealthReport {
        score,
        total_income: income,
        total_expenses: spent,
        savings_rate,
        expense_ratio,
        budget_overshoot,
        emergency_spending,
        insights,
    }
}

fn round_pct(d: Decimal) -> i64 {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
