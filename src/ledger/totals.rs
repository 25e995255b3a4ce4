// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_balance: Decimal,
}

/// Lifetime sums over one user's ledger. Empty sets give zero; the balance is
/// not clamped and may be negative.
pub fn totals(incomes: &[Income], expenses: &[Expense]) -> Totals {
    let total_income: Decimal = incomes.iter().map(|i| i.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
    Totals {
        total_income,
        total_expenses,
        total_balance: total_income - total_expenses,
    }
}

/// Same sums restricted to records in `today`'s calendar month. Evaluated at
/// call time, never cached, so the result shifts across a month boundary.
pub fn monthly_totals(incomes: &[Income], expenses: &[Expense], today: NaiveDate) -> Totals {
    let in_month = |d: NaiveDate| d.year() == today.year() && d.month() == today.month();
    let total_income: Decimal = incomes
        .iter()
        .filter(|i| in_month(i.date))
        .map(|i| i.amount)
        .sum();
    let total_expenses: Decimal = expenses
        .iter()
        .filter(|e| in_month(e.date))
        .map(|e| e.amount)
        .sum();
    Totals {
        total_income,
        total_expenses,
        total_balance: total_income - total_expenses,
    }
}
