// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const EXPENSE_WINDOW_DAYS: i64 = 30;
pub const INCOME_WINDOW_DAYS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub category: String,
    pub amount: Decimal,
}

/// Per-day expense totals over the trailing 30 days.
pub fn expense_series_30d(expenses: &[Expense], today: NaiveDate) -> Vec<SeriesPoint> {
    daily_series(
        expenses.iter().map(|e| (e.date, e.amount)),
        EXPENSE_WINDOW_DAYS,
        today,
    )
}

/// Per-day income totals over the trailing 60 days.
pub fn income_series_60d(incomes: &[Income], today: NaiveDate) -> Vec<SeriesPoint> {
    daily_series(
        incomes.iter().map(|i| (i.date, i.amount)),
        INCOME_WINDOW_DAYS,
        today,
    )
}

/// Bucket records by calendar day over `[today - window, today]`, the lower
/// bound inclusive. Sparse: days without records get no point. Empty windows
/// give an empty series.
fn daily_series(
    records: impl Iterator<Item = (NaiveDate, Decimal)>,
    window_days: i64,
    today: NaiveDate,
) -> Vec<SeriesPoint> {
    let cutoff = today - Duration::days(window_days);
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for (date, amount) in records {
        if date >= cutoff {
            *buckets.entry(date).or_insert(Decimal::ZERO) += amount;
        }
    }
    buckets
        .into_iter()
        .map(|(date, amount)| SeriesPoint { date, amount })
        .collect()
}

/// All-time income grouped by exact source string (case-sensitive, empty is a
/// valid key), summed and sorted descending by amount. The sort is stable so
/// ties keep first-encountered order.
pub fn income_breakdown(incomes: &[Income]) -> Vec<BreakdownSlice> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for inc in incomes {
        if !sums.contains_key(&inc.source) {
            order.push(inc.source.clone());
        }
        *sums.entry(inc.source.clone()).or_insert(Decimal::ZERO) += inc.amount;
    }
    let mut slices: Vec<BreakdownSlice> = order
        .into_iter()
        .map(|category| {
            let amount = sums[&category];
            BreakdownSlice { category, amount }
        })
        .collect();
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    slices
}
