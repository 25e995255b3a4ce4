// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over one user's ledger. Callers load the records and pass
//! an explicit `today`; nothing here touches the database or the wall clock,
//! and input slices are never mutated.

pub mod health;
pub mod recent;
pub mod totals;
pub mod trend;

pub use health::{health_report, HealthReport};
pub use recent::{EntryKind, FeedEntry, IconMap, IncomeSnapshot, RecentActivity};
pub use totals::{monthly_totals, totals, Totals};
pub use trend::{income_breakdown, BreakdownSlice, SeriesPoint};

use crate::models::{Expense, Income};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Response shape of the dashboard view, one per request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_balance: Decimal,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub recent_transactions: Vec<FeedEntry>,
    pub recent_expenses: Vec<FeedEntry>,
    pub income_breakdown: Vec<BreakdownSlice>,
    pub expense_data_last_30_days: Vec<SeriesPoint>,
    pub income_trend_last_60_days: Vec<SeriesPoint>,
    pub latest_income_transactions: Vec<IncomeSnapshot>,
}

pub fn build_dashboard(
    incomes: &[Income],
    expenses: &[Expense],
    today: NaiveDate,
    icons: &IconMap,
) -> DashboardData {
    let sums = totals(incomes, expenses);
    let activity = recent::recent_activity(incomes, expenses, icons);
    DashboardData {
        total_balance: sums.total_balance,
        total_income: sums.total_income,
        total_expenses: sums.total_expenses,
        recent_transactions: activity.merged,
        recent_expenses: activity.expenses,
        income_breakdown: income_breakdown(incomes),
        expense_data_last_30_days: trend::expense_series_30d(expenses, today),
        income_trend_last_60_days: trend::income_series_60d(incomes, today),
        latest_income_transactions: activity.latest_incomes,
    }
}
