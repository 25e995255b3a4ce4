// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{self, DashboardData, IconMap};
use crate::store;
use crate::utils::{active_user_id, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rusqlite::Connection;

static ICONS: Lazy<IconMap> = Lazy::new(IconMap::standard);

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let user_id = active_user_id(conn)?;
    let today = chrono::Utc::now().date_naive();
    let data = build(conn, user_id, today)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        print_human(&data);
    }
    Ok(())
}

/// One dashboard computation: fetch the user's ledger once, aggregate in
/// memory. Split from `handle` so tests can pin `today`.
pub fn build(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<DashboardData> {
    let incomes = store::fetch_incomes(conn, user_id)?;
    let expenses = store::fetch_expenses(conn, user_id)?;
    Ok(ledger::build_dashboard(&incomes, &expenses, today, &ICONS))
}

fn print_human(data: &DashboardData) {
    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expenses", "Balance"],
            vec![vec![
                data.total_income.to_string(),
                data.total_expenses.to_string(),
                data.total_balance.to_string(),
            ]],
        )
    );

    let feed = data
        .recent_transactions
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.name.clone(),
                e.amount.to_string(),
                e.icon.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Date", "Name", "Amount", "Icon"], feed));

    let breakdown = data
        .income_breakdown
        .iter()
        .map(|s| vec![s.category.clone(), s.amount.to_string()])
        .collect();
    println!("{}", pretty_table(&["Source", "Income"], breakdown));

    let spend = data
        .expense_data_last_30_days
        .iter()
        .map(|p| vec![p.date.to_string(), p.amount.to_string()])
        .collect();
    println!("{}", pretty_table(&["Day", "Spent (30d)"], spend));

    let earned = data
        .income_trend_last_60_days
        .iter()
        .map(|p| vec![p.date.to_string(), p.amount.to_string()])
        .collect();
    println!("{}", pretty_table(&["Day", "Earned (60d)"], earned));
}
