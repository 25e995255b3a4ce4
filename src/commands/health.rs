// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{self, HealthReport};
use crate::store;
use crate::utils::{active_user_id, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let user_id = active_user_id(conn)?;
    let today = chrono::Utc::now().date_naive();
    let report = build(conn, user_id, today)?;
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        println!("Financial health score: {}/100", report.score);
        println!(
            "{}",
            pretty_table(
                &["Savings Rate", "Expense Ratio", "Overshoot", "Emergency"],
                vec![vec![
                    format!("{}%", report.savings_rate),
                    format!("{}%", report.expense_ratio),
                    format!("{}%", report.budget_overshoot),
                    format!("{}%", report.emergency_spending),
                ]],
            )
        );
        for tip in &report.insights {
            println!("- {}", tip);
        }
    }
    Ok(())
}

pub fn build(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<HealthReport> {
    let incomes = store::fetch_incomes(conn, user_id)?;
    let expenses = store::fetch_expenses(conn, user_id)?;
    Ok(ledger::health_report(&incomes, &expenses, today))
}
