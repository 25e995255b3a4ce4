// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use crate::store;
use crate::utils::{active_user_id, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_expense(conn, active_user_id(conn)?, id)?;
            println!("Deleted expense {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = active_user_id(conn)?;
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();

    let id = store::add_expense(conn, user_id, title, amount, date, category)?;
    println!(
        "Recorded expense {} of {} for '{}' ({}) on {}",
        id, amount, title, category, date
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = store::fetch_expenses(conn, active_user_id(conn)?)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data.iter().map(row).collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Title", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

fn row(e: &Expense) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.date.to_string(),
        e.title.clone(),
        e.amount.to_string(),
        e.category.clone(),
    ]
}
