// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Income;
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
            store::delete_income(conn, active_user_id(conn)?, id)?;
            println!("Deleted income {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user_id = active_user_id(conn)?;
    let source = sub.get_one::<String>("source").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let icon = sub.get_one::<String>("icon").map(|s| s.as_str());

    let id = store::add_income(conn, user_id, source, amount, date, icon)?;
    println!("Recorded income {} of {} from '{}' on {}", id, amount, source, date);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = store::fetch_incomes(conn, active_user_id(conn)?)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data.iter().map(row).collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Source", "Amount", "Icon"], rows)
        );
    }
    Ok(())
}

fn row(i: &Income) -> Vec<String> {
    vec![
        i.id.to_string(),
        i.date.to_string(),
        i.source.clone(),
        i.amount.to_string(),
        i.icon.clone().unwrap_or_default(),
    ]
}
