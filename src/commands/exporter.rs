// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::active_user_id;
use anyhow::{bail, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("income", sub)) => export_income(conn, sub),
        Some(("expense", sub)) => export_expense(conn, sub),
        _ => Ok(()),
    }
}

fn export_income(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let data = store::fetch_incomes(conn, active_user_id(conn)?)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "source", "amount", "icon"])?;
            for i in &data {
                wtr.write_record([
                    i.date.to_string(),
                    i.source.clone(),
                    i.amount.to_string(),
                    i.icon.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|i| {
                    json!({
                        "date": i.date, "source": i.source, "amount": i.amount, "icon": i.icon
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} income records to {}", data.len(), out);
    Ok(())
}

fn export_expense(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let data = store::fetch_expenses(conn, active_user_id(conn)?)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "title", "amount", "category"])?;
            for e in &data {
                wtr.write_record([
                    e.date.to_string(),
                    e.title.clone(),
                    e.amount.to_string(),
                    e.category.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|e| {
                    json!({
                        "date": e.date, "title": e.title, "amount": e.amount, "category": e.category
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} expense records to {}", data.len(), out);
    Ok(())
}
