// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use myspend::{cli, commands::exporter, db, store, utils};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute("INSERT INTO users(name) VALUES ('alice')", [])
        .unwrap();
    utils::set_active_user(&conn, 1).unwrap();
    conn
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn run_export(conn: &Connection, kind: &str, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "myspend", "export", kind, "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_expense_writes_pretty_json_newest_first() {
    let conn = setup();
    store::add_expense(&conn, 1, "Groceries", dec("12.34"), date(2025, 1, 2), "Food").unwrap();
    store::add_expense(&conn, 1, "Cinema", dec("9.50"), date(2025, 1, 5), "Entertainment")
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("expenses.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, "expense", "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-05",
                "title": "Cinema",
                "amount": "9.50",
                "category": "Entertainment"
            },
            {
                "date": "2025-01-02",
                "title": "Groceries",
                "amount": "12.34",
                "category": "Food"
            }
        ])
    );
}

#[test]
fn export_income_writes_csv_with_header() {
    let conn = setup();
    store::add_income(&conn, 1, "Salary", dec("5000"), date(2025, 1, 31), None).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("income.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, "income", "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("date,source,amount,icon"));
    assert_eq!(lines.next(), Some("2025-01-31,Salary,5000,"));
}

#[test]
fn export_rejects_unknown_format() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();
    assert!(run_export(&conn, "expense", "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
