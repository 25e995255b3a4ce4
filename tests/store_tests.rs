// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use myspend::{db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

const ALICE: i64 = 1;
const BOB: i64 = 2;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute("INSERT INTO users(name) VALUES ('alice')", [])
        .unwrap();
    conn.execute("INSERT INTO users(name) VALUES ('bob')", [])
        .unwrap();
    conn
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn add_income_round_trips() {
    let conn = setup();
    let id = store::add_income(
        &conn,
        ALICE,
        "Salary",
        dec("5000"),
        date(2025, 8, 1),
        Some("banknote"),
    )
    .unwrap();
    let rows = store::fetch_incomes(&conn, ALICE).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].source, "Salary");
    assert_eq!(rows[0].amount, dec("5000"));
    assert_eq!(rows[0].date, date(2025, 8, 1));
    assert_eq!(rows[0].icon.as_deref(), Some("banknote"));
}

#[test]
fn add_rejects_non_positive_amounts() {
    let conn = setup();
    assert!(store::add_income(&conn, ALICE, "Salary", dec("0"), date(2025, 8, 1), None).is_err());
    assert!(store::add_income(&conn, ALICE, "Salary", dec("-5"), date(2025, 8, 1), None).is_err());
    assert!(
        store::add_expense(&conn, ALICE, "Lunch", dec("0"), date(2025, 8, 1), "Food").is_err()
    );
    assert!(store::fetch_incomes(&conn, ALICE).unwrap().is_empty());
    assert!(store::fetch_expenses(&conn, ALICE).unwrap().is_empty());
}

#[test]
fn add_rejects_blank_labels() {
    let conn = setup();
    assert!(store::add_income(&conn, ALICE, "  ", dec("10"), date(2025, 8, 1), None).is_err());
    assert!(store::add_expense(&conn, ALICE, "", dec("10"), date(2025, 8, 1), "Food").is_err());
    assert!(store::add_expense(&conn, ALICE, "Lunch", dec("10"), date(2025, 8, 1), " ").is_err());
}

#[test]
fn fetch_orders_newest_first_with_id_tiebreak() {
    let conn = setup();
    store::add_expense(&conn, ALICE, "First", dec("10"), date(2025, 8, 5), "Food").unwrap();
    store::add_expense(&conn, ALICE, "Second", dec("20"), date(2025, 8, 5), "Food").unwrap();
    store::add_expense(&conn, ALICE, "Older", dec("30"), date(2025, 8, 1), "Food").unwrap();
    let rows = store::fetch_expenses(&conn, ALICE).unwrap();
    let titles: Vec<_> = rows.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First", "Older"]);
}

#[test]
fn records_are_scoped_to_their_owner() {
    let conn = setup();
    store::add_income(&conn, ALICE, "Salary", dec("5000"), date(2025, 8, 1), None).unwrap();
    store::add_expense(&conn, BOB, "Rent", dec("900"), date(2025, 8, 1), "Bills").unwrap();
    assert_eq!(store::fetch_incomes(&conn, ALICE).unwrap().len(), 1);
    assert!(store::fetch_incomes(&conn, BOB).unwrap().is_empty());
    assert!(store::fetch_expenses(&conn, ALICE).unwrap().is_empty());
    assert_eq!(store::fetch_expenses(&conn, BOB).unwrap().len(), 1);
}

#[test]
fn delete_is_immediate_and_owner_scoped() {
    let conn = setup();
    let id = store::add_expense(&conn, ALICE, "Lunch", dec("15"), date(2025, 8, 1), "Food").unwrap();
    // Bob cannot delete Alice's record.
    assert!(store::delete_expense(&conn, BOB, id).is_err());
    store::delete_expense(&conn, ALICE, id).unwrap();
    assert!(store::fetch_expenses(&conn, ALICE).unwrap().is_empty());
    // Gone means gone.
    assert!(store::delete_expense(&conn, ALICE, id).is_err());
}

#[test]
fn delete_income_missing_id_reports_not_found() {
    let conn = setup();
    let err = store::delete_income(&conn, ALICE, 42).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
