// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence for one user's records. The aggregation core only ever sees
//! the output of the fetch functions; it never writes.

use crate::models::{
    check_amount, check_opening_balance, require, AccountType, BankAccount, Expense, Income,
};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

pub fn fetch_incomes(conn: &Connection, user_id: i64) -> Result<Vec<Income>> {
    let mut stmt = conn.prepare(
        "SELECT id, source, amount, date, icon FROM incomes
         WHERE user_id=?1 ORDER BY date DESC, id DESC",
    )?;
    let mut rows = stmt.query(params![user_id])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let source: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let date_s: String = r.get(3)?;
        let icon: Option<String> = r.get(4)?;
        data.push(Income {
            id,
            user_id,
            source,
            amount: parse_stored_amount(&amount_s, "incomes", id)?,
            date: parse_stored_date(&date_s, "incomes", id)?,
            icon,
        });
    }
    Ok(data)
}

pub fn fetch_expenses(conn: &Connection, user_id: i64) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, amount, date, category FROM expenses
         WHERE user_id=?1 ORDER BY date DESC, id DESC",
    )?;
    let mut rows = stmt.query(params![user_id])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let title: String = r.get(1)?;
        let amount_s: String = r.get(2)?;
        let date_s: String = r.get(3)?;
        let category: String = r.get(4)?;
        data.push(Expense {
            id,
            user_id,
            title,
            amount: parse_stored_amount(&amount_s, "expenses", id)?,
            date: parse_stored_date(&date_s, "expenses", id)?,
            category,
        });
    }
    Ok(data)
}

pub fn add_income(
    conn: &Connection,
    user_id: i64,
    source: &str,
    amount: Decimal,
    date: NaiveDate,
    icon: Option<&str>,
) -> Result<i64> {
    require(source, "source")?;
    check_amount(amount)?;
    conn.execute(
        "INSERT INTO incomes(user_id, source, amount, date, icon) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, source, amount.to_string(), date.to_string(), icon],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn add_expense(
    conn: &Connection,
    user_id: i64,
    title: &str,
    amount: Decimal,
    date: NaiveDate,
    category: &str,
) -> Result<i64> {
    require(title, "title")?;
    require(category, "category")?;
    check_amount(amount)?;
    conn.execute(
        "INSERT INTO expenses(user_id, title, amount, date, category) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            title,
            amount.to_string(),
            date.to_string(),
            category
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_income(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM incomes WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    if n == 0 {
        bail!("Income {} not found", id);
    }
    Ok(())
}

pub fn delete_expense(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM expenses WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    if n == 0 {
        bail!("Expense {} not found", id);
    }
    Ok(())
}

/// All bank fields except the identity; used for both add and the full-field
/// in-place update.
#[derive(Debug, Clone)]
pub struct BankForm {
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_type: AccountType,
    pub opening_balance: Decimal,
}

impl BankForm {
    fn validate(&self) -> Result<()> {
        require(&self.bank_name, "bank name")?;
        require(&self.account_holder_name, "account holder name")?;
        require(&self.account_number, "account number")?;
        require(&self.ifsc_code, "IFSC code")?;
        check_opening_balance(self.opening_balance)?;
        Ok(())
    }
}

pub fn add_bank(conn: &Connection, user_id: i64, form: &BankForm) -> Result<i64> {
    form.validate()?;
    conn.execute(
        "INSERT INTO banks(user_id, bank_name, account_holder_name, account_number, ifsc_code, account_type, opening_balance)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            form.bank_name,
            form.account_holder_name,
            form.account_number,
            form.ifsc_code,
            form.account_type.as_str(),
            form.opening_balance.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_banks(conn: &Connection, user_id: i64) -> Result<Vec<BankAccount>> {
    let mut stmt = conn.prepare(
        "SELECT id, bank_name, account_holder_name, account_number, ifsc_code, account_type, opening_balance
         FROM banks WHERE user_id=?1 ORDER BY id DESC",
    )?;
    let mut rows = stmt.query(params![user_id])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let type_s: String = r.get(5)?;
        let balance_s: String = r.get(6)?;
        data.push(BankAccount {
            id,
            user_id,
            bank_name: r.get(1)?,
            account_holder_name: r.get(2)?,
            account_number: r.get(3)?,
            ifsc_code: r.get(4)?,
            account_type: AccountType::parse(&type_s)
                .with_context(|| format!("Invalid account type '{}' in banks", type_s))?,
            opening_balance: parse_stored_amount(&balance_s, "banks", id)?,
        });
    }
    Ok(data)
}

pub fn update_bank(conn: &Connection, user_id: i64, id: i64, form: &BankForm) -> Result<()> {
    form.validate()?;
    let n = conn.execute(
        "UPDATE banks SET bank_name=?1, account_holder_name=?2, account_number=?3, ifsc_code=?4, account_type=?5, opening_balance=?6
         WHERE id=?7 AND user_id=?8",
        params![
            form.bank_name,
            form.account_holder_name,
            form.account_number,
            form.ifsc_code,
            form.account_type.as_str(),
            form.opening_balance.to_string(),
            id,
            user_id
        ],
    )?;
    if n == 0 {
        bail!("Bank {} not found", id);
    }
    Ok(())
}

pub fn delete_bank(conn: &Connection, user_id: i64, id: i64) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM banks WHERE id=?1 AND user_id=?2",
        params![id, user_id],
    )?;
    if n == 0 {
        bail!("Bank {} not found", id);
    }
    Ok(())
}

fn parse_stored_amount(s: &str, table: &str, id: i64) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' in {} row {}", s, table, id))
}

fn parse_stored_date(s: &str, table: &str, id: i64) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' in {} row {}", s, table, id))
}
