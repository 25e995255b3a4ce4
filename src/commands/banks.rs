// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AccountType;
use crate::store::{self, BankForm};
use crate::utils::{active_user_id, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let user_id = active_user_id(conn)?;
            let form = read_form(sub)?;
            let id = store::add_bank(conn, user_id, &form)?;
            println!(
                "Added bank {} '{}' ({}) for {}",
                id,
                form.bank_name,
                form.account_type.as_str(),
                form.account_holder_name
            );
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => {
            let user_id = active_user_id(conn)?;
            let id = *sub.get_one::<i64>("id").unwrap();
            let form = read_form(sub)?;
            store::update_bank(conn, user_id, id, &form)?;
            println!("Updated bank {}", id);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store::delete_bank(conn, active_user_id(conn)?, id)?;
            println!("Deleted bank {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn read_form(sub: &clap::ArgMatches) -> Result<BankForm> {
    Ok(BankForm {
        bank_name: sub.get_one::<String>("bank").unwrap().clone(),
        account_holder_name: sub.get_one::<String>("holder").unwrap().clone(),
        account_number: sub.get_one::<String>("number").unwrap().clone(),
        ifsc_code: sub.get_one::<String>("ifsc").unwrap().clone(),
        account_type: AccountType::parse(sub.get_one::<String>("type").unwrap())?,
        opening_balance: parse_decimal(sub.get_one::<String>("opening-balance").unwrap())?,
    })
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store::list_banks(conn, active_user_id(conn)?)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|b| {
                vec![
                    b.id.to_string(),
                    b.bank_name.clone(),
                    b.account_holder_name.clone(),
                    b.account_number.clone(),
                    b.ifsc_code.clone(),
                    b.account_type.as_str().to_string(),
                    b.opening_balance.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Bank", "Holder", "Number", "IFSC", "Type", "Opening"],
                rows,
            )
        );
    }
    Ok(())
}
