// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Record id")
}

fn user_cmd() -> Command {
    Command::new("user")
        .about("Manage user profiles")
        .subcommand(
            Command::new("add")
                .about("Create a user profile")
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(Command::new("list").about("List user profiles"))
        .subcommand(
            Command::new("use")
                .about("Select the active user")
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Remove a user profile and all of its records")
                .arg(Arg::new("name").long("name").required(true)),
        )
}

fn income_cmd() -> Command {
    Command::new("income")
        .about("Record and inspect income")
        .subcommand(
            Command::new("add")
                .about("Add an income record")
                .arg(Arg::new("source").long("source").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .required(true)
                        .help("YYYY-MM-DD"),
                )
                .arg(Arg::new("icon").long("icon").help("Optional icon tag")),
        )
        .subcommand(with_json_flags(
            Command::new("list")
                .about("List income, newest first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(Command::new("rm").about("Delete an income record").arg(id_arg()))
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Record and inspect expenses")
        .subcommand(
            Command::new("add")
                .about("Add an expense record")
                .arg(Arg::new("title").long("title").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .required(true)
                        .help("YYYY-MM-DD"),
                )
                .arg(Arg::new("category").long("category").required(true)),
        )
        .subcommand(with_json_flags(
            Command::new("list")
                .about("List expenses, newest first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an expense record")
                .arg(id_arg()),
        )
}

fn bank_cmd() -> Command {
    let form_args = |cmd: Command| {
        cmd.arg(Arg::new("bank").long("bank").required(true).help("Bank name"))
            .arg(
                Arg::new("holder")
                    .long("holder")
                    .required(true)
                    .help("Account holder name"),
            )
            .arg(
                Arg::new("number")
                    .long("number")
                    .required(true)
                    .help("Account number"),
            )
            .arg(
                Arg::new("ifsc")
                    .long("ifsc")
                    .required(true)
                    .help("IFSC/routing code"),
            )
            .arg(
                Arg::new("type")
                    .long("type")
                    .required(true)
                    .help("Savings or Current"),
            )
            .arg(
                Arg::new("opening-balance")
                    .long("opening-balance")
                    .required(true),
            )
    };
    Command::new("bank")
        .about("Manage bank accounts (informational, never aggregated)")
        .subcommand(form_args(Command::new("add").about("Add a bank account")))
        .subcommand(with_json_flags(
            Command::new("list").about("List bank accounts"),
        ))
        .subcommand(form_args(
            Command::new("update")
                .about("Update a bank account in place")
                .arg(id_arg()),
        ))
        .subcommand(Command::new("rm").about("Delete a bank account").arg(id_arg()))
}

fn export_cmd() -> Command {
    let io_args = |cmd: Command| {
        cmd.arg(
            Arg::new("format")
                .long("format")
                .required(true)
                .help("csv or json"),
        )
        .arg(Arg::new("out").long("out").required(true).help("Output file"))
    };
    Command::new("export")
        .about("Export raw records to a tabular file")
        .subcommand(io_args(Command::new("income").about("Export income records")))
        .subcommand(io_args(
            Command::new("expense").about("Export expense records"),
        ))
}

pub fn build_cli() -> Command {
    Command::new("myspend")
        .about("MySpend: personal income/expense tracker with dashboards and a financial health score")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(user_cmd())
        .subcommand(income_cmd())
        .subcommand(expense_cmd())
        .subcommand(bank_cmd())
        .subcommand(with_json_flags(
            Command::new("dashboard").about("Aggregated dashboard for the active user"),
        ))
        .subcommand(with_json_flags(
            Command::new("health").about("Monthly financial health score"),
        ))
        .subcommand(export_cmd())
}
