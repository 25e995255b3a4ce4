// Copyright (c) 2025 MySpend.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Income};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const FEED_LIMIT: usize = 5;

pub const DEFAULT_EXPENSE_ICON: &str = "bag";
pub const DEFAULT_INCOME_ICON: &str = "trending-up";

/// Category-to-icon lookup for the feed. Presentation metadata: built once at
/// startup and injected into the merger, never consulted by the sums.
#[derive(Debug, Clone)]
pub struct IconMap {
    by_category: HashMap<&'static str, &'static str>,
}

impl IconMap {
    pub fn standard() -> Self {
        let by_category = HashMap::from([
            ("Shopping", "bag"),
            ("Travel", "plane"),
            ("Electricity", "bolt"),
            ("Food", "utensils"),
            ("Entertainment", "gamepad"),
            ("Health", "heart"),
            ("Education", "graduation-cap"),
            ("Transportation", "car"),
            ("Bills", "receipt"),
            ("Other", "ellipsis"),
        ]);
        IconMap { by_category }
    }

    pub fn expense_icon(&self, category: &str) -> &str {
        self.by_category
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_EXPENSE_ICON)
    }

    pub fn income_icon<'a>(&self, icon: Option<&'a str>) -> &'a str {
        icon.unwrap_or(DEFAULT_INCOME_ICON)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Expense,
    Income,
}

/// One row of the activity feed. `amount` is signed: negative for expenses,
/// positive for income, so consumers can sum the feed directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEntry {
    pub name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSnapshot {
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// The three recent-activity views, all derived from one pass over the same
/// top-5 income and top-5 expense records.
#[derive(Debug)]
pub struct RecentActivity {
    pub merged: Vec<FeedEntry>,
    pub expenses: Vec<FeedEntry>,
    pub latest_incomes: Vec<IncomeSnapshot>,
}

pub fn recent_activity(incomes: &[Income], expenses: &[Expense], icons: &IconMap) -> RecentActivity {
    let top_expenses = top_by_date(expenses, |e| (e.date, e.id));
    let top_incomes = top_by_date(incomes, |i| (i.date, i.id));

    let unsigned_expenses: Vec<FeedEntry> = top_expenses
        .iter()
        .map(|e| FeedEntry {
            name: e.title.clone(),
            date: e.date,
            amount: e.amount,
            icon: icons.expense_icon(&e.category).to_string(),
            kind: EntryKind::Expense,
        })
        .collect();

    // Expenses first, incomes second; the stable sort keeps that order on
    // equal dates, matching the upstream feed.
    let mut merged: Vec<FeedEntry> = unsigned_expenses
        .iter()
        .map(|entry| FeedEntry {
            amount: -entry.amount,
            ..entry.clone()
        })
        .chain(top_incomes.iter().map(|i| FeedEntry {
            name: i.source.clone(),
            date: i.date,
            amount: i.amount,
            icon: icons.income_icon(i.icon.as_deref()).to_string(),
            kind: EntryKind::Income,
        }))
        .collect();
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged.truncate(FEED_LIMIT);

    let latest_incomes = top_incomes
        .iter()
        .map(|i| IncomeSnapshot {
            source: i.source.clone(),
            amount: i.amount,
            date: i.date,
        })
        .collect();

    RecentActivity {
        merged,
        expenses: unsigned_expenses,
        latest_incomes,
    }
}

/// Most recent `FEED_LIMIT` records, date descending, ties broken by id so the
/// pick is deterministic.
fn top_by_date<'a, T>(records: &'a [T], key: impl Fn(&T) -> (NaiveDate, i64)) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| key(b).cmp(&key(a)));
    sorted.truncate(FEED_LIMIT);
    sorted
}
