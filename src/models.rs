// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::bills;
use crate::utils::percent_of;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub description: String,
    pub amount: Decimal, // magnitude; the ledger records the negative side
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    pub category: String,
    pub limit: Decimal, // monthly
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: Decimal) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Send,
    Receive,
}

impl Direction {
    /// Sign shown in front of the magnitude in history listings.
    pub fn sign(self) -> &'static str {
        match self {
            Direction::Receive => "+",
            Direction::Send => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub description: String,
    pub amount: Decimal, // signed: negative for money leaving the wallet
    pub r#type: String,
    pub direction: Direction,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        r#type: impl Into<String>,
        direction: Direction,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            r#type: r#type.into(),
            direction,
            date,
        }
    }

    /// Money leaving the wallet: `amount` is the magnitude, stored negated.
    pub fn outgoing(
        description: impl Into<String>,
        amount: Decimal,
        r#type: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(description, -amount, r#type, Direction::Send, date)
    }

    pub fn incoming(
        description: impl Into<String>,
        amount: Decimal,
        r#type: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(description, amount, r#type, Direction::Receive, date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    pub name: String,
    pub initial_amount: Decimal,
    pub current_value: Decimal,
    pub r#type: String,
    pub purchase_date: NaiveDate,
}

impl Investment {
    pub fn new(
        name: impl Into<String>,
        initial_amount: Decimal,
        current_value: Decimal,
        r#type: impl Into<String>,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            initial_amount,
            current_value,
            r#type: r#type.into(),
            purchase_date,
        }
    }

    pub fn gain(&self) -> Decimal {
        self.current_value.saturating_sub(self.initial_amount)
    }

    /// Gain as a percentage of the initial amount; `None` when nothing was invested.
    pub fn return_percentage(&self) -> Option<Decimal> {
        percent_of(self.gain(), self.initial_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub name: String,
    pub amount: Decimal,
    pub due_day: u32, // day of month, 1..=31
}

impl Bill {
    pub fn new(name: impl Into<String>, amount: Decimal, due_day: u32) -> Self {
        Self {
            name: name.into(),
            amount,
            due_day,
        }
    }

    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        bills::days_until_due(self.due_day, today)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub balance: Decimal, // negative for credit lines
    pub r#type: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        account_number: impl Into<String>,
        bank_name: impl Into<String>,
        balance: Decimal,
        r#type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account_number: account_number.into(),
            bank_name: bank_name.into(),
            balance,
            r#type: r#type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtraIncome {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub period: String, // free-text bucket, e.g. "2024" or "January 2024"
    pub date: NaiveDate,
}

impl ExtraIncome {
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        period: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            period: period.into(),
            date,
        }
    }
}
