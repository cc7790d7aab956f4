// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::Ctx;
use crate::console::Console;
use crate::insights::total_account_balance;
use crate::models::Account;
use crate::user::User;
use crate::utils::pretty_table;

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("MULTI-ACCOUNT MANAGEMENT")?;
    if user.accounts().is_empty() {
        writeln!(io.out(), "No accounts added yet.")?;
    } else {
        let rows = user
            .accounts()
            .iter()
            .map(|a| {
                vec![
                    a.name.clone(),
                    a.r#type.clone(),
                    a.bank_name.clone(),
                    a.account_number.clone(),
                    ctx.money(a.balance),
                ]
            })
            .collect();
        writeln!(
            io.out(),
            "{}",
            pretty_table(&["Name", "Type", "Bank", "Account", "Balance"], rows)
        )?;
        writeln!(
            io.out(),
            "Total Balance Across All Accounts: {}",
            ctx.money(total_account_balance(user))
        )?;
    }

    writeln!(io.out(), "\n1. Add Account")?;
    writeln!(io.out(), "2. Back")?;
    if io.choice()? == 1 {
        let name = io.prompt_text("\nAccount Name: ")?;
        let number = io.prompt_text("Account Number: ")?;
        let bank = io.prompt_text("Bank Name: ")?;
        let balance = io.prompt_decimal(&format!("Balance: {}", ctx.config.currency_symbol))?;
        writeln!(io.out(), "\nTypes: Savings, Checking, Credit Card")?;
        let kind = io.prompt_text("Type: ")?;
        user.add_account(Account::new(name, number, bank, balance, kind));
        writeln!(io.out(), "\n✓ Account added successfully!")?;
    }
    io.pause()?;
    Ok(())
}
