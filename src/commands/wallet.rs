// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Ctx;
use crate::console::Console;
use crate::models::Transaction;
use crate::user::User;
use crate::utils::{fmt_short_date, pretty_table};

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("WALLET")?;
    writeln!(io.out(), "Balance: {}", ctx.money(user.wallet_balance()))?;
    writeln!(io.out(), "\n1. Add Money")?;
    writeln!(io.out(), "2. Send Payment")?;
    writeln!(io.out(), "3. Transaction History")?;
    writeln!(io.out(), "4. Back")?;
    match io.choice()? {
        1 => add_money(io, ctx, user)?,
        2 => send_payment(io, ctx, user)?,
        3 => history(io, ctx, user)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

/// Debits the wallet and logs the outgoing transaction when the balance covers
/// `amount`. Returns false, leaving the ledger untouched, otherwise.
pub fn transfer(
    user: &mut User,
    amount: Decimal,
    description: String,
    kind: &str,
    date: NaiveDate,
) -> bool {
    if amount > user.wallet_balance() {
        return false;
    }
    user.deduct_from_wallet(amount);
    user.add_transaction(Transaction::outgoing(description, amount, kind, date));
    true
}

fn add_money<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    let amount = io.prompt_decimal(&format!("\nAmount to add: {}", ctx.config.currency_symbol))?;
    if amount <= Decimal::ZERO {
        writeln!(io.out(), "Invalid amount.")?;
        return Ok(());
    }
    user.add_to_wallet(amount, ctx.today());
    writeln!(io.out(), "\n✓ {} added to wallet!", ctx.money(amount))?;
    writeln!(io.out(), "New balance: {}", ctx.money(user.wallet_balance()))?;
    Ok(())
}

fn send_payment<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    let recipient = io.prompt_text("\nRecipient Phone/Email: ")?;
    let amount = io.prompt_decimal(&format!("Amount: {}", ctx.config.currency_symbol))?;
    let description = format!("Transfer to {recipient}");
    if transfer(user, amount, description, "Transfer", ctx.today()) {
        writeln!(io.out(), "\n✓ {} sent successfully!", ctx.money(amount))?;
        writeln!(io.out(), "New balance: {}", ctx.money(user.wallet_balance()))?;
    } else {
        writeln!(io.out(), "\n✗ Insufficient balance!")?;
    }
    Ok(())
}

/// Phone-number transfer with an optional note appended to the description.
pub fn quick_transfer<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("SMS/QUICK TRANSFER")?;
    writeln!(io.out(), "Send money using phone number")?;
    let phone = io.prompt_text("\nRecipient Phone Number: ")?;
    let amount = io.prompt_decimal(&format!("Amount: {}", ctx.config.currency_symbol))?;
    let note = io.prompt_text("Note (optional): ")?;

    let mut description = format!("SMS Transfer to {phone}");
    if !note.trim().is_empty() {
        description.push_str(" - ");
        description.push_str(note.trim());
    }
    let today = ctx.today();
    if transfer(user, amount, description, "SMS Transfer", today) {
        writeln!(io.out(), "\n✓ {} sent via SMS!", ctx.money(amount))?;
        writeln!(io.out(), "Transaction date: {today}")?;
    } else {
        writeln!(io.out(), "\n✗ Insufficient balance!")?;
    }
    io.pause()?;
    Ok(())
}

pub fn transaction_rows<'a>(
    ctx: &Ctx,
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<Vec<String>> {
    transactions
        .into_iter()
        .map(|t| {
            vec![
                fmt_short_date(t.date),
                t.description.clone(),
                format!("{}{}", t.direction.sign(), ctx.money(t.amount.abs())),
                t.r#type.clone(),
            ]
        })
        .collect()
}

fn history<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("TRANSACTION HISTORY")?;
    if user.transactions().is_empty() {
        writeln!(io.out(), "No transactions yet.")?;
        return Ok(());
    }
    let rows = transaction_rows(ctx, user.transactions());
    writeln!(
        io.out(),
        "{}",
        pretty_table(&["Date", "Description", "Amount", "Type"], rows)
    )?;
    Ok(())
}
