// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::Ctx;
use crate::console::Console;
use crate::models::Bill;
use crate::user::User;
use crate::utils::pretty_table;

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("BILL REMINDERS")?;
    writeln!(io.out(), "1. Add Bill")?;
    writeln!(io.out(), "2. View All Bills")?;
    writeln!(io.out(), "3. View Upcoming Bills")?;
    writeln!(io.out(), "4. Back")?;
    match io.choice()? {
        1 => add(io, ctx, user)?,
        2 => list(io, ctx, user)?,
        3 => upcoming(io, ctx, user)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

fn add<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &mut User) -> Result<()> {
    let name = io.prompt_text("\nBill Name: ")?;
    let amount = io.prompt_decimal(&format!("Amount: {}", ctx.config.currency_symbol))?;
    let day = io.prompt_int("Due Day of Month (1-31): ")?;
    // Negative input cannot name a day; it resolves like day 0.
    let due_day = u32::try_from(day).unwrap_or(0);
    user.add_bill(Bill::new(name, amount, due_day));
    writeln!(io.out(), "\n✓ Bill reminder added successfully!")?;
    Ok(())
}

fn list<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("ALL BILLS")?;
    if user.bills().is_empty() {
        writeln!(io.out(), "No bills added yet.")?;
        return Ok(());
    }
    let rows = user
        .bills()
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                ctx.money(b.amount),
                format!("Day {}", b.due_day),
            ]
        })
        .collect();
    writeln!(io.out(), "{}", pretty_table(&["Bill", "Amount", "Due"], rows))?;
    Ok(())
}

fn upcoming<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("UPCOMING BILLS")?;
    let today = ctx.today();
    let window = ctx.config.upcoming_days;
    let due = user.upcoming_bills(window, today);
    if due.is_empty() {
        writeln!(io.out(), "No upcoming bills in the next {window} days.")?;
        return Ok(());
    }
    let rows = due
        .into_iter()
        .map(|b| {
            vec![
                b.name.clone(),
                ctx.money(b.amount),
                format!("Day {}", b.due_day),
                format!("{} days", b.days_until_due(today)),
            ]
        })
        .collect();
    writeln!(
        io.out(),
        "{}",
        pretty_table(&["Bill", "Amount", "Due", "Due In"], rows)
    )?;
    Ok(())
}
