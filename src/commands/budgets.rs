// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use super::Ctx;
use crate::console::Console;
use crate::insights::{budget_analysis, budget_usages};
use crate::models::Budget;
use crate::user::User;
use crate::utils::{fmt_percent, pretty_table};

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("BUDGET PLANNER")?;
    writeln!(io.out(), "1. Set Budget")?;
    writeln!(io.out(), "2. View Budgets")?;
    writeln!(io.out(), "3. Budget Analysis")?;
    writeln!(io.out(), "4. Back")?;
    match io.choice()? {
        1 => set(io, user)?,
        2 => list(io, ctx, user)?,
        3 => analysis(io, ctx, user)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

fn set<R: BufRead, W: Write>(io: &mut Console<R, W>, user: &mut User) -> Result<()> {
    let category = io.prompt_text("\nCategory: ")?;
    let limit = io.prompt_decimal("Monthly Limit: ")?;
    user.add_budget(Budget::new(category.trim(), limit));
    writeln!(io.out(), "\n✓ Budget set successfully!")?;
    Ok(())
}

fn list<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("BUDGETS")?;
    let usages = budget_usages(user);
    if usages.is_empty() {
        writeln!(io.out(), "No budgets set yet.")?;
        return Ok(());
    }
    let rows = usages
        .into_iter()
        .map(|u| {
            vec![
                u.category,
                ctx.money(u.limit),
                ctx.money(u.spent),
                ctx.money(u.remaining),
                fmt_percent(u.used),
                u.status.label().to_string(),
            ]
        })
        .collect();
    writeln!(
        io.out(),
        "{}",
        pretty_table(
            &["Category", "Budget", "Spent", "Remaining", "Used", "Status"],
            rows
        )
    )?;
    Ok(())
}

fn analysis<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("BUDGET ANALYSIS")?;
    let Some(a) = budget_analysis(user) else {
        writeln!(io.out(), "No budgets set yet.")?;
        return Ok(());
    };
    writeln!(io.out(), "Total Budget: {}", ctx.money(a.total_budget))?;
    writeln!(io.out(), "Total Spent: {}", ctx.money(a.total_spent))?;
    writeln!(io.out(), "Remaining: {}", ctx.money(a.remaining))?;
    writeln!(io.out(), "Overall Usage: {}", fmt_percent(a.overall))?;
    writeln!(io.out(), "\n🤖 AI Suggestion:")?;
    writeln!(io.out(), "{}", a.advice.message())?;
    Ok(())
}
