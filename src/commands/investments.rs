// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;

use super::Ctx;
use crate::console::Console;
use crate::insights::portfolio_summary;
use crate::models::Investment;
use crate::user::User;
use crate::utils::{fmt_percent, pretty_table};

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("INVESTMENT OVERVIEW")?;
    if user.investments().is_empty() {
        writeln!(io.out(), "No investments yet.")?;
    } else {
        let rows = user
            .investments()
            .iter()
            .map(|inv| {
                let gain = inv.gain();
                let sign = if gain >= Decimal::ZERO { "+" } else { "" };
                vec![
                    inv.name.clone(),
                    inv.r#type.clone(),
                    ctx.money(inv.initial_amount),
                    ctx.money(inv.current_value),
                    format!("{}{}", sign, ctx.money(gain)),
                    fmt_percent(inv.return_percentage()),
                ]
            })
            .collect();
        writeln!(
            io.out(),
            "{}",
            pretty_table(
                &["Name", "Type", "Initial", "Current", "Gain/Loss", "Return"],
                rows
            )
        )?;
        let summary = portfolio_summary(user);
        writeln!(io.out(), "\n--- Summary ---")?;
        writeln!(
            io.out(),
            "Total Investment Value: {}",
            ctx.money(summary.total_value)
        )?;
        writeln!(io.out(), "Total Gain/Loss: {}", ctx.money(summary.total_gain))?;
    }

    writeln!(io.out(), "\n1. Add Investment")?;
    writeln!(io.out(), "2. Back")?;
    if io.choice()? == 1 {
        add(io, ctx, user)?;
    }
    io.pause()?;
    Ok(())
}

fn add<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &mut User) -> Result<()> {
    let sym = &ctx.config.currency_symbol;
    let name = io.prompt_text("\nInvestment Name: ")?;
    let initial = io.prompt_decimal(&format!("Initial Amount: {sym}"))?;
    let current = io.prompt_decimal(&format!("Current Value: {sym}"))?;
    writeln!(
        io.out(),
        "\nTypes: Stocks, Bonds, Mutual Funds, Real Estate, Crypto, Other"
    )?;
    let kind = io.prompt_text("Type: ")?;
    user.add_investment(Investment::new(name, initial, current, kind, ctx.today()));
    writeln!(io.out(), "\n✓ Investment added successfully!")?;
    Ok(())
}
