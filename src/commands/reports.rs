// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;

use super::Ctx;
use super::wallet::transaction_rows;
use crate::console::Console;
use crate::insights::FinancialReport;
use crate::user::User;
use crate::utils::{fmt_percent, pretty_table, print_json};

const RECENT_COUNT: usize = 5;
const TAX_ESTIMATE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

pub fn handle<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("FINANCIAL REPORTS")?;
    writeln!(io.out(), "1. Summary")?;
    writeln!(io.out(), "2. Summary (JSON)")?;
    writeln!(io.out(), "3. Recent Transactions")?;
    writeln!(io.out(), "4. Back")?;
    match io.choice()? {
        1 => summary(io, ctx, user)?,
        2 => print_json(io.out(), &FinancialReport::for_user(user))?,
        3 => recent(io, ctx, user)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

fn summary<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    let report = FinancialReport::for_user(user);
    io.heading("MONTHLY SUMMARY")?;
    writeln!(io.out(), "Total Income:   {}", ctx.money(report.total_income))?;
    writeln!(io.out(), "Total Expenses: {}", ctx.money(report.total_expenses))?;
    writeln!(io.out(), "Net Savings:    {}", ctx.money(report.net_savings))?;

    if !report.breakdown.is_empty() {
        writeln!(io.out(), "\nExpense Breakdown:")?;
        let rows = report
            .breakdown
            .iter()
            .map(|c| vec![c.category.clone(), ctx.money(c.amount)])
            .collect();
        writeln!(io.out(), "{}", pretty_table(&["Category", "Amount"], rows))?;
    }

    writeln!(io.out(), "\nInsights:")?;
    if report.healthy_spending {
        writeln!(io.out(), "✓ Your spending is within healthy limits")?;
    } else {
        writeln!(io.out(), "⚠ Your spending is above average")?;
    }
    writeln!(io.out(), "Savings rate: {}", fmt_percent(report.savings_rate))?;
    Ok(())
}

fn recent<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("RECENT TRANSACTIONS")?;
    let recent = user.recent_transactions(RECENT_COUNT);
    if recent.is_empty() {
        writeln!(io.out(), "No transactions yet.")?;
        return Ok(());
    }
    let rows = transaction_rows(ctx, recent);
    writeln!(
        io.out(),
        "{}",
        pretty_table(&["Date", "Description", "Amount", "Type"], rows)
    )?;
    Ok(())
}

pub fn tax_documents<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &User,
) -> Result<()> {
    io.heading("TAX DOCUMENTS")?;
    writeln!(io.out(), "Available Documents:")?;
    writeln!(io.out(), "  1. Form 16 (FY {})", ctx.today().format("%Y"))?;
    writeln!(io.out(), "  2. Investment Proofs (80C)")?;
    writeln!(io.out(), "  3. Capital Gains Statement")?;
    writeln!(io.out(), "  4. Interest Certificates")?;

    let estimate = user.annual().salary * TAX_ESTIMATE_RATE;
    writeln!(io.out(), "\nEstimated Tax Liability: {}", ctx.money(estimate))?;
    writeln!(io.out(), "(Based on a flat 15% of annual salary)")?;
    io.pause()?;
    Ok(())
}
