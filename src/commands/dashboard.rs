// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Planning dashboard: mode selection, overview and allocation editing.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use super::Ctx;
use crate::console::Console;
use crate::models::ExtraIncome;
use crate::planning::{
    PlanningMode, PlanningSession, PlanningView, Suggestion, ai_suggestions, goals,
};
use crate::user::User;
use crate::utils::{fmt_amount, fmt_long_date, fmt_percent};

const RULE: &str = "─────────────────────────────────────";

const SAMPLE_MONTHS: [(&str, i64, i64, i64); 6] = [
    ("Jan", 310_000, 103_000, 69_000),
    ("Feb", 304_000, 107_000, 70_000),
    ("Mar", 315_000, 99_000, 66_000),
    ("Apr", 310_000, 103_000, 69_000),
    ("May", 322_000, 95_000, 74_000),
    ("Jun", 301_000, 111_000, 62_000),
];

const SAMPLE_WEEKS: [(&str, i64, i64, i64); 4] = [
    ("Week 1", 7_800, 2_500, 1_800),
    ("Week 2", 7_600, 2_700, 1_750),
    ("Week 3", 7_900, 2_300, 1_650),
    ("Week 4", 7_700, 2_800, 1_800),
];

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    let mut session = PlanningSession::new(ctx.today().year().to_string());
    let Some(mode) = select_mode(io)? else {
        return Ok(());
    };
    session.select(mode);

    while let Some(view) = session.view(user) {
        let title = format!("{} PLANNING DASHBOARD", view.mode.label().to_uppercase());
        io.heading(&title)?;
        overview(io, ctx, &view)?;

        writeln!(io.out(), "\n1. View Detailed Breakdown")?;
        writeln!(io.out(), "2. Manage Salary")?;
        writeln!(io.out(), "3. Manage Extra Income")?;
        writeln!(io.out(), "4. Adjust Financial Allocations")?;
        writeln!(io.out(), "5. View AI Suggestions")?;
        writeln!(io.out(), "6. View Financial Goals")?;
        writeln!(io.out(), "7. Switch Planning Mode")?;
        writeln!(io.out(), "8. Change Period")?;
        writeln!(io.out(), "9. Back to Main Menu")?;
        match io.choice()? {
            1 => breakdown(io, ctx, view.mode)?,
            2 => manage_salary(io, ctx, user, view.mode)?,
            3 => manage_extra_income(io, ctx, user, session.period())?,
            4 => adjust_allocations(io, ctx, user, view.mode)?,
            5 => suggestions(io, ctx, &view)?,
            6 => show_goals(io, ctx, &view)?,
            7 => {
                session.switch();
                debug!(mode = ?session.mode(), "planning mode switched");
                continue;
            }
            8 => {
                let period = io.prompt_text("\nPeriod (e.g. 2025): ")?;
                let period = period.trim();
                if !period.is_empty() {
                    session.set_period(period);
                }
                continue;
            }
            9 => session.reset(),
            _ => writeln!(io.out(), "Invalid choice.")?,
        }
        if session.mode().is_some() {
            io.pause()?;
        }
    }
    Ok(())
}

fn select_mode<R: BufRead, W: Write>(io: &mut Console<R, W>) -> Result<Option<PlanningMode>> {
    io.heading("CHOOSE YOUR PLANNING MODE")?;
    writeln!(io.out(), "1. Annual Planning")?;
    writeln!(io.out(), "   Long-term goals, tax planning, yearly allocation")?;
    writeln!(io.out(), "2. Monthly Planning")?;
    writeln!(io.out(), "   Day-to-day tracking, short-term goals")?;
    writeln!(io.out(), "3. Back to Main Menu")?;
    Ok(match io.choice()? {
        1 => Some(PlanningMode::Annual),
        2 => Some(PlanningMode::Monthly),
        3 => None,
        _ => {
            writeln!(io.out(), "Invalid choice.")?;
            None
        }
    })
}

fn overview<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    view: &PlanningView,
) -> Result<()> {
    writeln!(io.out(), "\nFINANCIAL OVERVIEW")?;
    writeln!(io.out(), "Period: {}", view.period)?;
    writeln!(io.out(), "{RULE}")?;
    writeln!(io.out(), "Base Salary:   {:>20}", ctx.money(view.salary))?;
    if view.extra_income > Decimal::ZERO {
        writeln!(io.out(), "Extra Income: +{:>20}", ctx.money(view.extra_income))?;
        writeln!(io.out(), "Total Income:  {:>20}", ctx.money(view.total_income()))?;
        writeln!(io.out(), "{RULE}")?;
    }
    let shown_remaining = view.remaining.max(Decimal::ZERO);
    for (label, amount) in [
        ("Expenses:    ", view.expenses),
        ("Savings:     ", view.savings),
        ("Investments: ", view.investments),
        ("Remaining:   ", shown_remaining),
    ] {
        writeln!(
            io.out(),
            "{label} {:>20} ({})",
            ctx.money(amount),
            fmt_percent(view.share(amount))
        )?;
    }
    writeln!(io.out(), "{RULE}")?;
    if let Some(over) = view.shortfall() {
        writeln!(
            io.out(),
            "⚠️  WARNING: Allocations exceed income by {}",
            ctx.money(over)
        )?;
    }
    Ok(())
}

fn breakdown<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    mode: PlanningMode,
) -> Result<()> {
    io.heading("DETAILED BREAKDOWN")?;
    let (title, rows): (&str, &[(&str, i64, i64, i64)]) = match mode {
        PlanningMode::Annual => ("Monthly Average Breakdown:", &SAMPLE_MONTHS),
        PlanningMode::Monthly => ("Weekly Breakdown:", &SAMPLE_WEEKS),
    };
    writeln!(io.out(), "{title}")?;
    writeln!(io.out(), "{RULE}")?;
    let sym = &ctx.config.currency_symbol;
    for (label, exp, sav, inv) in rows {
        writeln!(
            io.out(),
            "{label} - Exp: {sym}{} | Sav: {sym}{} | Inv: {sym}{}",
            fmt_amount(Decimal::from(*exp)),
            fmt_amount(Decimal::from(*sav)),
            fmt_amount(Decimal::from(*inv)),
        )?;
    }
    Ok(())
}

fn manage_salary<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
    mode: PlanningMode,
) -> Result<()> {
    io.heading("MANAGE SALARY")?;
    let current = match mode {
        PlanningMode::Annual => user.annual().salary,
        PlanningMode::Monthly => user.monthly().salary,
    };
    writeln!(io.out(), "Current {} Salary: {}", mode.label(), ctx.money(current))?;
    let salary = io.prompt_decimal(&format!(
        "\nEnter new salary (or 0 to cancel): {}",
        ctx.config.currency_symbol
    ))?;
    if salary <= Decimal::ZERO {
        writeln!(io.out(), "\nSalary update cancelled.")?;
        return Ok(());
    }
    match mode {
        PlanningMode::Annual => user.set_annual_salary(salary),
        PlanningMode::Monthly => user.set_monthly_salary(salary),
    }
    writeln!(io.out(), "\n✓ Salary updated successfully!")?;
    Ok(())
}

fn manage_extra_income<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
    period: &str,
) -> Result<()> {
    io.heading("MANAGE EXTRA INCOME")?;
    let extras = user.extra_incomes(period);
    if !extras.is_empty() {
        writeln!(io.out(), "\nCurrent Extra Income for {period}:")?;
        writeln!(io.out(), "{RULE}")?;
        let lines: Vec<String> = extras
            .iter()
            .map(|e| {
                format!(
                    "{}: {} ({})",
                    e.description,
                    ctx.money(e.amount),
                    fmt_long_date(e.date)
                )
            })
            .collect();
        for line in lines {
            writeln!(io.out(), "{line}")?;
        }
        writeln!(io.out(), "Total: {}", ctx.money(user.total_extra_income(period)))?;
    }

    writeln!(io.out(), "\n1. Add New Extra Income")?;
    writeln!(io.out(), "2. Back")?;
    if io.choice()? != 1 {
        return Ok(());
    }
    let description = io.prompt_text("\nDescription (e.g., Bonus, Gift): ")?;
    let amount = io.prompt_decimal(&format!("Amount: {}", ctx.config.currency_symbol))?;
    if amount > Decimal::ZERO && !description.trim().is_empty() {
        user.add_extra_income(ExtraIncome::new(description, amount, period, ctx.today()));
        writeln!(io.out(), "\n✓ Extra income added successfully!")?;
    }
    Ok(())
}

fn adjust_allocations<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
    mode: PlanningMode,
) -> Result<()> {
    io.heading("ADJUST FINANCIAL ALLOCATIONS")?;
    writeln!(io.out(), "1. Adjust Expenses")?;
    writeln!(io.out(), "2. Adjust Savings")?;
    writeln!(io.out(), "3. Adjust Investments")?;
    writeln!(io.out(), "4. Back")?;
    let choice = io.choice()?;
    if !(1..=3).contains(&choice) {
        return Ok(());
    }
    let amount = io.prompt_decimal(&format!(
        "\nEnter new amount: {}",
        ctx.config.currency_symbol
    ))?;
    if amount < Decimal::ZERO {
        return Ok(());
    }
    match (mode, choice) {
        (PlanningMode::Annual, 1) => user.set_annual_expenses(amount),
        (PlanningMode::Annual, 2) => user.set_annual_savings(amount),
        (PlanningMode::Annual, _) => user.set_annual_investments(amount),
        (PlanningMode::Monthly, 1) => user.set_monthly_expenses(amount),
        (PlanningMode::Monthly, 2) => user.set_monthly_savings(amount),
        (PlanningMode::Monthly, _) => user.set_monthly_investments(amount),
    }
    writeln!(io.out(), "\n✓ Allocation updated successfully!")?;
    Ok(())
}

fn suggestions<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    view: &PlanningView,
) -> Result<()> {
    io.heading("AI FINANCIAL INSIGHTS")?;
    let items = ai_suggestions(view);
    if items.is_empty() {
        writeln!(io.out(), "Set a salary to get personalised suggestions.")?;
        return Ok(());
    }
    let pct = |r: &Decimal| fmt_percent(Some(*r));
    for s in &items {
        let lines = match s {
            Suggestion::IncreaseSavings { rate, shortfall } => vec![
                "💡 SAVINGS OPTIMIZATION".to_string(),
                format!("   Your savings rate is {}", pct(rate)),
                "   AI recommends increasing to 20% for better financial security.".to_string(),
                format!("   Potential savings: {}", ctx.money(*shortfall)),
            ],
            Suggestion::SavingsOnTarget { rate } => vec![
                "💡 SAVINGS OPTIMIZATION".to_string(),
                format!("   Great job! You're saving {} of your income.", pct(rate)),
                "   This is above the recommended 20% threshold.".to_string(),
            ],
            Suggestion::ReviewSpending { rate, excess } => vec![
                "💡 EXPENSE OPTIMIZATION".to_string(),
                format!("   Your expenses are {} of income.", pct(rate)),
                "   AI suggests reviewing discretionary spending.".to_string(),
                "   Target: Reduce to 50-60% of income".to_string(),
                format!("   Potential savings: {}", ctx.money(*excess)),
            ],
            Suggestion::SpendingHealthy { rate } => vec![
                "💡 EXPENSE OPTIMIZATION".to_string(),
                format!("   Your expense ratio is healthy at {}", pct(rate)),
            ],
            Suggestion::IncreaseInvestments { rate, additional } => vec![
                "💡 INVESTMENT SUGGESTION".to_string(),
                format!("   Current investment: {} of income", pct(rate)),
                "   Recommended: 15-20% for long-term wealth building".to_string(),
                format!("   Consider investing an additional {}", ctx.money(*additional)),
            ],
            Suggestion::InvestmentsOnTarget { rate } => vec![
                "💡 INVESTMENT SUGGESTION".to_string(),
                format!("   Current investment: {} of income", pct(rate)),
                "   Recommended: 15-20% for long-term wealth building".to_string(),
            ],
        };
        for line in lines {
            writeln!(io.out(), "{line}")?;
        }
        writeln!(io.out())?;
    }
    Ok(())
}

fn show_goals<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    view: &PlanningView,
) -> Result<()> {
    io.heading("FINANCIAL GOALS PROGRESS")?;
    for goal in goals(view) {
        writeln!(io.out(), "📊 {}", goal.name)?;
        writeln!(io.out(), "   Target: {}", ctx.money(goal.target))?;
        if let Some(current) = goal.current {
            writeln!(io.out(), "   Current: {}", ctx.money(current))?;
        }
        writeln!(io.out(), "   Progress: {}\n", fmt_percent(goal.progress))?;
    }
    Ok(())
}
