// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use super::Ctx;
use crate::console::Console;
use crate::insights::{BudgetAlert, BudgetUsage, STANDARD_CATEGORIES, budget_alert};
use crate::models::Expense;
use crate::user::User;
use crate::utils::{fmt_short_date, pretty_table};

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
) -> Result<()> {
    io.heading("EXPENSE TRACKER")?;
    writeln!(io.out(), "1. Add New Expense")?;
    writeln!(io.out(), "2. View All Expenses")?;
    writeln!(io.out(), "3. View by Category")?;
    writeln!(io.out(), "4. Back")?;
    match io.choice()? {
        1 => add(io, ctx, user)?,
        2 => list_all(io, ctx, user)?,
        3 => by_category(io, ctx, user)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

/// Index into [`STANDARD_CATEGORIES`] from a 1-based menu choice; anything else is "Other".
pub fn category_for_choice(choice: i64) -> &'static str {
    usize::try_from(choice)
        .ok()
        .and_then(|c| c.checked_sub(1))
        .and_then(|i| STANDARD_CATEGORIES.get(i).copied())
        .unwrap_or("Other")
}

fn add<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &mut User) -> Result<()> {
    let description = io.prompt_text("\nExpense Description: ")?;
    let amount = io.prompt_decimal(&format!("Amount: {}", ctx.config.currency_symbol))?;

    writeln!(io.out(), "\nCategories:")?;
    for (i, c) in STANDARD_CATEGORIES.iter().enumerate() {
        writeln!(io.out(), "{}. {}", i + 1, c)?;
    }
    let category = category_for_choice(io.prompt_int("Select category: ")?);

    user.add_expense(Expense::new(description, amount, category, ctx.today()));
    writeln!(io.out(), "\n✓ Expense added successfully!")?;

    let Some(budget) = user.budget_for_category(category) else {
        return Ok(());
    };
    let usage = BudgetUsage::for_budget(user, budget);
    writeln!(
        io.out(),
        "\nBudget for {}: {}",
        category,
        ctx.money(usage.limit)
    )?;
    writeln!(io.out(), "Spent: {}", ctx.money(usage.spent))?;
    writeln!(io.out(), "Remaining: {}", ctx.money(usage.remaining))?;
    match budget_alert(&usage) {
        Some(BudgetAlert::Exceeded) => {
            warn!(%category, remaining = %usage.remaining, "budget exceeded");
            writeln!(io.out(), "⚠️  WARNING: You've exceeded your budget!")?;
        }
        Some(BudgetAlert::RunningLow) => {
            writeln!(io.out(), "⚠️  ALERT: You're running low on budget!")?;
        }
        None => {}
    }
    Ok(())
}

fn expense_rows<'a>(ctx: &Ctx, expenses: impl IntoIterator<Item = &'a Expense>) -> Vec<Vec<String>> {
    expenses
        .into_iter()
        .map(|e| {
            vec![
                fmt_short_date(e.date),
                e.description.clone(),
                e.category.clone(),
                ctx.money(e.amount),
            ]
        })
        .collect()
}

fn list_all<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("ALL EXPENSES")?;
    if user.expenses().is_empty() {
        writeln!(io.out(), "No expenses recorded yet.")?;
        return Ok(());
    }
    let rows = expense_rows(ctx, user.expenses());
    writeln!(
        io.out(),
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount"], rows)
    )?;
    writeln!(
        io.out(),
        "\nTotal Expenses: {}",
        ctx.money(user.total_expenses())
    )?;
    Ok(())
}

fn by_category<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &User,
) -> Result<()> {
    let category = io.prompt_text("\nEnter category name: ")?;
    io.heading(&format!("EXPENSES: {}", category.to_uppercase()))?;
    let matching = user.expenses_by_category(&category);
    if matching.is_empty() {
        writeln!(io.out(), "No expenses in this category.")?;
        return Ok(());
    }
    let rows = expense_rows(ctx, matching);
    writeln!(
        io.out(),
        "{}",
        pretty_table(&["Date", "Description", "Category", "Amount"], rows)
    )?;
    writeln!(
        io.out(),
        "\nTotal: {}",
        ctx.money(user.expenses_for_category(&category))
    )?;
    Ok(())
}
