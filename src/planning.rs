// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Annual / monthly planning overlay.
//!
//! The overlay only chooses which allocation set of a [`User`] is read and
//! which extra-income period is counted. It never writes to the ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::user::{Allocation, User};
use crate::utils::percent_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanningMode {
    Annual,
    Monthly,
}

impl PlanningMode {
    pub fn label(self) -> &'static str {
        match self {
            PlanningMode::Annual => "Annual",
            PlanningMode::Monthly => "Monthly",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PlanningMode::Annual => PlanningMode::Monthly,
            PlanningMode::Monthly => PlanningMode::Annual,
        }
    }
}

/// Dashboard state: the selected mode (if any) and the extra-income period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningSession {
    mode: Option<PlanningMode>,
    period: String,
}

impl PlanningSession {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            mode: None,
            period: period.into(),
        }
    }

    pub fn mode(&self) -> Option<PlanningMode> {
        self.mode
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn select(&mut self, mode: PlanningMode) {
        self.mode = Some(mode);
    }

    /// Annual <-> Monthly. Does nothing while no mode is selected.
    pub fn switch(&mut self) {
        self.mode = self.mode.map(PlanningMode::toggled);
    }

    pub fn set_period(&mut self, period: impl Into<String>) {
        self.period = period.into();
    }

    /// Back to the unselected state, as when leaving the dashboard.
    pub fn reset(&mut self) {
        self.mode = None;
    }

    pub fn view(&self, user: &User) -> Option<PlanningView> {
        self.mode.map(|mode| PlanningView::new(user, mode, &self.period))
    }
}

/// Read-only projection of one user's plan for a mode and period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanningView {
    pub mode: PlanningMode,
    pub period: String,
    pub salary: Decimal,
    pub extra_income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub investments: Decimal,
    pub remaining: Decimal,
}

impl PlanningView {
    pub fn new(user: &User, mode: PlanningMode, period: &str) -> Self {
        let (alloc, remaining): (&Allocation, Decimal) = match mode {
            PlanningMode::Annual => (user.annual(), user.annual_remaining(period)),
            PlanningMode::Monthly => (user.monthly(), user.monthly_remaining()),
        };
        Self {
            mode,
            period: period.to_string(),
            salary: alloc.salary,
            extra_income: user.total_extra_income(period),
            expenses: alloc.expenses,
            savings: alloc.savings,
            investments: alloc.investments,
            remaining,
        }
    }

    pub fn total_income(&self) -> Decimal {
        self.salary.saturating_add(self.extra_income)
    }

    /// Share of total income, `None` when there is no income.
    pub fn share(&self, amount: Decimal) -> Option<Decimal> {
        percent_of(amount, self.total_income())
    }

    /// Amount by which allocations exceed income, if they do.
    pub fn shortfall(&self) -> Option<Decimal> {
        (self.remaining < Decimal::ZERO).then(|| -self.remaining)
    }
}

pub const SAVINGS_TARGET_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
pub const EXPENSE_CEILING_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);
pub const INVESTMENT_TARGET_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Suggestion {
    IncreaseSavings { rate: Decimal, shortfall: Decimal },
    SavingsOnTarget { rate: Decimal },
    ReviewSpending { rate: Decimal, excess: Decimal },
    SpendingHealthy { rate: Decimal },
    IncreaseInvestments { rate: Decimal, additional: Decimal },
    InvestmentsOnTarget { rate: Decimal },
}

/// Savings, expense and investment heuristics, each rate measured against salary.
/// Returns nothing when the salary is zero.
pub fn ai_suggestions(view: &PlanningView) -> Vec<Suggestion> {
    let salary = view.salary;
    let (Some(savings_rate), Some(expense_rate), Some(investment_rate)) = (
        percent_of(view.savings, salary),
        percent_of(view.expenses, salary),
        percent_of(view.investments, salary),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(3);
    if savings_rate < SAVINGS_TARGET_RATE * Decimal::ONE_HUNDRED {
        out.push(Suggestion::IncreaseSavings {
            rate: savings_rate,
            shortfall: (salary * SAVINGS_TARGET_RATE).saturating_sub(view.savings),
        });
    } else {
        out.push(Suggestion::SavingsOnTarget { rate: savings_rate });
    }

    if expense_rate > EXPENSE_CEILING_RATE * Decimal::ONE_HUNDRED {
        out.push(Suggestion::ReviewSpending {
            rate: expense_rate,
            excess: view.expenses.saturating_sub(salary * EXPENSE_CEILING_RATE),
        });
    } else {
        out.push(Suggestion::SpendingHealthy { rate: expense_rate });
    }

    if investment_rate < INVESTMENT_TARGET_RATE * Decimal::ONE_HUNDRED {
        out.push(Suggestion::IncreaseInvestments {
            rate: investment_rate,
            additional: (salary * INVESTMENT_TARGET_RATE).saturating_sub(view.investments),
        });
    } else {
        out.push(Suggestion::InvestmentsOnTarget {
            rate: investment_rate,
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub name: &'static str,
    pub target: Decimal,
    pub current: Option<Decimal>,
    /// Capped at 100.
    pub progress: Option<Decimal>,
}

pub fn goals(view: &PlanningView) -> Vec<Goal> {
    let (emergency_target, emergency_name) = match view.mode {
        PlanningMode::Annual => (view.expenses / Decimal::TWO, "Emergency Fund (6 months expenses)"),
        PlanningMode::Monthly => (
            view.expenses.saturating_mul(Decimal::from(3)),
            "Emergency Fund (3 months expenses)",
        ),
    };
    let investment_target = view.salary * INVESTMENT_TARGET_RATE;
    let savings_target = view.salary * SAVINGS_TARGET_RATE;
    let capped = |current: Decimal, target: Decimal| {
        percent_of(current, target).map(|p| p.min(Decimal::ONE_HUNDRED))
    };

    vec![
        Goal {
            name: emergency_name,
            target: emergency_target,
            current: None,
            progress: Some(Decimal::ONE_HUNDRED),
        },
        Goal {
            name: "Investment Target (15% of income)",
            target: investment_target,
            current: Some(view.investments),
            progress: capped(view.investments, investment_target),
        },
        Goal {
            name: "Savings Goal (20% of income)",
            target: savings_target,
            current: Some(view.savings),
            progress: capped(view.savings, savings_target),
        },
    ]
}
