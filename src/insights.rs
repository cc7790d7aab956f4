// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Budget classification and report metrics derived from a [`User`] ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Budget;
use crate::user::User;
use crate::utils::{percent_of, total};

pub const STANDARD_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Healthcare",
    "Education",
    "Other",
];

/// Categories broken out in the financial report.
pub const REPORT_CATEGORIES: [&str; 5] = ["Food", "Transport", "Shopping", "Bills", "Entertainment"];

const WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
const LOW_BALANCE_SHARE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const HEALTHY_SPEND_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    /// Over 100% used is over budget, over 80% a warning. Without a usable
    /// percentage (zero limit) any spending counts as over budget.
    pub fn classify(used: Option<Decimal>, spent: Decimal) -> Self {
        match used {
            Some(p) if p > Decimal::ONE_HUNDRED => BudgetStatus::OverBudget,
            Some(p) if p > WARNING_PERCENT => BudgetStatus::Warning,
            Some(_) => BudgetStatus::OnTrack,
            None if spent > Decimal::ZERO => BudgetStatus::OverBudget,
            None => BudgetStatus::OnTrack,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::Warning => "WARNING",
            BudgetStatus::OverBudget => "OVER BUDGET",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUsage {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub used: Option<Decimal>,
    pub status: BudgetStatus,
}

impl BudgetUsage {
    pub fn for_budget(user: &User, budget: &Budget) -> Self {
        let spent = user.expenses_for_category(&budget.category);
        let used = percent_of(spent, budget.limit);
        Self {
            category: budget.category.clone(),
            limit: budget.limit,
            spent,
            remaining: budget.limit.saturating_sub(spent),
            used,
            status: BudgetStatus::classify(used, spent),
        }
    }
}

pub fn budget_usages(user: &User) -> Vec<BudgetUsage> {
    user.budgets()
        .iter()
        .map(|b| BudgetUsage::for_budget(user, b))
        .collect()
}

/// Warning shown right after an expense lands in a budgeted category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetAlert {
    Exceeded,
    RunningLow,
}

pub fn budget_alert(usage: &BudgetUsage) -> Option<BudgetAlert> {
    if usage.remaining < Decimal::ZERO {
        Some(BudgetAlert::Exceeded)
    } else if usage.remaining < usage.limit * LOW_BALANCE_SHARE {
        Some(BudgetAlert::RunningLow)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnalysisAdvice {
    ReduceSpending,
    Monitor,
    WellManaged,
}

impl AnalysisAdvice {
    pub fn message(self) -> &'static str {
        match self {
            AnalysisAdvice::ReduceSpending => {
                "You're using most of your budget. Consider reducing non-essential expenses."
            }
            AnalysisAdvice::Monitor => {
                "You're on track but monitor your spending in the coming days."
            }
            AnalysisAdvice::WellManaged => "Great job! You're managing your budget well.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAnalysis {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub overall: Option<Decimal>,
    pub advice: AnalysisAdvice,
}

/// `None` when no budgets are set.
pub fn budget_analysis(user: &User) -> Option<BudgetAnalysis> {
    if user.budgets().is_empty() {
        return None;
    }
    let total_budget = total(user.budgets().iter().map(|b| b.limit));
    let total_spent = total(
        user.budgets()
            .iter()
            .map(|b| user.expenses_for_category(&b.category)),
    );
    let overall = percent_of(total_spent, total_budget);
    let advice = match overall {
        Some(p) if p > Decimal::from(90) => AnalysisAdvice::ReduceSpending,
        Some(p) if p > Decimal::from(70) => AnalysisAdvice::Monitor,
        Some(_) => AnalysisAdvice::WellManaged,
        None if total_spent > Decimal::ZERO => AnalysisAdvice::ReduceSpending,
        None => AnalysisAdvice::WellManaged,
    };
    Some(BudgetAnalysis {
        total_budget,
        total_spent,
        remaining: total_budget.saturating_sub(total_spent),
        overall,
        advice,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReport {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
    pub breakdown: Vec<CategorySpend>,
    pub healthy_spending: bool,
    pub savings_rate: Option<Decimal>,
}

impl FinancialReport {
    pub fn for_user(user: &User) -> Self {
        let total_income = user.total_income();
        let total_expenses = user.total_expenses();
        let net_savings = total_income.saturating_sub(total_expenses);
        let breakdown = REPORT_CATEGORIES
            .iter()
            .map(|c| CategorySpend {
                category: (*c).to_string(),
                amount: user.expenses_for_category(c),
            })
            .filter(|c| c.amount > Decimal::ZERO)
            .collect();
        Self {
            total_income,
            total_expenses,
            net_savings,
            breakdown,
            healthy_spending: total_expenses < total_income * HEALTHY_SPEND_SHARE,
            savings_rate: percent_of(net_savings, total_income),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_gain: Decimal,
}

pub fn portfolio_summary(user: &User) -> PortfolioSummary {
    PortfolioSummary {
        total_value: total(user.investments().iter().map(|i| i.current_value)),
        total_gain: total(user.investments().iter().map(|i| i.gain())),
    }
}

pub fn total_account_balance(user: &User) -> Decimal {
    total(user.accounts().iter().map(|a| a.balance))
}
