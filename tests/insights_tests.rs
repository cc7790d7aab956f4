// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finwise::clock::{Clock, FixedClock};
use finwise::insights::{
    AnalysisAdvice, BudgetAlert, BudgetStatus, BudgetUsage, FinancialReport, budget_alert,
    budget_analysis, budget_usages, portfolio_summary, total_account_balance,
};
use finwise::models::{Account, Budget, Expense, Investment};
use finwise::user::User;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn today() -> NaiveDate {
    FixedClock::on(2025, 5, 2).unwrap().today()
}

fn user() -> User {
    User::new("a@b.com", "Asha", "pw", FixedClock::on(2025, 1, 1).unwrap().now())
}

fn spend(u: &mut User, category: &str, amount: &str) {
    u.add_expense(Expense::new("x", d(amount), category, today()));
}

#[test]
fn status_thresholds() {
    assert_eq!(BudgetStatus::classify(Some(d("80")), d("1")), BudgetStatus::OnTrack);
    assert_eq!(BudgetStatus::classify(Some(d("80.1")), d("1")), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::classify(Some(d("100")), d("1")), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::classify(Some(d("100.5")), d("1")), BudgetStatus::OverBudget);
}

#[test]
fn zero_limit_budget() {
    let mut u = user();
    u.add_budget(Budget::new("Food", Decimal::ZERO));
    let usage = BudgetUsage::for_budget(&u, &u.budgets()[0]);
    assert_eq!(usage.used, None);
    assert_eq!(usage.status, BudgetStatus::OnTrack);

    spend(&mut u, "food", "10");
    let usage = BudgetUsage::for_budget(&u, &u.budgets()[0]);
    assert_eq!(usage.used, None);
    assert_eq!(usage.status, BudgetStatus::OverBudget);
    assert_eq!(budget_alert(&usage), Some(BudgetAlert::Exceeded));
}

#[test]
fn usage_and_alerts() {
    let mut u = user();
    u.add_budget(Budget::new("Food", d("1000")));
    u.add_budget(Budget::new("Transport", d("500")));
    spend(&mut u, "Food", "850");
    spend(&mut u, "Transport", "100");

    let usages = budget_usages(&u);
    assert_eq!(usages.len(), 2);
    assert_eq!(usages[0].spent, d("850"));
    assert_eq!(usages[0].remaining, d("150"));
    assert_eq!(usages[0].used, Some(d("85")));
    assert_eq!(usages[0].status, BudgetStatus::Warning);
    assert_eq!(budget_alert(&usages[0]), Some(BudgetAlert::RunningLow));
    assert_eq!(budget_alert(&usages[1]), None);

    spend(&mut u, "Food", "200");
    let food = BudgetUsage::for_budget(&u, &u.budgets()[0]);
    assert_eq!(food.remaining, d("-50"));
    assert_eq!(budget_alert(&food), Some(BudgetAlert::Exceeded));
}

#[test]
fn analysis_tiers() {
    let mut u = user();
    assert!(budget_analysis(&u).is_none());

    u.add_budget(Budget::new("Food", d("1000")));
    spend(&mut u, "Food", "500");
    // Spending outside budgeted categories does not count.
    spend(&mut u, "Shopping", "9000");
    let a = budget_analysis(&u).unwrap();
    assert_eq!(a.total_budget, d("1000"));
    assert_eq!(a.total_spent, d("500"));
    assert_eq!(a.remaining, d("500"));
    assert_eq!(a.advice, AnalysisAdvice::WellManaged);

    spend(&mut u, "Food", "250");
    assert_eq!(budget_analysis(&u).unwrap().advice, AnalysisAdvice::Monitor);

    spend(&mut u, "Food", "200");
    assert_eq!(budget_analysis(&u).unwrap().advice, AnalysisAdvice::ReduceSpending);
}

#[test]
fn report_breakdown_and_rates() {
    let mut u = user();
    u.add_to_wallet(d("10000"), today());
    spend(&mut u, "Food", "3000");
    spend(&mut u, "Bills", "1000");
    spend(&mut u, "Healthcare", "500");

    let r = FinancialReport::for_user(&u);
    assert_eq!(r.total_income, d("10000"));
    assert_eq!(r.total_expenses, d("4500"));
    assert_eq!(r.net_savings, d("5500"));
    assert!(r.healthy_spending);
    assert_eq!(r.savings_rate, Some(d("55")));
    let cats: Vec<_> = r.breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(cats, ["Food", "Bills"]);

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["breakdown"][0]["category"], "Food");
}

#[test]
fn report_without_income() {
    let mut u = user();
    spend(&mut u, "Food", "100");
    let r = FinancialReport::for_user(&u);
    assert_eq!(r.savings_rate, None);
    assert!(!r.healthy_spending);
}

#[test]
fn portfolio_and_accounts() {
    let mut u = user();
    u.add_investment(Investment::new("Index", d("1000"), d("1200"), "Mutual Fund", today()));
    u.add_investment(Investment::new("Stock", d("500"), d("400"), "Stocks", today()));
    let p = portfolio_summary(&u);
    assert_eq!(p.total_value, d("1600"));
    assert_eq!(p.total_gain, d("100"));
    assert_eq!(u.investments()[0].return_percentage(), Some(d("20")));
    assert_eq!(u.investments()[1].return_percentage(), Some(d("-20")));

    let free = Investment::new("Gift", Decimal::ZERO, d("50"), "Stocks", today());
    assert_eq!(free.return_percentage(), None);

    u.add_account(Account::new("Main", "1234", "HDFC", d("5000"), "Savings"));
    u.add_account(Account::new("Card", "9876", "ICICI", d("-1200"), "Credit Card"));
    assert_eq!(total_account_balance(&u), d("3800"));
}

#[test]
fn huge_amounts_do_not_overflow_reports() {
    let mut u = user();
    u.add_budget(Budget::new("Food", Decimal::MAX));
    u.add_budget(Budget::new("Bills", Decimal::MAX));
    spend(&mut u, "Food", "1");
    let a = budget_analysis(&u).unwrap();
    assert_eq!(a.total_budget, Decimal::MAX);

    u.add_to_wallet(Decimal::MAX, today());
    let r = FinancialReport::for_user(&u);
    assert_eq!(r.total_income, Decimal::MAX);

    u.add_investment(Investment::new("Moon", Decimal::MIN, Decimal::MAX, "Crypto", today()));
    assert_eq!(u.investments()[0].gain(), Decimal::MAX);
    assert_eq!(u.investments()[0].return_percentage(), Some(d("-100")));
    u.add_account(Account::new("A", "1", "B", Decimal::MAX, "Savings"));
    u.add_account(Account::new("C", "2", "D", Decimal::MAX, "Savings"));
    assert_eq!(total_account_balance(&u), Decimal::MAX);
}
