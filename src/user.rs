// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The per-user ledger.
//!
//! A [`User`] owns every record it holds. Query methods never mutate, and the
//! planned "remaining" figures are computed on read from the allocation
//! scalars so no setter can leave them stale.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::bills;
use crate::config::UserDefaults;
use crate::models::{Account, Bill, Budget, Expense, ExtraIncome, Investment, Transaction};
use crate::utils::total;

fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Planned split of one salary period (a year or a month).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Allocation {
    pub salary: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub investments: Decimal,
}

impl Allocation {
    pub fn allocated(&self) -> Decimal {
        total([self.expenses, self.savings, self.investments])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: Uuid,
    email: String,
    full_name: String,
    phone: Option<String>,
    #[serde(skip)]
    password: String,
    created_at: DateTime<Utc>,

    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    transactions: Vec<Transaction>,
    investments: Vec<Investment>,
    bills: Vec<Bill>,
    accounts: Vec<Account>,
    extra_incomes: Vec<ExtraIncome>,

    wallet_balance: Decimal,
    annual: Allocation,
    monthly: Allocation,
}

impl User {
    /// A user with empty collections and every financial scalar at zero.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: full_name.into(),
            phone: None,
            password: password.into(),
            created_at,
            expenses: Vec::new(),
            budgets: Vec::new(),
            transactions: Vec::new(),
            investments: Vec::new(),
            bills: Vec::new(),
            accounts: Vec::new(),
            extra_incomes: Vec::new(),
            wallet_balance: Decimal::ZERO,
            annual: Allocation::default(),
            monthly: Allocation::default(),
        }
    }

    /// Seeds the wallet and planning figures, as done for freshly registered users.
    pub fn with_defaults(mut self, defaults: &UserDefaults) -> Self {
        self.wallet_balance = defaults.wallet_balance;
        self.annual = defaults.annual;
        self.monthly = defaults.monthly;
        self
    }

    // Profile

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
    }

    /// Empty input clears the phone number.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        let phone = phone.into();
        self.phone = if phone.trim().is_empty() {
            None
        } else {
            Some(phone)
        };
    }

    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        debug!(user = %self.email, "password changed");
    }

    // Wallet

    pub fn wallet_balance(&self) -> Decimal {
        self.wallet_balance
    }

    /// Credits the wallet and records a matching "Deposit" transaction.
    pub fn add_to_wallet(&mut self, amount: Decimal, date: NaiveDate) {
        self.wallet_balance = self.wallet_balance.saturating_add(amount);
        self.add_transaction(Transaction::incoming(
            "Wallet Top-up",
            amount,
            "Deposit",
            date,
        ));
    }

    /// Debits the wallet only. Callers log the corresponding transaction themselves.
    pub fn deduct_from_wallet(&mut self, amount: Decimal) {
        self.wallet_balance = self.wallet_balance.saturating_sub(amount);
        debug!(%amount, balance = %self.wallet_balance, "wallet debited");
    }

    // Expenses

    /// Appends the expense and mirrors it into the transaction history as a negative entry.
    pub fn add_expense(&mut self, expense: Expense) {
        debug!(category = %expense.category, amount = %expense.amount, "expense added");
        let mirrored = Transaction::outgoing(
            expense.description.clone(),
            expense.amount,
            expense.category.clone(),
            expense.date,
        );
        self.expenses.push(expense);
        self.add_transaction(mirrored);
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expenses_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| same_category(&e.category, category))
            .collect()
    }

    pub fn expenses_for_category(&self, category: &str) -> Decimal {
        total(
            self.expenses_by_category(category)
                .into_iter()
                .map(|e| e.amount),
        )
    }

    pub fn total_expenses(&self) -> Decimal {
        total(self.expenses.iter().map(|e| e.amount))
    }

    // Budgets

    /// Sets the limit for a category. A budget already present for the same
    /// category (ignoring case) has its limit replaced instead of being duplicated.
    pub fn add_budget(&mut self, budget: Budget) {
        match self
            .budgets
            .iter_mut()
            .find(|b| same_category(&b.category, &budget.category))
        {
            Some(existing) => {
                debug!(category = %existing.category, limit = %budget.limit, "budget updated");
                existing.limit = budget.limit;
            }
            None => {
                debug!(category = %budget.category, limit = %budget.limit, "budget added");
                self.budgets.push(budget);
            }
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn budget_for_category(&self, category: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|b| same_category(&b.category, category))
    }

    // Transactions

    pub fn add_transaction(&mut self, transaction: Transaction) {
        debug!(kind = %transaction.r#type, amount = %transaction.amount, "transaction recorded");
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The last `count` transactions, oldest first.
    pub fn recent_transactions(&self, count: usize) -> &[Transaction] {
        let start = self.transactions.len().saturating_sub(count);
        &self.transactions[start..]
    }

    /// Realized income: every positive transaction amount. Independent of the salary figures.
    pub fn total_income(&self) -> Decimal {
        total(
            self.transactions
                .iter()
                .map(|t| t.amount)
                .filter(|a| *a > Decimal::ZERO),
        )
    }

    // Investments, bills, accounts

    pub fn add_investment(&mut self, investment: Investment) {
        debug!(name = %investment.name, "investment added");
        self.investments.push(investment);
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn add_bill(&mut self, bill: Bill) {
        debug!(name = %bill.name, due_day = bill.due_day, "bill added");
        self.bills.push(bill);
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    /// Bills whose next due date is between today and `days` days from today.
    pub fn upcoming_bills(&self, days: i64, today: NaiveDate) -> Vec<&Bill> {
        self.bills
            .iter()
            .filter(|b| bills::is_upcoming(b.due_day, today, days))
            .collect()
    }

    pub fn add_account(&mut self, account: Account) {
        debug!(name = %account.name, bank = %account.bank_name, "account linked");
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    // Extra income

    pub fn add_extra_income(&mut self, income: ExtraIncome) {
        debug!(period = %income.period, amount = %income.amount, "extra income added");
        self.extra_incomes.push(income);
    }

    pub fn extra_incomes(&self, period: &str) -> Vec<&ExtraIncome> {
        self.extra_incomes
            .iter()
            .filter(|i| i.period == period)
            .collect()
    }

    pub fn total_extra_income(&self, period: &str) -> Decimal {
        total(self.extra_incomes(period).into_iter().map(|i| i.amount))
    }

    // Planning scalars

    pub fn annual(&self) -> &Allocation {
        &self.annual
    }

    pub fn monthly(&self) -> &Allocation {
        &self.monthly
    }

    pub fn set_annual_salary(&mut self, amount: Decimal) {
        self.annual.salary = amount;
    }

    pub fn set_annual_expenses(&mut self, amount: Decimal) {
        self.annual.expenses = amount;
    }

    pub fn set_annual_savings(&mut self, amount: Decimal) {
        self.annual.savings = amount;
    }

    pub fn set_annual_investments(&mut self, amount: Decimal) {
        self.annual.investments = amount;
    }

    pub fn set_monthly_salary(&mut self, amount: Decimal) {
        self.monthly.salary = amount;
    }

    pub fn set_monthly_expenses(&mut self, amount: Decimal) {
        self.monthly.expenses = amount;
    }

    pub fn set_monthly_savings(&mut self, amount: Decimal) {
        self.monthly.savings = amount;
    }

    pub fn set_monthly_investments(&mut self, amount: Decimal) {
        self.monthly.investments = amount;
    }

    /// Salary plus the period's extra income, minus everything allocated for the year.
    pub fn annual_remaining(&self, period: &str) -> Decimal {
        self.annual
            .salary
            .saturating_add(self.total_extra_income(period))
            .saturating_sub(self.annual.allocated())
    }

    /// Monthly salary minus monthly allocations. Extra income is not counted here.
    pub fn monthly_remaining(&self) -> Decimal {
        self.monthly.salary.saturating_sub(self.monthly.allocated())
    }
}
