// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finwise::clock::{Clock, FixedClock};
use finwise::config::UserDefaults;
use finwise::models::ExtraIncome;
use finwise::planning::{
    PlanningMode, PlanningSession, PlanningView, Suggestion, ai_suggestions, goals,
};
use finwise::user::User;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seeded() -> User {
    User::new("a@b.com", "Asha", "pw", FixedClock::on(2025, 1, 1).unwrap().now())
        .with_defaults(&UserDefaults::default())
}

fn march() -> NaiveDate {
    FixedClock::on(2025, 3, 1).unwrap().today()
}

#[test]
fn session_state_machine() {
    let mut s = PlanningSession::new("2025");
    assert_eq!(s.mode(), None);

    s.switch();
    assert_eq!(s.mode(), None);

    s.select(PlanningMode::Annual);
    assert_eq!(s.mode(), Some(PlanningMode::Annual));
    s.switch();
    assert_eq!(s.mode(), Some(PlanningMode::Monthly));
    s.switch();
    assert_eq!(s.mode(), Some(PlanningMode::Annual));

    s.reset();
    assert_eq!(s.mode(), None);
    assert!(s.view(&seeded()).is_none());
}

#[test]
fn switching_mode_or_period_leaves_user_untouched() {
    let user = seeded();
    let before = serde_json::to_string(&user).unwrap();
    let mut s = PlanningSession::new("2025");
    s.select(PlanningMode::Monthly);
    let _ = s.view(&user);
    s.switch();
    s.set_period("2024");
    let _ = s.view(&user);
    assert_eq!(serde_json::to_string(&user).unwrap(), before);
}

#[test]
fn annual_view_includes_period_extra_income() {
    let mut user = seeded();
    user.add_extra_income(ExtraIncome::new("Bonus", d("100000"), "2025", march()));

    let mut s = PlanningSession::new("2025");
    s.select(PlanningMode::Annual);
    let v = s.view(&user).unwrap();
    assert_eq!(v.salary, d("6200000"));
    assert_eq!(v.extra_income, d("100000"));
    assert_eq!(v.total_income(), d("6300000"));
    assert_eq!(v.remaining, d("510000"));
    assert_eq!(v.shortfall(), None);

    s.set_period("2024");
    let v = s.view(&user).unwrap();
    assert_eq!(v.extra_income, Decimal::ZERO);
    assert_eq!(v.remaining, d("410000"));
}

#[test]
fn monthly_view_remaining_excludes_extra_income() {
    let mut user = seeded();
    user.add_extra_income(ExtraIncome::new("Gift", d("2000"), "2025", march()));
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    assert_eq!(v.salary, d("52000"));
    assert_eq!(v.extra_income, d("2000"));
    assert_eq!(v.remaining, d("3500"));
}

#[test]
fn shortfall_when_allocations_exceed_income() {
    let mut user = seeded();
    user.set_monthly_expenses(d("40000"));
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    assert_eq!(v.remaining, d("-5500"));
    assert_eq!(v.shortfall(), Some(d("5500")));
}

#[test]
fn shares_are_undefined_without_income() {
    let user = User::new("z@b.com", "Zed", "pw", FixedClock::on(2025, 1, 1).unwrap().now());
    let v = PlanningView::new(&user, PlanningMode::Annual, "2025");
    assert_eq!(v.share(v.expenses), None);
}

#[test]
fn suggestions_for_seeded_monthly_plan() {
    // 10500/52000 = 20.19% savings, 31000/52000 = 59.6% expenses, 7000/52000 = 13.5% investments.
    let v = PlanningView::new(&seeded(), PlanningMode::Monthly, "2025");
    let s = ai_suggestions(&v);
    assert_eq!(s.len(), 3);
    assert!(matches!(s[0], Suggestion::SavingsOnTarget { .. }));
    assert!(matches!(s[1], Suggestion::SpendingHealthy { .. }));
    match &s[2] {
        Suggestion::IncreaseInvestments { additional, .. } => assert_eq!(*additional, d("800")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn suggestions_flag_low_savings_and_high_spending() {
    let mut user = seeded();
    user.set_monthly_savings(d("5000"));
    user.set_monthly_expenses(d("40000"));
    user.set_monthly_investments(d("10000"));
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    let s = ai_suggestions(&v);
    match &s[0] {
        Suggestion::IncreaseSavings { shortfall, .. } => assert_eq!(*shortfall, d("5400")),
        other => panic!("unexpected {other:?}"),
    }
    match &s[1] {
        Suggestion::ReviewSpending { excess, .. } => assert_eq!(*excess, d("8800")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(s[2], Suggestion::InvestmentsOnTarget { .. }));
}

#[test]
fn no_suggestions_without_salary() {
    let user = User::new("z@b.com", "Zed", "pw", FixedClock::on(2025, 1, 1).unwrap().now());
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    assert!(ai_suggestions(&v).is_empty());
}

#[test]
fn goals_per_mode() {
    let user = seeded();
    let annual = goals(&PlanningView::new(&user, PlanningMode::Annual, "2025"));
    assert_eq!(annual.len(), 3);
    assert_eq!(annual[0].name, "Emergency Fund (6 months expenses)");
    assert_eq!(annual[0].target, d("1860000"));
    assert_eq!(annual[1].target, d("930000"));
    assert_eq!(annual[2].target, d("1240000"));
    // Savings exactly on target: capped at 100.
    assert_eq!(annual[2].progress, Some(Decimal::ONE_HUNDRED));

    let monthly = goals(&PlanningView::new(&user, PlanningMode::Monthly, "2025"));
    assert_eq!(monthly[0].name, "Emergency Fund (3 months expenses)");
    assert_eq!(monthly[0].target, d("93000"));
    assert_eq!(monthly[1].target, d("7800"));
    assert_eq!(monthly[2].progress, Some(Decimal::ONE_HUNDRED));
}

#[test]
fn goal_progress_is_na_with_zero_target() {
    let user = User::new("z@b.com", "Zed", "pw", FixedClock::on(2025, 1, 1).unwrap().now());
    let g = goals(&PlanningView::new(&user, PlanningMode::Annual, "2025"));
    assert_eq!(g[1].progress, None);
    assert_eq!(g[2].progress, None);
}

#[test]
fn oversized_savings_share_is_na() {
    let mut user = User::new("z@b.com", "Zed", "pw", FixedClock::on(2025, 1, 1).unwrap().now());
    user.set_monthly_salary(Decimal::ONE);
    user.set_monthly_savings(d("10000000000000000000000000000"));
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    assert_eq!(v.share(v.savings), None);
    assert_eq!(v.share(v.expenses), Some(Decimal::ZERO));

    // Rates overflow too, so no suggestion can be computed.
    assert!(ai_suggestions(&v).is_empty());
    let g = goals(&v);
    assert_eq!(g[2].progress, None);
}

#[test]
fn oversized_monthly_expenses_saturate_emergency_target() {
    let mut user = User::new("z@b.com", "Zed", "pw", FixedClock::on(2025, 1, 1).unwrap().now());
    user.set_monthly_salary(Decimal::ONE);
    user.set_monthly_expenses(Decimal::MAX);
    let v = PlanningView::new(&user, PlanningMode::Monthly, "2025");
    assert_eq!(goals(&v)[0].target, Decimal::MAX);
    assert_eq!(v.shortfall(), Some(Decimal::MAX - Decimal::ONE));
}
