// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::utils::fmt_money;

pub mod about;
pub mod accounts;
pub mod bills;
pub mod budgets;
pub mod dashboard;
pub mod expenses;
pub mod investments;
pub mod reports;
pub mod settings;
pub mod wallet;

/// What every screen needs besides the console and the signed-in user.
pub struct Ctx<'a> {
    pub clock: &'a dyn Clock,
    pub config: &'a AppConfig,
}

impl Ctx<'_> {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn money(&self, d: Decimal) -> String {
        fmt_money(d, &self.config.currency_symbol)
    }
}
