// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::user::Allocation;

pub const DEMO_EMAIL: &str = "demo@finwise.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Rahul Sharma";
pub const DEMO_PHONE: &str = "+91 98765 43210";

/// Starting figures for newly created users.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDefaults {
    pub wallet_balance: Decimal,
    pub annual: Allocation,
    pub monthly: Allocation,
}

impl Default for UserDefaults {
    fn default() -> Self {
        Self {
            wallet_balance: Decimal::from(205_430),
            annual: Allocation {
                salary: Decimal::from(6_200_000),
                expenses: Decimal::from(3_720_000),
                savings: Decimal::from(1_240_000),
                investments: Decimal::from(830_000),
            },
            monthly: Allocation {
                salary: Decimal::from(52_000),
                expenses: Decimal::from(31_000),
                savings: Decimal::from(10_500),
                investments: Decimal::from(7_000),
            },
        }
    }
}

impl UserDefaults {
    /// Everything at zero.
    pub fn empty() -> Self {
        Self {
            wallet_balance: Decimal::ZERO,
            annual: Allocation::default(),
            monthly: Allocation::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub language: String,
    pub currency_symbol: String,
    /// Cosmetic pause before sign-in, sign-up and password reset complete.
    pub auth_delay: Duration,
    pub seed_demo: bool,
    pub upcoming_days: i64,
    pub verbose: bool,
    pub user_defaults: UserDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            currency_symbol: "₹".to_string(),
            auth_delay: Duration::from_millis(500),
            seed_demo: true,
            upcoming_days: 7,
            verbose: false,
            user_defaults: UserDefaults::default(),
        }
    }
}

impl AppConfig {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(lang) = m.get_one::<String>("lang") {
            cfg.language = lang.trim().to_lowercase();
        }
        if let Some(sym) = m.get_one::<String>("currency_symbol") {
            cfg.currency_symbol = sym.clone();
        }
        if let Some(ms) = m.get_one::<u64>("auth_delay_ms") {
            cfg.auth_delay = Duration::from_millis(*ms);
        }
        if let Some(days) = m.get_one::<i64>("upcoming_days") {
            cfg.upcoming_days = *days;
        }
        cfg.seed_demo = !m.get_flag("no_demo");
        cfg.verbose = m.get_flag("verbose");
        Ok(cfg)
    }
}
