// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use finwise::cli::build_cli;
use finwise::clock::{Clock, FixedClock};
use finwise::config::AppConfig;

#[test]
fn flags_are_typed_by_clap() {
    let m = build_cli()
        .try_get_matches_from([
            "finwise",
            "--auth-delay-ms",
            "0",
            "--upcoming-days",
            "14",
            "--currency-symbol",
            "$",
            "--no-demo",
        ])
        .unwrap();
    let cfg = AppConfig::from_matches(&m).unwrap();
    assert_eq!(cfg.auth_delay, Duration::ZERO);
    assert_eq!(cfg.upcoming_days, 14);
    assert_eq!(cfg.currency_symbol, "$");
    assert!(!cfg.seed_demo);
}

#[test]
fn bad_delay_is_rejected_by_clap() {
    let err = build_cli()
        .try_get_matches_from(["finwise", "--auth-delay-ms", "soon"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

    assert!(build_cli()
        .try_get_matches_from(["finwise", "--auth-delay-ms", "-5"])
        .is_err());
}

#[test]
fn fixed_clock_rejects_impossible_dates() {
    assert!(FixedClock::on(2025, 2, 29).is_none());
    assert!(FixedClock::on(2025, 13, 1).is_none());
    let leap = FixedClock::on(2024, 2, 29).unwrap();
    assert_eq!(leap.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(leap.today().day(), 29);
}
