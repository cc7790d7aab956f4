// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("finwise")
        .version(clap::crate_version!())
        .about("FinWise: invest and finance wisely")
        .arg(
            Arg::new("lang")
                .long("lang")
                .env("FINWISE_LANG")
                .value_name("CODE")
                .help("Interface language (en, hi, gu)"),
        )
        .arg(
            Arg::new("currency_symbol")
                .long("currency-symbol")
                .env("FINWISE_CURRENCY")
                .value_name("SYMBOL")
                .help("Symbol printed in front of amounts"),
        )
        .arg(
            Arg::new("auth_delay_ms")
                .long("auth-delay-ms")
                .env("FINWISE_AUTH_DELAY_MS")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .help("Pause before sign-in/sign-up completes; 0 disables"),
        )
        .arg(
            Arg::new("upcoming_days")
                .long("upcoming-days")
                .value_name("DAYS")
                .value_parser(value_parser!(i64))
                .help("Window used for upcoming bill reminders"),
        )
        .arg(
            Arg::new("no_demo")
                .long("no-demo")
                .action(ArgAction::SetTrue)
                .help("Do not create the demo account"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
}
