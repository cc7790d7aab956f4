// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::console::Console;
use crate::i18n::Translator;

pub fn show<R: BufRead, W: Write>(io: &mut Console<R, W>, translator: &Translator) -> Result<()> {
    io.heading(&format!("ABOUT {}", translator.translate("app.title")))?;
    writeln!(io.out(), "{}", translator.translate("app.tagline"))?;
    writeln!(io.out(), "Version {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(io.out(), "\nFeatures:")?;
    for feature in [
        "Annual and monthly planning dashboard",
        "Expense tracking with category budgets",
        "Investment portfolio overview",
        "Bill reminders",
        "Wallet and quick transfers",
        "Multi-account overview",
        "Financial reports",
    ] {
        writeln!(io.out(), "  • {feature}")?;
    }
    writeln!(io.out(), "\nAll data lives in memory for this session only.")?;
    io.pause()?;
    Ok(())
}
