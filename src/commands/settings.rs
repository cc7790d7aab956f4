// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use super::Ctx;
use crate::console::Console;
use crate::i18n::Translator;
use crate::user::User;
use crate::utils::fmt_long_date;

/// Languages offered in the picker; the full list is longer.
const LANGUAGE_MENU_LEN: usize = 10;

pub fn handle<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    ctx: &Ctx,
    user: &mut User,
    translator: &mut Translator,
) -> Result<()> {
    io.heading(translator.translate("nav.settings"))?;
    writeln!(io.out(), "1. View Profile")?;
    writeln!(io.out(), "2. Edit Profile")?;
    writeln!(io.out(), "3. Change Password")?;
    writeln!(io.out(), "4. Change Language")?;
    writeln!(io.out(), "5. Notification Preferences")?;
    writeln!(io.out(), "6. Back")?;
    match io.choice()? {
        1 => profile(io, ctx, user)?,
        2 => edit_profile(io, user)?,
        3 => change_password(io, user)?,
        4 => choose_language(io, translator)?,
        5 => notifications(io)?,
        _ => return Ok(()),
    }
    io.pause()?;
    Ok(())
}

fn profile<R: BufRead, W: Write>(io: &mut Console<R, W>, ctx: &Ctx, user: &User) -> Result<()> {
    io.heading("PROFILE")?;
    writeln!(io.out(), "Name:   {}", user.full_name())?;
    writeln!(io.out(), "Email:  {}", user.email())?;
    writeln!(io.out(), "Phone:  {}", user.phone().unwrap_or("-"))?;
    writeln!(
        io.out(),
        "Member since: {}",
        fmt_long_date(user.created_at().date_naive())
    )?;
    writeln!(io.out(), "\nWallet Balance: {}", ctx.money(user.wallet_balance()))?;
    writeln!(io.out(), "Expenses: {}", user.expenses().len())?;
    writeln!(io.out(), "Transactions: {}", user.transactions().len())?;
    writeln!(io.out(), "Investments: {}", user.investments().len())?;
    writeln!(io.out(), "Bills: {}", user.bills().len())?;
    writeln!(io.out(), "Accounts: {}", user.accounts().len())?;
    Ok(())
}

/// Blank name keeps the current one; blank phone clears it.
fn edit_profile<R: BufRead, W: Write>(io: &mut Console<R, W>, user: &mut User) -> Result<()> {
    let name = io.prompt_text(&format!("\nFull Name [{}]: ", user.full_name()))?;
    if !name.trim().is_empty() {
        user.set_full_name(name.trim());
    }
    let phone = io.prompt_text("Phone Number: ")?;
    user.set_phone(phone.trim());
    writeln!(io.out(), "\n✓ Profile updated!")?;
    Ok(())
}

fn change_password<R: BufRead, W: Write>(io: &mut Console<R, W>, user: &mut User) -> Result<()> {
    let current = io.prompt_text("\nCurrent Password: ")?;
    if !user.authenticate(&current) {
        writeln!(io.out(), "\n✗ Incorrect password.")?;
        return Ok(());
    }
    let new = io.prompt_text("New Password: ")?;
    let confirm = io.prompt_text("Confirm New Password: ")?;
    if new.is_empty() || new != confirm {
        writeln!(io.out(), "\n✗ Passwords do not match.")?;
        return Ok(());
    }
    user.set_password(new);
    info!(email = %user.email(), "password changed");
    writeln!(io.out(), "\n✓ Password changed successfully!")?;
    Ok(())
}

/// Language picker shared by the sign-in screen and settings.
pub fn choose_language<R: BufRead, W: Write>(
    io: &mut Console<R, W>,
    translator: &mut Translator,
) -> Result<()> {
    let languages = translator.supported_languages();
    writeln!(io.out(), "\nSelect Language:")?;
    for (i, lang) in languages.iter().take(LANGUAGE_MENU_LEN).enumerate() {
        writeln!(io.out(), "{}. {}", i + 1, lang)?;
    }
    let choice = io.prompt_int("\nEnter your choice: ")?;
    let picked = usize::try_from(choice)
        .ok()
        .filter(|c| (1..=LANGUAGE_MENU_LEN).contains(c))
        .and_then(|c| languages.get(c - 1));
    match picked {
        Some(lang) if translator.set_language(lang.code) => {
            writeln!(io.out(), "\n✓ Language changed to {}", lang.native_name)?;
        }
        Some(lang) => {
            writeln!(
                io.out(),
                "\n{} is not translated yet. Keeping {}.",
                lang.name,
                translator.current_language()
            )?;
        }
        None => writeln!(io.out(), "Invalid choice.")?,
    }
    Ok(())
}

fn notifications<R: BufRead, W: Write>(io: &mut Console<R, W>) -> Result<()> {
    io.heading("NOTIFICATION PREFERENCES")?;
    writeln!(io.out(), "✓ Bill reminders")?;
    writeln!(io.out(), "✓ Budget alerts")?;
    writeln!(io.out(), "✓ Transaction alerts")?;
    writeln!(io.out(), "✗ Marketing emails")?;
    Ok(())
}
