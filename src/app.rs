// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Top-level session loop: authentication menu, then the main menu until logout.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::auth::AuthService;
use crate::clock::Clock;
use crate::commands::{
    Ctx, about, accounts, bills, budgets, dashboard, expenses, investments, reports, settings,
    wallet,
};
use crate::config::AppConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::i18n::Translator;
use crate::utils::fmt_long_date;

pub struct App {
    config: AppConfig,
    clock: Arc<dyn Clock>,
    auth: AuthService,
    translator: Translator,
}

enum Flow {
    Continue,
    Exit,
}

impl App {
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let mut auth = AuthService::new(
            Arc::clone(&clock),
            config.user_defaults.clone(),
            config.auth_delay,
        );
        if config.seed_demo {
            auth.seed_demo();
            debug!("demo account seeded");
        }
        let mut translator = Translator::default();
        if !translator.set_language(&config.language) {
            warn!(language = %config.language, "no translations, falling back to English");
        }
        Self {
            config,
            clock,
            auth,
            translator,
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Runs until the user exits. Running out of input ends the session cleanly.
    pub fn run<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<()> {
        match self.session(io) {
            Err(e) if matches!(e.downcast_ref::<ConsoleError>(), Some(ConsoleError::InputClosed)) => {
                info!("input closed, exiting");
                writeln!(io.out())?;
                Ok(())
            }
            other => other,
        }
    }

    fn session<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<()> {
        self.banner(io)?;
        loop {
            let flow = if self.auth.is_authenticated() {
                self.main_menu(io)?
            } else {
                self.auth_menu(io)?
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn banner<R: BufRead, W: Write>(&self, io: &mut Console<R, W>) -> Result<()> {
        let t = &self.translator;
        writeln!(io.out(), "===============================================")?;
        writeln!(io.out(), "    {}", t.translate("app.title").to_uppercase())?;
        writeln!(io.out(), "    {}", t.translate("app.tagline"))?;
        writeln!(io.out(), "===============================================")?;
        Ok(())
    }

    fn auth_menu<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<Flow> {
        io.heading("AUTHENTICATION")?;
        writeln!(io.out(), "1. {}", self.translator.translate("auth.signin"))?;
        writeln!(io.out(), "2. {}", self.translator.translate("auth.signup"))?;
        writeln!(io.out(), "3. Forgot Password")?;
        writeln!(io.out(), "4. Change Language")?;
        writeln!(io.out(), "5. Exit")?;
        match io.choice()? {
            1 => self.sign_in(io)?,
            2 => self.sign_up(io)?,
            3 => self.forgot_password(io)?,
            4 => settings::choose_language(io, &mut self.translator)?,
            5 => {
                writeln!(io.out(), "\n{}", self.translator.translate("app.tagline"))?;
                writeln!(io.out(), "Thank you for using FinWise!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(io.out(), "Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn sign_in<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<()> {
        io.heading("SIGN IN")?;
        let t = &self.translator;
        let email = io.prompt_text(&format!("{}: ", t.translate("auth.email")))?;
        let password = io.prompt_text(&format!("{}: ", t.translate("auth.password")))?;
        writeln!(io.out(), "{}", t.translate("common.loading"))?;
        match self.auth.sign_in(email.trim(), &password) {
            Ok(user) => {
                writeln!(io.out(), "\n✓ Welcome back, {}!", user.full_name())?;
                writeln!(
                    io.out(),
                    "Member since: {}",
                    fmt_long_date(user.created_at().date_naive())
                )?;
            }
            Err(e) => writeln!(io.out(), "\n✗ {e}")?,
        }
        Ok(())
    }

    fn sign_up<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<()> {
        io.heading("SIGN UP")?;
        let t = &self.translator;
        let full_name = io.prompt_text(&format!("{}: ", t.translate("auth.fullName")))?;
        let email = io.prompt_text(&format!("{}: ", t.translate("auth.email")))?;
        let phone = io.prompt_text(&format!("{} (optional): ", t.translate("auth.phone")))?;
        let password = io.prompt_text(&format!("{}: ", t.translate("auth.password")))?;
        match self
            .auth
            .sign_up(email.trim(), full_name.trim(), &password, phone.trim())
        {
            Ok(user) => {
                writeln!(io.out(), "\n✓ Account created successfully!")?;
                writeln!(io.out(), "Welcome, {}!", user.full_name())?;
            }
            Err(e) => writeln!(io.out(), "\n✗ {e}")?,
        }
        Ok(())
    }

    fn forgot_password<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<()> {
        io.heading("RESET PASSWORD")?;
        let email = io.prompt_text(&format!("{}: ", self.translator.translate("auth.email")))?;
        match self.auth.forgot_password(email.trim()) {
            Ok(()) => writeln!(
                io.out(),
                "\n✓ Password reset instructions sent to {}",
                email.trim()
            )?,
            Err(e) => writeln!(io.out(), "\n✗ {e}")?,
        }
        Ok(())
    }

    fn main_menu<R: BufRead, W: Write>(&mut self, io: &mut Console<R, W>) -> Result<Flow> {
        let Self {
            config,
            clock,
            auth,
            translator,
        } = self;
        let ctx = Ctx {
            clock: &**clock,
            config,
        };
        let Some(user) = auth.current_user_mut() else {
            return Ok(Flow::Continue);
        };

        io.heading(&format!("{} {}", translator.translate("app.title"), translator.translate("common.menu")))?;
        writeln!(io.out(), "User: {}", user.full_name())?;
        writeln!(io.out(), "Wallet Balance: {}", ctx.money(user.wallet_balance()))?;
        writeln!(io.out(), "\n📊 {}", translator.translate("nav.ecoplanning").to_uppercase())?;
        writeln!(io.out(), "  1. Annual/Monthly Planning (Dashboard)")?;
        writeln!(io.out(), "  2. Expense Tracker")?;
        writeln!(io.out(), "  3. Budget Planner")?;
        writeln!(io.out(), "  4. Investment Overview")?;
        writeln!(io.out(), "  5. Bills & Reminders")?;
        writeln!(io.out(), "\n💰 FINANCIAL TOOLS")?;
        writeln!(io.out(), "  6. {} Management", translator.translate("nav.wallet"))?;
        writeln!(io.out(), "  7. SMS/Quick Transfer")?;
        writeln!(io.out(), "  8. Multi-Account Management")?;
        writeln!(io.out(), "\n📈 REPORTS & ANALYTICS")?;
        writeln!(io.out(), "  9. Financial Reports")?;
        writeln!(io.out(), " 10. Tax Documents")?;
        writeln!(io.out(), "\n⚙️  OTHER")?;
        writeln!(io.out(), " 11. {}", translator.translate("nav.settings"))?;
        writeln!(io.out(), " 12. About FinWise")?;
        writeln!(io.out(), " 13. Logout")?;

        match io.choice()? {
            1 => dashboard::handle(io, &ctx, user)?,
            2 => expenses::handle(io, &ctx, user)?,
            3 => budgets::handle(io, &ctx, user)?,
            4 => investments::handle(io, &ctx, user)?,
            5 => bills::handle(io, &ctx, user)?,
            6 => wallet::handle(io, &ctx, user)?,
            7 => wallet::quick_transfer(io, &ctx, user)?,
            8 => accounts::handle(io, &ctx, user)?,
            9 => reports::handle(io, &ctx, user)?,
            10 => reports::tax_documents(io, &ctx, user)?,
            11 => settings::handle(io, &ctx, user, translator)?,
            12 => about::show(io, translator)?,
            13 => {
                let answer = io.prompt_text("\nAre you sure you want to logout? (y/n): ")?;
                if answer.trim().eq_ignore_ascii_case("y") {
                    auth.sign_out();
                    writeln!(io.out(), "\n✓ Logged out successfully.")?;
                }
            }
            _ => writeln!(io.out(), "Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }
}
