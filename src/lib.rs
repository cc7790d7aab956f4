// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! FinWise: an in-memory personal finance tracker driven by numbered console menus.

pub mod app;
pub mod auth;
pub mod bills;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod i18n;
pub mod insights;
pub mod models;
pub mod planning;
pub mod user;
pub mod utils;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_TRACING: Once = Once::new();

/// Installs the stderr subscriber once. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    INIT_TRACING.call_once(|| {
        let default = if verbose { "finwise=debug" } else { "finwise=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        tracing::debug!("tracing initialized");
    });
}
