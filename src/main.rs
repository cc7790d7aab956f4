// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;
use std::sync::Arc;

use anyhow::Result;

use finwise::app::App;
use finwise::clock::SystemClock;
use finwise::config::AppConfig;
use finwise::console::Console;
use finwise::{cli, init_tracing};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;
    init_tracing(config.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut app = App::new(config, Arc::new(SystemClock));
    app.run(&mut console)
}
