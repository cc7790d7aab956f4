// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented prompt protocol used by every menu screen.
//!
//! Each prompt writes its label, flushes, then reads exactly one line.
//! Numeric prompts keep asking until the line parses and, for amounts, stays
//! within [`MAX_AMOUNT`]. End of input surfaces
//! as [`ConsoleError::InputClosed`] so an unattended session cannot spin.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ConsoleError;

const INVALID_NUMBER: &str = "Invalid input. Please enter a number: ";

/// Largest magnitude accepted at an amount prompt (one quadrillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<T>() {
                Ok(v) if accept(&v) => return Ok(v),
                _ => {
                    write!(self.output, "{INVALID_NUMBER}")?;
                    self.output.flush()?;
                }
            }
        }
    }

    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        self.prompt_parsed(prompt, |_| true)
    }

    /// Amounts beyond [`MAX_AMOUNT`] either way are rejected like unparsable input.
    pub fn prompt_decimal(&mut self, prompt: &str) -> Result<Decimal, ConsoleError> {
        self.prompt_parsed(prompt, |v: &Decimal| v.abs() <= MAX_AMOUNT)
    }

    pub fn choice(&mut self) -> Result<i64, ConsoleError> {
        self.prompt_int("\nEnter your choice: ")
    }

    pub fn heading(&mut self, title: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n========== {title} ==========")?;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), ConsoleError> {
        self.prompt_text("\nPress Enter to continue...").map(|_| ())
    }
}
