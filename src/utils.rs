// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

/// `part` as a percentage of `whole`; `None` when `whole` is zero or the
/// ratio is out of range.
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Sum that pins to `Decimal::MAX`/`MIN` instead of overflowing.
pub fn total<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Two decimals with comma thousands separators, e.g. `-1,234,567.50`.
pub fn fmt_amount(d: Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((&text, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

pub fn fmt_money(d: Decimal, symbol: &str) -> String {
    let body = fmt_amount(d);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{symbol}{abs}"),
        None => format!("{symbol}{body}"),
    }
}

/// One decimal and a percent sign, or `N/A` for an undefined ratio.
pub fn fmt_percent(p: Option<Decimal>) -> String {
    match p {
        Some(v) => format!(
            "{:.1}%",
            v.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => "N/A".to_string(),
    }
}

pub fn fmt_short_date(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}

pub fn fmt_long_date(d: NaiveDate) -> String {
    d.format("%b %d, %Y").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn print_json<T: serde::Serialize, W: Write>(out: &mut W, v: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn amounts_are_grouped_and_rounded() {
        assert_eq!(fmt_amount(d("0")), "0.00");
        assert_eq!(fmt_amount(d("999.995")), "1,000.00");
        assert_eq!(fmt_amount(d("1234567.5")), "1,234,567.50");
        assert_eq!(fmt_amount(d("-1234.5")), "-1,234.50");
        assert_eq!(fmt_amount(d("-0.001")), "0.00");
    }

    #[test]
    fn money_puts_sign_before_symbol() {
        assert_eq!(fmt_money(d("205430"), "₹"), "₹205,430.00");
        assert_eq!(fmt_money(d("-5"), "$"), "-$5.00");
    }

    #[test]
    fn percent_na_for_zero_whole() {
        assert_eq!(percent_of(d("1"), Decimal::ZERO), None);
        assert_eq!(fmt_percent(percent_of(d("1"), d("3"))), "33.3%");
        assert_eq!(fmt_percent(None), "N/A");
    }

    #[test]
    fn huge_values_do_not_overflow() {
        assert_eq!(percent_of(Decimal::MAX, d("0.5")), None);
        assert_eq!(percent_of(d("1e28"), Decimal::ONE), None);
        assert_eq!(total([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
        assert_eq!(total([Decimal::MIN, d("-1")]), Decimal::MIN);
        assert_eq!(total([d("1.5"), d("2")]), d("3.5"));
    }

    #[test]
    fn dates() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(fmt_short_date(day), "Mar 07");
        assert_eq!(fmt_long_date(day), "Mar 07, 2025");
    }
}
