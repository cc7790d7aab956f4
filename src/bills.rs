// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Day-of-month bill scheduling.
//!
//! A bill carries only a due *day*; the next occurrence is resolved against
//! a caller-supplied `today`, rolling into the following month when the day
//! has already passed.

use chrono::{Datelike, Months, NaiveDate};

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Whole days from `today` until the next occurrence of `due_day`.
///
/// When `due_day` is still ahead in the current month the plain difference is
/// returned, without checking that the current month actually has that day
/// (due day 31 on 5 February yields 26). Once the day has passed, the due date
/// moves to next month and is clamped to that month's length.
pub fn days_until_due(due_day: u32, today: NaiveDate) -> i64 {
    let current_day = today.day();
    if due_day >= current_day {
        return i64::from(due_day - current_day);
    }

    // chrono clamps e.g. Jan 31 + 1 month to the end of February.
    let next_month = today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    let last_day = days_in_month(next_month.year(), next_month.month());
    let day = due_day.clamp(1, last_day);
    match NaiveDate::from_ymd_opt(next_month.year(), next_month.month(), day) {
        Some(due_date) => (due_date - today).num_days(),
        None => 0,
    }
}

/// True when the next occurrence of `due_day` falls within `window` days.
pub fn is_upcoming(due_day: u32, today: NaiveDate, window: i64) -> bool {
    let days = days_until_due(due_day, today);
    (0..=window).contains(&days)
}
