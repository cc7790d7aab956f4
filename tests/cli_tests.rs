// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use predicates::prelude::*;

fn finwise() -> Command {
    let mut cmd = Command::cargo_bin("finwise").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FINWISE_LANG")
        .env_remove("FINWISE_CURRENCY")
        .args(["--auth-delay-ms", "0"]);
    cmd
}

#[test]
fn demo_sign_in_then_exit() {
    finwise()
        .write_stdin("1\ndemo@finwise.com\npassword123\n13\ny\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Rahul Sharma!"))
        .stdout(predicate::str::contains("Wallet Balance: ₹205,430.00"))
        .stdout(predicate::str::contains("Logged out successfully."))
        .stdout(predicate::str::contains("Thank you for using FinWise!"));
}

#[test]
fn bad_credentials_are_reported() {
    finwise()
        .write_stdin("1\ndemo@finwise.com\nwrong\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid credentials."));
}

#[test]
fn closed_input_exits_cleanly() {
    finwise().write_stdin("").assert().success();
}

#[test]
fn expense_shows_up_in_report() {
    // Sign in, add a Food expense, open reports summary, log out, exit.
    let script = "1\ndemo@finwise.com\npassword123\n\
                  2\n1\nGroceries\n1200\n1\n\n\
                  9\n1\n\n\
                  13\ny\n5\n";
    finwise()
        .args(["--currency-symbol", "$"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully"))
        .stdout(predicate::str::contains("Total Expenses: $1,200.00"));
}

#[test]
fn no_demo_flag_leaves_no_accounts() {
    finwise()
        .arg("--no-demo")
        .write_stdin("1\ndemo@finwise.com\npassword123\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid credentials."));
}

#[test]
fn rejects_bad_delay() {
    Command::cargo_bin("finwise")
        .unwrap()
        .args(["--auth-delay-ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'soon'"));
}
