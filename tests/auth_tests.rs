// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;
use std::time::Duration;

use finwise::auth::AuthService;
use finwise::clock::FixedClock;
use finwise::config::{DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD, UserDefaults};
use finwise::error::AuthError;
use rust_decimal::Decimal;

fn service() -> AuthService {
    let mut auth = AuthService::new(
        Arc::new(FixedClock::on(2025, 6, 1).unwrap()),
        UserDefaults::default(),
        Duration::ZERO,
    );
    auth.seed_demo();
    auth
}

#[test]
fn demo_is_seeded_signed_out() {
    let auth = service();
    assert_eq!(auth.users().len(), 1);
    assert!(!auth.is_authenticated());
    assert!(auth.current_user().is_none());
}

#[test]
fn sign_in_with_demo_credentials() {
    let mut auth = service();
    let user = auth.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(user.full_name(), DEMO_NAME);
    assert_eq!(user.wallet_balance(), Decimal::from(205_430));
    assert!(auth.is_authenticated());
    assert_eq!(auth.current_user().unwrap().email(), DEMO_EMAIL);
}

#[test]
fn wrong_password_keeps_session_closed() {
    let mut auth = service();
    let err = auth.sign_in(DEMO_EMAIL, "nope").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(
        err.to_string(),
        "Invalid credentials. Please check your email and password."
    );
    assert!(!auth.is_authenticated());
}

#[test]
fn failed_sign_in_does_not_drop_existing_session() {
    let mut auth = service();
    auth.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert!(auth.sign_in("ghost@x.com", "pw").is_err());
    assert_eq!(auth.current_user().unwrap().email(), DEMO_EMAIL);
}

#[test]
fn sign_up_applies_defaults_and_signs_in() {
    let mut auth = service();
    let user = auth.sign_up("new@x.com", "New Person", "pw", "").unwrap();
    assert_eq!(user.phone(), None);
    assert_eq!(user.monthly().salary, Decimal::from(52_000));
    assert_eq!(auth.current_user().unwrap().email(), "new@x.com");
    assert_eq!(auth.users().len(), 2);
}

#[test]
fn duplicate_email_is_rejected() {
    let mut auth = service();
    let err = auth.sign_up(DEMO_EMAIL, "Dup", "pw", "").unwrap_err();
    assert_eq!(err, AuthError::EmailAlreadyRegistered);
    assert_eq!(auth.users().len(), 1);
    assert!(!auth.is_authenticated());
}

#[test]
fn sign_out_clears_session() {
    let mut auth = service();
    auth.sign_in(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    auth.sign_out();
    assert!(!auth.is_authenticated());
    assert!(auth.current_user_mut().is_none());
}

#[test]
fn forgot_password_checks_registration() {
    let auth = service();
    assert!(auth.forgot_password(DEMO_EMAIL).is_ok());
    assert_eq!(
        auth.forgot_password("ghost@x.com").unwrap_err(),
        AuthError::EmailNotFound
    );
}
