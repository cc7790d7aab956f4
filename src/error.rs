// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please check your email and password.")]
    InvalidCredentials,
    #[error("Email already registered. Please use a different email.")]
    EmailAlreadyRegistered,
    #[error("Email not found in our records.")]
    EmailNotFound,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
