// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Registered users and the active session.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::{self, UserDefaults};
use crate::error::AuthError;
use crate::user::User;

pub struct AuthService {
    users: Vec<User>,
    current: Option<usize>,
    clock: Arc<dyn Clock>,
    defaults: UserDefaults,
    delay: Duration,
}

impl AuthService {
    pub fn new(clock: Arc<dyn Clock>, defaults: UserDefaults, delay: Duration) -> Self {
        Self {
            users: Vec::new(),
            current: None,
            clock,
            defaults,
            delay,
        }
    }

    /// Registers the demo account without opening a session.
    pub fn seed_demo(&mut self) {
        let mut demo = User::new(
            config::DEMO_EMAIL,
            config::DEMO_NAME,
            config::DEMO_PASSWORD,
            self.clock.now(),
        )
        .with_defaults(&self.defaults);
        demo.set_phone(config::DEMO_PHONE);
        self.users.push(demo);
    }

    fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&mut User, AuthError> {
        self.simulate_latency();
        let idx = self
            .users
            .iter()
            .position(|u| u.email() == email && u.authenticate(password))
            .ok_or_else(|| {
                warn!(%email, "sign-in rejected");
                AuthError::InvalidCredentials
            })?;
        info!(%email, "signed in");
        self.current = Some(idx);
        Ok(&mut self.users[idx])
    }

    /// Creates the account and signs it in. An empty `phone` is stored as absent.
    pub fn sign_up(
        &mut self,
        email: &str,
        full_name: &str,
        password: &str,
        phone: &str,
    ) -> Result<&mut User, AuthError> {
        self.simulate_latency();
        if self.users.iter().any(|u| u.email() == email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }
        let mut user =
            User::new(email, full_name, password, self.clock.now()).with_defaults(&self.defaults);
        user.set_phone(phone);
        self.users.push(user);
        let idx = self.users.len() - 1;
        self.current = Some(idx);
        info!(%email, "account created");
        Ok(&mut self.users[idx])
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.current_user() {
            info!(email = %user.email(), "signed out");
        }
        self.current = None;
    }

    /// Mock reset: only confirms the address is registered.
    pub fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.simulate_latency();
        if self.users.iter().any(|u| u.email() == email) {
            info!(%email, "password reset requested");
            Ok(())
        } else {
            Err(AuthError::EmailNotFound)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.map(|i| &self.users[i])
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        self.current.map(|i| &mut self.users[i])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}
