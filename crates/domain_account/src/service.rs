//! Registration and login

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use core_kernel::{AccountId, PortError};

use crate::account::{normalize_email, Account, NewAccount, Registration};
use crate::error::AccountError;
use crate::password::PasswordHasher;
use crate::ports::AccountPort;

/// Application service for account registration and authentication
#[derive(Clone)]
pub struct AccountService {
    port: Arc<dyn AccountPort>,
    hasher: PasswordHasher,
}

impl AccountService {
    /// Creates a service over the given account store
    pub fn new(port: Arc<dyn AccountPort>) -> Self {
        Self {
            port,
            hasher: PasswordHasher::new(),
        }
    }

    /// Registers a new account
    ///
    /// # Errors
    ///
    /// * `AccountError::Validation` - malformed username, email or password
    /// * `AccountError::AlreadyRegistered` - the email or username is taken;
    ///   the existing account is left untouched
    pub async fn register(&self, registration: Registration) -> Result<Account, AccountError> {
        let registration = registration.normalized()?;

        if self.port.find_by_email(&registration.email).await?.is_some() {
            warn!(email = %registration.email, "Registration rejected: email already registered");
            return Err(AccountError::AlreadyRegistered);
        }

        let new_account = NewAccount {
            id: AccountId::new_v7(),
            username: registration.username,
            email: registration.email,
            password_hash: self.hasher.hash(&registration.password)?,
            role: registration.role,
            created_at: Utc::now(),
        };

        let account = self
            .port
            .insert_account(new_account)
            .await
            .map_err(|e| match e {
                PortError::Conflict { .. } => AccountError::AlreadyRegistered,
                other => AccountError::Storage(other),
            })?;

        info!(account_id = %account.id, role = %account.role, "Account registered");
        Ok(account)
    }

    /// Verifies an email/password pair and returns the account
    ///
    /// # Errors
    ///
    /// `AccountError::InvalidCredentials` for both an unknown email and a
    /// wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let email = normalize_email(email);

        let Some(account) = self.port.find_by_email(&email).await? else {
            warn!("Login rejected: unknown account");
            return Err(AccountError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &account.password_hash) {
            warn!(account_id = %account.id, "Login rejected: password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        info!(account_id = %account.id, "Login succeeded");
        Ok(account)
    }
}
