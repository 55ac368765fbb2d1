//! Account Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::account::{Account, NewAccount};

/// Storage operations for accounts
#[async_trait]
pub trait AccountPort: DomainPort {
    /// Finds an account by its (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, PortError>;

    /// Inserts a new account
    ///
    /// Returns `PortError::Conflict` when the email or username is taken.
    async fn insert_account(&self, account: NewAccount) -> Result<Account, PortError>;
}
