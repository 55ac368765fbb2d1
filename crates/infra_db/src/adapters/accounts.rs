//! SQLite Account Adapter

use std::str::FromStr;

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{AccountId, DomainPort, PortError};
use domain_account::{Account, AccountPort, NewAccount, Role};

use crate::error::{db_to_port_error, DatabaseError};
use crate::pool::Database;
use crate::repositories::accounts::{AccountRepository, AccountRow};

/// SQLite-backed implementation of the AccountPort trait
///
/// Unique violations on `email` or `username` surface as
/// `PortError::Conflict`.
#[derive(Debug, Clone)]
pub struct SqliteAccountAdapter {
    repository: AccountRepository,
}

impl SqliteAccountAdapter {
    pub fn new(database: &Database) -> Self {
        Self {
            repository: AccountRepository::new(database.pool().clone()),
        }
    }

    pub fn repository(&self) -> &AccountRepository {
        &self.repository
    }
}

impl DomainPort for SqliteAccountAdapter {}

#[async_trait]
impl AccountPort for SqliteAccountAdapter {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, PortError> {
        self.repository
            .find_by_email(email)
            .await
            .map_err(db_to_port_error)?
            .map(row_to_account)
            .transpose()
    }

    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn insert_account(&self, account: NewAccount) -> Result<Account, PortError> {
        let row = AccountRow {
            id: *account.id.as_uuid(),
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
            role: account.role.as_str().to_string(),
            created_at: account.created_at,
        };

        self.repository.insert(&row).await.map_err(|e| match e {
            DatabaseError::DuplicateEntry(message) => {
                debug!(%message, "Account already exists");
                PortError::conflict(message)
            }
            other => db_to_port_error(other),
        })?;

        row_to_account(row)
    }
}

fn row_to_account(row: AccountRow) -> Result<Account, PortError> {
    let role = Role::from_str(&row.role)
        .map_err(|e| PortError::transformation(format!("account {}: {}", row.email, e)))?;

    Ok(Account {
        id: AccountId::from(row.id),
        username: row.username,
        email: row.email,
        password_hash: row.password_hash,
        role,
        created_at: row.created_at,
    })
}
