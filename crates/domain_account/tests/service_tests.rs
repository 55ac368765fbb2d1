//! Account service tests against an in-memory store

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use domain_account::{Account, AccountError, AccountPort, AccountService, NewAccount, Registration, Role};

#[derive(Default)]
struct InMemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

impl DomainPort for InMemoryAccounts {}

#[async_trait]
impl AccountPort for InMemoryAccounts {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, PortError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.email == email).cloned())
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, PortError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.username == account.username || a.email == account.email) {
            return Err(PortError::conflict("account already exists"));
        }
        let stored = Account {
            id: account.id,
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
            role: account.role,
            created_at: account.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }
}

fn service() -> (AccountService, Arc<InMemoryAccounts>) {
    let store = Arc::new(InMemoryAccounts::default());
    (AccountService::new(store.clone()), store)
}

#[tokio::test]
async fn test_register_then_login() {
    let (service, _) = service();
    service
        .register(Registration::new("achieng", "achieng@pacific.co.ke", "motor-quotes"))
        .await
        .unwrap();

    let account = service
        .authenticate("Achieng@Pacific.co.ke", "motor-quotes")
        .await
        .unwrap();
    assert_eq!(account.username, "achieng");
    assert_eq!(account.role, Role::User);
}

#[tokio::test]
async fn test_password_is_hashed() {
    let (service, store) = service();
    service
        .register(Registration::new("otieno", "otieno@pacific.co.ke", "motor-quotes"))
        .await
        .unwrap();

    let rows = store.rows.lock().unwrap();
    assert_ne!(rows[0].password_hash, "motor-quotes");
    assert!(rows[0].password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_duplicate_email_conflicts_and_keeps_first_account() {
    let (service, store) = service();
    service
        .register(Registration::new("first", "dup@pacific.co.ke", "first-password").with_role(Role::Admin))
        .await
        .unwrap();

    let second = service
        .register(Registration::new("second", "DUP@pacific.co.ke", "second-password"))
        .await;
    assert!(matches!(second, Err(AccountError::AlreadyRegistered)));

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "first");
    assert_eq!(rows[0].role, Role::Admin);
    drop(rows);

    assert!(service.authenticate("dup@pacific.co.ke", "first-password").await.is_ok());
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let (service, _) = service();
    service
        .register(Registration::new("mwangi", "one@pacific.co.ke", "password-one"))
        .await
        .unwrap();
    let result = service
        .register(Registration::new("mwangi", "two@pacific.co.ke", "password-two"))
        .await;
    assert!(matches!(result, Err(AccountError::AlreadyRegistered)));
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_look_the_same() {
    let (service, _) = service();
    service
        .register(Registration::new("njeri", "njeri@pacific.co.ke", "right-password"))
        .await
        .unwrap();

    let unknown = service.authenticate("ghost@pacific.co.ke", "right-password").await;
    let wrong = service.authenticate("njeri@pacific.co.ke", "wrong-password").await;

    let unknown = unknown.unwrap_err();
    let wrong = wrong.unwrap_err();
    assert!(matches!(unknown, AccountError::InvalidCredentials));
    assert!(matches!(wrong, AccountError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}
