//! Account model
//!
//! `Registration` is what a caller submits; `NewAccount` is what gets
//! stored once the password has been hashed; `Account` is a stored row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use core_kernel::AccountId;

use crate::error::AccountError;

/// Privilege level of an account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Maintains rate cards
    Admin,
    /// Generates quotations
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(AccountError::UnknownRole(other.to_string())),
        }
    }
}

/// A stored account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Account ready to be inserted; the password is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
    #[validate(email(message = "email address is not valid"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
    pub role: Role,
}

impl Registration {
    /// Creates a registration for a non-privileged user
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: Role::User,
        }
    }

    /// Sets the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Normalizes the identity fields and validates the request
    ///
    /// Emails are compared case-insensitively, so they are stored lowercased.
    pub fn normalized(mut self) -> Result<Self, AccountError> {
        self.username = self.username.trim().to_string();
        self.email = normalize_email(&self.email);
        self.validate()
            .map_err(|errors| AccountError::validation(errors.to_string()))?;
        Ok(self)
    }
}

/// Lowercases and trims an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" User ".parse::<Role>().unwrap(), Role::User);
        assert!(matches!("root".parse::<Role>(), Err(AccountError::UnknownRole(_))));
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Registration::new("a", "a@b.co", "password1").role, Role::User);
    }

    #[test]
    fn test_normalized_lowercases_email() {
        let registration = Registration::new(" kamau ", " Kamau@Pacific.CO.KE ", "password1")
            .normalized()
            .unwrap();
        assert_eq!(registration.username, "kamau");
        assert_eq!(registration.email, "kamau@pacific.co.ke");
    }

    #[test]
    fn test_normalized_rejects_bad_email_and_short_password() {
        assert!(Registration::new("a", "not-an-email", "password1").normalized().is_err());
        assert!(Registration::new("a", "a@b.co", "short").normalized().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let account = Account {
            id: AccountId::new(),
            username: "kamau".to_string(),
            email: "kamau@pacific.co.ke".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"role\":\"admin\""));
    }
}
