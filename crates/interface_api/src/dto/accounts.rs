//! Account DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_account::Account;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `admin` or `user`; defaults to `user`
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub msg: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Profile returned on login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: String,
    pub email: String,
}

impl From<Account> for LoginResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            role: account.role.as_str().to_string(),
            email: account.email,
        }
    }
}
