//! Account Domain
//!
//! Brokerage staff accounts: registration with a unique email, password
//! verification, and the `admin` / `user` role flag.
//!
//! Passwords are hashed with Argon2 and stored as PHC strings. Login returns
//! the account profile only; no token or session is issued.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_account::{AccountService, Registration};
//!
//! let service = AccountService::new(port);
//! service.register(Registration::new("wanjiku", "w@pacific.co.ke", "s3cret-pass")).await?;
//! let profile = service.authenticate("w@pacific.co.ke", "s3cret-pass").await?;
//! ```

pub mod account;
pub mod password;
pub mod ports;
pub mod service;
pub mod error;

pub use account::{Account, NewAccount, Registration, Role};
pub use password::PasswordHasher;
pub use ports::AccountPort;
pub use service::AccountService;
pub use error::AccountError;
