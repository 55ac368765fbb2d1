//! Database Test Utilities
//!
//! Every [`TestDatabase`] is a private in-memory SQLite database with the
//! migrations applied, so tests never share state.

use std::sync::Arc;

use domain_account::{AccountService, Registration, Role};
use domain_rating::{RateCard, RateCardPort, RateCardUpsert};
use infra_db::{Database, DatabaseConfig, DatabaseError, SqliteAccountAdapter, SqliteRateCardAdapter};

/// A migrated in-memory database
pub struct TestDatabase {
    database: Database,
}

impl TestDatabase {
    /// Opens a fresh database
    pub async fn new() -> Result<Self, DatabaseError> {
        let database = Database::open(DatabaseConfig::in_memory()).await?;
        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn rate_cards(&self) -> SqliteRateCardAdapter {
        SqliteRateCardAdapter::new(&self.database)
    }

    pub fn accounts(&self) -> AccountService {
        AccountService::new(Arc::new(SqliteAccountAdapter::new(&self.database)))
    }

    /// Upserts `cards` in order and returns the stored versions
    pub async fn seed_rate_cards(&self, cards: Vec<RateCardUpsert>) -> Vec<RateCard> {
        let adapter = self.rate_cards();
        let mut stored = Vec::with_capacity(cards.len());
        for card in cards {
            stored.push(
                adapter
                    .upsert_rate_card(card)
                    .await
                    .expect("Failed to seed rate card"),
            );
        }
        stored
    }

    /// Registers an account and returns its email
    pub async fn seed_account(&self, username: &str, password: &str, role: Role) -> String {
        let email = format!("{}@pacific-group.co.ke", username.to_lowercase());
        self.accounts()
            .register(Registration::new(username, email.as_str(), password).with_role(role))
            .await
            .expect("Failed to seed account");
        email
    }

    /// Closes the pool
    pub async fn cleanup(self) {
        self.database.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::RateCardFixtures;

    #[tokio::test]
    async fn test_seeded_cards_are_listed_in_order() {
        let db = TestDatabase::new().await.unwrap();
        db.seed_rate_cards(RateCardFixtures::market()).await;

        let names: Vec<String> = db
            .rate_cards()
            .list_rate_cards()
            .await
            .unwrap()
            .into_iter()
            .map(|card| card.company_name)
            .collect();
        assert_eq!(names, vec!["Jubilee", "APA", "Britam"]);
        db.cleanup().await;
    }

    #[tokio::test]
    async fn test_seeded_account_can_log_in() {
        let db = TestDatabase::new().await.unwrap();
        let email = db.seed_account("Amina", "correct-horse", Role::Admin).await;

        let account = db.accounts().authenticate(&email, "correct-horse").await.unwrap();
        assert_eq!(account.role, Role::Admin);
    }
}
