//! Rate card repository implementation
//!
//! Cards are keyed by `company_name`. The insertion sequence column keeps
//! listing order stable across overwrites.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::DatabaseError;

const COLUMNS: &str = r#"
    id, company_name, rate_percent, min_premium, levies, company_color,
    limit_windscreen, limit_entertainment, limit_towing, limit_repair,
    limit_medical, limit_tppd,
    excess_own_damage, excess_theft_tracker, excess_theft_no_tracker,
    excess_young_driver, pvt_status, created_at, updated_at
"#;

/// Repository for the `rate_cards` table
#[derive(Debug, Clone)]
pub struct RateCardRepository {
    pool: SqlitePool,
}

impl RateCardRepository {
    /// Creates a new RateCardRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every card in insertion order
    pub async fn list_all(&self) -> Result<Vec<RateCardRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, RateCardRow>(&format!(
            "SELECT {} FROM rate_cards ORDER BY seq",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts the card, or overwrites every mutable column of the card
    /// with the same company name
    ///
    /// `id` and `created_at` of an existing card are kept. Returns the
    /// stored row.
    pub async fn upsert(&self, row: &RateCardRow) -> Result<RateCardRow, DatabaseError> {
        let stored = sqlx::query_as::<_, RateCardRow>(&format!(
            r#"
            INSERT INTO rate_cards ({columns})
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                    ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)
            ON CONFLICT (company_name) DO UPDATE SET
                rate_percent = excluded.rate_percent,
                min_premium = excluded.min_premium,
                levies = excluded.levies,
                company_color = excluded.company_color,
                limit_windscreen = excluded.limit_windscreen,
                limit_entertainment = excluded.limit_entertainment,
                limit_towing = excluded.limit_towing,
                limit_repair = excluded.limit_repair,
                limit_medical = excluded.limit_medical,
                limit_tppd = excluded.limit_tppd,
                excess_own_damage = excluded.excess_own_damage,
                excess_theft_tracker = excluded.excess_theft_tracker,
                excess_theft_no_tracker = excluded.excess_theft_no_tracker,
                excess_young_driver = excluded.excess_young_driver,
                pvt_status = excluded.pvt_status,
                updated_at = excluded.updated_at
            RETURNING {columns}
            "#,
            columns = COLUMNS
        ))
        .bind(row.id)
        .bind(&row.company_name)
        .bind(&row.rate_percent)
        .bind(row.min_premium)
        .bind(&row.levies)
        .bind(&row.company_color)
        .bind(&row.limit_windscreen)
        .bind(&row.limit_entertainment)
        .bind(&row.limit_towing)
        .bind(&row.limit_repair)
        .bind(&row.limit_medical)
        .bind(&row.limit_tppd)
        .bind(&row.excess_own_damage)
        .bind(&row.excess_theft_tracker)
        .bind(&row.excess_theft_no_tracker)
        .bind(&row.excess_young_driver)
        .bind(&row.pvt_status)
        .bind(row.created_at)
        .bind(row.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rate_cards")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Database row for a rate card
///
/// `rate_percent` is stored as decimal text so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RateCardRow {
    pub id: Uuid,
    pub company_name: String,
    pub rate_percent: String,
    pub min_premium: i64,
    pub levies: Option<String>,
    pub company_color: Option<String>,
    pub limit_windscreen: String,
    pub limit_entertainment: String,
    pub limit_towing: String,
    pub limit_repair: String,
    pub limit_medical: String,
    pub limit_tppd: String,
    pub excess_own_damage: String,
    pub excess_theft_tracker: String,
    pub excess_theft_no_tracker: String,
    pub excess_young_driver: String,
    pub pvt_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
