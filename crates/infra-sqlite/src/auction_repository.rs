// SQLite AuctionRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use auction_closer_core::domain::Auction;
use auction_closer_core::port::{AuctionRepository, RepositoryError};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

pub struct SqliteAuctionRepository {
    pool: SqlitePool,
}

impl SqliteAuctionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new auction (seeding, imports)
    pub async fn insert(&self, auction: &Auction) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO auctions (id, description, started_at, closed)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&auction.id)
        .bind(&auction.description)
        .bind(auction.started_at.timestamp_millis())
        .bind(if auction.closed { 1 } else { 0 })
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Find auction by ID, open or closed
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Auction>, RepositoryError> {
        let row = sqlx::query_as::<_, AuctionRow>("SELECT * FROM auctions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(AuctionRow::into_auction).transpose()
    }
}

#[async_trait]
impl AuctionRepository for SqliteAuctionRepository {
    async fn list_current(&self) -> Result<Vec<Auction>, RepositoryError> {
        let rows = sqlx::query_as::<_, AuctionRow>(
            r#"
            SELECT * FROM auctions
            WHERE closed = 0
            ORDER BY started_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Loaded current auctions");

        rows.into_iter().map(AuctionRow::into_auction).collect()
    }

    async fn persist_update(&self, auction: &Auction) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE auctions
            SET description = ?, closed = ?
            WHERE id = ?
            "#,
        )
        .bind(&auction.description)
        .bind(if auction.closed { 1 } else { 0 })
        .bind(&auction.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(auction.id.clone()));
        }

        Ok(())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct AuctionRow {
    id: String,
    description: String,
    started_at: i64,
    closed: i64,
}

impl AuctionRow {
    fn into_auction(self) -> Result<Auction, RepositoryError> {
        let started_at = DateTime::<Utc>::from_timestamp_millis(self.started_at).ok_or_else(|| {
            RepositoryError::Corrupt(format!(
                "Auction {} has out-of-range started_at {}",
                self.id, self.started_at
            ))
        })?;

        Ok(Auction {
            id: self.id,
            description: self.description,
            started_at,
            closed: self.closed != 0,
        })
    }
}
