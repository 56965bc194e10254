//! End-to-end closing passes against the SQLite adapter

mod common;

use async_trait::async_trait;
use auction_closer_core::application::ClosingScheduler;
use auction_closer_core::domain::Auction;
use auction_closer_core::port::{AuctionRepository, RepositoryError};
use auction_closer_infra_sqlite::{create_pool, run_migrations, SqliteAuctionRepository};
use common::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

async fn setup_repository() -> Arc<SqliteAuctionRepository> {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    Arc::new(SqliteAuctionRepository::new(pool))
}

async fn seed(repo: &SqliteAuctionRepository, auctions: &[Auction]) {
    for auction in auctions {
        repo.insert(auction).await.unwrap();
    }
}

async fn is_closed(repo: &SqliteAuctionRepository, id: &str) -> bool {
    repo.find_by_id(id).await.unwrap().unwrap().closed
}

/// Old auctions are closed in the database, recent ones stay open
#[tokio::test]
async fn test_pass_closes_old_auctions_in_database() {
    let repo = setup_repository().await;
    seed(
        &repo,
        &[ancient("macbook-air"), aged("macbook-pro", 8), aged("ipad", 1)],
    )
    .await;

    let log = new_log();
    let notifier = Arc::new(FakeNotifier::new(log.clone()));

    let result = closer(repo.clone(), notifier).run().await.unwrap();

    assert_eq!(result.closed_count, 2);
    assert!(is_closed(&repo, "macbook-air").await);
    assert!(is_closed(&repo, "macbook-pro").await);
    assert!(!is_closed(&repo, "ipad").await);

    // Oldest first, as listed by the repository
    assert_eq!(calls(&log), vec![notify("macbook-air"), notify("macbook-pro")]);
}

/// Closed rows are no longer listed, so a second pass does nothing
#[tokio::test]
async fn test_second_pass_closes_nothing() {
    let repo = setup_repository().await;
    seed(&repo, &[ancient("tv"), ancient("fridge")]).await;

    let log = new_log();
    let notifier = Arc::new(FakeNotifier::new(log.clone()));
    let service = closer(repo.clone(), notifier);

    assert_eq!(service.run().await.unwrap().closed_count, 2);
    assert_eq!(service.run().await.unwrap().closed_count, 0);
    assert_eq!(calls(&log).len(), 2);
}

/// Notice failures do not undo the persisted close
#[tokio::test]
async fn test_failed_notice_keeps_auction_closed() {
    let repo = setup_repository().await;
    seed(&repo, &[ancient("tv"), ancient("fridge")]).await;

    let notifier = Arc::new(FakeNotifier::new(new_log()).failing_for(&["tv"]));

    let result = closer(repo.clone(), notifier).run().await.unwrap();

    assert_eq!(result.closed_count, 2);
    assert!(is_closed(&repo, "tv").await);
    assert!(is_closed(&repo, "fridge").await);
}

/// Wraps the SQLite repository and fails the first write for chosen IDs
struct FlakyRepository {
    inner: Arc<SqliteAuctionRepository>,
    fail_once: Mutex<HashSet<String>>,
}

#[async_trait]
impl AuctionRepository for FlakyRepository {
    async fn list_current(&self) -> Result<Vec<Auction>, RepositoryError> {
        self.inner.list_current().await
    }

    async fn persist_update(&self, auction: &Auction) -> Result<(), RepositoryError> {
        let should_fail = self.fail_once.lock().unwrap().remove(&auction.id);
        if should_fail {
            return Err(RepositoryError::Unavailable("database is locked".to_string()));
        }
        self.inner.persist_update(auction).await
    }
}

/// A failed write leaves the auction open; the next pass picks it up
#[tokio::test]
async fn test_failed_write_is_retried_by_next_pass() {
    let inner = setup_repository().await;
    seed(&inner, &[ancient("tv"), ancient("fridge")]).await;

    let repo = Arc::new(FlakyRepository {
        inner: inner.clone(),
        fail_once: Mutex::new(HashSet::from(["tv".to_string()])),
    });
    let log = new_log();
    let notifier = Arc::new(FakeNotifier::new(log.clone()));
    let service = closer(repo, notifier);

    assert_eq!(service.run().await.unwrap().closed_count, 1);
    assert!(!is_closed(&inner, "tv").await);
    assert!(is_closed(&inner, "fridge").await);
    assert_eq!(calls(&log), vec![notify("fridge")]);

    assert_eq!(service.run().await.unwrap().closed_count, 1);
    assert!(is_closed(&inner, "tv").await);
    assert_eq!(calls(&log), vec![notify("fridge"), notify("tv")]);
}

/// Manual trigger through the scheduler
#[tokio::test]
async fn test_scheduler_run_now() {
    let repo = setup_repository().await;
    seed(&repo, &[ancient("tv"), aged("radio", 3)]).await;

    let notifier = Arc::new(FakeNotifier::new(new_log()));
    let scheduler = ClosingScheduler::new(
        closer(repo.clone(), notifier),
        Duration::from_secs(60),
    );

    let result = scheduler.run_now().await.unwrap();

    assert_eq!(result.closed_count, 1);
    assert!(is_closed(&repo, "tv").await);
    assert!(!is_closed(&repo, "radio").await);
}
