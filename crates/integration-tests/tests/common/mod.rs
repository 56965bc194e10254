//! Shared fakes for closing-pass tests
//!
//! Both fakes append to one call log so tests can assert the relative order of
//! repository and notifier calls.

#![allow(dead_code)]

use async_trait::async_trait;
use auction_closer_core::application::AuctionCloser;
use auction_closer_core::domain::{Auction, ClosingPolicy};
use auction_closer_core::port::{
    AuctionRepository, FixedTimeProvider, NotificationError, Notifier, RepositoryError,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Persist { id: String, closed: bool },
    Notify { id: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub fn persist(id: &str) -> Call {
    Call::Persist {
        id: id.to_string(),
        closed: true,
    }
}

pub fn notify(id: &str) -> Call {
    Call::Notify { id: id.to_string() }
}

/// Fixed "now" used by every test
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
}

/// Auction started `days` calendar days before `now()`
pub fn aged(id: &str, days: i64) -> Auction {
    Auction::new(id, format!("Item {}", id), now() - Duration::days(days))
}

/// Auction from 1999 (always eligible)
pub fn ancient(id: &str) -> Auction {
    let started = Utc.with_ymd_and_hms(1999, 2, 20, 0, 0, 0).unwrap();
    Auction::new(id, format!("Item {}", id), started)
}

/// In-memory repository with per-ID persist failures
pub struct FakeRepository {
    auctions: Vec<Auction>,
    failing: HashSet<String>,
    fail_listing: bool,
    log: CallLog,
}

impl FakeRepository {
    pub fn new(auctions: Vec<Auction>, log: CallLog) -> Self {
        Self {
            auctions,
            failing: HashSet::new(),
            fail_listing: false,
            log,
        }
    }

    pub fn failing_persist(mut self, ids: &[&str]) -> Self {
        self.failing = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }
}

#[async_trait]
impl AuctionRepository for FakeRepository {
    async fn list_current(&self) -> Result<Vec<Auction>, RepositoryError> {
        self.log.lock().unwrap().push(Call::List);
        if self.fail_listing {
            return Err(RepositoryError::Unavailable("database offline".to_string()));
        }
        Ok(self.auctions.clone())
    }

    async fn persist_update(&self, auction: &Auction) -> Result<(), RepositoryError> {
        self.log.lock().unwrap().push(Call::Persist {
            id: auction.id.clone(),
            closed: auction.closed,
        });
        if self.failing.contains(&auction.id) {
            return Err(RepositoryError::Database(format!("write of {} failed", auction.id)));
        }
        Ok(())
    }
}

/// Notifier with per-ID delivery failures
pub struct FakeNotifier {
    failing: HashSet<String>,
    log: CallLog,
}

impl FakeNotifier {
    pub fn new(log: CallLog) -> Self {
        Self {
            failing: HashSet::new(),
            log,
        }
    }

    pub fn failing_for(mut self, ids: &[&str]) -> Self {
        self.failing = ids.iter().map(|id| id.to_string()).collect();
        self
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send_closing_notice(&self, auction: &Auction) -> Result<(), NotificationError> {
        self.log.lock().unwrap().push(Call::Notify {
            id: auction.id.clone(),
        });
        if self.failing.contains(&auction.id) {
            return Err(NotificationError::Delivery(format!(
                "mailbox for {} full",
                auction.id
            )));
        }
        Ok(())
    }
}

/// Closer with the default one-week policy and a fixed clock
pub fn closer(
    repository: Arc<dyn AuctionRepository>,
    notifier: Arc<dyn Notifier>,
) -> AuctionCloser {
    AuctionCloser::new(
        repository,
        notifier,
        Arc::new(FixedTimeProvider(now())),
        ClosingPolicy::default(),
    )
}
