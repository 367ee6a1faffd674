//! In-memory fakes shared by the service tests.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use lookaside_core::{LookasideError, LookasideResult, NewOrder, OrderId, User, UserId};
use lookaside_repository::UserRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn at(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_milli_opt(12, 0, 0, 250)
        .unwrap()
}

/// User{1, "User1", 41} with a mouse and an SSD.
pub fn sample_user() -> User {
    let id = UserId::new(1);
    User::new(id, "User1", 41).with_orders(vec![
        NewOrder::new(id, "Mouse", 15_000, at(1, 5)).persisted(OrderId::new(1)),
        NewOrder::new(id, "SSD", 52_000, at(2, 9)).persisted(OrderId::new(2)),
    ])
}

/// Store fake that counts reads.
pub struct MockUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    reads: AtomicUsize,
    down: AtomicBool,
}

impl MockUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().map(|u| (u.id, u)).collect()),
            reads: AtomicUsize::new(0),
            down: AtomicBool::new(false),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_user_with_orders(&self, id: UserId) -> LookasideResult<Option<User>> {
        if self.down.load(Ordering::SeqCst) {
            return Err(LookasideError::store_unavailable("connection refused"));
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

struct Entry {
    value: String,
    ttl: Duration,
    expires_at: Duration,
}

/// Cache fake with a manually advanced clock.
pub struct MockCache {
    entries: Mutex<HashMap<String, Entry>>,
    now: Mutex<Duration>,
    down: AtomicBool,
    writes: AtomicUsize,
}

impl MockCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            now: Mutex::new(Duration::ZERO),
            down: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contains(&self, key: &str) -> bool {
        let now = *self.now.lock().unwrap();
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|e| e.expires_at > now)
    }

    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.entries.lock().unwrap().get(key).map(|e| e.ttl)
    }

    /// Stored payload, expired or not.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|e| e.value.clone())
    }

    /// Writes a raw value bypassing the trait, e.g. a corrupt payload.
    pub fn put_raw(&self, key: &str, value: &str) {
        let now = *self.now.lock().unwrap();
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl: Duration::from_secs(3600),
                expires_at: now + Duration::from_secs(3600),
            },
        );
    }

    fn check(&self) -> LookasideResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(LookasideError::cache_unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheInterface for MockCache {
    async fn get_raw(&self, key: &str) -> LookasideResult<Option<String>> {
        self.check()?;
        let now = *self.now.lock().unwrap();
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> LookasideResult<()> {
        self.check()?;
        let now = *self.now.lock().unwrap();
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> LookasideResult<bool> {
        self.check()?;
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn ping(&self) -> LookasideResult<()> {
        self.check()
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
