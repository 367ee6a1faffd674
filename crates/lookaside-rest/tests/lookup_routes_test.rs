//! Router-level tests driving the lookup and health endpoints with
//! in-memory backends.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use lookaside_config::{CacheFailurePolicy, ServerConfig};
use lookaside_core::{LookasideError, LookasideResult, NewOrder, OrderId, User, UserId};
use lookaside_repository::UserRepository;
use lookaside_rest::{create_router, AppState};
use lookaside_service::{
    CacheAsideSettings, CacheAsideUserService, CacheInterface, DirectReadUserService,
    TimedUserLookup,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

struct FakeStore {
    users: HashMap<UserId, User>,
    reads: AtomicUsize,
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_user_with_orders(&self, id: UserId) -> LookasideResult<Option<User>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.get(&id).cloned())
    }
}

#[derive(Default)]
struct FakeCache {
    entries: Mutex<HashMap<String, String>>,
    down: AtomicBool,
}

impl FakeCache {
    fn check(&self) -> LookasideResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(LookasideError::cache_unavailable("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheInterface for FakeCache {
    async fn get_raw(&self, key: &str) -> LookasideResult<Option<String>> {
        self.check()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> LookasideResult<()> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
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

struct TestApp {
    router: Router,
    store: Arc<FakeStore>,
    cache: Arc<FakeCache>,
}

/// User{1, "User1", 41} with a mouse and an SSD.
fn sample_user() -> User {
    let id = UserId::new(1);
    let date = |m, d| {
        NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    };
    User::new(id, "User1", 41).with_orders(vec![
        NewOrder::new(id, "Mouse", 15_000, date(3, 1)).persisted(OrderId::new(1)),
        NewOrder::new(id, "SSD", 52_000, date(4, 2)).persisted(OrderId::new(2)),
    ])
}

fn app(policy: CacheFailurePolicy) -> TestApp {
    let user = sample_user();
    let store = Arc::new(FakeStore {
        users: HashMap::from([(user.id, user)]),
        reads: AtomicUsize::new(0),
    });
    let cache = Arc::new(FakeCache::default());

    let settings = CacheAsideSettings {
        failure_policy: policy,
        ..CacheAsideSettings::default()
    };
    let cache_aside = CacheAsideUserService::new(store.clone(), cache.clone(), settings);
    let direct = DirectReadUserService::new(store.clone());

    let state = AppState::new(
        TimedUserLookup::new(Arc::new(cache_aside), "cache"),
        TimedUserLookup::new(Arc::new(direct), "db"),
        cache.clone(),
        policy,
    );

    TestApp {
        router: create_router(state, &ServerConfig::default()),
        store,
        cache,
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_first_lookup_misses_then_hits() {
    let app = app(CacheFailurePolicy::Degrade);

    let (status, first) = get(&app.router, "/cache/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["cacheStatus"], "REDIS_MISS");
    assert!(first["processingTimeMs"].is_u64());

    let (status, second) = get(&app.router, "/cache/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["cacheStatus"], "REDIS_HIT");
    assert_eq!(first["user"], second["user"]);

    assert_eq!(app.store.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cached_body_shape() {
    let app = app(CacheFailurePolicy::Degrade);

    let (_, body) = get(&app.router, "/cache/1").await;
    let user = &body["user"];
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "User1");
    assert_eq!(user["age"], 41);

    let orders = user["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["productName"], "Mouse");
    assert_eq!(orders[0]["price"], 15_000);
    assert_eq!(orders[0]["orderDate"], "2024-03-01T09:30:00");
    assert_eq!(orders[1]["productName"], "SSD");
    assert!(orders[0].get("user").is_none());
}

#[tokio::test]
async fn test_direct_lookup_matches_cached_view() {
    let app = app(CacheFailurePolicy::Degrade);

    let (status, direct) = get(&app.router, "/db/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(direct["cacheStatus"], "RDB_DIRECT");

    let (_, cached) = get(&app.router, "/cache/1").await;
    assert_eq!(direct["user"], cached["user"]);

    // The direct path never writes the cache.
    let (_, again) = get(&app.router, "/db/1").await;
    assert_eq!(again["cacheStatus"], "RDB_DIRECT");
}

#[tokio::test]
async fn test_unknown_user_is_404_and_not_cached() {
    let app = app(CacheFailurePolicy::Degrade);

    let (status, body) = get(&app.router, "/cache/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(app.cache.entries.lock().unwrap().is_empty());

    let (status, _) = get(&app.router, "/db/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let app = app(CacheFailurePolicy::Degrade);

    let (status, body) = get(&app.router, "/cache/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = get(&app.router, "/db/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cache_outage_degrades_to_store() {
    let app = app(CacheFailurePolicy::Degrade);
    app.cache.down.store(true, Ordering::SeqCst);

    let (status, body) = get(&app.router, "/cache/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cacheStatus"], "REDIS_MISS");

    let (status, ready) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["cache"], "down");
}

#[tokio::test]
async fn test_cache_outage_fails_fast() {
    let app = app(CacheFailurePolicy::FailFast);
    app.cache.down.store(true, Ordering::SeqCst);

    let (status, body) = get(&app.router, "/cache/1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "CACHE_UNAVAILABLE");

    let (status, ready) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ready["status"], "not_ready");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app(CacheFailurePolicy::Degrade);

    let (status, body) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = get(&app.router, "/live").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app.router, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "unchecked");
    assert_eq!(body["cache"], "up");
}
