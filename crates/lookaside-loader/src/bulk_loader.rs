//! Two-phase parallel bulk load.
//!
//! Phase one inserts every user, one task per id range. Phase two starts
//! only after all user tasks have finished and inserts each user's orders
//! from the same ranges, so order rows never reference a missing user.

use crate::generator::{user_for, OrderGenerator};
use crate::partition::partition;
use chrono::{Local, NaiveDateTime};
use lookaside_config::LoaderConfig;
use lookaside_core::{LookasideError, LookasideResult, UserId};
use lookaside_repository::UserWriter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Outcome of a bulk load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub users_written: u64,
    pub orders_written: u64,
    pub users_elapsed: Duration,
    pub total_elapsed: Duration,
}

/// Generates and inserts synthetic users and orders.
pub struct BulkLoader {
    writer: Arc<dyn UserWriter>,
    config: LoaderConfig,
    seed: Option<u64>,
    now: Option<NaiveDateTime>,
}

impl BulkLoader {
    pub fn new(writer: Arc<dyn UserWriter>, config: LoaderConfig) -> Self {
        Self {
            writer,
            config,
            seed: None,
            now: None,
        }
    }

    /// Makes order generation reproducible. Worker `w` uses `seed + w`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pins the reference time orders are dated back from.
    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Runs both phases and reports how many rows were written.
    pub async fn run(&self) -> LookasideResult<LoadReport> {
        let started = Instant::now();
        let ranges = partition(
            self.config.first_user_id,
            self.config.total_users,
            self.config.workers,
        );
        info!(
            "Loading {} users over {} workers",
            self.config.total_users,
            ranges.len()
        );

        let users_written = self.load_users(&ranges).await?;
        let users_elapsed = started.elapsed();
        info!("Inserted {} users in {:?}", users_written, users_elapsed);

        let orders_written = self.load_orders(&ranges).await?;
        let total_elapsed = started.elapsed();
        info!(
            "Inserted {} orders; load finished in {:?}",
            orders_written, total_elapsed
        );

        Ok(LoadReport {
            users_written,
            orders_written,
            users_elapsed,
            total_elapsed,
        })
    }

    async fn load_users(&self, ranges: &[Range<i64>]) -> LookasideResult<u64> {
        let mut tasks = JoinSet::new();
        for (worker, range) in ranges.iter().cloned().enumerate() {
            let writer = Arc::clone(&self.writer);
            let batch_size = self.config.user_batch_size.max(1);
            tasks.spawn(insert_user_range(writer, worker, range, batch_size));
        }
        join_all(tasks, "user").await
    }

    async fn load_orders(&self, ranges: &[Range<i64>]) -> LookasideResult<u64> {
        let generator = OrderGenerator::new(
            self.config.min_orders,
            self.config.max_orders,
            self.now.unwrap_or_else(|| Local::now().naive_local()),
        );

        let mut tasks = JoinSet::new();
        for (worker, range) in ranges.iter().cloned().enumerate() {
            let writer = Arc::clone(&self.writer);
            let generator = generator.clone();
            let batch_size = self.config.order_batch_size.max(1);
            let rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
                None => StdRng::from_os_rng(),
            };
            tasks.spawn(insert_order_range(writer, generator, rng, worker, range, batch_size));
        }
        join_all(tasks, "order").await
    }
}

/// Waits for every worker of a phase and sums their row counts.
///
/// The first failure is returned; dropping the set aborts the rest.
async fn join_all(mut tasks: JoinSet<LookasideResult<u64>>, phase: &str) -> LookasideResult<u64> {
    let mut written = 0;
    while let Some(joined) = tasks.join_next().await {
        written += joined
            .map_err(|e| LookasideError::internal(format!("{} worker failed: {}", phase, e)))??;
    }
    Ok(written)
}

async fn insert_user_range(
    writer: Arc<dyn UserWriter>,
    worker: usize,
    range: Range<i64>,
    batch_size: usize,
) -> LookasideResult<u64> {
    let mut written = 0;
    let mut batch = Vec::with_capacity(batch_size);

    for id in range.clone() {
        batch.push(user_for(id));
        if batch.len() >= batch_size {
            written += writer.insert_users(&batch).await?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        written += writer.insert_users(&batch).await?;
    }

    debug!(
        "User worker {} done (ids {}..{})",
        worker + 1,
        range.start,
        range.end
    );
    Ok(written)
}

async fn insert_order_range(
    writer: Arc<dyn UserWriter>,
    generator: OrderGenerator,
    mut rng: StdRng,
    worker: usize,
    range: Range<i64>,
    batch_size: usize,
) -> LookasideResult<u64> {
    let mut written = 0;
    let mut batch = Vec::with_capacity(batch_size);

    for id in range.clone() {
        for order in generator.orders_for(&mut rng, UserId::new(id)) {
            batch.push(order);
            if batch.len() >= batch_size {
                written += writer.insert_orders(&batch).await?;
                batch.clear();
            }
        }
    }
    if !batch.is_empty() {
        written += writer.insert_orders(&batch).await?;
    }

    debug!(
        "Order worker {} done (ids {}..{})",
        worker + 1,
        range.start,
        range.end
    );
    Ok(written)
}
