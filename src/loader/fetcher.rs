//! Ordered batch fetching of creature records
//!
//! Requests run as spawned tasks inside a window of at most `concurrency`
//! handles. Handles are awaited front to back, so records come out in
//! request order whatever order the responses arrive in. With a window of
//! one, request `k + 1` is not issued until request `k` has completed.

use crate::core::{CreatureRecord, DexNumber};
use crate::loader::catalog::Catalog;
use crate::logger::FetchLogger;
use crate::{DexError, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// A request that produced no record
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub id: DexNumber,
    pub error: String,
}

/// Outcome of a batch fetch
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Successfully fetched records, in request order. Failed ids leave no gap.
    pub records: Vec<CreatureRecord>,
    pub failures: Vec<FetchFailure>,
    /// Set when the batch stopped early because of cancellation
    pub cancelled: bool,
    /// Number of ids the batch was asked for
    pub requested: usize,
    pub elapsed: Duration,
}

impl FetchReport {
    pub fn loaded(&self) -> usize {
        self.records.len()
    }

    /// Every requested id produced a record
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.failures.is_empty() && self.records.len() == self.requested
    }
}

/// Fetches batches of records from a catalog
pub struct Fetcher<C> {
    catalog: Arc<C>,
    concurrency: usize,
}

impl<C: Catalog> Fetcher<C> {
    /// Sequential fetcher (one request in flight)
    pub fn new(catalog: C) -> Self {
        Fetcher {
            catalog: Arc::new(catalog),
            concurrency: 1,
        }
    }

    /// Allow up to `concurrency` requests in flight (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetch a single record
    pub async fn fetch_one(&self, id: DexNumber) -> Result<CreatureRecord> {
        self.catalog.fetch_creature(id).await
    }

    /// Fetch every id in order
    ///
    /// Per-id failures are logged and recorded in the report; they never stop
    /// the batch. Cancelling `cancel` aborts in-flight requests and keeps the
    /// records completed so far.
    pub async fn fetch_all(
        &self,
        ids: &[DexNumber],
        cancel: &CancellationToken,
        logger: &FetchLogger,
    ) -> FetchReport {
        let start = Instant::now();
        let mut report = FetchReport {
            requested: ids.len(),
            ..FetchReport::default()
        };

        let mut pending = ids.iter().copied();
        let mut window: VecDeque<(DexNumber, JoinHandle<Result<CreatureRecord>>)> =
            VecDeque::with_capacity(self.concurrency);

        loop {
            if !cancel.is_cancelled() {
                while window.len() < self.concurrency {
                    let Some(id) = pending.next() else { break };
                    logger.verbose(&format!("requesting creature #{id}"));
                    window.push_back((id, self.spawn_request(id)));
                }
            }

            let Some((id, mut handle)) = window.pop_front() else {
                break;
            };

            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                joined = &mut handle => Some(joined),
            };

            match joined {
                Some(joined) => report.settle(id, joined, logger),
                None => {
                    window.push_front((id, handle));
                    self.drain_on_cancel(&mut window, &mut report, logger).await;
                    break;
                }
            }
        }

        let finished = report.records.len() + report.failures.len();
        if cancel.is_cancelled() && finished < ids.len() {
            report.cancelled = true;
            logger.minimal(&format!(
                "fetch cancelled after {finished} of {} requests",
                ids.len()
            ));
        }

        report.elapsed = start.elapsed();
        report
    }

    /// Keep whatever already finished, in window order, and abort the rest
    async fn drain_on_cancel(
        &self,
        window: &mut VecDeque<(DexNumber, JoinHandle<Result<CreatureRecord>>)>,
        report: &mut FetchReport,
        logger: &FetchLogger,
    ) {
        for (id, handle) in window.drain(..) {
            if handle.is_finished() {
                report.settle(id, handle.await, logger);
            } else {
                handle.abort();
            }
        }
    }

    fn spawn_request(&self, id: DexNumber) -> JoinHandle<Result<CreatureRecord>> {
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move { catalog.fetch_creature(id).await })
    }
}

impl FetchReport {
    fn settle(
        &mut self,
        id: DexNumber,
        joined: std::result::Result<Result<CreatureRecord>, tokio::task::JoinError>,
        logger: &FetchLogger,
    ) {
        match joined {
            Ok(Ok(record)) => {
                logger.normal(&format!("fetched #{} {}", record.id.padded(), record.name));
                self.records.push(record);
            }
            Ok(Err(e)) => self.record_failure(id, e, logger),
            Err(join_error) => self.record_failure(id, DexError::Join(join_error), logger),
        }
    }

    fn record_failure(&mut self, id: DexNumber, error: DexError, logger: &FetchLogger) {
        logger.fetch_error(id.get(), &error);
        self.failures.push(FetchFailure {
            id,
            error: error.to_string(),
        });
    }
}
