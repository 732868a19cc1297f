// src/fetcher.rs
//! Paginated job-list fetching with a stale-response guard.
//!
//! Every issued request carries a sequence number; a resolution is only
//! applied while its number is still the latest, so a slow earlier
//! response can never overwrite a newer one. Completed pages are cached
//! by (filters, page) as immutable snapshots and invalidated wholesale on
//! logout or explicit refresh.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::error::ApiResult;
use crate::filters::JobQuery;
use crate::types::job::JobsPage;

/// Seam between the fetcher and the HTTP layer; tests substitute a
/// scripted implementation.
pub trait JobsApi: Send + Sync {
    fn fetch_jobs<'a>(
        &'a self,
        query: &'a JobQuery,
    ) -> Pin<Box<dyn Future<Output = ApiResult<JobsPage>> + Send + 'a>>;
}

/// What a view can observe. Loading means nothing is rendered: a new
/// fetch drops any previously loaded page rather than showing stale data
/// under a spinner.
#[derive(Debug, Clone)]
pub enum FetchState {
    Loading,
    Error(String),
    Loaded(Arc<JobsPage>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn page(&self) -> Option<&Arc<JobsPage>> {
        match self {
            FetchState::Loaded(page) => Some(page),
            _ => None,
        }
    }
}

struct FetcherInner {
    state: FetchState,
    query: JobQuery,
    cache: HashMap<String, Arc<JobsPage>>,
}

pub struct JobListFetcher {
    api: Arc<dyn JobsApi>,
    seq: AtomicU64,
    inner: Mutex<FetcherInner>,
}

impl JobListFetcher {
    pub fn new(api: Arc<dyn JobsApi>) -> Self {
        Self {
            api,
            seq: AtomicU64::new(0),
            inner: Mutex::new(FetcherInner {
                state: FetchState::Loading,
                query: JobQuery::default(),
                cache: HashMap::new(),
            }),
        }
    }

    pub fn state(&self) -> FetchState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn query(&self) -> JobQuery {
        self.inner.lock().unwrap().query.clone()
    }

    /// Issue a fetch for `query`. Transitions to Loading immediately; the
    /// resolution is dropped if a newer fetch was started meanwhile.
    pub async fn load(&self, query: JobQuery) -> FetchState {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let key = cache_key(&query);

        {
            let mut inner = self.inner.lock().unwrap();
            inner.query = query.clone();

            if let Some(cached) = inner.cache.get(&key) {
                info!("Job list cache hit: {}", key);
                inner.state = FetchState::Loaded(Arc::clone(cached));
                return inner.state.clone();
            }
            inner.state = FetchState::Loading;
        }

        let result = self.api.fetch_jobs(&query).await;

        let mut inner = self.inner.lock().unwrap();
        if self.seq.load(Ordering::SeqCst) != seq {
            // A newer request superseded this one; drop the resolution.
            info!("Dropping stale job list response (seq {})", seq);
            return inner.state.clone();
        }

        inner.state = match result {
            Ok(page) => {
                let page = Arc::new(page);
                inner.cache.insert(key, Arc::clone(&page));
                FetchState::Loaded(page)
            }
            Err(e) => FetchState::Error(e.to_string()),
        };
        inner.state.clone()
    }

    /// Re-issue the identical (filters, page) request after a failure.
    pub async fn retry(&self) -> FetchState {
        let query = self.query();
        self.load(query).await
    }

    /// Drop every cached page. Called on logout and explicit refresh; the
    /// next load for any key goes back to the network.
    pub fn invalidate_cache(&self) {
        self.inner.lock().unwrap().cache.clear();
    }
}

fn cache_key(query: &JobQuery) -> String {
    format!("{}#{}", query.filters.to_query(), query.page())
}
