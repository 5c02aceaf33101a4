//! Listings screen view-model: debounced search and forced refresh.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::StreamExt;
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinSet};

use crate::constants::DEFAULT_SEARCH_DEBOUNCE;
use crate::listings::CompanyListing;
use crate::resource::Resource;
use crate::stocks::StockRepositoryTrait;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListingsState {
    pub company_listings: Vec<CompanyListing>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub search_query: String,
    pub error_message: Option<String>,
}

impl CompanyListingsState {
    fn apply(&mut self, resource: Resource<Vec<CompanyListing>>) {
        match resource {
            Resource::Success(listings) => self.company_listings = listings,
            Resource::Error(message) => {
                self.error_message = Some(message);
                self.is_loading = false;
                self.is_refreshing = false;
            }
            Resource::Loading(is_loading) => {
                self.is_loading = is_loading;
                if !is_loading {
                    self.is_refreshing = false;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyListingsEvent {
    Refresh,
    SearchQueryChanged(String),
}

/// Projects listings streams into [`CompanyListingsState`].
///
/// Loads run as tasks owned by the view-model; dropping it aborts them.
pub struct CompanyListingsViewModel {
    repository: Arc<dyn StockRepositoryTrait>,
    state: Arc<watch::Sender<CompanyListingsState>>,
    debounce: Duration,
    tasks: Mutex<JoinSet<()>>,
    search_job: Mutex<Option<AbortHandle>>,
}

impl CompanyListingsViewModel {
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self::with_debounce(repository, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(repository: Arc<dyn StockRepositoryTrait>, debounce: Duration) -> Self {
        let (state, _) = watch::channel(CompanyListingsState::default());
        Self {
            repository,
            state: Arc::new(state),
            debounce,
            tasks: Mutex::new(JoinSet::new()),
            search_job: Mutex::new(None),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> CompanyListingsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CompanyListingsState> {
        self.state.subscribe()
    }

    /// Starts the initial cache-first load. Must be called within a tokio runtime.
    pub fn init(&self) {
        self.state.send_modify(|s| s.is_loading = true);
        self.load(String::new(), false);
    }

    pub fn on_event(&self, event: CompanyListingsEvent) {
        match event {
            CompanyListingsEvent::Refresh => {
                let query = self.state.borrow().search_query.clone();
                self.state.send_modify(|s| {
                    s.error_message = None;
                    s.is_refreshing = true;
                });
                self.load(query, true);
            }
            CompanyListingsEvent::SearchQueryChanged(query) => {
                self.state.send_modify(|s| {
                    s.error_message = None;
                    s.search_query = query.clone();
                });
                self.schedule_search(query);
            }
        }
    }

    fn load(&self, query: String, fetch_from_remote: bool) -> AbortHandle {
        let repository = self.repository.clone();
        let state = self.state.clone();
        self.spawn(async move {
            collect_into(repository, state, query, fetch_from_remote).await;
        })
    }

    fn schedule_search(&self, query: String) {
        let mut search_job = self
            .search_job
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = search_job.take() {
            previous.abort();
        }

        let repository = self.repository.clone();
        let state = self.state.clone();
        let debounce = self.debounce;
        *search_job = Some(self.spawn(async move {
            tokio::time::sleep(debounce).await;
            debug!("Searching company listings for '{}'", query);
            collect_into(repository, state, query, false).await;
        }));
    }

    fn spawn<F>(&self, task: F) -> AbortHandle
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        // Reap finished loads so the set does not grow with every keystroke.
        while tasks.try_join_next().is_some() {}
        tasks.spawn(task)
    }
}

async fn collect_into(
    repository: Arc<dyn StockRepositoryTrait>,
    state: Arc<watch::Sender<CompanyListingsState>>,
    query: String,
    fetch_from_remote: bool,
) {
    let mut stream = repository.get_company_listings(fetch_from_remote, query.to_lowercase());
    while let Some(resource) = stream.next().await {
        state.send_modify(|s| s.apply(resource));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompanyInfo;
    use crate::intraday::IntradayInfo;
    use async_trait::async_trait;
    use futures::stream::{self, BoxStream};
    use std::time::Duration;
    use tokio::time::timeout;

    /// Replays a fixed script and records every request.
    struct ScriptedRepository {
        listings: Vec<CompanyListing>,
        fail_remote: bool,
        requests: Mutex<Vec<(bool, String)>>,
    }

    impl ScriptedRepository {
        fn new(listings: Vec<CompanyListing>) -> Self {
            Self {
                listings,
                fail_remote: false,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<(bool, String)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StockRepositoryTrait for ScriptedRepository {
        fn get_company_listings(
            &self,
            fetch_from_remote: bool,
            query: String,
        ) -> BoxStream<'static, Resource<Vec<CompanyListing>>> {
            self.requests
                .lock()
                .unwrap()
                .push((fetch_from_remote, query.clone()));
            let matches: Vec<CompanyListing> = self
                .listings
                .iter()
                .filter(|l| crate::listings::matches_query(l, &query))
                .cloned()
                .collect();
            let last = if fetch_from_remote && self.fail_remote {
                Resource::Error("Timeout: MOCK".to_string())
            } else {
                Resource::Loading(false)
            };
            Box::pin(stream::iter(vec![
                Resource::Loading(true),
                Resource::Success(matches),
                last,
            ]))
        }

        async fn get_intraday_infos(&self, _symbol: &str) -> Resource<Vec<IntradayInfo>> {
            Resource::Success(vec![])
        }

        async fn get_company_info(&self, _symbol: &str) -> Resource<CompanyInfo> {
            Resource::Success(CompanyInfo::default())
        }
    }

    fn listings() -> Vec<CompanyListing> {
        vec![
            CompanyListing::new("Apple Inc", "AAPL", "NASDAQ"),
            CompanyListing::new("Alphabet Inc", "GOOGL", "NASDAQ"),
            CompanyListing::new("Tesla Inc", "TSLA", "NASDAQ"),
        ]
    }

    async fn wait_until<F>(rx: &mut watch::Receiver<CompanyListingsState>, predicate: F)
    where
        F: FnMut(&CompanyListingsState) -> bool,
    {
        timeout(Duration::from_secs(5), rx.wait_for(predicate))
            .await
            .expect("state never reached")
            .expect("view-model dropped");
    }

    #[tokio::test]
    async fn test_init_loads_cached_listings() {
        let repository = Arc::new(ScriptedRepository::new(listings()));
        let view_model = CompanyListingsViewModel::new(repository.clone());
        let mut rx = view_model.subscribe();

        view_model.init();
        wait_until(&mut rx, |s| s.company_listings.len() == 3 && !s.is_loading).await;

        assert_eq!(repository.requests(), vec![(false, String::new())]);
        assert_eq!(view_model.state().error_message, None);
    }

    #[tokio::test]
    async fn test_search_is_debounced() {
        let repository = Arc::new(ScriptedRepository::new(listings()));
        let view_model =
            CompanyListingsViewModel::with_debounce(repository.clone(), Duration::from_millis(50));
        let mut rx = view_model.subscribe();

        view_model.on_event(CompanyListingsEvent::SearchQueryChanged("T".to_string()));
        view_model.on_event(CompanyListingsEvent::SearchQueryChanged("Te".to_string()));
        view_model.on_event(CompanyListingsEvent::SearchQueryChanged("Tesla".to_string()));

        assert_eq!(view_model.state().search_query, "Tesla");
        wait_until(&mut rx, |s| s.company_listings.len() == 1 && !s.is_loading).await;

        assert_eq!(repository.requests(), vec![(false, "tesla".to_string())]);
        assert_eq!(view_model.state().company_listings[0].symbol, "TSLA");
    }

    #[tokio::test]
    async fn test_refresh_forces_remote_with_current_query() {
        let repository = Arc::new(ScriptedRepository::new(listings()));
        let view_model =
            CompanyListingsViewModel::with_debounce(repository.clone(), Duration::from_millis(10));
        let mut rx = view_model.subscribe();

        view_model.on_event(CompanyListingsEvent::SearchQueryChanged("inc".to_string()));
        wait_until(&mut rx, |s| s.company_listings.len() == 3).await;

        view_model.on_event(CompanyListingsEvent::Refresh);
        assert!(view_model.state().is_refreshing);
        wait_until(&mut rx, |s| !s.is_refreshing && !s.is_loading).await;

        assert_eq!(
            repository.requests(),
            vec![(false, "inc".to_string()), (true, "inc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_sets_error_message() {
        let mut repository = ScriptedRepository::new(listings());
        repository.fail_remote = true;
        let repository = Arc::new(repository);
        let view_model = CompanyListingsViewModel::new(repository.clone());
        let mut rx = view_model.subscribe();

        view_model.on_event(CompanyListingsEvent::Refresh);
        wait_until(&mut rx, |s| s.error_message.is_some()).await;

        let state = view_model.state();
        assert_eq!(state.error_message.as_deref(), Some("Timeout: MOCK"));
        assert!(!state.is_loading);
        assert!(!state.is_refreshing);
        // Cached rows emitted before the failure stay visible.
        assert_eq!(state.company_listings.len(), 3);
    }

    #[tokio::test]
    async fn test_search_clears_previous_error() {
        let mut repository = ScriptedRepository::new(listings());
        repository.fail_remote = true;
        let view_model =
            CompanyListingsViewModel::with_debounce(Arc::new(repository), Duration::from_millis(10));
        let mut rx = view_model.subscribe();

        view_model.on_event(CompanyListingsEvent::Refresh);
        wait_until(&mut rx, |s| s.error_message.is_some()).await;

        view_model.on_event(CompanyListingsEvent::SearchQueryChanged("apple".to_string()));
        assert_eq!(view_model.state().error_message, None);
        wait_until(&mut rx, |s| s.company_listings.len() == 1).await;
    }
}
