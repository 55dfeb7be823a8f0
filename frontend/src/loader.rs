use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::{HttpApi, PortfolioApi};
use crate::models::{ClientCaseStudy, PortfolioStats};

/// What the presentation sections see of the backend data.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioData {
    pub loading: bool,
    pub clients: Vec<ClientCaseStudy>,
    pub stats: Option<PortfolioStats>,
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            loading: true,
            clients: Vec::new(),
            stats: None,
        }
    }
}

impl PortfolioData {
    fn settled() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }
}

/// Fetches clients and stats concurrently. Either failing leaves both
/// empty; the failure only reaches the log.
pub async fn load_portfolio<A: PortfolioApi>(api: &A) -> PortfolioData {
    let (clients, stats) = futures::join!(api.fetch_clients(), api.fetch_stats());

    match (clients, stats) {
        (Ok(clients), Ok(stats)) => {
            info!("Loaded {} client case studies", clients.len());
            PortfolioData {
                loading: false,
                clients,
                stats,
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Error fetching portfolio data: {}", e);
            PortfolioData::settled()
        }
    }
}

/// Loads the portfolio once on mount. A response landing after the
/// component is gone is dropped by yew.
#[hook]
pub fn use_portfolio_data() -> UseStateHandle<PortfolioData> {
    let data = use_state(PortfolioData::default);

    {
        let data = data.clone();
        use_mount(move || {
            spawn_local(async move {
                let loaded = load_portfolio(&HttpApi).await;
                data.set(loaded);
            });
        });
    }

    data
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::*;
    use crate::api::ApiError;
    use crate::models::ContactMessage;
    use crate::test_support::{acme, full_stats, FakeApi};

    /// Clients only answer once stats has been asked for, so the load
    /// finishes only when both reads are in flight together.
    struct GatedApi {
        release: RefCell<Option<oneshot::Sender<()>>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl GatedApi {
        fn new() -> Self {
            let (release, gate) = oneshot::channel();
            Self {
                release: RefCell::new(Some(release)),
                gate: RefCell::new(Some(gate)),
            }
        }
    }

    impl PortfolioApi for GatedApi {
        async fn fetch_clients(&self) -> Result<Vec<ClientCaseStudy>, ApiError> {
            let gate = self.gate.borrow_mut().take().ok_or(ApiError::Status(500))?;
            gate.await.map_err(|_| ApiError::Status(500))?;
            Ok(vec![acme()])
        }

        async fn fetch_stats(&self) -> Result<Option<PortfolioStats>, ApiError> {
            if let Some(release) = self.release.borrow_mut().take() {
                release.send(()).unwrap();
            }
            Ok(Some(full_stats()))
        }

        async fn submit_contact(&self, _message: &ContactMessage) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[test]
    fn starts_loading_with_nothing() {
        let data = PortfolioData::default();
        assert!(data.loading);
        assert!(data.clients.is_empty());
        assert!(data.stats.is_none());
    }

    #[test]
    fn stores_both_results_verbatim() {
        let api = FakeApi {
            clients: Some(vec![acme()]),
            stats: Some(Some(full_stats())),
            ..FakeApi::default()
        };

        let data = block_on(load_portfolio(&api));

        assert!(!data.loading);
        assert_eq!(data.clients, vec![acme()]);
        assert_eq!(data.stats, Some(full_stats()));
        assert_eq!(api.read_calls.get(), 2);
    }

    #[test]
    fn reads_run_concurrently() {
        let data = block_on(load_portfolio(&GatedApi::new()));

        assert!(!data.loading);
        assert_eq!(data.clients, vec![acme()]);
        assert_eq!(data.stats, Some(full_stats()));
    }

    #[test]
    fn clients_failure_discards_stats_too() {
        let api = FakeApi {
            clients: None,
            stats: Some(Some(full_stats())),
            ..FakeApi::default()
        };

        let data = block_on(load_portfolio(&api));

        assert_eq!(data, PortfolioData::settled());
        assert_eq!(api.read_calls.get(), 2);
    }

    #[test]
    fn stats_failure_discards_clients_too() {
        let api = FakeApi {
            clients: Some(vec![acme()]),
            stats: None,
            ..FakeApi::default()
        };

        let data = block_on(load_portfolio(&api));

        assert!(!data.loading);
        assert!(data.clients.is_empty());
        assert!(data.stats.is_none());
    }

    #[test]
    fn both_failing_still_settles() {
        let data = block_on(load_portfolio(&FakeApi::default()));

        assert!(!data.loading);
        assert!(data.clients.is_empty());
        assert!(data.stats.is_none());
    }

    #[test]
    fn null_stats_body_is_kept_absent() {
        let api = FakeApi {
            clients: Some(Vec::new()),
            stats: Some(None),
            ..FakeApi::default()
        };

        let data = block_on(load_portfolio(&api));

        assert!(!data.loading);
        assert!(data.stats.is_none());
    }
}
