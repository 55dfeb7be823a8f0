use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use yew::{BaseComponent, ServerRenderer};

use crate::api::{ApiError, PortfolioApi};
use crate::models::{ClientCaseStudy, ClientId, ContactMessage, Metric, PortfolioStats};

/// In-memory backend recording every call it receives.
#[derive(Default)]
pub struct FakeApi {
    pub clients: Option<Vec<ClientCaseStudy>>,
    pub stats: Option<Option<PortfolioStats>>,
    pub contact_ok: bool,
    pub read_calls: Cell<usize>,
    pub submitted: RefCell<Vec<ContactMessage>>,
}

impl PortfolioApi for FakeApi {
    async fn fetch_clients(&self) -> Result<Vec<ClientCaseStudy>, ApiError> {
        self.read_calls.set(self.read_calls.get() + 1);
        self.clients.clone().ok_or(ApiError::Status(500))
    }

    async fn fetch_stats(&self) -> Result<Option<PortfolioStats>, ApiError> {
        self.read_calls.set(self.read_calls.get() + 1);
        self.stats.clone().ok_or(ApiError::Status(502))
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.submitted.borrow_mut().push(message.clone());
        if self.contact_ok {
            Ok(())
        } else {
            Err(ApiError::Status(500))
        }
    }
}

/// Renders `C` to an HTML string. Effects do not run server-side.
pub fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send + 'static,
{
    block_on(ServerRenderer::<C>::with_props(move || props).render())
}

pub fn acme() -> ClientCaseStudy {
    ClientCaseStudy {
        id: ClientId::Number(1),
        display_name: "Acme".to_string(),
        period: "Q1".to_string(),
        description: "d".to_string(),
        metrics: vec![Metric {
            metric_name: "Reach".to_string(),
            value: "4.4k".to_string(),
            description: None,
        }],
        testimonial: None,
        testimonial_author: None,
    }
}

pub fn full_stats() -> PortfolioStats {
    PortfolioStats {
        total_clients: Some(5),
        total_reach: Some("50k".to_string()),
        success_rate: Some("90%".to_string()),
        experience_years: Some(3),
    }
}
