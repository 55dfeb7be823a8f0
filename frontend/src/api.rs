use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::{ClientCaseStudy, ContactMessage, PortfolioStats};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
}

/// The three calls the site makes against the portfolio backend.
#[allow(async_fn_in_trait)]
pub trait PortfolioApi {
    async fn fetch_clients(&self) -> Result<Vec<ClientCaseStudy>, ApiError>;
    async fn fetch_stats(&self) -> Result<Option<PortfolioStats>, ApiError>;
    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError>;
}

/// `PortfolioApi` over `gloo-net`, rooted at `config::api_url`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpApi;

impl HttpApi {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&config::api_url(path)).send().await?;
        let response = ensure_success(response)?;
        Ok(response.json::<T>().await?)
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

impl PortfolioApi for HttpApi {
    async fn fetch_clients(&self) -> Result<Vec<ClientCaseStudy>, ApiError> {
        self.get_json("portfolio/clients").await
    }

    async fn fetch_stats(&self) -> Result<Option<PortfolioStats>, ApiError> {
        self.get_json("portfolio/stats").await
    }

    async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        let response = Request::post(&config::api_url("contact"))
            .json(message)?
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}
