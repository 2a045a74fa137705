use crate::api::{ApiError, ListingApi};
use crate::config::Config;
use crate::models::ListingSummary;
use crate::submission::ListingPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info, warn};

const LISTINGS_PATH: &str = "orphanages";

/// `ListingApi` backed by the real REST service
pub struct HttpListingApi {
    client: Client,
    base_url: String,
}

impl HttpListingApi {
    /// Create an API client for `config.api_base_url`. No timeout is applied
    /// unless `request_timeout_secs` is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => {
                warn!("API returned status: {}", status);
                body
            }
            Err(e) => {
                warn!("API returned status: {} (body unreadable: {})", status, e);
                String::new()
            }
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn create_listing(&self, payload: ListingPayload) -> Result<(), ApiError> {
        let url = self.endpoint(LISTINGS_PATH);
        let image_count = payload.images().count();

        let form = payload.into_form().await?;

        debug!("POST {} with {} image(s)", url, image_count);
        let response = self.client.post(&url).multipart(form).send().await?;
        Self::check_status(response).await?;

        info!("Listing created");
        Ok(())
    }

    async fn list_listings(&self) -> Result<Vec<ListingSummary>, ApiError> {
        let url = self.endpoint(LISTINGS_PATH);

        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let listings: Vec<ListingSummary> = response.json().await.map_err(ApiError::Decode)?;
        debug!("Fetched {} listings", listings.len());

        Ok(listings)
    }
}
