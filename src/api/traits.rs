use crate::api::ApiError;
use crate::models::ListingSummary;
use crate::submission::ListingPayload;
use async_trait::async_trait;

/// Operations the client needs from the orphanage backend.
/// Screens only see this trait, so tests can swap in an in-memory backend.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// `POST /orphanages` with a multipart body
    async fn create_listing(&self, payload: ListingPayload) -> Result<(), ApiError>;

    /// `GET /orphanages`
    async fn list_listings(&self) -> Result<Vec<ListingSummary>, ApiError>;
}
