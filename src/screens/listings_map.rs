//! Map of registered listings

use crate::api::{ApiError, ListingApi};
use crate::models::ListingSummary;
use crate::navigation::Route;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("no listing with id {0} is on the map")]
    UnknownListing(i64),
}

/// One map marker; its callout shows `title`
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: i64,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&ListingSummary> for Marker {
    fn from(listing: &ListingSummary) -> Self {
        Self {
            id: listing.id,
            title: listing.name.clone(),
            latitude: listing.latitude,
            longitude: listing.longitude,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListingsMapScreen {
    listings: Vec<ListingSummary>,
    fetched_at: Option<DateTime<Utc>>,
}

impl ListingsMapScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetch listings. Called on every focus of the screen, including the
    /// return after a successful registration. On error the previous
    /// collection stays on the map.
    pub async fn refresh<A>(&mut self, api: &A) -> Result<usize, ApiError>
    where
        A: ListingApi + ?Sized,
    {
        match api.list_listings().await {
            Ok(listings) => {
                info!("Loaded {} orphanages", listings.len());
                self.listings = listings;
                self.fetched_at = Some(Utc::now());
                Ok(self.listings.len())
            }
            Err(e) => {
                warn!("Failed to refresh orphanages: {}", e);
                Err(e)
            }
        }
    }

    pub fn listings(&self) -> &[ListingSummary] {
        &self.listings
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.listings.iter().map(Marker::from).collect()
    }

    /// Footer line under the map
    pub fn summary(&self) -> String {
        match self.listings.len() {
            1 => "1 orphanage found".to_string(),
            n => format!("{} orphanages found", n),
        }
    }

    /// Tap on a marker callout
    pub fn select_marker(&self, id: i64) -> Result<Route, BrowseError> {
        if self.listings.iter().any(|l| l.id == id) {
            Ok(Route::ListingDetails { id })
        } else {
            Err(BrowseError::UnknownListing(id))
        }
    }

    /// The "+" button that starts a new registration
    pub fn start_registration(&self) -> Route {
        Route::SelectPosition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::ListingPayload;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct SequenceApi {
        responses: Mutex<Vec<Result<Vec<ListingSummary>, ApiError>>>,
    }

    impl SequenceApi {
        fn new(mut responses: Vec<Result<Vec<ListingSummary>, ApiError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl ListingApi for SequenceApi {
        async fn create_listing(&self, _payload: ListingPayload) -> Result<(), ApiError> {
            Ok(())
        }

        async fn list_listings(&self) -> Result<Vec<ListingSummary>, ApiError> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn listing(id: i64, name: &str) -> ListingSummary {
        ListingSummary {
            id,
            name: name.to_string(),
            latitude: -15.88,
            longitude: -48.12,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_marker_count_tracks_latest_fetch() {
        let api = SequenceApi::new(vec![
            Ok(vec![listing(1, "Lar das Meninas"), listing(2, "Casa")]),
            Ok(vec![listing(3, "Abrigo")]),
        ]);
        let mut screen = ListingsMapScreen::new();

        assert_eq!(screen.refresh(&api).await.unwrap(), 2);
        assert_eq!(screen.markers().len(), 2);
        assert_eq!(screen.summary(), "2 orphanages found");

        assert_eq!(screen.refresh(&api).await.unwrap(), 1);
        assert_eq!(screen.markers().len(), 1);
        assert_eq!(screen.markers()[0].title, "Abrigo");
        assert_eq!(screen.summary(), "1 orphanage found");
        assert!(screen.fetched_at().is_some());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_listings() {
        let api = SequenceApi::new(vec![Ok(vec![listing(1, "Lar das Meninas")]), Err(server_error())]);
        let mut screen = ListingsMapScreen::new();

        screen.refresh(&api).await.unwrap();
        let fetched_at = screen.fetched_at();
        assert!(screen.refresh(&api).await.is_err());

        assert_eq!(screen.markers().len(), 1);
        assert_eq!(screen.fetched_at(), fetched_at);
    }

    #[tokio::test]
    async fn test_select_marker_navigates_by_id() {
        let api = SequenceApi::new(vec![Ok(vec![listing(7, "A"), listing(42, "B")])]);
        let mut screen = ListingsMapScreen::new();
        screen.refresh(&api).await.unwrap();

        assert_eq!(screen.select_marker(42), Ok(Route::ListingDetails { id: 42 }));
        assert_eq!(screen.select_marker(5), Err(BrowseError::UnknownListing(5)));
    }

    #[test]
    fn test_empty_map() {
        let screen = ListingsMapScreen::new();
        assert!(screen.markers().is_empty());
        assert_eq!(screen.summary(), "0 orphanages found");
        assert_eq!(screen.start_registration(), Route::SelectPosition);
    }
}
