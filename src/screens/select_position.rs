//! Position selection on the map
//!
//! Holds at most one candidate position. Every tap replaces the previous
//! candidate; confirming hands the candidate to the data-entry screen.

use crate::config::MapViewport;
use crate::models::{GeoPosition, PositionError};
use crate::navigation::Route;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error("no position has been selected on the map")]
    NoPosition,
    #[error(transparent)]
    InvalidPosition(#[from] PositionError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSelector {
    viewport: MapViewport,
    candidate: Option<GeoPosition>,
}

impl PositionSelector {
    pub fn new(viewport: MapViewport) -> Self {
        Self {
            viewport,
            candidate: None,
        }
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub fn candidate(&self) -> Option<GeoPosition> {
        self.candidate
    }

    /// Record a tap/click that the map layer already resolved to a position
    pub fn tap(&mut self, position: GeoPosition) {
        debug!(
            "Candidate position set to ({}, {})",
            position.latitude(),
            position.longitude()
        );
        self.candidate = Some(position);
    }

    /// Record a tap from raw map coordinates. An invalid coordinate leaves
    /// the current candidate untouched.
    pub fn tap_coordinates(&mut self, latitude: f64, longitude: f64) -> Result<GeoPosition, SelectorError> {
        let position = GeoPosition::new(latitude, longitude)?;
        self.tap(position);
        Ok(position)
    }

    /// Hand the candidate over to the data-entry screen
    pub fn confirm(self) -> Result<Route, SelectorError> {
        let position = self.candidate.ok_or(SelectorError::NoPosition)?;
        info!(
            "Position confirmed at ({}, {})",
            position.latitude(),
            position.longitude()
        );
        Ok(Route::ListingData { position })
    }
}
