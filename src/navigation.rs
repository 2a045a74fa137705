//! Typed screen routes
//!
//! Parameters that cross a screen boundary travel inside the route value
//! itself. A screen receives exactly what its route carries and nothing else.

use crate::models::GeoPosition;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Map with one marker per registered listing
    ListingsMap,
    /// Map used to pick the position of a new listing
    SelectPosition,
    /// Data-entry form for a new listing at `position`
    ListingData { position: GeoPosition },
    /// Detail screen for one listing
    ListingDetails { id: i64 },
}

/// Route history for a single app session
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            history: vec![Route::ListingsMap],
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty: it starts with the listings map and
        // `back` refuses to pop the last entry
        &self.history[self.history.len() - 1]
    }

    /// Push `route`. Navigating to the listings map collapses the stack back
    /// to the root, which is also what triggers its refresh.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigating to {:?}", route);
        if route == Route::ListingsMap {
            self.history.truncate(1);
        } else {
            self.history.push(route);
        }
    }

    pub fn back(&mut self) -> Option<Route> {
        if self.history.len() > 1 {
            self.history.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
