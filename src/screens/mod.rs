pub mod listing_data;
pub mod listings_map;
pub mod select_position;

pub use listing_data::{ListingDataScreen, Submitted, SubmissionState};
pub use listings_map::{BrowseError, ListingsMapScreen, Marker};
pub use select_position::{PositionSelector, SelectorError};
