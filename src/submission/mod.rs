pub mod draft;
pub mod import;
pub mod payload;

pub use draft::ListingDraft;
pub use import::DraftFile;
pub use payload::{ImagePart, ListingPayload, PartValue, PayloadPart};

use crate::api::ApiError;
use crate::media::MediaError;
use crate::navigation::Route;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("pick a position on the map before submitting")]
    MissingPosition,
    #[error("about has {length} characters, the limit is {max}")]
    AboutTooLong { length: usize, max: usize },
    #[error("this listing was already submitted")]
    AlreadySubmitted,
    #[error("the data-entry screen cannot be opened from {0:?}")]
    UnexpectedRoute(Route),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error("could not register the listing: {0}")]
    Api(#[from] ApiError),
}
