pub mod http;
pub mod traits;

pub use http::HttpListingApi;
pub use traits::ListingApi;

use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the orphanage REST API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("could not read image {}: {source}", .path.display())]
    ImageUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid multipart part: {0}")]
    InvalidPart(#[source] reqwest::Error),
}
