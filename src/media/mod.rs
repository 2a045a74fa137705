pub mod collect;
pub mod file;
pub mod traits;

pub use collect::collect_images;
pub use file::FileMediaLibrary;
pub use traits::MediaLibrary;

use crate::models::ImageRef;
use thiserror::Error;

/// Message shown when the photo library permission is refused
pub const PERMISSION_DENIED_MESSAGE: &str = "We need access to your photo library to attach pictures.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Result of one picker interaction
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Cancelled,
    Selected(Vec<ImageRef>),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("{}", PERMISSION_DENIED_MESSAGE)]
    PermissionDenied,
}
