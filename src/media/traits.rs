use crate::media::{PermissionStatus, PickOutcome};
use async_trait::async_trait;

/// Access to the device or browser image library
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Ask for read access. Surfaces without a permission model grant it.
    async fn request_permission(&self) -> PermissionStatus;

    /// Run the picker. With `multiple == false` at most one image comes back.
    async fn pick(&self, multiple: bool) -> PickOutcome;
}
