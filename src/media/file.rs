use crate::media::{MediaLibrary, PermissionStatus, PickOutcome};
use crate::models::ImageRef;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// Media library over a fixed queue of files on disk.
///
/// Each pick hands out queued files (one, or all when `multiple` is set);
/// once the queue is empty the picker reports a cancel. Paths are handed out
/// as queued; a file that cannot be read fails the submission when the
/// request form is built.
pub struct FileMediaLibrary {
    queue: Mutex<VecDeque<PathBuf>>,
    permission: PermissionStatus,
}

impl FileMediaLibrary {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            queue: Mutex::new(paths.into_iter().collect()),
            permission: PermissionStatus::Granted,
        }
    }

    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl MediaLibrary for FileMediaLibrary {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn pick(&self, multiple: bool) -> PickOutcome {
        let mut queue = self.queue.lock().await;
        let mut picked = Vec::new();

        while let Some(path) = queue.pop_front() {
            debug!("Picked {}", path.display());
            picked.push(ImageRef::new(path));
            if !multiple {
                break;
            }
        }

        if picked.is_empty() {
            PickOutcome::Cancelled
        } else {
            PickOutcome::Selected(picked)
        }
    }
}
