use crate::config::Surface;
use crate::media::{MediaError, MediaLibrary, PermissionStatus, PickOutcome};
use crate::submission::ListingDraft;
use tracing::{debug, info, warn};

/// Run one "add image" interaction against `library` and return the next
/// draft snapshot.
///
/// On mobile the OS permission must be granted first and the picker yields a
/// single image; on web any number of files can be chosen at once. A
/// cancelled picker returns the draft unchanged.
pub async fn collect_images<L>(
    draft: &ListingDraft,
    library: &L,
    surface: Surface,
) -> Result<ListingDraft, MediaError>
where
    L: MediaLibrary + ?Sized,
{
    if surface == Surface::Mobile {
        let status = library.request_permission().await;
        if status != PermissionStatus::Granted {
            warn!("Photo library permission not granted: {:?}", status);
            return Err(MediaError::PermissionDenied);
        }
    }

    let multiple = surface == Surface::Web;
    let mut selected = match library.pick(multiple).await {
        PickOutcome::Cancelled => {
            debug!("Image picker cancelled");
            return Ok(draft.clone());
        }
        PickOutcome::Selected(images) => images,
    };

    if !multiple && selected.len() > 1 {
        warn!("Picker returned {} images, keeping the first", selected.len());
        selected.truncate(1);
    }

    info!("Attached {} image(s)", selected.len());
    Ok(draft.clone().with_images_appended(selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageRef;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedLibrary {
        permission: PermissionStatus,
        picks: Mutex<Vec<PickOutcome>>,
        pick_calls: AtomicUsize,
    }

    impl ScriptedLibrary {
        fn new(permission: PermissionStatus, mut picks: Vec<PickOutcome>) -> Self {
            picks.reverse();
            Self {
                permission,
                picks: Mutex::new(picks),
                pick_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MediaLibrary for ScriptedLibrary {
        async fn request_permission(&self) -> PermissionStatus {
            self.permission
        }

        async fn pick(&self, _multiple: bool) -> PickOutcome {
            self.pick_calls.fetch_add(1, Ordering::SeqCst);
            self.picks.lock().unwrap().pop().unwrap_or(PickOutcome::Cancelled)
        }
    }

    fn selected(paths: &[&str]) -> PickOutcome {
        PickOutcome::Selected(paths.iter().map(|p| ImageRef::new(*p)).collect())
    }

    fn paths(draft: &ListingDraft) -> Vec<String> {
        draft
            .images()
            .iter()
            .map(|i| i.path().display().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_picks_concatenate_in_call_order() {
        let library = ScriptedLibrary::new(
            PermissionStatus::Granted,
            vec![
                selected(&["a.jpg", "b.jpg"]),
                PickOutcome::Cancelled,
                selected(&["c.jpg"]),
            ],
        );

        let mut draft = ListingDraft::new();
        for _ in 0..3 {
            draft = collect_images(&draft, &library, Surface::Web).await.unwrap();
        }

        assert_eq!(paths(&draft), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn test_cancel_leaves_draft_unchanged() {
        let library = ScriptedLibrary::new(PermissionStatus::Granted, vec![PickOutcome::Cancelled]);
        let draft = ListingDraft::new()
            .with_name("x")
            .with_images_appended(vec![ImageRef::new("a.jpg")]);

        let next = collect_images(&draft, &library, Surface::Mobile).await.unwrap();
        assert_eq!(next, draft);
    }

    #[tokio::test]
    async fn test_permission_denied_aborts_before_picker() {
        let library = ScriptedLibrary::new(PermissionStatus::Denied, vec![selected(&["a.jpg"])]);
        let draft = ListingDraft::new();

        let err = collect_images(&draft, &library, Surface::Mobile).await.unwrap_err();
        assert_eq!(err, MediaError::PermissionDenied);
        assert_eq!(err.to_string(), crate::media::PERMISSION_DENIED_MESSAGE);
        assert_eq!(library.pick_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_web_skips_permission_prompt() {
        let library = ScriptedLibrary::new(PermissionStatus::Undetermined, vec![selected(&["a.png"])]);

        let draft = collect_images(&ListingDraft::new(), &library, Surface::Web).await.unwrap();
        assert_eq!(paths(&draft), vec!["a.png"]);
    }

    #[tokio::test]
    async fn test_mobile_keeps_single_image() {
        let library = ScriptedLibrary::new(PermissionStatus::Granted, vec![selected(&["a.jpg", "b.jpg"])]);

        let draft = collect_images(&ListingDraft::new(), &library, Surface::Mobile).await.unwrap();
        assert_eq!(paths(&draft), vec!["a.jpg"]);
    }
}
