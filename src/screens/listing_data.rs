//! Data-entry screen for a new listing
//!
//! Owns the draft for as long as the screen is mounted. A confirmed
//! submission either succeeds (draft discarded, navigate to the map) or
//! fails (draft kept, user may retry).

use crate::api::ListingApi;
use crate::config::{Config, Surface};
use crate::media::{collect_images, MediaLibrary};
use crate::models::GeoPosition;
use crate::navigation::Route;
use crate::submission::{ListingDraft, ListingPayload, SubmissionError};
use tracing::{info, warn};

pub const SUCCESS_MESSAGE: &str = "Listing registered successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Succeeded,
    /// Last attempt failed; the draft is still available for a retry
    Failed(String),
}

/// What the caller shows and where it goes after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub message: &'static str,
    pub next: Route,
}

pub struct ListingDataScreen {
    draft: Option<ListingDraft>,
    state: SubmissionState,
    surface: Surface,
    about_max_length: Option<usize>,
}

impl ListingDataScreen {
    /// Mount with an empty draft. Used by the web surface, where the map
    /// sits on the same screen and the position arrives via `set_position`.
    pub fn new(config: &Config) -> Self {
        Self {
            draft: Some(ListingDraft::new()),
            state: SubmissionState::Editing,
            surface: config.surface,
            about_max_length: config.about_max_length,
        }
    }

    /// Mount from a `Route::ListingData`, seeding the draft with the
    /// position handed over by the selector
    pub fn from_route(route: &Route, config: &Config) -> Result<Self, SubmissionError> {
        match route {
            Route::ListingData { position } => {
                let mut screen = Self::new(config);
                screen.set_position(*position)?;
                Ok(screen)
            }
            other => Err(SubmissionError::UnexpectedRoute(other.clone())),
        }
    }

    pub fn draft(&self) -> Option<&ListingDraft> {
        self.draft.as_ref()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Replace the draft with the snapshot `f` returns
    pub fn edit(&mut self, f: impl FnOnce(ListingDraft) -> ListingDraft) -> Result<(), SubmissionError> {
        let draft = self.draft.take().ok_or(SubmissionError::AlreadySubmitted)?;
        self.replace_draft(f(draft));
        Ok(())
    }

    /// Any change after a failed attempt puts the screen back into editing
    fn replace_draft(&mut self, draft: ListingDraft) {
        self.draft = Some(draft);
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Editing;
        }
    }

    pub fn set_position(&mut self, position: GeoPosition) -> Result<(), SubmissionError> {
        self.edit(|draft| draft.with_position(position))
    }

    /// Run one picker interaction. Returns how many images were attached;
    /// zero when the picker was cancelled.
    pub async fn add_images<L>(&mut self, library: &L) -> Result<usize, SubmissionError>
    where
        L: MediaLibrary + ?Sized,
    {
        let draft = self.draft.as_ref().ok_or(SubmissionError::AlreadySubmitted)?;
        let before = draft.images().len();

        let next = collect_images(draft, library, self.surface).await?;
        let added = next.images().len() - before;
        self.replace_draft(next);

        Ok(added)
    }

    /// Build the payload and send it with a single `create_listing` call.
    ///
    /// Validation failures are returned before anything is sent and leave
    /// the state untouched. A failed call keeps the draft and moves to
    /// `Failed`; only success discards the draft.
    pub async fn confirm<A>(&mut self, api: &A) -> Result<Submitted, SubmissionError>
    where
        A: ListingApi + ?Sized,
    {
        let draft = self.draft.as_ref().ok_or(SubmissionError::AlreadySubmitted)?;
        let payload = ListingPayload::from_draft(draft, self.about_max_length)?;

        info!("Submitting listing '{}'", draft.name());
        self.state = SubmissionState::Submitting;

        match api.create_listing(payload).await {
            Ok(()) => {
                self.draft = None;
                self.state = SubmissionState::Succeeded;
                info!("✅ {}", SUCCESS_MESSAGE);
                Ok(Submitted {
                    message: SUCCESS_MESSAGE,
                    next: Route::ListingsMap,
                })
            }
            Err(e) => {
                warn!("Listing submission failed: {}", e);
                self.state = SubmissionState::Failed(e.to_string());
                Err(SubmissionError::Api(e))
            }
        }
    }
}
