use crate::models::{GeoPosition, ImageRef};

/// Listing being assembled on the data-entry screen.
///
/// Every edit consumes the draft and returns a new snapshot with exactly one
/// field replaced, so an edit sequence can be replayed and compared.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    name: String,
    about: String,
    instructions: String,
    opening_hours: String,
    open_on_weekends: bool,
    images: Vec<ImageRef>,
    position: Option<GeoPosition>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: Vec::new(),
            position: None,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_about(self, about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            ..self
        }
    }

    pub fn with_instructions(self, instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            ..self
        }
    }

    pub fn with_opening_hours(self, opening_hours: impl Into<String>) -> Self {
        Self {
            opening_hours: opening_hours.into(),
            ..self
        }
    }

    pub fn with_open_on_weekends(self, open_on_weekends: bool) -> Self {
        Self {
            open_on_weekends,
            ..self
        }
    }

    pub fn toggle_open_on_weekends(self) -> Self {
        let open = !self.open_on_weekends;
        self.with_open_on_weekends(open)
    }

    pub fn with_position(self, position: GeoPosition) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// Append images after the ones already attached, keeping their order
    pub fn with_images_appended(mut self, images: impl IntoIterator<Item = ImageRef>) -> Self {
        self.images.extend(images);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn opening_hours(&self) -> &str {
        &self.opening_hours
    }

    pub fn open_on_weekends(&self) -> bool {
        self.open_on_weekends
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn position(&self) -> Option<GeoPosition> {
        self.position
    }

    /// Preview URIs for the attached images, in attachment order
    pub fn image_previews(&self) -> Vec<String> {
        self.images.iter().map(ImageRef::preview_uri).collect()
    }
}
