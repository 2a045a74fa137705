use crate::api::ApiError;
use crate::models::ImageRef;
use crate::submission::draft::ListingDraft;
use crate::submission::SubmissionError;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Value of one multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    Image(ImagePart),
}

/// An image attachment, named `image_<index>` by its position in the draft
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePart {
    pub file_name: String,
    pub content_type: &'static str,
    pub source: ImageRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayloadPart {
    pub field: &'static str,
    pub value: PartValue,
}

/// Multipart body for `POST /orphanages`, checked and ordered but not yet
/// holding any image bytes
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPayload {
    parts: Vec<PayloadPart>,
}

impl ListingPayload {
    /// Shape a draft into the wire fields.
    ///
    /// Fails when the draft has no position or when `about` is longer than
    /// `about_max_length` characters.
    pub fn from_draft(draft: &ListingDraft, about_max_length: Option<usize>) -> Result<Self, SubmissionError> {
        let position = draft.position().ok_or(SubmissionError::MissingPosition)?;

        if let Some(max) = about_max_length {
            let length = draft.about().chars().count();
            if length > max {
                return Err(SubmissionError::AboutTooLong { length, max });
            }
        }

        let mut parts = vec![
            text("name", draft.name()),
            text("about", draft.about()),
            text("latitude", format_coordinate(position.latitude())),
            text("longitude", format_coordinate(position.longitude())),
            text("instructions", draft.instructions()),
            text("opening_hours", draft.opening_hours()),
            text("open_on_weekends", draft.open_on_weekends().to_string()),
        ];

        parts.extend(draft.images().iter().enumerate().map(|(index, image)| PayloadPart {
            field: "images",
            value: PartValue::Image(ImagePart {
                file_name: format!("image_{}", index),
                content_type: image.content_type(),
                source: image.clone(),
            }),
        }));

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    /// First text value sent under `field`
    pub fn text(&self, field: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::Text(value) if part.field == field => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImagePart> {
        self.parts.iter().filter_map(|part| match &part.value {
            PartValue::Image(image) => Some(image),
            PartValue::Text(_) => None,
        })
    }

    /// Read every image from disk and build the request form. Any unreadable
    /// image fails the whole payload, so nothing is sent half-attached.
    pub async fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();

        for part in self.parts {
            form = match part.value {
                PartValue::Text(value) => form.text(part.field, value),
                PartValue::Image(image) => {
                    let bytes = tokio::fs::read(image.source.path()).await.map_err(|source| {
                        ApiError::ImageUnreadable {
                            path: image.source.path().to_path_buf(),
                            source,
                        }
                    })?;
                    debug!("Attaching {} ({} bytes)", image.file_name, bytes.len());

                    let file_part = Part::bytes(bytes)
                        .file_name(image.file_name)
                        .mime_str(image.content_type)
                        .map_err(ApiError::InvalidPart)?;
                    form.part(part.field, file_part)
                }
            };
        }

        Ok(form)
    }
}

fn text(field: &'static str, value: impl Into<String>) -> PayloadPart {
    PayloadPart {
        field,
        value: PartValue::Text(value.into()),
    }
}

/// Shortest round-trip decimal, with negative zero written as "0"
fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
