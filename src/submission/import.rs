use crate::submission::ListingDraft;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A listing written down as JSON, replayed through the registration flow
/// by the command-line driver
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DraftFile {
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default = "default_open_on_weekends")]
    pub open_on_weekends: bool,
    #[serde(default)]
    pub images: Vec<PathBuf>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

fn default_open_on_weekends() -> bool {
    true
}

impl DraftFile {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read draft file {}", path.display()))?;
        let file = Self::from_json(&json).with_context(|| format!("Invalid draft file {}", path.display()))?;
        file.check_images()
            .await
            .with_context(|| format!("Draft file {} lists an unusable image", path.display()))?;
        Ok(file)
    }

    /// Every listed image must be a readable regular file
    pub async fn check_images(&self) -> Result<()> {
        for image in &self.images {
            let metadata = tokio::fs::metadata(image)
                .await
                .with_context(|| format!("Image not found: {}", image.display()))?;
            if !metadata.is_file() {
                anyhow::bail!("Image is not a file: {}", image.display());
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse draft JSON")
    }

    /// The map coordinates, when both are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Apply the text fields and the weekend flag; images and position go
    /// through the picker and the selector instead.
    pub fn apply_fields(&self, draft: ListingDraft) -> ListingDraft {
        draft
            .with_name(self.name.as_str())
            .with_about(self.about.as_str())
            .with_instructions(self.instructions.as_str())
            .with_opening_hours(self.opening_hours.as_str())
            .with_open_on_weekends(self.open_on_weekends)
    }
}
