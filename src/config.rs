//! Client configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Which front end the client is driving. The surfaces differ in how images
/// are picked: mobile asks for an OS permission and picks one image at a
/// time, web picks any number and shows previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Mobile,
    Web,
}

impl std::str::FromStr for Surface {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Surface::Mobile),
            "web" => Ok(Surface::Web),
            other => anyhow::bail!("unknown surface '{}', expected 'mobile' or 'web'", other),
        }
    }
}

/// Initial region shown by the map screens
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapViewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            latitude: -15.8867411,
            longitude: -48.1233202,
            zoom: 13,
        }
    }
}

/// Configuration for the orphanage client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,

    #[serde(default = "defaults::surface")]
    pub surface: Surface,

    /// Character cap for the `about` field; `None` disables the check.
    #[serde(default = "defaults::about_max_length")]
    pub about_max_length: Option<usize>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub mapbox_token: Option<String>,

    #[serde(default)]
    pub viewport: MapViewport,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            surface: defaults::surface(),
            about_max_length: defaults::about_max_length(),
            request_timeout_secs: None,
            mapbox_token: None,
            viewport: MapViewport::default(),
        }
    }
}

impl Config {
    /// Build the configuration from `ORPHANAGE_*` and `MAPBOX_TOKEN`
    /// environment variables. When `ORPHANAGE_CONFIG` names a JSON file it is
    /// loaded first and the other variables override its values.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON configuration document; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration JSON")
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match var("ORPHANAGE_CONFIG") {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                Self::from_json(&json).with_context(|| format!("Invalid config file {}", path))?
            }
            None => Config::default(),
        };

        if let Some(url) = var("ORPHANAGE_API_URL") {
            config.api_base_url = url;
        }

        if let Some(surface) = var("ORPHANAGE_SURFACE") {
            config.surface = surface.parse()?;
        }

        if let Some(max) = var("ORPHANAGE_ABOUT_MAX_LENGTH") {
            config.about_max_length = if max.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(
                    max.trim()
                        .parse()
                        .with_context(|| format!("Invalid ORPHANAGE_ABOUT_MAX_LENGTH: {}", max))?,
                )
            };
        }

        if let Some(secs) = var("ORPHANAGE_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = Some(
                secs.trim()
                    .parse()
                    .with_context(|| format!("Invalid ORPHANAGE_REQUEST_TIMEOUT_SECS: {}", secs))?,
            );
        }

        if let Some(token) = var("MAPBOX_TOKEN") {
            config.mapbox_token = Some(token);
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Tile URL template for the basemap. Mapbox is used when a token is
    /// configured, OpenStreetMap otherwise.
    pub fn tile_url_template(&self) -> String {
        match &self.mapbox_token {
            Some(token) => format!(
                "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/256/{{z}}/{{x}}/{{y}}@2x?access_token={}",
                token
            ),
            None => "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        }
    }
}

mod defaults {
    use super::Surface;

    pub fn api_base_url() -> String {
        "http://localhost:3333".into()
    }

    pub fn surface() -> Surface {
        Surface::Mobile
    }

    pub fn about_max_length() -> Option<usize> {
        Some(300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(config.surface, Surface::Mobile);
        assert_eq!(config.about_max_length, Some(300));
        assert!(config.request_timeout().is_none());
        assert_eq!(config.viewport, MapViewport::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ORPHANAGE_API_URL", "https://api.example.org"),
            ("ORPHANAGE_SURFACE", "Web"),
            ("ORPHANAGE_ABOUT_MAX_LENGTH", "none"),
            ("ORPHANAGE_REQUEST_TIMEOUT_SECS", "15"),
            ("MAPBOX_TOKEN", "pk.abc"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(config.surface, Surface::Web);
        assert_eq!(config.about_max_length, None);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert!(config.tile_url_template().ends_with("access_token=pk.abc"));
        assert!(config.tile_url_template().contains("/{z}/{x}/{y}@2x"));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[("ORPHANAGE_SURFACE", "desktop")])).is_err());
        assert!(Config::from_lookup(lookup(&[("ORPHANAGE_ABOUT_MAX_LENGTH", "lots")])).is_err());
    }

    #[test]
    fn test_json_config_fills_defaults() {
        let config = Config::from_json(r#"{"surface":"web","about_max_length":120}"#).unwrap();
        assert_eq!(config.surface, Surface::Web);
        assert_eq!(config.about_max_length, Some(120));
        assert_eq!(config.api_base_url, "http://localhost:3333");
        assert_eq!(
            config.tile_url_template(),
            "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
    }

    #[test]
    fn test_config_file_then_env_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orphanage.json");
        std::fs::write(
            &path,
            r#"{"api_base_url":"https://file.example.org","surface":"web","mapbox_token":"pk.file"}"#,
        )
        .unwrap();
        let path = path.display().to_string();

        let config = Config::from_lookup(lookup(&[
            ("ORPHANAGE_CONFIG", path.as_str()),
            ("ORPHANAGE_API_URL", "https://env.example.org"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://env.example.org");
        assert_eq!(config.surface, Surface::Web);
        assert_eq!(config.mapbox_token.as_deref(), Some("pk.file"));
        assert_eq!(config.about_max_length, Some(300));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json").display().to_string();
        assert!(Config::from_lookup(lookup(&[("ORPHANAGE_CONFIG", path.as_str())])).is_err());
    }
}
