//! storeshots.toml configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use storeshots_text::{FontCandidate, FontResolver};

use crate::palette::DeviceClass;

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE: &str = "storeshots.toml";

/// Top-level configuration (storeshots.toml). Every field has a default, so
/// an empty file or no file at all is valid.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreshotsConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fonts: FontsConfig,
    #[serde(default)]
    pub screenshots: ScreenshotsConfig,
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_icon_source")]
    pub icon_source: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

fn default_icon_source() -> PathBuf {
    PathBuf::from("assets/icon.png")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("store-assets/play")
}

fn default_archive_name() -> String {
    "events-play-assets.zip".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            icon_source: default_icon_source(),
            output_dir: default_output_dir(),
            archive_name: default_archive_name(),
        }
    }
}

/// Font lookup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontsConfig {
    /// Extra regular-weight font files, tried before the stock list
    #[serde(default)]
    pub regular: Vec<PathBuf>,
    /// Extra bold font files, tried before the stock list
    #[serde(default)]
    pub bold: Vec<PathBuf>,
    /// Fall back to the system font database before the bitmap font
    #[serde(default = "default_true")]
    pub system_fallback: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            regular: Vec::new(),
            bold: Vec::new(),
            system_fallback: true,
        }
    }
}

/// Screens rendered per device class
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScreenshotsConfig {
    #[serde(default = "default_phone")]
    pub phone: usize,
    #[serde(default = "default_tablet")]
    pub tablet_7: usize,
    #[serde(default = "default_tablet")]
    pub tablet_10: usize,
}

fn default_phone() -> usize {
    DeviceClass::Phone.default_count()
}

fn default_tablet() -> usize {
    DeviceClass::Tablet7.default_count()
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            tablet_7: default_tablet(),
            tablet_10: default_tablet(),
        }
    }
}

impl ScreenshotsConfig {
    pub fn count(&self, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Phone => self.phone,
            DeviceClass::Tablet7 => self.tablet_7,
            DeviceClass::Tablet10 => self.tablet_10,
        }
    }
}

impl StoreshotsConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: StoreshotsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Load `storeshots.toml` from a project root, or the defaults when the
    /// file does not exist
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// A font resolver with the configured files ahead of the stock list.
    ///
    /// Relative font paths resolve against `root`.
    pub fn font_resolver(&self, root: &Path) -> FontResolver {
        let extra = self
            .fonts
            .regular
            .iter()
            .map(|p| FontCandidate::regular(root.join(p)))
            .chain(self.fonts.bold.iter().map(|p| FontCandidate::bold(root.join(p))));

        let mut resolver = FontResolver::new().system_fallback(self.fonts.system_fallback);
        resolver.prepend_candidates(extra);
        resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StoreshotsConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreshotsConfig::default());
        assert_eq!(config.paths.icon_source, PathBuf::from("assets/icon.png"));
        assert_eq!(config.paths.output_dir, PathBuf::from("store-assets/play"));
        assert_eq!(config.paths.archive_name, "events-play-assets.zip");
        assert!(config.fonts.system_fallback);
        assert_eq!(config.screenshots.count(DeviceClass::Phone), 8);
        assert_eq!(config.screenshots.count(DeviceClass::Tablet10), 6);
    }

    #[test]
    fn test_partial_config() {
        let config: StoreshotsConfig = toml::from_str(
            r#"
            [paths]
            output_dir = "out/play"

            [fonts]
            bold = ["fonts/Inter-Bold.ttf"]
            system_fallback = false

            [screenshots]
            tablet_7 = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.paths.output_dir, PathBuf::from("out/play"));
        assert_eq!(config.paths.icon_source, PathBuf::from("assets/icon.png"));
        assert_eq!(config.fonts.bold, vec![PathBuf::from("fonts/Inter-Bold.ttf")]);
        assert!(!config.fonts.system_fallback);
        assert_eq!(config.screenshots.tablet_7, 2);
        assert_eq!(config.screenshots.phone, 8);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = StoreshotsConfig::default();
        config.screenshots.phone = 3;
        let text = config.to_toml().unwrap();
        let parsed: StoreshotsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreshotsConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, StoreshotsConfig::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[screenshots]\nphone = \"many\"\n").unwrap();
        let err = StoreshotsConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn test_font_resolver_prepends_configured_files() {
        let mut config = StoreshotsConfig::default();
        config.fonts.regular = vec![PathBuf::from("fonts/a.ttf")];
        config.fonts.bold = vec![PathBuf::from("fonts/b.ttf")];
        let resolver = config.font_resolver(Path::new("/project"));
        let candidates = resolver.candidates();
        assert_eq!(candidates[0], FontCandidate::regular("/project/fonts/a.ttf"));
        assert_eq!(candidates[1], FontCandidate::bold("/project/fonts/b.ttf"));
    }
}
