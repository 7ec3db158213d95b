//! Export orchestration
//!
//! Renders every artifact in a fixed order, writes each one to its place
//! under the output root, then records the set in a Markdown manifest and
//! packs it into a zip archive.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use image::RgbaImage;
use storeshots_image::{load_rgba, save_png, ImageError};
use storeshots_paint::{Canvas, Size};
use storeshots_text::{FontWeight, TextPainter};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::compose::{render_feature_graphic, render_play_icon, render_screenshot};
use crate::config::{ScreenshotsConfig, StoreshotsConfig};
use crate::palette::DeviceClass;
use crate::screens::SCREENS;

pub const MANIFEST_FILE: &str = "manifest.md";
pub const MANIFEST_HEADER: &str = "# Generated Play Store Assets";

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Icon source missing: {}", path.display())]
    MissingIcon { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("Failed to write archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Every image written, in generation order
    pub generated: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub archive: PathBuf,
    /// Bullets left out of screenshots for lack of room, summed over all
    /// screenshots
    pub dropped_bullets: usize,
}

/// Generates the full asset set for one project root
pub struct Exporter {
    root: PathBuf,
    icon_source: PathBuf,
    output_dir: PathBuf,
    archive_name: String,
    counts: ScreenshotsConfig,
    painter: TextPainter,
    dropped_bullets: usize,
}

impl Exporter {
    /// Set up an export for `root`. Relative configured paths resolve
    /// against `root`.
    pub fn new(root: impl Into<PathBuf>, config: &StoreshotsConfig) -> Result<Self> {
        let root = root.into();
        let archive_name = config.paths.archive_name.trim().to_string();
        if archive_name.is_empty() || archive_name.contains(['/', '\\']) {
            return Err(ExportError::Config(format!(
                "archive_name must be a plain file name, got {:?}",
                config.paths.archive_name
            )));
        }

        Ok(Self {
            icon_source: root.join(&config.paths.icon_source),
            output_dir: root.join(&config.paths.output_dir),
            archive_name,
            counts: config.screenshots.clone(),
            painter: TextPainter::new(config.font_resolver(&root)),
            dropped_bullets: 0,
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn icon_source(&self) -> &Path {
        &self.icon_source
    }

    /// Generate every artifact, the manifest and the archive.
    ///
    /// Nothing is created when the source icon is missing.
    pub fn run(&mut self) -> Result<ExportReport> {
        if !self.icon_source.is_file() {
            return Err(ExportError::MissingIcon {
                path: self.icon_source.clone(),
            });
        }
        tracing::info!("generating store assets into {}", self.output_dir.display());

        if self.painter.resolve(32, FontWeight::Regular).is_builtin() {
            tracing::warn!("no outline fonts found; text will use the built-in bitmap font");
        }

        ensure_dir(&self.output_dir)?;
        let icon = self.load_icon()?;
        self.dropped_bullets = 0;

        let mut generated = vec![
            self.create_play_icon(&icon)?,
            self.create_feature_graphic(&icon)?,
        ];
        for device in DeviceClass::ALL {
            let folder = self.output_dir.join(device.folder());
            let count = self.counts.count(device);
            generated.extend(self.export_screenshot_set(&folder, device.size(), count)?);
        }

        let manifest = self.write_manifest(&generated)?;
        let archive = self.create_zip(&generated)?;
        tracing::info!("generated {} images", generated.len());

        Ok(ExportReport {
            generated,
            manifest,
            archive,
            dropped_bullets: self.dropped_bullets,
        })
    }

    fn load_icon(&self) -> Result<RgbaImage> {
        load_rgba(&self.icon_source).map_err(|e| match e {
            ImageError::NotFound { path } => ExportError::MissingIcon { path },
            other => ExportError::Image(other),
        })
    }

    /// Render and save the 512x512 store icon
    pub fn create_play_icon(&mut self, icon: &RgbaImage) -> Result<PathBuf> {
        let path = self.output_dir.join("icon").join("play-icon-512.png");
        self.save(render_play_icon(icon), &path)?;
        Ok(path)
    }

    /// Render and save the 1024x500 feature graphic
    pub fn create_feature_graphic(&mut self, icon: &RgbaImage) -> Result<PathBuf> {
        let path = self
            .output_dir
            .join("feature-graphic")
            .join("feature-graphic-1024x500.png");
        let canvas = render_feature_graphic(&mut self.painter, icon);
        self.save(canvas, &path)?;
        Ok(path)
    }

    /// Render the first `count` screens (capped at the table length) at
    /// `size` into `folder`, as `NN-<slug>.png`
    pub fn export_screenshot_set(
        &mut self,
        folder: &Path,
        size: Size,
        count: usize,
    ) -> Result<Vec<PathBuf>> {
        ensure_dir(folder)?;
        let mut files = Vec::with_capacity(count.min(SCREENS.len()));
        for (index, spec) in SCREENS.iter().take(count).enumerate() {
            let outcome = render_screenshot(&mut self.painter, size, spec, index);
            self.dropped_bullets += outcome.dropped_bullets;
            let path = folder.join(spec.file_name(index));
            self.save(outcome.canvas, &path)?;
            files.push(path);
        }
        Ok(files)
    }

    /// Write `manifest.md` listing `paths` relative to the project root
    pub fn write_manifest(&self, paths: &[PathBuf]) -> Result<PathBuf> {
        let path = self.output_dir.join(MANIFEST_FILE);
        let contents = manifest_contents(&self.root, paths);
        fs::write(&path, contents).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }

    /// Pack `paths` into the archive, named relative to the output root, in
    /// the given order
    pub fn create_zip(&self, paths: &[PathBuf]) -> Result<PathBuf> {
        let zip_path = self.output_dir.join(&self.archive_name);
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ExportError::Io { path, source }
        };
        let archive_err = |source: zip::result::ZipError| ExportError::Archive {
            path: zip_path.clone(),
            source,
        };

        let file = fs::File::create(&zip_path).map_err(io_err(&zip_path))?;
        let mut zip = ZipWriter::new(file);
        // Fixed timestamps keep reruns byte-identical
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for path in paths {
            let bytes = fs::read(path).map_err(io_err(path))?;
            zip.start_file(relative_posix(&self.output_dir, path), options)
                .map_err(archive_err)?;
            zip.write_all(&bytes).map_err(io_err(&zip_path))?;
        }
        zip.finish().map_err(archive_err)?;

        tracing::debug!("wrote {} ({} entries)", zip_path.display(), paths.len());
        Ok(zip_path)
    }

    /// `path` relative to the project root with `/` separators
    pub fn display_path(&self, path: &Path) -> String {
        relative_posix(&self.root, path)
    }

    fn save(&self, canvas: Canvas, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        save_png(&canvas.into_image(), path)?;
        tracing::debug!("wrote {}", self.display_path(path));
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Manifest text: header, blank line, then one `` - `path` `` line per file
/// sorted by relative path, with a trailing newline
pub fn manifest_contents(root: &Path, paths: &[PathBuf]) -> String {
    let mut entries: Vec<String> = paths.iter().map(|p| relative_posix(root, p)).collect();
    entries.sort();

    let mut lines = vec![MANIFEST_HEADER.to_string(), String::new()];
    lines.extend(entries.iter().map(|rel| format!("- `{}`", rel)));
    lines.join("\n") + "\n"
}

/// `path` relative to `base`, joined with `/`. Paths outside `base` are
/// kept whole.
pub fn relative_posix(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => Some(String::new()),
            Component::CurDir => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_posix() {
        let root = Path::new("/project");
        assert_eq!(
            relative_posix(root, Path::new("/project/store-assets/play/icon/play-icon-512.png")),
            "store-assets/play/icon/play-icon-512.png"
        );
        assert_eq!(relative_posix(root, Path::new("./a/b.png")), "a/b.png");
    }

    #[test]
    fn test_manifest_contents_sorted() {
        let root = Path::new("/p");
        let paths = vec![
            PathBuf::from("/p/out/screenshots-phone/01-a.png"),
            PathBuf::from("/p/out/icon/play-icon-512.png"),
            PathBuf::from("/p/out/feature-graphic/feature-graphic-1024x500.png"),
        ];
        assert_eq!(
            manifest_contents(root, &paths),
            "# Generated Play Store Assets\n\
             \n\
             - `out/feature-graphic/feature-graphic-1024x500.png`\n\
             - `out/icon/play-icon-512.png`\n\
             - `out/screenshots-phone/01-a.png`\n"
        );
    }

    #[test]
    fn test_manifest_contents_empty() {
        assert_eq!(manifest_contents(Path::new("/p"), &[]), "# Generated Play Store Assets\n\n");
    }

    #[test]
    fn test_archive_name_must_be_plain() {
        let mut config = StoreshotsConfig::default();
        config.paths.archive_name = "nested/assets.zip".to_string();
        assert!(matches!(
            Exporter::new("/tmp/project", &config),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn test_configured_paths_resolve_against_root() {
        let exporter = Exporter::new("/tmp/project", &StoreshotsConfig::default()).unwrap();
        assert_eq!(exporter.icon_source(), Path::new("/tmp/project/assets/icon.png"));
        assert_eq!(exporter.output_dir(), Path::new("/tmp/project/store-assets/play"));
    }
}
