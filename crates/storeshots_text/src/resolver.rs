//! Font resolution with graceful degradation
//!
//! A resolver walks an ordered list of candidate font files and returns the
//! first one that applies to the requested weight and loads cleanly. When no
//! candidate loads it can ask the system font database for a sans-serif
//! face, and as a last resort hands out the built-in bitmap font. Resolution
//! never fails; the [`FontSource`] of the result says how far it had to fall.

use crate::font::{Font, FontFace};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Requested font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Numeric weight (400 or 700)
    pub fn weight(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// A font file that applies to one weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub weight: FontWeight,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, weight: FontWeight) -> Self {
        Self {
            path: path.into(),
            weight,
        }
    }

    pub fn regular(path: impl Into<PathBuf>) -> Self {
        Self::new(path, FontWeight::Regular)
    }

    pub fn bold(path: impl Into<PathBuf>) -> Self {
        Self::new(path, FontWeight::Bold)
    }
}

/// The stock candidate list: Windows UI fonts first, then common Linux and
/// macOS sans-serif files.
pub fn builtin_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::bold("C:/Windows/Fonts/segoeuib.ttf"),
        FontCandidate::regular("C:/Windows/Fonts/segoeui.ttf"),
        FontCandidate::bold("C:/Windows/Fonts/arialbd.ttf"),
        FontCandidate::regular("C:/Windows/Fonts/arial.ttf"),
        FontCandidate::bold("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
        FontCandidate::regular("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        FontCandidate::bold("/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf"),
        FontCandidate::regular("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
        FontCandidate::bold("/Library/Fonts/Arial Bold.ttf"),
        FontCandidate::regular("/Library/Fonts/Arial.ttf"),
        FontCandidate::bold("/System/Library/Fonts/Supplemental/Arial Bold.ttf"),
        FontCandidate::regular("/System/Library/Fonts/Supplemental/Arial.ttf"),
    ]
}

/// Where a resolved font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A candidate file, by path
    Candidate(PathBuf),
    /// The system font database, by family name
    System(String),
    /// The built-in bitmap font
    Builtin,
}

/// A usable font plus how it was found
#[derive(Debug, Clone)]
pub struct ResolvedFont {
    pub font: Font,
    pub source: FontSource,
}

impl ResolvedFont {
    pub fn is_builtin(&self) -> bool {
        self.source == FontSource::Builtin
    }
}

/// Resolves (size, weight) requests to fonts, caching loaded faces by path
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
    system_fallback: bool,
    /// Loaded faces by path (Some = loaded, None = missing or broken)
    faces: FxHashMap<PathBuf, Option<Arc<FontFace>>>,
    /// Lazily scanned system font database
    system_db: Option<Database>,
    /// System faces by weight (Some = found, None = not found)
    system_faces: FxHashMap<u16, Option<(String, Arc<FontFace>)>>,
}

impl FontResolver {
    /// A resolver over the stock candidates with system lookup enabled
    pub fn new() -> Self {
        Self::with_candidates(builtin_candidates())
    }

    /// A resolver over an explicit candidate list
    pub fn with_candidates(candidates: Vec<FontCandidate>) -> Self {
        Self {
            candidates,
            system_fallback: true,
            faces: FxHashMap::default(),
            system_db: None,
            system_faces: FxHashMap::default(),
        }
    }

    /// Put `extra` ahead of the current candidates, keeping its order
    pub fn prepend_candidates(&mut self, extra: impl IntoIterator<Item = FontCandidate>) {
        let mut merged: Vec<FontCandidate> = extra.into_iter().collect();
        merged.append(&mut self.candidates);
        self.candidates = merged;
    }

    /// Enable or disable the system font database fallback
    pub fn system_fallback(mut self, enabled: bool) -> Self {
        self.system_fallback = enabled;
        self
    }

    pub fn candidates(&self) -> &[FontCandidate] {
        &self.candidates
    }

    /// Resolve a font for `size` px at `weight`. Never fails.
    ///
    /// A zero size cannot be rendered by an outline font and resolves to the
    /// built-in font directly.
    pub fn resolve(&mut self, size: u32, weight: FontWeight) -> ResolvedFont {
        if size == 0 {
            return Self::builtin();
        }

        let applicable: Vec<PathBuf> = self
            .candidates
            .iter()
            .filter(|c| c.weight == weight)
            .map(|c| c.path.clone())
            .collect();
        for path in applicable {
            if let Some(face) = self.load_candidate(&path) {
                tracing::trace!("resolved {:?} {}px to {:?}", weight, size, path);
                return ResolvedFont {
                    font: Font::outline(face, size as f32),
                    source: FontSource::Candidate(path),
                };
            }
        }

        if self.system_fallback {
            if let Some((family, face)) = self.load_system(weight) {
                tracing::trace!("resolved {:?} {}px to system family {}", weight, size, family);
                return ResolvedFont {
                    font: Font::outline(face, size as f32),
                    source: FontSource::System(family),
                };
            }
        }

        tracing::debug!(
            "no font available for {:?} {}px, using built-in bitmap font",
            weight,
            size
        );
        Self::builtin()
    }

    fn builtin() -> ResolvedFont {
        ResolvedFont {
            font: Font::builtin(),
            source: FontSource::Builtin,
        }
    }

    fn load_candidate(&mut self, path: &Path) -> Option<Arc<FontFace>> {
        if let Some(cached) = self.faces.get(path) {
            return cached.clone();
        }

        let loaded = if path.is_file() {
            match FontFace::from_file(path) {
                Ok(face) => {
                    tracing::debug!("loaded font {:?} ({})", path, face.family_name());
                    Some(Arc::new(face))
                }
                Err(e) => {
                    tracing::warn!("Failed to load font {:?}: {}", path, e);
                    None
                }
            }
        } else {
            None
        };

        self.faces.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    fn load_system(&mut self, weight: FontWeight) -> Option<(String, Arc<FontFace>)> {
        let key = weight.weight();
        if let Some(cached) = self.system_faces.get(&key) {
            return cached.clone();
        }

        let db: &Database = self.system_db.get_or_insert_with(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            tracing::debug!("scanned {} system font faces", db.len());
            db
        });

        let found = Self::query_sans_serif(db, key).and_then(|id| {
            let family = db
                .face(id)
                .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
                .unwrap_or_default();
            match Self::load_face_by_id(db, id) {
                Ok(face) => Some((family, Arc::new(face))),
                Err(e) => {
                    tracing::warn!("Failed to load system font {}: {}", family, e);
                    None
                }
            }
        });

        self.system_faces.insert(key, found.clone());
        found
    }

    /// The generic sans-serif family at `weight`, or failing that any
    /// upright face of that weight
    fn query_sans_serif(db: &Database, weight: u16) -> Option<fontdb::ID> {
        let query = Query {
            families: &[Family::SansSerif],
            weight: Weight(weight),
            style: Style::Normal,
            stretch: Stretch::Normal,
        };
        db.query(&query).or_else(|| {
            db.faces()
                .find(|face| face.weight == Weight(weight) && face.style == Style::Normal)
                .map(|face| face.id)
        })
    }

    fn load_face_by_id(db: &Database, id: fontdb::ID) -> crate::Result<FontFace> {
        let (src, face_index) = db.face_source(id).ok_or_else(|| {
            crate::TextError::FontLoadError("Font source not found".to_string())
        })?;

        let data = match src {
            Source::File(path) => std::fs::read(&path).map_err(|e| {
                crate::TextError::FontLoadError(format!(
                    "Failed to read font file {:?}: {}",
                    path, e
                ))
            })?,
            Source::Binary(arc) => arc.as_ref().as_ref().to_vec(),
            Source::SharedFile(_path, data) => data.as_ref().as_ref().to_vec(),
        };

        FontFace::from_data_with_index(data, face_index)
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}
