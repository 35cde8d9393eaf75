//! Mask image lookup.
//!
//! The mask only decides the view size here; compositing the mask over the
//! gradient is left to the host surface.

use std::path::{Path, PathBuf};

use glam::DVec2;
use rustc_hash::FxHashMap;

/// A named mask image and its pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskImage {
    /// Asset name the mask was looked up by.
    pub name: String,
    /// Width and height in pixels.
    pub size: DVec2,
}

impl MaskImage {
    /// Mask of the given size.
    #[must_use]
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            size: DVec2::new(width, height),
        }
    }

    /// Whether the mask covers a finite, non-empty area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Source of mask images by asset name.
pub trait MaskProvider {
    /// Look up a mask by name. `None` if no such asset exists.
    fn mask(&self, name: &str) -> Option<MaskImage>;
}

/// In-memory mask registry.
#[derive(Debug, Clone, Default)]
pub struct MaskLibrary {
    masks: FxHashMap<String, DVec2>,
}

impl MaskLibrary {
    /// Empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a mask size under `name`.
    pub fn insert(&mut self, name: impl Into<String>, width: f64, height: f64) {
        let _ = self.masks.insert(name.into(), DVec2::new(width, height));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(
        mut self,
        name: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Self {
        self.insert(name, width, height);
        self
    }

    /// Number of registered masks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Whether no masks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

impl MaskProvider for MaskLibrary {
    fn mask(&self, name: &str) -> Option<MaskImage> {
        self.masks.get(name).map(|size| MaskImage {
            name: name.to_owned(),
            size: *size,
        })
    }
}

/// Masks stored as PNG files in a directory.
///
/// `name` resolves to `<dir>/<name>` if that file exists, otherwise
/// `<dir>/<name>.png`. Only the image header is read.
#[derive(Debug, Clone)]
pub struct MaskDirectory {
    root: PathBuf,
}

impl MaskDirectory {
    /// Directory-backed provider rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory masks are looked up in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let exact = self.root.join(name);
        if exact.is_file() {
            return Some(exact);
        }
        let png = self.root.join(format!("{name}.png"));
        png.is_file().then_some(png)
    }
}

impl MaskProvider for MaskDirectory {
    fn mask(&self, name: &str) -> Option<MaskImage> {
        let path = self.resolve(name)?;
        match image::image_dimensions(&path) {
            Ok((w, h)) => {
                Some(MaskImage::new(name, f64::from(w), f64::from(h)))
            }
            Err(e) => {
                log::warn!("unreadable mask {}: {e}", path.display());
                None
            }
        }
    }
}
