// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Label font resolution. A named TrueType font is looked up on disk and sized
// relative to the row height; when it cannot be loaded, the built-in bitmap
// font takes over and a warning is produced for the caller.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use bildreihe_core::ComposeWarning;
use image::{Rgb, RgbImage};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use super::bitmap;

/// Font requested when the caller does not name one.
pub const DEFAULT_LABEL_FONT: &str = "arial.ttf";

/// Label font size as a fraction of the target height.
pub const FONT_SIZE_RATIO: f64 = 0.1;

/// Distance of every label from the left edge of its image.
pub const LABEL_MARGIN_X: i32 = 10;

/// Distance of a fallback-font label's top edge from the bottom of the image.
pub const FALLBACK_BOTTOM_OFFSET: i32 = 25;

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Where to look for the label font.
#[derive(Debug, Clone)]
pub struct FontSource {
    name: String,
    search_dirs: Vec<PathBuf>,
    system_dirs: bool,
}

impl Default for FontSource {
    fn default() -> Self {
        Self::named(DEFAULT_LABEL_FONT)
    }
}

impl FontSource {
    /// Look for `name` (a file name such as `arial.ttf`, or a path).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_dirs: Vec::new(),
            system_dirs: true,
        }
    }

    /// Search these directories before the platform font directories.
    pub fn with_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.search_dirs.extend(dirs);
        self
    }

    /// Skip the platform font directories.
    pub fn without_system_dirs(mut self) -> Self {
        self.system_dirs = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Find the font file. A name that is an existing file is used as-is;
    /// otherwise directories are walked for a case-insensitive file name match.
    pub fn locate(&self) -> Option<PathBuf> {
        let direct = Path::new(&self.name);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }

        let wanted = direct.file_name()?.to_string_lossy().to_lowercase();
        let system = if self.system_dirs {
            system_font_dirs()
        } else {
            Vec::new()
        };

        self.search_dirs
            .iter()
            .chain(system.iter())
            .filter(|dir| dir.is_dir())
            .flat_map(|dir| WalkDir::new(dir).follow_links(true).into_iter())
            .filter_map(|entry| entry.ok())
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_string_lossy().to_lowercase() == wanted
            })
            .map(walkdir::DirEntry::into_path)
    }

    /// Locate, read, and parse the font. `None` on any failure.
    pub fn load(&self) -> Option<FontVec> {
        let path = self.locate()?;
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Font file unreadable");
                return None;
            }
        };
        match FontVec::try_from_vec(data) {
            Ok(font) => {
                debug!(path = %path.display(), "Label font loaded");
                Some(font)
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Font file is not a usable font");
                None
            }
        }
    }
}

/// Conventional font directories for the current platform.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = std::env::var_os("HOME").map(PathBuf::from);

    if cfg!(target_os = "windows") {
        if let Some(windir) = std::env::var_os("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        }
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join("Microsoft").join("Windows").join("Fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library").join("Fonts"));
        }
    } else {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            dirs.push(PathBuf::from(xdg).join("fonts"));
        }
        if let Some(home) = &home {
            dirs.push(home.join(".local").join("share").join("fonts"));
            dirs.push(home.join(".fonts"));
        }
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        dirs.push(PathBuf::from("/usr/share/fonts"));
    }
    dirs
}

/// Font size in pixels for a row of `target_height`: `round(0.1 * height)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn font_size_for(target_height: u32) -> u32 {
    (f64::from(target_height) * FONT_SIZE_RATIO).round() as u32
}

/// The font labels are drawn with for one compositing request.
pub enum LabelFont {
    /// The requested font, loaded and sized for the row.
    System { font: FontVec, size: u32 },
    /// The requested font was unavailable; the built-in bitmap font is used.
    Fallback { requested: String },
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System { size, .. } => f.debug_struct("System").field("size", size).finish(),
            Self::Fallback { requested } => f
                .debug_struct("Fallback")
                .field("requested", requested)
                .finish(),
        }
    }
}

impl LabelFont {
    /// Resolve the label font for rows of `target_height`.
    #[instrument(skip(source), fields(font = source.name()))]
    pub fn resolve(source: &FontSource, target_height: u32) -> Self {
        match source.load() {
            Some(font) => {
                let size = font_size_for(target_height);
                info!(size, "Using label font");
                Self::System { font, size }
            }
            None => {
                warn!("Label font not found, using built-in default");
                Self::Fallback {
                    requested: source.name().to_owned(),
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Warning to pass on to the caller, present only on the fallback branch.
    pub fn warning(&self) -> Option<ComposeWarning> {
        match self {
            Self::System { .. } => None,
            Self::Fallback { requested } => Some(ComposeWarning::FontFallback {
                requested: requested.clone(),
            }),
        }
    }

    /// Top-left corner of the label on an image of `target_height`.
    pub fn origin(&self, target_height: u32) -> (i32, i32) {
        let system_size = match self {
            Self::System { size, .. } => Some(*size),
            Self::Fallback { .. } => None,
        };
        label_origin(system_size, target_height)
    }

    /// Burn `text` into `canvas` near its bottom-left corner, in black.
    pub fn draw(&self, canvas: &mut RgbImage, text: &str) {
        let (x, y) = self.origin(canvas.height());
        match self {
            Self::System { font, size } => {
                #[allow(clippy::cast_precision_loss)]
                let scale = PxScale::from(*size as f32);
                imageproc::drawing::draw_text_mut(canvas, LABEL_COLOR, x, y, scale, font, text);
            }
            Self::Fallback { .. } => {
                bitmap::draw_text_mut(canvas, LABEL_COLOR, x, y, text);
            }
        }
    }
}

/// Top-left corner of a label. `system_size` is the size of a loaded system
/// font, `None` for the built-in one: `(10, H - round(1.5 * size))` or
/// `(10, H - 25)`.
pub fn label_origin(system_size: Option<u32>, target_height: u32) -> (i32, i32) {
    let height = i32::try_from(target_height).unwrap_or(i32::MAX);
    let offset = match system_size {
        Some(size) => system_label_offset(size),
        None => FALLBACK_BOTTOM_OFFSET,
    };
    (LABEL_MARGIN_X, height.saturating_sub(offset))
}

/// Vertical distance of a system-font label from the bottom: 1.5 x font size.
#[allow(clippy::cast_possible_truncation)]
fn system_label_offset(size: u32) -> i32 {
    (f64::from(size) * 1.5).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_font() -> FontSource {
        FontSource::named("no-such-font-for-labels.ttf").without_system_dirs()
    }

    #[test]
    fn font_size_is_tenth_of_height() {
        assert_eq!(font_size_for(400), 40);
        assert_eq!(font_size_for(250), 25);
        assert_eq!(font_size_for(800), 80);
    }

    #[test]
    fn system_offset_is_one_and_a_half_sizes() {
        assert_eq!(system_label_offset(40), 60);
        assert_eq!(system_label_offset(25), 38);
    }

    #[test]
    fn missing_font_falls_back_with_warning() {
        let font = LabelFont::resolve(&missing_font(), 400);
        assert!(font.is_fallback());
        assert_eq!(
            font.warning(),
            Some(ComposeWarning::FontFallback {
                requested: "no-such-font-for-labels.ttf".into()
            })
        );
    }

    #[test]
    fn fallback_origin_is_fixed_offset() {
        let font = LabelFont::resolve(&missing_font(), 400);
        assert_eq!(font.origin(400), (10, 375));
        assert_eq!(font.origin(200), (10, 175));
    }

    #[test]
    fn system_font_label_sits_one_and_a_half_sizes_up() {
        assert_eq!(label_origin(Some(font_size_for(400)), 400), (10, 340));
        assert_eq!(label_origin(Some(font_size_for(250)), 250), (10, 212));
        assert_eq!(label_origin(None, 400), (10, 375));
    }

    #[test]
    fn branches_place_labels_differently() {
        let size = font_size_for(800);
        assert_ne!(label_origin(Some(size), 800), label_origin(None, 800));
        assert_eq!(label_origin(Some(size), 800), (10, 680));
    }

    #[test]
    fn tiny_heights_put_label_above_canvas_without_overflow() {
        assert_eq!(label_origin(None, 1), (10, -24));
        assert_eq!(label_origin(Some(font_size_for(3)), 3), (10, 3));
    }

    #[test]
    fn locate_matches_file_name_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("msttcore");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Arial.TTF"), b"x").unwrap();

        let source = FontSource::named("arial.ttf")
            .with_dirs([dir.path().to_path_buf()])
            .without_system_dirs();
        assert_eq!(source.locate(), Some(nested.join("Arial.TTF")));
    }

    #[test]
    fn direct_path_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.ttf");
        std::fs::write(&path, b"x").unwrap();

        let source = FontSource::named(path.to_string_lossy()).without_system_dirs();
        assert_eq!(source.locate(), Some(path));
    }

    #[test]
    fn unparsable_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("arial.ttf"), b"not a font at all").unwrap();

        let source = FontSource::named("arial.ttf")
            .with_dirs([dir.path().to_path_buf()])
            .without_system_dirs();
        assert!(source.locate().is_some());
        assert!(source.load().is_none());
        assert!(LabelFont::resolve(&source, 300).is_fallback());
    }

    #[test]
    fn fallback_draws_black_label_in_bottom_left() {
        let font = LabelFont::resolve(&missing_font(), 200);
        let mut canvas = RgbImage::from_pixel(60, 200, Rgb([255, 255, 255]));
        font.draw(&mut canvas, "b");

        let black: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == LABEL_COLOR)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!black.is_empty());
        assert!(black.iter().all(|&(x, y)| x >= 10 && x < 30 && y >= 175 && y < 200));
    }
}
