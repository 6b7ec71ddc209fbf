// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bildreihe image row compositor.

use serde::{Deserialize, Serialize};

/// Letters used for the first positions in a row. Positions past the end of
/// this table are labelled with their decimal index instead.
pub const LETTER_LABELS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Positional marker burned into each image of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Label for a 1-indexed `position`.
    ///
    /// Positions 1 through [`LETTER_LABELS`]`.len()` map to `"a"`..`"e"`.
    /// Every other position, including 0, is rendered as its decimal string,
    /// so a sixth image is labelled `"6"`.
    pub fn for_position(position: usize) -> Self {
        let text = position
            .checked_sub(1)
            .and_then(|index| LETTER_LABELS.get(index))
            .map(|letter| (*letter).to_owned())
            .unwrap_or_else(|| position.to_string());
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input image types accepted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Png,
    Jpeg,
}

impl ImageType {
    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Infer image type from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Non-fatal condition reported alongside a successful composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComposeWarning {
    /// The named label font could not be loaded; labels were drawn with the
    /// built-in default font instead.
    FontFallback { requested: String },
}

impl std::fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FontFallback { requested } => write!(
                f,
                "{requested} font not found. Using default font for labels."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_five_positions_are_letters() {
        let labels: Vec<String> = (1..=5)
            .map(|i| Label::for_position(i).to_string())
            .collect();
        assert_eq!(labels, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn sixth_position_falls_back_to_number() {
        assert_eq!(Label::for_position(6).as_str(), "6");
        assert_eq!(Label::for_position(12).as_str(), "12");
    }

    #[test]
    fn zero_position_is_numeric() {
        assert_eq!(Label::for_position(0).as_str(), "0");
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(ImageType::from_extension("JPG"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_extension("jpeg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_extension("Png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_extension("gif"), None);
    }

    #[test]
    fn font_fallback_warning_names_font() {
        let warning = ComposeWarning::FontFallback {
            requested: "arial.ttf".into(),
        };
        assert!(warning.to_string().starts_with("arial.ttf font not found"));
    }
}
