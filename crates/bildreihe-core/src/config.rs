// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller policy configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BildreiheError, Result};

/// Limits and defaults applied by whoever drives the compositor.
///
/// The compositor itself only sees images and a height; everything here is
/// enforced before it is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RowConfig {
    /// Maximum number of images in one row. Extra inputs are dropped.
    pub max_images: usize,
    /// Smallest selectable target height in pixels.
    pub min_height: u32,
    /// Largest selectable target height in pixels.
    pub max_height: u32,
    /// Heights must be `min_height` plus a multiple of this step.
    pub height_step: u32,
    /// Height used when none is given.
    pub default_height: u32,
    /// Suggested file name for the composite.
    pub output_file_name: String,
    /// File name (or path) of the preferred label font.
    pub label_font: String,
    /// Extra directories searched for `label_font` before the platform ones.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            max_images: 5,
            min_height: 200,
            max_height: 800,
            height_step: 50,
            default_height: 400,
            output_file_name: "medical_evolution_row_a_to_e.png".into(),
            label_font: "arial.ttf".into(),
            font_dirs: Vec::new(),
        }
    }
}

impl RowConfig {
    /// Check `height` against the bounded, stepped range.
    pub fn validate_height(&self, height: u32) -> Result<u32> {
        let in_range = (self.min_height..=self.max_height).contains(&height);
        let on_step = self.height_step == 0
            || height.saturating_sub(self.min_height) % self.height_step == 0;
        if in_range && on_step {
            Ok(height)
        } else {
            Err(BildreiheError::HeightOutOfRange {
                height,
                min: self.min_height,
                max: self.max_height,
                step: self.height_step,
            })
        }
    }

    /// Reject settings that would make every run a no-op.
    pub fn validate(&self) -> Result<()> {
        if self.max_images == 0 {
            return Err(BildreiheError::InvalidConfig(
                "max_images must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
