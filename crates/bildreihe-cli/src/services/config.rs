// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings file loading and command-line overrides.

use std::path::Path;

use bildreihe_core::RowConfig;
use bildreihe_core::error::Result;
use tracing::{debug, info};

use crate::cli::Args;

/// Load settings from `path`, or use the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<RowConfig> {
    let Some(path) = path else {
        debug!("no settings file given, using defaults");
        return Ok(RowConfig::default());
    };
    let data = std::fs::read_to_string(path)?;
    let config = RowConfig::from_json(&data)?;
    info!(path = %path.display(), "settings loaded");
    Ok(config)
}

/// Apply command-line flags on top of file settings.
pub fn apply_overrides(config: &mut RowConfig, args: &Args) {
    if let Some(font) = &args.font {
        config.label_font = font.clone();
    }
    // Directories named on the command line are searched first.
    if !args.font_dirs.is_empty() {
        let mut dirs = args.font_dirs.clone();
        dirs.append(&mut config.font_dirs);
        config.font_dirs = dirs;
    }
}
