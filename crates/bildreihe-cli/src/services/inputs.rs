// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input collection — file type check, image count limit, reading bytes.

use std::path::{Path, PathBuf};

use bildreihe_core::error::{BildreiheError, Result};
use bildreihe_core::ImageType;
use tracing::{debug, warn};

/// Images accepted for one row, already read into memory.
#[derive(Debug)]
pub struct InputBatch {
    pub paths: Vec<PathBuf>,
    /// Type of each kept input, from its extension.
    pub types: Vec<ImageType>,
    pub buffers: Vec<Vec<u8>>,
    /// Inputs given beyond the limit and left out.
    pub dropped: usize,
    /// The limit that was applied.
    pub max_images: usize,
}

impl InputBatch {
    /// Error describing the truncation, if any inputs were dropped.
    pub fn truncation(&self) -> Option<BildreiheError> {
        (self.dropped > 0).then(|| BildreiheError::TooManyImages {
            given: self.paths.len() + self.dropped,
            max: self.max_images,
        })
    }
}

/// Keep the first `max_images` paths, check each kept one is a PNG or JPEG
/// by extension, and read them. Dropped paths are not inspected.
pub fn collect_inputs(paths: &[PathBuf], max_images: usize) -> Result<InputBatch> {
    let kept = &paths[..paths.len().min(max_images)];
    let dropped = paths.len() - kept.len();
    if dropped > 0 {
        warn!(given = paths.len(), max_images, "too many images, extra inputs dropped");
    }

    let types = kept
        .iter()
        .map(|path| image_type(path))
        .collect::<Result<Vec<_>>>()?;

    let mut buffers = Vec::with_capacity(kept.len());
    for (path, kind) in kept.iter().zip(&types) {
        let data = std::fs::read(path)?;
        debug!(
            path = %path.display(),
            mime = kind.mime_type(),
            bytes = data.len(),
            "input read"
        );
        buffers.push(data);
    }

    Ok(InputBatch {
        paths: kept.to_vec(),
        types,
        buffers,
        dropped,
        max_images,
    })
}

fn image_type(path: &Path) -> Result<ImageType> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageType::from_extension)
        .ok_or_else(|| BildreiheError::UnsupportedImage(path.display().to_string()))
}
