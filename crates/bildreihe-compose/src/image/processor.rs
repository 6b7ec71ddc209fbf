// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, normalise to RGB, and rescale to a target height.
// Operates on in-memory images using the `image` crate.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbImage};
use bildreihe_core::error::{BildreiheError, Result};
use tracing::{debug, instrument};

/// One input of a row, held as 8-bit RGB.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so a
/// tile is built by chaining:
///
/// ```ignore
/// let tile = ImageProcessor::from_bytes(&data, 1)?
///     .resize_to_height(400)
///     .into_rgb();
/// ```
pub struct ImageProcessor {
    image: RgbImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode raw encoded bytes (PNG, JPEG, ...) for the input at the 1-indexed
    /// `position`. Any pixel format is flattened to RGB.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8], position: usize) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| BildreiheError::Decode {
            position,
            reason: err.to_string(),
        })?;
        if img.width() == 0 || img.height() == 0 {
            return Err(BildreiheError::Decode {
                position,
                reason: format!("image has no pixels ({}x{})", img.width(), img.height()),
            });
        }
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded `DynamicImage`, flattening it to RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the processor and return the RGB buffer.
    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Rescale so the height is exactly `target_height`.
    ///
    /// The width is derived from the height ratio (see [`scaled_width`]), so
    /// the aspect ratio survives even though the resize itself is exact.
    pub fn resize_to_height(self, target_height: u32) -> Self {
        let new_width = scaled_width(self.width(), self.height(), target_height);
        debug!(
            from_w = self.width(),
            from_h = self.height(),
            new_width,
            target_height,
            "Resizing image"
        );
        if new_width == self.width() && target_height == self.height() {
            return self;
        }
        let resized = imageops::resize(&self.image, new_width, target_height, FilterType::CatmullRom);
        Self { image: resized }
    }
}

/// Width of a `width` x `height` image rescaled to `target_height`:
/// `round(width * target_height / height)`, never less than one pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> u32 {
    let ratio = f64::from(target_height) / f64::from(height.max(1));
    let scaled = (f64::from(width) * ratio).round();
    // Clamped before casting.
    scaled.clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Encode an RGB buffer as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| BildreiheError::Encode(err.to_string()))?;
    Ok(buffer)
}
