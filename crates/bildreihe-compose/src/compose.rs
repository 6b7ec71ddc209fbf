// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image row compositor — rescales every input to one height, labels it with
// its position, and joins the results left to right into a single PNG.

use bildreihe_core::error::{BildreiheError, Result};
use bildreihe_core::{ComposeWarning, Label};
use image::{Rgb, RgbImage, imageops};
use tracing::{debug, info, instrument, warn};

use crate::image::processor::{ImageProcessor, encode_png};
use crate::label::{FontSource, LabelFont};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Where one input ended up in the composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub label: Label,
    /// Left edge in the composite.
    pub x_offset: u32,
    /// Width after rescaling.
    pub width: u32,
}

/// A finished row.
#[derive(Debug, Clone)]
pub struct CompositeImage {
    /// PNG-encoded composite.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// One entry per input, in input order.
    pub tiles: Vec<TilePlacement>,
    /// Set when labels had to be drawn with the built-in font.
    pub warning: Option<ComposeWarning>,
}

/// Joins labelled images into one row.
///
/// Each call is self-contained: nothing is cached between requests.
#[derive(Debug, Clone, Default)]
pub struct RowCompositor {
    font_source: FontSource,
}

impl RowCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific label font instead of the default lookup.
    pub fn with_font_source(font_source: FontSource) -> Self {
        Self { font_source }
    }

    /// Compose `images` (encoded PNG/JPEG buffers, in display order) into one
    /// row of `target_height` pixels.
    ///
    /// Returns `Ok(None)` for an empty list. A buffer that fails to decode
    /// aborts the whole row with [`BildreiheError::Decode`] naming its
    /// 1-indexed position; nothing is produced in that case.
    #[instrument(skip(self, images), fields(count = images.len()))]
    pub fn compose<B: AsRef<[u8]>>(
        &self,
        images: &[B],
        target_height: u32,
    ) -> Result<Option<CompositeImage>> {
        if images.is_empty() {
            debug!("No images supplied, nothing to compose");
            return Ok(None);
        }
        if target_height == 0 {
            return Err(BildreiheError::InvalidHeight(target_height));
        }

        let font = LabelFont::resolve(&self.font_source, target_height);
        let warning = font.warning();
        if let Some(warning) = &warning {
            warn!(%warning, "Labels use the fallback font");
        }

        let mut tiles = Vec::with_capacity(images.len());
        for (index, data) in images.iter().enumerate() {
            let position = index + 1;
            let mut tile = ImageProcessor::from_bytes(data.as_ref(), position)?
                .resize_to_height(target_height)
                .into_rgb();
            let label = Label::for_position(position);
            font.draw(&mut tile, label.as_str());
            debug!(position, %label, width = tile.width(), "Tile ready");
            tiles.push((label, tile));
        }

        let total_width = tiles
            .iter()
            .try_fold(0u32, |sum, (_, tile)| sum.checked_add(tile.width()))
            .ok_or_else(|| BildreiheError::Encode("composite wider than u32::MAX pixels".into()))?;

        let mut canvas = RgbImage::from_pixel(total_width, target_height, BACKGROUND);
        let mut placements = Vec::with_capacity(tiles.len());
        let mut x_offset = 0u32;
        for (label, tile) in tiles {
            imageops::replace(&mut canvas, &tile, i64::from(x_offset), 0);
            placements.push(TilePlacement {
                label,
                x_offset,
                width: tile.width(),
            });
            x_offset += tile.width();
        }

        let png = encode_png(&canvas)?;
        info!(
            width = total_width,
            height = target_height,
            bytes = png.len(),
            fallback_font = font.is_fallback(),
            "Row composed"
        );

        Ok(Some(CompositeImage {
            png,
            width: total_width,
            height: target_height,
            tiles: placements,
            warning,
        }))
    }
}

/// Compose with the default label font lookup.
pub fn compose<B: AsRef<[u8]>>(images: &[B], target_height: u32) -> Result<Option<CompositeImage>> {
    RowCompositor::new().compose(images, target_height)
}
