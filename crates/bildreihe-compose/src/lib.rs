// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildreihe-compose — The image row compositor.
//
// Decodes a handful of images, rescales each to a shared height, burns a
// positional label (a, b, c, ...) into its bottom-left corner, and joins them
// left to right into one PNG.

pub mod compose;
pub mod image;
pub mod integrity;
pub mod label;

// Re-export the primary items so callers can use `bildreihe_compose::compose` etc.
pub use compose::{CompositeImage, RowCompositor, TilePlacement, compose};
pub use crate::image::processor::ImageProcessor;
pub use label::{FontSource, LabelFont};
