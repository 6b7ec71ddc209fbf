// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bildreihe.

use thiserror::Error;

/// Top-level error type for all Bildreihe operations.
#[derive(Debug, Error)]
pub enum BildreiheError {
    // -- Compositing errors --
    /// Input at `position` (1-indexed) is not a decodable image. Fatal to the
    /// whole request.
    #[error("image {position} could not be decoded: {reason}")]
    Decode { position: usize, reason: String },

    #[error("target height must be a positive number of pixels, got {0}")]
    InvalidHeight(u32),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    // -- Caller policy --
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("too many images: {given} given, at most {max} allowed")]
    TooManyImages { given: usize, max: usize },

    #[error("height {height} is outside {min}..={max} or not a multiple of {step}")]
    HeightOutOfRange {
        height: u32,
        min: u32,
        max: u32,
        step: u32,
    },

    #[error("invalid settings: {0}")]
    InvalidConfig(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BildreiheError>;
