// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Label module — font resolution with a built-in bitmap fallback.

pub mod bitmap;
pub mod font;

pub use font::{FontSource, LabelFont};
