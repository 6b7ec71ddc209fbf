// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in bitmap font used when no system label font can be loaded.
//
// Glyphs are 5x7 cells, one `u8` per row with bit 4 as the leftmost column.
// Only the characters a label can contain are present: `a`-`e` and `0`-`9`.

use image::{Rgb, RgbImage};

/// Glyph cell width in font units.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font units.
pub const GLYPH_HEIGHT: u32 = 7;
/// Pixels per font unit.
pub const GLYPH_SCALE: u32 = 2;
/// Rendered glyph height in pixels.
pub const FALLBACK_FONT_PX: u32 = GLYPH_HEIGHT * GLYPH_SCALE;
/// Horizontal distance between glyph origins, one blank column included.
pub const GLYPH_ADVANCE: u32 = (GLYPH_WIDTH + 1) * GLYPH_SCALE;

type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Drawn for characters outside the table.
const MISSING: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

fn glyph(ch: char) -> &'static Glyph {
    match ch {
        'a' => &[0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => &[0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => &[0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => &[0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        'e' => &[0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        '0' => &[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => &[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => &[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => &MISSING,
    }
}

/// Draw `text` with its top-left corner at (`x`, `y`). Pixels falling outside
/// the canvas are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub fn draw_text_mut(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let scale = i64::from(GLYPH_SCALE);

    for (index, ch) in text.chars().enumerate() {
        let origin_x = i64::from(x) + index as i64 * i64::from(GLYPH_ADVANCE);
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let cell_x = origin_x + i64::from(col) * scale;
                let cell_y = i64::from(y) + row as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (px, py) = (cell_x + dx, cell_y + dy);
                        if (0..width).contains(&px) && (0..height).contains(&py) {
                            // Bounds checked above.
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}
