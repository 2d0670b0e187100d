// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour enhancement: contrast, then saturation, then the pipeline's
// single clamp point.

use pixelift_core::error::Result;
use tracing::{debug, instrument};

use crate::buffer::{FloatBuffer, PixelBuffer};

/// Luma weights used as the saturation pivot (ITU-R BT.601).
const LUMA_R: f32 = 0.2989;
const LUMA_G: f32 = 0.5870;
const LUMA_B: f32 = 0.1140;

/// Apply contrast and saturation adjustment, in that order, and
/// quantise the working buffer back to RGBA8.
///
/// Consumes `working` — it is the pipeline's own intermediate, never a
/// caller's buffer — and mutates it in place before quantising. This is
/// the only place pipeline values are clamped to [0, 255]; anything the
/// sharpen stage pushed out of range is pulled back here. Alpha is set
/// to 255 on every output pixel.
///
/// Contrast re-centres each channel around mid-gray
/// (`v' = v*contrast + 128*(1 - contrast)`); saturation then scales the
/// distance of each channel from the pixel's luma. Both factors at 1.0
/// make this stage the identity, apart from the clamp and alpha.
#[instrument(skip(working), fields(width = working.width(), height = working.height(), contrast, saturation))]
pub fn enhance_colors(
    mut working: FloatBuffer,
    contrast: f32,
    saturation: f32,
) -> Result<PixelBuffer> {
    let intercept = 128.0 * (1.0 - contrast);

    for px in working.samples_mut().chunks_exact_mut(3) {
        let r = px[0] * contrast + intercept;
        let g = px[1] * contrast + intercept;
        let b = px[2] * contrast + intercept;

        let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        px[0] = gray + (r - gray) * saturation;
        px[1] = gray + (g - gray) * saturation;
        px[2] = gray + (b - gray) * saturation;
    }

    let mut out = PixelBuffer::allocate(working.width(), working.height())?;
    for y in 0..working.height() {
        for x in 0..working.width() {
            let [r, g, b] = working.rgb(x, y);
            out.set_pixel(x, y, [clamp_channel(r), clamp_channel(g), clamp_channel(b), 255]);
        }
    }

    debug!("colour enhancement complete");
    Ok(out)
}

fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}
