// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unsharp-style convolution sharpener. A fixed 3x3 high-pass kernel is
// blended with the original pixel at a configurable mix factor.

use pixelift_core::error::Result;
use tracing::{debug, instrument};

use crate::buffer::{FloatBuffer, PixelBuffer};

/// The fixed sharpening kernel. Sums to 1 over a full neighbourhood, so
/// a constant field away from borders passes through unchanged.
pub const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [0.0, -1.0, 0.0],
    [-1.0, 5.0, -1.0],
    [0.0, -1.0, 0.0],
];

/// Convolve `src` with the fixed kernel and blend the result with the
/// original at `mix` (0.0 = original only, 1.0 = kernel output only).
///
/// Neighbourhood samples that fall outside the buffer contribute zero —
/// the border is implicitly zero-padded by omission, not replicated or
/// wrapped. The centre weight is therefore uncompensated at borders,
/// which visibly alters border pixels; that artefact is part of the
/// engine's observed behaviour and is kept as-is.
///
/// No clamping happens here. The output is an unclamped float working
/// buffer; the colour stage downstream owns the single clamp point.
#[instrument(skip(src), fields(width = src.width(), height = src.height(), mix))]
pub fn sharpen(src: &PixelBuffer, mix: f32) -> Result<FloatBuffer> {
    let width = src.width();
    let height = src.height();
    let mut out = FloatBuffer::allocate(width, height)?;

    for y in 0..height {
        for x in 0..width {
            let mut conv = [0.0f32; 3];

            for (ky, row) in SHARPEN_KERNEL.iter().enumerate() {
                let sy = y as i64 + ky as i64 - 1;
                if sy < 0 || sy >= height as i64 {
                    continue;
                }
                for (kx, &weight) in row.iter().enumerate() {
                    let sx = x as i64 + kx as i64 - 1;
                    if sx < 0 || sx >= width as i64 {
                        continue;
                    }
                    let [r, g, b, _] = src.pixel(sx as u32, sy as u32)?;
                    conv[0] += r as f32 * weight;
                    conv[1] += g as f32 * weight;
                    conv[2] += b as f32 * weight;
                }
            }

            let [r, g, b, _] = src.pixel(x, y)?;
            let original = [r as f32, g as f32, b as f32];
            out.set_rgb(
                x,
                y,
                [
                    original[0] * (1.0 - mix) + conv[0] * mix,
                    original[1] * (1.0 - mix) + conv[1] * mix,
                    original[2] * (1.0 - mix) + conv[2] * mix,
                ],
            );
        }
    }

    debug!("sharpen complete");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> PixelBuffer {
        let mut buf = PixelBuffer::allocate(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                buf.set_pixel(x, y, [value, value, value, 255]);
            }
        }
        buf
    }

    #[test]
    fn uniform_interior_is_unchanged() {
        // Away from borders the kernel sums to one against a constant
        // field, so the blend is a no-op.
        let src = uniform(5, 5, 100);
        let out = sharpen(&src, 0.35).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                let rgb = out.rgb(x, y);
                for c in rgb {
                    assert!((c - 100.0).abs() < 1e-4, "interior ({x},{y}) moved to {c}");
                }
            }
        }
    }

    #[test]
    fn borders_are_altered_by_uncompensated_centre_weight() {
        // A corner only sees two of its four negative neighbours, so
        // the kernel sums to 3 there: conv = 3v, blend = 1.7v at
        // mix 0.35. The artefact is intentional.
        let src = uniform(5, 5, 100);
        let out = sharpen(&src, 0.35).unwrap();

        let corner = out.rgb(0, 0)[0];
        assert!((corner - 170.0).abs() < 1e-3, "corner was {corner}");

        // A non-corner edge pixel sees three neighbours: conv = 2v,
        // blend = 1.35v.
        let edge = out.rgb(2, 0)[0];
        assert!((edge - 135.0).abs() < 1e-3, "edge was {edge}");
    }

    #[test]
    fn zero_mix_is_identity() {
        let mut src = PixelBuffer::allocate(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                src.set_pixel(x, y, [(x * 50) as u8, (y * 70) as u8, 33, 255]);
            }
        }
        let out = sharpen(&src, 0.0).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let [r, g, b, _] = src.pixel(x, y).unwrap();
                assert_eq!(out.rgb(x, y), [r as f32, g as f32, b as f32]);
            }
        }
    }

    #[test]
    fn output_is_not_clamped() {
        // Bright spot on a mid-gray field: conv at the centre is
        // 5*200 - 4*100 = 600, blend = 200*0.65 + 600*0.35 = 340.
        // The over-255 value must survive into the working buffer.
        let mut src = uniform(3, 3, 100);
        src.set_pixel(1, 1, [200, 200, 200, 255]);

        let out = sharpen(&src, 0.35).unwrap();
        let centre = out.rgb(1, 1)[0];
        assert!((centre - 340.0).abs() < 1e-3, "centre was {centre}");
    }

    #[test]
    fn dimensions_are_preserved() {
        let src = uniform(7, 2, 10);
        let out = sharpen(&src, 0.35).unwrap();
        assert_eq!(out.dimensions(), src.dimensions());
    }
}
