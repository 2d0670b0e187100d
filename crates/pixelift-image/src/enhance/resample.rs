// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Area-average resampler. Each destination pixel averages the exact
// source rectangle it maps to, with fractional coverage weights at the
// rectangle edges, so both upscaling and downscaling stay smooth —
// never nearest-neighbour.

use pixelift_core::error::{PixeliftError, Result};
use tracing::{debug, instrument};

use crate::buffer::PixelBuffer;

/// Resample `src` to exactly `width` x `height`.
///
/// Aspect ratio is deliberately not enforced here; locking it is a
/// caller-side policy. The output alpha channel is forced to 255.
///
/// Fails with `InvalidDimensions` when either target axis is zero (a
/// zero-sized source is rejected the same way), and with `Allocation`
/// when the output buffer cannot be reserved.
#[instrument(skip(src), fields(from = %src.dimensions(), width, height))]
pub fn resample(src: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(PixeliftError::InvalidDimensions { width, height });
    }
    if src.width() == 0 || src.height() == 0 {
        return Err(PixeliftError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        });
    }

    let mut out = PixelBuffer::allocate(width, height)?;

    let scale_x = src.width() as f64 / width as f64;
    let scale_y = src.height() as f64 / height as f64;

    for dy in 0..height {
        let y0 = dy as f64 * scale_y;
        let y1 = y0 + scale_y;
        let sy_first = y0.floor() as u32;
        let sy_last = (y1.ceil() as u32).min(src.height());

        for dx in 0..width {
            let x0 = dx as f64 * scale_x;
            let x1 = x0 + scale_x;
            let sx_first = x0.floor() as u32;
            let sx_last = (x1.ceil() as u32).min(src.width());

            let mut acc = [0.0f64; 3];
            let mut area = 0.0f64;

            for sy in sy_first..sy_last {
                let wy = (y1.min((sy + 1) as f64) - y0.max(sy as f64)).max(0.0);
                if wy == 0.0 {
                    continue;
                }
                for sx in sx_first..sx_last {
                    let wx = (x1.min((sx + 1) as f64) - x0.max(sx as f64)).max(0.0);
                    if wx == 0.0 {
                        continue;
                    }
                    let weight = wx * wy;
                    let [r, g, b, _] = src.pixel(sx, sy)?;
                    acc[0] += r as f64 * weight;
                    acc[1] += g as f64 * weight;
                    acc[2] += b as f64 * weight;
                    area += weight;
                }
            }

            // Every destination pixel overlaps at least part of one
            // source pixel, so `area` is strictly positive here.
            let inv = 1.0 / area;
            out.set_pixel(
                dx,
                dy,
                [
                    quantize(acc[0] * inv),
                    quantize(acc[1] * inv),
                    quantize(acc[2] * inv),
                    255,
                ],
            );
        }
    }

    debug!(to = %out.dimensions(), "resample complete");
    Ok(out)
}

fn quantize(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelift_core::Dimensions;

    fn uniform(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let mut buf = PixelBuffer::allocate(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                buf.set_pixel(x, y, rgba);
            }
        }
        buf
    }

    #[test]
    fn output_has_exactly_the_requested_dimensions() {
        let src = uniform(10, 7, [50, 100, 150, 255]);
        for (w, h) in [(1, 1), (3, 11), (20, 14), (10, 7)] {
            let out = resample(&src, w, h).unwrap();
            assert_eq!(out.dimensions(), Dimensions::new(w, h));
        }
    }

    #[test]
    fn zero_target_dimension_is_rejected() {
        let src = uniform(4, 4, [0, 0, 0, 255]);
        assert!(matches!(
            resample(&src, 0, 10).unwrap_err(),
            PixeliftError::InvalidDimensions { width: 0, height: 10 }
        ));
        assert!(matches!(
            resample(&src, 10, 0).unwrap_err(),
            PixeliftError::InvalidDimensions { width: 10, height: 0 }
        ));
    }

    #[test]
    fn zero_sized_source_is_rejected() {
        let src = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
        assert!(matches!(
            resample(&src, 5, 5).unwrap_err(),
            PixeliftError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn uniform_image_stays_uniform_at_any_scale() {
        let src = uniform(6, 4, [90, 120, 200, 255]);
        for (w, h) in [(12, 8), (3, 2), (5, 9)] {
            let out = resample(&src, w, h).unwrap();
            for y in 0..h {
                for x in 0..w {
                    assert_eq!(out.pixel(x, y).unwrap(), [90, 120, 200, 255]);
                }
            }
        }
    }

    #[test]
    fn checkerboard_averages_to_midpoint() {
        // 2x2 black/white checkerboard collapsed to a single pixel:
        // the area average of two 0s and two 255s is 127.5, rounded up.
        let mut src = PixelBuffer::allocate(2, 2).unwrap();
        src.set_pixel(0, 0, [255, 255, 255, 255]);
        src.set_pixel(1, 1, [255, 255, 255, 255]);
        src.set_pixel(1, 0, [0, 0, 0, 255]);
        src.set_pixel(0, 1, [0, 0, 0, 255]);

        let out = resample(&src, 1, 1).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), [128, 128, 128, 255]);
    }

    #[test]
    fn identity_resample_preserves_pixels() {
        let mut src = PixelBuffer::allocate(3, 3).unwrap();
        let mut v = 0u8;
        for y in 0..3 {
            for x in 0..3 {
                src.set_pixel(x, y, [v, v.wrapping_add(40), v.wrapping_add(90), 255]);
                v = v.wrapping_add(27);
            }
        }
        let out = resample(&src, 3, 3).unwrap();
        assert_eq!(out.as_bytes(), src.as_bytes());
    }

    #[test]
    fn alpha_is_forced_opaque() {
        let src = uniform(2, 2, [10, 20, 30, 0]);
        let out = resample(&src, 4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(out.pixel(x, y).unwrap()[3], 255);
            }
        }
    }

    #[test]
    fn downscale_mixes_only_covered_rows() {
        // 1x4 column: 0, 0, 255, 255 halved vertically. Each output
        // pixel covers exactly two source rows.
        let mut src = PixelBuffer::allocate(1, 4).unwrap();
        src.set_pixel(0, 2, [255, 255, 255, 255]);
        src.set_pixel(0, 3, [255, 255, 255, 255]);

        let out = resample(&src, 1, 2).unwrap();
        assert_eq!(out.pixel(0, 0).unwrap(), [0, 0, 0, 255]);
        assert_eq!(out.pixel(0, 1).unwrap(), [255, 255, 255, 255]);
    }
}
