// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RGBA8 pixel buffer — the in-memory raster representation every
// pipeline stage consumes and produces.

use pixelift_core::Dimensions;
use pixelift_core::error::{PixeliftError, Result};

/// In-memory RGBA8 raster image.
///
/// Pixels are stored row-major as `[r, g, b, a]` quadruplets with no
/// padding, so `pixels.len() == width * height * 4` always holds.
/// Construction validates that invariant; it can never be broken
/// afterwards because the pixel data is not exposed for resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Required byte length for a `width` x `height` RGBA8 buffer.
///
/// `u128` arithmetic: 4 * u32::MAX * u32::MAX is about 2^66 and would
/// wrap in u64.
fn expected_len(width: u32, height: u32) -> u128 {
    width as u128 * height as u128 * 4
}

impl PixelBuffer {
    /// Build a buffer from raw RGBA8 bytes.
    ///
    /// Fails with `InvalidBuffer` if the byte length does not match the
    /// dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = expected_len(width, height);
        if pixels.len() as u128 != expected {
            return Err(PixeliftError::InvalidBuffer {
                width,
                height,
                expected,
                actual: pixels.len() as u128,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Allocate a zero-filled buffer of the given dimensions.
    ///
    /// Allocation failure (target too large for available memory, or a
    /// byte length beyond the address space) surfaces as `Allocation`
    /// rather than aborting the process.
    pub fn allocate(width: u32, height: u32) -> Result<Self> {
        let expected = expected_len(width, height);
        let len = usize::try_from(expected).map_err(|_| {
            PixeliftError::Allocation(format!(
                "{width}x{height} output needs {expected} bytes, beyond the address space"
            ))
        })?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|err| {
            PixeliftError::Allocation(format!(
                "{width}x{height} output buffer ({len} bytes): {err}"
            ))
        })?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height together.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Read the `[r, g, b, a]` quadruplet at `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller error and fail with
    /// `OutOfBounds`; they are never clamped here. Convolution code that
    /// walks a neighbourhood must do its own range checks.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return Err(PixeliftError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let off = self.offset(x, y);
        Ok([
            self.pixels[off],
            self.pixels[off + 1],
            self.pixels[off + 2],
            self.pixels[off + 3],
        ])
    }

    /// Write the quadruplet at `(x, y)`. Callers stay within bounds;
    /// this is only reachable from pipeline code that just allocated
    /// the buffer at known dimensions.
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let off = self.offset(x, y);
        self.pixels[off..off + 4].copy_from_slice(&rgba);
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as u64 * self.width as u64 + x as u64) * 4) as usize
    }
}

/// Unclamped f32 RGB working buffer.
///
/// The sharpen stage produces transient values outside [0, 255] that
/// must survive into the colour stage, where the pipeline's single
/// clamp point lives. Alpha is not carried; it is forced to 255 when
/// the working buffer is quantised back to a `PixelBuffer`.
#[derive(Debug, Clone)]
pub struct FloatBuffer {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl FloatBuffer {
    /// Allocate a zero-filled working buffer (three samples per pixel).
    pub fn allocate(width: u32, height: u32) -> Result<Self> {
        // u128 for the same reason as `expected_len`: the product can
        // exceed u64 for pathological dimensions.
        let expected = width as u128 * height as u128 * 3;
        let len = usize::try_from(expected).map_err(|_| {
            PixeliftError::Allocation(format!(
                "{width}x{height} working buffer needs {expected} samples, beyond the address space"
            ))
        })?;

        let mut samples = Vec::new();
        samples.try_reserve_exact(len).map_err(|err| {
            PixeliftError::Allocation(format!(
                "{width}x{height} working buffer ({len} samples): {err}"
            ))
        })?;
        samples.resize(len, 0.0);

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Read the `[r, g, b]` triplet at `(x, y)`. Panics on out-of-range
    /// coordinates; this buffer never crosses an ownership boundary
    /// with unknown dimensions.
    pub fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        let off = self.offset(x, y);
        [self.samples[off], self.samples[off + 1], self.samples[off + 2]]
    }

    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        let off = self.offset(x, y);
        self.samples[off..off + 3].copy_from_slice(&rgb);
    }

    /// Mutable view over all samples, pixel-interleaved RGB.
    pub(crate) fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height);
        ((y as u64 * self.width as u64 + x as u64) * 3) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_matching_length() {
        let buf = PixelBuffer::from_raw(2, 3, vec![7u8; 2 * 3 * 4]).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.as_bytes().len(), 24);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, vec![0u8; 15]).unwrap_err();
        match err {
            PixeliftError::InvalidBuffer {
                expected, actual, ..
            } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected InvalidBuffer, got {other:?}"),
        }
    }

    #[test]
    fn from_raw_rejects_dimension_overflow() {
        // width*height*4 is ~2^66 here; it must come back as a typed
        // InvalidBuffer, never wrap and accept the empty vec.
        let err = PixelBuffer::from_raw(u32::MAX, u32::MAX, Vec::new()).unwrap_err();
        match err {
            PixeliftError::InvalidBuffer {
                expected, actual, ..
            } => {
                assert_eq!(expected, u32::MAX as u128 * u32::MAX as u128 * 4);
                assert_eq!(actual, 0);
            }
            other => panic!("expected InvalidBuffer, got {other:?}"),
        }
    }

    #[test]
    fn allocate_rejects_address_space_overflow() {
        let err = PixelBuffer::allocate(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, PixeliftError::Allocation(_)));

        let err = FloatBuffer::allocate(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, PixeliftError::Allocation(_)));
    }

    #[test]
    fn zero_sized_buffer_is_valid() {
        let buf = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
        assert_eq!(buf.dimensions(), Dimensions::ZERO);
    }

    #[test]
    fn pixel_access_is_bounds_checked() {
        let mut buf = PixelBuffer::allocate(4, 4).unwrap();
        buf.set_pixel(3, 3, [1, 2, 3, 255]);
        assert_eq!(buf.pixel(3, 3).unwrap(), [1, 2, 3, 255]);

        let err = buf.pixel(4, 0).unwrap_err();
        assert!(matches!(err, PixeliftError::OutOfBounds { x: 4, y: 0, .. }));
        assert!(buf.pixel(0, 4).is_err());
    }

    #[test]
    fn allocate_is_zero_filled() {
        let buf = PixelBuffer::allocate(3, 2).unwrap();
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buf.as_bytes().len(), 24);
    }

    #[test]
    fn float_buffer_holds_out_of_range_values() {
        let mut work = FloatBuffer::allocate(2, 2).unwrap();
        work.set_rgb(1, 0, [-42.0, 300.5, 0.25]);
        assert_eq!(work.rgb(1, 0), [-42.0, 300.5, 0.25]);
        assert_eq!(work.rgb(0, 0), [0.0, 0.0, 0.0]);
    }
}
