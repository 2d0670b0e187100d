// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixelift-image — Pixel buffers, the codec boundary, and the
// enhancement pipeline for Pixelift.
//
// Provides the RGBA8 `PixelBuffer`, decode/encode/probe over encoded
// image bytes, the enhancement stages (area-average resampling, 3x3
// convolution sharpening, contrast/saturation boosting), and
// bytes-in/bytes-out convenience operations.

pub mod buffer;
pub mod codec;
pub mod enhance;
pub mod ops;

// Re-export the primary types so callers can use `pixelift_image::PixelBuffer` etc.
pub use buffer::{FloatBuffer, PixelBuffer};
pub use enhance::EnhancementPipeline;
pub use ops::{resize_custom, upscale_to_4k};
