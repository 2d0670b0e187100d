// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Codec boundary — container decode/encode and the dimension probe.
// Everything that touches encoded bytes lives here; the enhancement
// pipeline itself only ever sees decoded `PixelBuffer`s.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use pixelift_core::error::{PixeliftError, Result};
use pixelift_core::{Dimensions, OutputFormat};
use tracing::{debug, instrument, warn};

use crate::buffer::PixelBuffer;

/// Decode encoded image bytes (JPEG, PNG, etc.) into a pixel buffer.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)
        .map_err(|err| PixeliftError::Decode(format!("failed to decode image: {err}")))?;
    debug!(width = img.width(), height = img.height(), "image decoded");
    dynamic_to_buffer(img)
}

/// Load and decode an image from a file path.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open(path: impl AsRef<std::path::Path>) -> Result<PixelBuffer> {
    let img = image::open(path.as_ref()).map_err(|err| {
        PixeliftError::Decode(format!("failed to open {}: {err}", path.as_ref().display()))
    })?;
    dynamic_to_buffer(img)
}

/// Encode a pixel buffer into the requested container format.
///
/// `quality` is a 0.0–1.0 factor applied to lossy formats; PNG ignores
/// it. The caller owns the quality policy (0.95 for upscale output,
/// 0.90 for custom resize in the default configuration).
#[instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height(), ?format, quality))]
pub fn encode(buffer: &PixelBuffer, format: OutputFormat, quality: f32) -> Result<Vec<u8>> {
    let rgba = buffer_to_rgba(buffer)?;
    let mut bytes = Vec::new();

    match format {
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut bytes,
                jpeg_quality(quality),
            );
            rgb.write_with_encoder(encoder)
                .map_err(|err| PixeliftError::Encode(format!("JPEG encoding failed: {err}")))?;
        }
        OutputFormat::Png => {
            let mut cursor = Cursor::new(&mut bytes);
            rgba.write_to(&mut cursor, ImageFormat::Png)
                .map_err(|err| PixeliftError::Encode(format!("PNG encoding failed: {err}")))?;
        }
    }

    debug!(bytes = bytes.len(), "image encoded");
    Ok(bytes)
}

/// Write a pixel buffer to a file. The format is inferred from the file
/// extension, at the `image` crate's default quality settings.
pub fn save(buffer: &PixelBuffer, path: impl AsRef<std::path::Path>) -> Result<()> {
    let rgba = buffer_to_rgba(buffer)?;
    rgba.save(path.as_ref()).map_err(|err| {
        PixeliftError::Encode(format!(
            "failed to save image to {}: {err}",
            path.as_ref().display()
        ))
    })
}

/// Report the intrinsic dimensions of an encoded image without decoding
/// its pixels.
///
/// Undecodable input yields the `0x0` sentinel instead of an error:
/// callers probe opportunistically to pre-fill UI state, and a bad file
/// must not take that path down. The eventual decode still reports the
/// real failure.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn probe_dimensions(data: &[u8]) -> Dimensions {
    let reader = match ImageReader::new(Cursor::new(data)).with_guessed_format() {
        Ok(reader) => reader,
        Err(err) => {
            warn!(%err, "dimension probe could not sniff format");
            return Dimensions::ZERO;
        }
    };
    match reader.into_dimensions() {
        Ok((width, height)) => Dimensions::new(width, height),
        Err(err) => {
            warn!(%err, "dimension probe failed; reporting 0x0");
            Dimensions::ZERO
        }
    }
}

/// Map a 0.0–1.0 quality factor onto the JPEG encoder's 1–100 scale.
fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

fn dynamic_to_buffer(img: DynamicImage) -> Result<PixelBuffer> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

fn buffer_to_rgba(buffer: &PixelBuffer) -> Result<RgbaImage> {
    RgbaImage::from_raw(
        buffer.width(),
        buffer.height(),
        buffer.as_bytes().to_vec(),
    )
    .ok_or_else(|| {
        PixeliftError::Encode(format!(
            "buffer of {} cannot back an RGBA image",
            buffer.dimensions()
        ))
    })
}
