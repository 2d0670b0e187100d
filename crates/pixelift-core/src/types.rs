// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Pixelift enhancement engine.

use serde::{Deserialize, Serialize};

/// Width and height of a raster image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The `{0,0}` sentinel returned by the dimension probe when an
    /// input cannot be decoded.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Landscape and square images count as wide; only a strictly
    /// taller-than-wide image is portrait.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Total pixel count as `u64` (cannot overflow for `u32` axes).
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Encoded output formats supported at the codec boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Lossy, takes a quality factor.
    Jpeg,
    /// Lossless, ignores the quality factor.
    Png,
}

impl OutputFormat {
    /// MIME type string for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Canonical file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Broad classification of an input file, used by the orchestration
/// layer to route media to the right handler. The enhancement core only
/// ever sees `Image` inputs, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
    Text,
    Document,
    Spreadsheet,
    Archive,
    Unknown,
}

impl MediaKind {
    /// Classify a file by extension. Unrecognised extensions map to
    /// `Unknown` rather than `None` — callers always get a routable kind.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "tif" | "tiff" => Self::Image,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => Self::Video,
            "txt" | "md" => Self::Text,
            "pdf" | "doc" | "docx" | "odt" => Self::Document,
            "csv" | "xls" | "xlsx" | "ods" => Self::Spreadsheet,
            "zip" | "tar" | "gz" | "7z" | "rar" => Self::Archive,
            _ => Self::Unknown,
        }
    }

    /// Whether this kind is eligible for the enhancement pipeline.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }
}
