// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the orchestration/UI layer.
//
// The pipeline surfaces typed errors unchanged; this module maps each of
// them to plain English with a clear suggestion so that a front end never
// has to interpret error internals itself.

use crate::error::PixeliftError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Storage blip or similar — worth retrying.
    Transient,
    /// User must do something (pick a different file, choose a smaller image).
    ActionRequired,
    /// Cannot be fixed by retrying — corrupt file, internal invariant breach.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the caller should offer an automatic retry.
    pub retriable: bool,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a `PixeliftError` into a `HumanError` suitable for direct display.
pub fn humanize_error(err: &PixeliftError) -> HumanError {
    match err {
        // -- Buffer errors --
        PixeliftError::InvalidBuffer { .. } => HumanError {
            message: "This image's pixel data is damaged.".into(),
            suggestion: "Try re-exporting the image from its original source, or pick a different file.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PixeliftError::InvalidDimensions { width, height } => HumanError {
            message: "The requested size isn't valid.".into(),
            suggestion: format!(
                "Width and height must both be at least 1 pixel (got {width}x{height})."
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PixeliftError::OutOfBounds { .. } => HumanError {
            message: "The app hit an internal image-processing problem.".into(),
            suggestion: "Try again with a different image. If this keeps happening, please report it.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PixeliftError::Allocation(_) => HumanError {
            message: "This image is too large to enhance on this device.".into(),
            suggestion: "Try a smaller image, or close other apps to free up memory.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Codec boundary --
        PixeliftError::Decode(_) => HumanError {
            message: "This image couldn't be read.".into(),
            suggestion: "The file may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PixeliftError::Encode(_) => HumanError {
            message: "The enhanced image couldn't be saved.".into(),
            suggestion: "Try again, or pick a different output format.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- Storage --
        PixeliftError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read that file.".into(),
                    suggestion: "Check the file permissions, or try copying the file to a different location first.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        PixeliftError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
