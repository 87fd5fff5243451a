// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while drawing or writing a fern.

use failure::Fail;

/// The single error type of the crate.  Drawing errors are
/// configuration problems; encoding errors wrap whatever the GIF
/// writer (or the stream beneath it) reported.
#[derive(Debug, Fail)]
pub enum FernError {
    /// Only strokes of 1 and 2 are drawable.
    #[fail(display = "stroke of {} is not supported", _0)]
    UnsupportedStroke(usize),

    /// A stroke would have touched a pixel outside the canvas.
    #[fail(display = "pixel ({}, {}) lies outside the canvas", x, y)]
    OutOfBounds {
        /// Column of the offending pixel.
        x: i64,
        /// Row of the offending pixel.
        y: i64,
    },

    /// An animation must carry at least one frame.
    #[fail(display = "animation has no frames")]
    NoFrames,

    /// Every frame must share the dimensions of the first.
    #[fail(
        display = "frame of {}x{} does not match animation size {}x{}",
        width, height, expected_width, expected_height
    )]
    FrameMismatch {
        /// Width of the rejected frame.
        width: u32,
        /// Height of the rejected frame.
        height: u32,
        /// Width of the first frame.
        expected_width: u32,
        /// Height of the first frame.
        expected_height: u32,
    },

    /// GIF dimensions are limited to 16 bits.
    #[fail(display = "canvas of {}x{} is too large for a GIF", width, height)]
    TooLarge {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
    },

    /// The encoder or the output stream failed.
    #[fail(display = "error encoding gif: {}", _0)]
    Encode(#[cause] gif::EncodingError),
}

impl From<gif::EncodingError> for FernError {
    fn from(err: gif::EncodingError) -> Self {
        FernError::Encode(err)
    }
}

impl From<std::io::Error> for FernError {
    fn from(err: std::io::Error) -> Self {
        FernError::Encode(gif::EncodingError::from(err))
    }
}
