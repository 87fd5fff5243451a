// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A minimal animation container, and its GIF encoding.  The fern only
//! ever needs one frame, but the container takes as many as you give
//! it as long as they share a size.

use std::borrow::Cow;
use std::convert::TryFrom;
use std::io::Write;

use gif::{Encoder, Frame, Repeat};

use crate::canvas::{palette_bytes, Canvas};
use crate::errors::FernError;

/// Frames, each with its own delay in hundredths of a second, plus how
/// many times a viewer should play them.
#[derive(Debug)]
pub struct Animation {
    frames: Vec<(Canvas, u16)>,
    loop_count: u16,
}

impl Animation {
    /// An empty animation.  A loop count of 0 asks viewers to loop
    /// forever.
    pub fn new(loop_count: u16) -> Self {
        Animation {
            frames: vec![],
            loop_count,
        }
    }

    /// Append a frame.  It must match the size of the first one.
    pub fn push(&mut self, canvas: Canvas, delay: u16) -> Result<(), FernError> {
        if let Some((first, _)) = self.frames.first() {
            let expected = first.plane();
            let got = canvas.plane();
            if expected != got {
                return Err(FernError::FrameMismatch {
                    width: got.0,
                    height: got.1,
                    expected_width: expected.0,
                    expected_height: expected.1,
                });
            }
        }
        self.frames.push((canvas, delay));
        Ok(())
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there is anything to encode.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames, in order.
    pub fn frames(&self) -> &[(Canvas, u16)] {
        &self.frames
    }

    /// The requested loop count.
    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// Write the whole animation as a GIF: the two-color palette as the
    /// global color table, the loop extension, then every frame.
    pub fn encode<W: Write>(&self, out: W) -> Result<(), FernError> {
        let (first, _) = self.frames.first().ok_or(FernError::NoFrames)?;
        let (width, height) = gif_dimensions(first)?;

        let mut encoder = Encoder::new(out, width, height, &palette_bytes())?;
        encoder.set_repeat(Repeat::Finite(self.loop_count))?;
        for (canvas, delay) in &self.frames {
            let frame = Frame {
                width,
                height,
                delay: *delay,
                buffer: Cow::Borrowed(canvas.indices()),
                ..Frame::default()
            };
            encoder.write_frame(&frame)?;
        }
        // The trailer is only written here; dropping the encoder would
        // swallow a failure on the last byte.
        encoder.into_inner()?;
        Ok(())
    }
}

fn gif_dimensions(canvas: &Canvas) -> Result<(u16, u16), FernError> {
    let plane = canvas.plane();
    let too_large = || FernError::TooLarge {
        width: u64::from(plane.0),
        height: u64::from(plane.1),
    };
    let width = u16::try_from(plane.0).map_err(|_| too_large())?;
    let height = u16::try_from(plane.1).map_err(|_| too_large())?;
    Ok((width, height))
}
