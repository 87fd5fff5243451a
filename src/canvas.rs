// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The indexed two-color canvas the fern is drawn onto, and the
//! stroke that makes a single point visible at a few thousand pixels
//! across.

use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;

use crate::errors::FernError;
use crate::planes::{IntegralPlane, Pixel};

/// Palette index of the background.
pub const BACKGROUND: u8 = 0;
/// Palette index of the fern.
pub const FOREGROUND: u8 = 1;

/// The fixed palette: white paper, black ink.  Entry order matches
/// `BACKGROUND` and `FOREGROUND`.
pub const PALETTE: [[u8; 3]; 2] = [[0xff, 0xff, 0xff], [0x00, 0x00, 0x00]];

/// The palette flattened into the RGB triplets a GIF color table wants.
pub fn palette_bytes() -> Vec<u8> {
    PALETTE.iter().flat_map(|rgb| rgb.iter().cloned()).collect()
}

/// What to do with the parts of a stroke that fall off the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Draw what fits and drop the rest.
    Clip,
    /// Refuse the whole stroke if any of it would fall outside.
    Strict,
}

/// A grid of palette indices.  Each luma value of the backing buffer
/// is an index into `PALETTE`, not a brightness.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: GrayImage,
}

impl Canvas {
    /// A canvas of the given plane, painted entirely in the background.
    pub fn new(plane: IntegralPlane) -> Self {
        Canvas {
            pixels: ImageBuffer::from_pixel(plane.0, plane.1, Luma([BACKGROUND])),
        }
    }

    /// The plane this canvas covers.
    pub fn plane(&self) -> IntegralPlane {
        IntegralPlane(self.pixels.width(), self.pixels.height())
    }

    /// The palette index at a pixel, if the pixel is on the canvas.
    pub fn index_at(&self, x: i64, y: i64) -> Option<u8> {
        if self.plane().contains(Pixel(x, y)) {
            Some(self.pixels.get_pixel(x as u32, y as u32).0[0])
        } else {
            None
        }
    }

    /// How many pixels are not background.
    pub fn foreground_count(&self) -> usize {
        self.pixels.as_raw().iter().filter(|&&i| i != BACKGROUND).count()
    }

    /// The raw indices, row-major.
    pub fn indices(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Set one pixel, or report that it is not on the canvas.
    pub fn set_index(&mut self, pixel: Pixel, index: u8) -> Result<(), FernError> {
        if !self.plane().contains(pixel) {
            return Err(FernError::OutOfBounds {
                x: pixel.0,
                y: pixel.1,
            });
        }
        self.pixels.put_pixel(pixel.0 as u32, pixel.1 as u32, Luma([index]));
        Ok(())
    }

    /// Mark the pixels of a stroke centered on `center`.  A stroke of 1
    /// is the single pixel; a stroke of 2 is the full 3x3 block around
    /// it.  Anything else is refused before any pixel is touched, as
    /// is a stroke that leaves the canvas under `Edge::Strict`.
    pub fn draw_with_stroke(
        &mut self,
        center: Pixel,
        index: u8,
        stroke: usize,
        edge: Edge,
    ) -> Result<(), FernError> {
        let reach = stroke_reach(stroke)?;
        let Pixel(cx, cy) = center;
        let plane = self.plane();
        // A center near the ends of i64 has neighbours that do not exist;
        // those count as off the canvas.
        let neighbour = |dx: i64, dy: i64| -> Option<Pixel> {
            Some(Pixel(cx.checked_add(dx)?, cy.checked_add(dy)?))
        };

        if edge == Edge::Strict {
            for (dx, dy) in iproduct!(-reach..=reach, -reach..=reach) {
                match neighbour(dx, dy) {
                    Some(pixel) if plane.contains(pixel) => {}
                    Some(pixel) => {
                        return Err(FernError::OutOfBounds {
                            x: pixel.0,
                            y: pixel.1,
                        })
                    }
                    None => return Err(FernError::OutOfBounds { x: cx, y: cy }),
                }
            }
        }

        for (dx, dy) in iproduct!(-reach..=reach, -reach..=reach) {
            if let Some(pixel) = neighbour(dx, dy) {
                if plane.contains(pixel) {
                    self.set_index(pixel, index)?;
                }
            }
        }
        Ok(())
    }

    /// Give up the canvas as a raw index buffer with its dimensions.
    pub fn into_raw(self) -> (u32, u32, Vec<u8>) {
        let (width, height) = self.pixels.dimensions();
        (width, height, self.pixels.into_raw())
    }
}

/// How far a stroke reaches from its center pixel.
pub fn stroke_reach(stroke: usize) -> Result<i64, FernError> {
    match stroke {
        1 => Ok(0),
        2 => Ok(1),
        _ => Err(FernError::UnsupportedStroke(stroke)),
    }
}
