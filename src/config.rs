// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs of a render.  The binary only ever uses the defaults;
//! tests and benchmarks shrink them.

use crate::canvas::Edge;
use crate::planes::{IntegralPlane, PlaneMapper};

/// Half-width of the canvas; the canvas covers [-SIZE..+SIZE].
pub const SIZE: u32 = 2200;
/// Pixels per unit of fern space, horizontally.
pub const SCALE_X: f64 = 600.0;
/// Pixels per unit of fern space, vertically.
pub const SCALE_Y: f64 = 600.0;
/// How many points to draw.
pub const ITERATIONS: usize = 5_000_000;
/// Frame delay, in hundredths of a second.
pub const DELAY: u16 = 35;
/// GIF loop count; 1 plays the frame once.
pub const LOOP_COUNT: u16 = 1;
/// Seed of the random walk.
pub const SEED: u64 = 42;
/// Stroke used for every point.
pub const STROKE: usize = 2;

/// Everything a render depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FernConfig {
    /// Half-width of the square canvas.
    pub size: u32,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Column the fern-space origin lands on.
    pub offset_x: f64,
    /// Row the fern-space origin lands on.
    pub offset_y: f64,
    /// Points drawn.
    pub iterations: usize,
    /// Frame delay.
    pub delay: u16,
    /// GIF loop count.
    pub loop_count: u16,
    /// Seed for `SeededDraws`.
    pub seed: u64,
    /// Stroke width, 1 or 2.
    pub stroke: usize,
    /// What happens to strokes that fall off the canvas.
    pub edge: Edge,
}

impl FernConfig {
    /// A square canvas of half-width `size`, with the stem's foot at the
    /// middle of the top row.  Everything else takes its default.
    pub fn with_size(size: u32, scale: f64) -> Self {
        FernConfig {
            size,
            scale_x: scale,
            scale_y: scale,
            offset_x: f64::from(size),
            offset_y: 0.0,
            ..FernConfig::default()
        }
    }

    /// The plane the canvas covers.
    pub fn plane(&self) -> IntegralPlane {
        IntegralPlane::square(self.size)
    }

    /// The mapping from fern space onto that plane.
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new((self.scale_x, self.scale_y), (self.offset_x, self.offset_y))
    }
}

impl Default for FernConfig {
    fn default() -> Self {
        FernConfig {
            size: SIZE,
            scale_x: SCALE_X,
            scale_y: SCALE_Y,
            offset_x: f64::from(SIZE),
            offset_y: 0.0,
            iterations: ITERATIONS,
            delay: DELAY,
            loop_count: LOOP_COUNT,
            seed: SEED,
            stroke: STROKE,
            edge: Edge::Clip,
        }
    }
}
