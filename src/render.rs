// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ties the walk, the plane mapping and the canvas together.

use std::convert::TryFrom;
use std::io::Write;

use crate::animation::Animation;
use crate::canvas::{stroke_reach, Canvas, FOREGROUND};
use crate::config::FernConfig;
use crate::draws::DrawSource;
use crate::errors::FernError;
use crate::ifs::FernPoints;
use crate::planes::PlaneMapper;

const PROGRESS_EVERY: usize = 1_000_000;

/// Takes a configuration and draws the fern it describes.  The
/// renderer holds no random state of its own: every call is handed the
/// source of draws to walk with, so two calls with equally seeded
/// sources draw the same fern.
pub struct FernRenderer {
    config: FernConfig,
    plane: PlaneMapper,
}

impl FernRenderer {
    /// Checks that the stroke is drawable and that the canvas fits in
    /// a GIF before anything is allocated.
    pub fn new(config: FernConfig) -> Result<Self, FernError> {
        stroke_reach(config.stroke)?;
        let side = 2 * u64::from(config.size) + 1;
        if u16::try_from(side).is_err() {
            return Err(FernError::TooLarge {
                width: side,
                height: side,
            });
        }
        Ok(FernRenderer {
            plane: config.mapper(),
            config,
        })
    }

    /// The configuration this renderer draws with.
    pub fn config(&self) -> &FernConfig {
        &self.config
    }

    /// Walk `iterations` steps and stroke every point onto a fresh canvas.
    pub fn render<D: DrawSource>(&self, draws: D) -> Result<Canvas, FernError> {
        let mut canvas = Canvas::new(self.config.plane());
        for (i, point) in FernPoints::new(draws)
            .take(self.config.iterations)
            .enumerate()
        {
            let pixel = self.plane.point_to_pixel(&point);
            canvas.draw_with_stroke(pixel, FOREGROUND, self.config.stroke, self.config.edge)?;
            if (i + 1) % PROGRESS_EVERY == 0 {
                debug!("{} of {} points drawn", i + 1, self.config.iterations);
            }
        }
        info!(
            "fern drawn: {} points, {} foreground pixels",
            self.config.iterations,
            canvas.foreground_count()
        );
        Ok(canvas)
    }

    /// Render, then wrap the canvas as the only frame of an animation.
    pub fn animate<D: DrawSource>(&self, draws: D) -> Result<Animation, FernError> {
        let canvas = self.render(draws)?;
        let mut anim = Animation::new(self.config.loop_count);
        anim.push(canvas, self.config.delay)?;
        Ok(anim)
    }

    /// Render and write the result as a GIF to `out`.
    pub fn draw_barnsley<D: DrawSource, W: Write>(&self, draws: D, out: W) -> Result<(), FernError> {
        let anim = self.animate(draws)?;
        anim.encode(out)
    }
}
