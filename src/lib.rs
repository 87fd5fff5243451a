#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Barnsley fern renderer
//!
//! The Barnsley fern is an iterated function system: four affine maps
//! of the plane, each with a fixed probability.  Start with a point at
//! the origin, pick one of the maps at random, apply it, and repeat.
//! No matter where the walk goes, it stays on the fern, and after a
//! few million steps the points it has visited paint the whole plant,
//! down to the leaflets of the leaflets.
//!
//! Each visited point is mapped onto a two-color canvas and stroked as
//! a small block so it survives at a few thousand pixels across.  The
//! finished canvas is written out as a single-frame GIF.  The walk is
//! driven by an explicitly seeded source of draws, so the same seed
//! always produces the same file.

extern crate failure;
extern crate gif;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate rand;

pub mod animation;
pub mod canvas;
pub mod config;
pub mod draws;
pub mod errors;
pub mod ifs;
pub mod planes;
pub mod render;

pub use animation::Animation;
pub use canvas::{Canvas, Edge};
pub use config::FernConfig;
pub use draws::{DrawSource, ReplayDraws, SeededDraws};
pub use errors::FernError;
pub use ifs::{next_point, Branch, FernPoints, Point};
pub use render::FernRenderer;
