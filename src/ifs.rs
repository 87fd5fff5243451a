// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The iterated function system itself: four affine maps, picked at
//! random with fixed weights, applied over and over to a single point.
//! Where the point wanders is the fern.

use crate::draws::DrawSource;

/// A point in fern space.  The attractor lives roughly within
/// x in [-2.2, 2.7], y in [0, 10].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Where every walk begins.
    pub fn origin() -> Self {
        Point { x: 0.0, y: 0.0 }
    }
}

/// The four affine maps of the fern, named for the part of the plant
/// each one draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    /// Collapses onto the stem.  1%.
    Stem,
    /// Shrinks toward the tip, producing successively smaller fronds.  85%.
    Successive,
    /// The largest left-hand leaflet.  7%.
    LeftLeaflet,
    /// The largest right-hand leaflet.  7%.
    RightLeaflet,
}

impl Branch {
    /// Pick the map a draw falls on.  Intervals are closed on the
    /// right: 0.01 is still the stem, 0.86 still successive, 0.93 still
    /// the left leaflet.  Draws above 1.0 match nothing.
    pub fn select(r: f64) -> Option<Branch> {
        if r <= 0.01 {
            Some(Branch::Stem)
        } else if r <= 0.86 {
            Some(Branch::Successive)
        } else if r <= 0.93 {
            Some(Branch::LeftLeaflet)
        } else if r <= 1.0 {
            Some(Branch::RightLeaflet)
        } else {
            None
        }
    }

    /// Apply this map to a point.
    pub fn apply(self, p: Point) -> Point {
        let Point { x, y } = p;
        match self {
            Branch::Stem => Point::new(0.0, 0.16 * y),
            Branch::Successive => Point::new(0.85 * x + 0.04 * y, -0.04 * x + 0.85 * y + 1.6),
            Branch::LeftLeaflet => Point::new(0.2 * x - 0.26 * y, 0.23 * x + 0.22 * y + 1.6),
            Branch::RightLeaflet => Point::new(-0.15 * x + 0.28 * y, 0.26 * x + 0.24 * y + 0.44),
        }
    }
}

/// One step of the walk.  A draw that lands on no branch (only
/// possible from a hand-made source handing out values above 1.0)
/// sends the walk back to the origin.
#[inline]
pub fn next_point(r: f64, p: Point) -> Point {
    match Branch::select(r) {
        Some(branch) => branch.apply(p),
        None => Point::origin(),
    }
}

/// The walk as an iterator.  It never ends on its own; `take()` as
/// many points as you want drawn.  Each item is the state after one
/// more step, so the origin itself is never yielded.
pub struct FernPoints<D: DrawSource> {
    draws: D,
    current: Point,
}

impl<D: DrawSource> FernPoints<D> {
    /// Start a walk at the origin.
    pub fn new(draws: D) -> Self {
        FernPoints {
            draws,
            current: Point::origin(),
        }
    }
}

impl<D: DrawSource> Iterator for FernPoints<D> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let r = self.draws.draw();
        self.current = next_point(r, self.current);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::max_value(), None)
    }
}
