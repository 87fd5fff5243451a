// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which relates fern space (where
//! the IFS walks) to the integral plane of the canvas.  The relation
//! is a plain scale-and-offset per axis; pixels are found by
//! truncating toward zero.

use crate::ifs::Point;

/// Describes the x, y of a pixel.  Signed, because a point mapped
/// from fern space may land to the left of or above the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub i64, pub i64);

/// Describes the width and height of an integral plane that starts at
/// 0,0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntegralPlane(pub u32, pub u32);

impl IntegralPlane {
    /// The square plane covering [-size..+size] on both axes.  Sides
    /// that would not fit in a u32 saturate at u32::MAX.
    pub fn square(size: u32) -> Self {
        let side = size.saturating_mul(2).saturating_add(1);
        IntegralPlane(side, side)
    }

    /// Whether a pixel falls on the plane.
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.0 >= 0 && pixel.1 >= 0 && pixel.0 < i64::from(self.0) && pixel.1 < i64::from(self.1)
    }
}

/// Maps fern space onto the integral plane.
#[derive(Debug)]
pub struct PlaneMapper {
    // Pixels per unit of fern space, x and y.
    scale: (f64, f64),
    // Pixel position of the fern-space origin, x and y.
    offset: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the scale for each axis and the pixel
    /// position the fern-space origin should land on.
    pub fn new(scale: (f64, f64), offset: (f64, f64)) -> Self {
        PlaneMapper { scale, offset }
    }

    /// Given a point in fern space, map that to a pixel on the
    /// integral plane.  Fractions are truncated toward zero, so the
    /// pixel just left of column 0 and column 0 itself both come out
    /// as 0.
    pub fn point_to_pixel(&self, point: &Point) -> Pixel {
        let left = point.x * self.scale.0 + self.offset.0;
        let top = point.y * self.scale.1 + self.offset.1;
        Pixel(left as i64, top as i64)
    }

    /// Given a pixel on the integral plane, map it back to the point in
    /// fern space at its upper-left corner.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Point {
        Point::new(
            (pixel.0 as f64 - self.offset.0) / self.scale.0,
            (pixel.1 as f64 - self.offset.1) / self.scale.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_planes_are_odd_sized() {
        assert_eq!(IntegralPlane::square(2200), IntegralPlane(4401, 4401));
        assert_eq!(IntegralPlane::square(0), IntegralPlane(1, 1));
    }

    #[test]
    fn huge_squares_saturate() {
        let side = u32::max_value();
        assert_eq!(IntegralPlane::square(u32::max_value() / 2 + 1), IntegralPlane(side, side));
        assert_eq!(IntegralPlane::square(u32::max_value()), IntegralPlane(side, side));
    }

    #[test]
    fn contains_is_half_open() {
        let plane = IntegralPlane(4, 3);
        assert!(plane.contains(Pixel(0, 0)));
        assert!(plane.contains(Pixel(3, 2)));
        assert!(!plane.contains(Pixel(4, 2)));
        assert!(!plane.contains(Pixel(3, 3)));
        assert!(!plane.contains(Pixel(-1, 0)));
        assert!(!plane.contains(Pixel(0, -1)));
    }

    #[test]
    fn origin_lands_on_the_offset() {
        let pm = PlaneMapper::new((600.0, 600.0), (2200.0, 0.0));
        assert_eq!(pm.point_to_pixel(&Point::origin()), Pixel(2200, 0));
    }

    #[test]
    fn point_to_pixel_truncates() {
        let pm = PlaneMapper::new((10.0, 10.0), (50.0, 0.0));
        assert_eq!(pm.point_to_pixel(&Point::new(0.19, 0.99)), Pixel(51, 9));
        assert_eq!(pm.point_to_pixel(&Point::new(-0.19, 2.0)), Pixel(48, 20));
        // Truncation, not flooring: -0.5 becomes 0.
        assert_eq!(pm.point_to_pixel(&Point::new(-5.05, 0.0)), Pixel(0, 0));
    }

    #[test]
    fn points_beyond_the_plane_map_beyond_it() {
        let pm = PlaneMapper::new((600.0, 600.0), (2200.0, 0.0));
        let plane = IntegralPlane::square(2200);
        let tip = pm.point_to_pixel(&Point::new(0.0, 9.5));
        assert_eq!(tip, Pixel(2200, 5700));
        assert!(!plane.contains(tip));
    }

    #[test]
    fn pixel_to_point_inverts_whole_pixels() {
        let pm = PlaneMapper::new((10.0, 20.0), (50.0, 5.0));
        assert_eq!(pm.pixel_to_point(&Pixel(50, 5)), Point::origin());
        assert_eq!(pm.pixel_to_point(&Pixel(60, 25)), Point::new(1.0, 1.0));
        assert_eq!(pm.point_to_pixel(&pm.pixel_to_point(&Pixel(70, 45))), Pixel(70, 45));
    }
}
