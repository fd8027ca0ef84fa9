//! This module describes the Bound trait, which allows for a description of what colors a color
//! gamut supports. For example, the sRGB gamut only supports RGB values ranging from 0-1 that are
//! scaled to 0-255. Carmine clips out-of-gamut colors silently everywhere except CubeHelix, which
//! counts how many of its samples needed clipping; both go through this trait.

use coord::Coord;
use num;

/// Describes a color space in which the total space of representable colors has explicit bounds
/// besides those imposed by human vision. For example, a linear RGB color can't have negative values
/// for any of its components, whereas CIELUV can describe colors outside any display's gamut.
/// # Example
/// ```
/// # use carmine::prelude::*;
/// let out_of_bounds = RGBColor{r: 1.2, g: -0.3, b: 0.5};
/// let (in_bounds, clipped) = out_of_bounds.clamped_checked();
/// assert!(clipped);
/// assert_eq!((in_bounds.r, in_bounds.g, in_bounds.b), (1., 0., 0.5));
/// ```
pub trait Bound: From<Coord> + Into<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation.
    fn bounds() -> [(f32, f32); 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds, along with whether any component had to move.
    fn clamp_coord_checked(point: Coord) -> (Coord, bool) {
        let ranges = Self::bounds();
        let components = [point.x, point.y, point.z];
        let mut clamped = [0.; 3];
        let mut clipped = false;
        for i in 0..3 {
            let (min, max) = ranges[i];
            if components[i] < min || components[i] > max {
                clipped = true;
            }
            clamped[i] = num::clamp(components[i], min, max);
        }
        (
            Coord {
                x: clamped[0],
                y: clamped[1],
                z: clamped[2],
            },
            clipped,
        )
    }

    /// Like [`clamp_coord_checked`](Bound::clamp_coord_checked), but only returns the point.
    fn clamp_coord(point: Coord) -> Coord {
        Self::clamp_coord_checked(point).0
    }

    /// Returns the closest color inside the bounds, and whether it differs from `self`.
    fn clamped_checked(self) -> (Self, bool) {
        let (point, clipped) = Self::clamp_coord_checked(self.into());
        (Self::from(point), clipped)
    }

    /// Returns the closest color inside the bounds. A color that is already in bounds is returned
    /// unchanged.
    fn clamped(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}
