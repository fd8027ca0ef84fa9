//! This module implements linear RGB with the sRGB primaries and D65 white: the space in which light
//! adds, before the sRGB transfer function is applied. Conversion to and from XYZ is a single matrix
//! multiply.

use bound::Bound;
use color::{Color, XYZColor};
use consts::{self, STANDARD_RGB_TO_XYZ_MAT, STANDARD_XYZ_TO_RGB_MAT};
use coord::Coord;

/// A color in linear RGB, with components nominally between 0 and 1. This is *not* what displays
/// expect: see [`SRGBColor`](../srgbcolor/struct.SRGBColor.html) for the gamma-encoded form.
/// # Example
/// Pure yellow in linear RGB is also pure yellow in sRGB, since 0 and 1 are fixed points of the
/// transfer function.
///
/// ```
/// # use carmine::prelude::*;
/// let yellow = RGBColor{r: 1., g: 1., b: 0.};
/// let srgb: SRGBColor = yellow.convert();
/// assert_eq!(srgb.to_bytes(), [255, 255, 0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component, linear in light intensity.
    pub r: f32,
    /// The green component, linear in light intensity.
    pub g: f32,
    /// The blue component, linear in light intensity.
    pub b: f32,
}

impl Color for RGBColor {
    /// Converts from XYZ with the inverse sRGB matrix. Any component outside of [0, 1] is clipped:
    /// out-of-gamut colors are silently moved onto the surface of the RGB cube.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        let rgb = consts::transform(STANDARD_XYZ_TO_RGB_MAT(), [xyz.x, xyz.y, xyz.z]);
        RGBColor {
            r: rgb[0] / 100.0,
            g: rgb[1] / 100.0,
            b: rgb[2] / 100.0,
        }.clamped()
    }
    fn to_xyz(&self) -> XYZColor {
        let xyz = consts::transform(STANDARD_RGB_TO_XYZ_MAT(), [self.r, self.g, self.b]);
        XYZColor {
            x: xyz[0] * 100.0,
            y: xyz[1] * 100.0,
            z: xyz[2] * 100.0,
        }
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f32, f32); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

impl RGBColor {
    /// Returns `true` if every component of the two colors is within `tolerance` of the other.
    pub fn approx_equal(&self, other: &RGBColor, tolerance: f32) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
    }
}
