//! This file defines the [`Color`] trait, which every color space in Carmine implements, and the
//! CIE 1931 XYZ space that acts as the hub for conversions between them.
//!
//! Every conversion in the crate goes through XYZ, so converting a CIELUV color to sRGB is exactly
//! the chain LUV → XYZ → linear RGB → sRGB, clipping once on the way into RGB.

use coord::Coord;

/// A point in the CIE 1931 XYZ color space, relative to D65 white and scaled so that white has a
/// luminance `y` of 100. Components are unbounded: imaginary colors are representable, and clipping
/// only happens on the way into RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis of the CIE 1931 space, a mix of the three cone responses chosen to be
    /// non-negative.
    pub x: f32,
    /// The luminance of the color, ranging from 0 to 100 for non-emissive colors.
    pub y: f32,
    /// The Z axis, roughly the response of the short-wavelength cones.
    pub z: f32,
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931 XYZ
/// color space.
pub trait Color: Sized {
    /// Converts from a color in CIE 1931 XYZ to the given color type.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts from the given color type to a color in CIE 1931 XYZ space.
    fn to_xyz(&self) -> XYZColor;

    /// Converts the given color to another color type, going through XYZ.
    /// # Example
    /// ```
    /// # use carmine::prelude::*;
    /// # use carmine::colors::CIELUVColor;
    /// let white = SRGBColor{r: 1., g: 1., b: 1.};
    /// let luv: CIELUVColor = white.convert();
    /// assert!((luv.l - 100.).abs() <= 1e-3);
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl Into<Coord> for XYZColor {
    fn into(self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl XYZColor {
    /// Returns `true` if every component of the two colors is within `tolerance` of the other.
    pub fn approx_equal(&self, other: &XYZColor, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}
