//! This module implements the CIELUV color space, which was adopted concurrently with
//! CIELAB. CIELUV is the working space of the Brewer-like color map generators: its lightness is
//! close to perceptually uniform, and because u and v are linear-fractional in XYZ, the sRGB gamut
//! boundary can be found in closed form.

use color::{Color, XYZColor};
use colors::cielchuvcolor::CIELCHuvColor;
use coord::Coord;
use illuminants::{u_prime, v_prime, D65_UV_PRIME, D65_WHITE_POINT};

/// Divides by `l`, but never by anything smaller than this.
pub const SATURATION_EPSILON: f32 = 1e-8;

/// The saturation of a color with the given lightness and chroma: chroma relative to lightness, so
/// that a dark, deep red can be highly saturated despite its low chroma.
pub fn saturation(l: f32, c: f32) -> f32 {
    c / l.max(SATURATION_EPSILON)
}

/// The inverse of [`saturation`]: the chroma a color of lightness `l` needs to reach saturation `s`.
pub fn chroma(l: f32, s: f32) -> f32 {
    s * l
}

/// A similar color system to CIELAB, adapted at the same time and with similar goals. U and V
/// represent chromaticity and are scaled by lightness, so that black has no chromaticity at all.
/// Carmine's CIELUV is always relative to D65 white.
/// # Example
///
/// ```
/// # use carmine::prelude::*;
/// # use carmine::colors::CIELUVColor;
/// let white: CIELUVColor = SRGBColor{r: 1., g: 1., b: 1.}.convert();
/// assert!((white.l - 100.).abs() <= 1e-2);
/// assert!(white.u.abs() <= 0.1);
/// assert!(white.v.abs() <= 0.1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component of LUV. Ranges from 0 to 100 by definition.
    pub l: f32,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    pub u: f32,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is.
    pub v: f32,
}

impl Color for CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color. Lightness uses the CIE piecewise cube root with
    /// its linear segment below (6/29)³; black, which has no chromaticity, maps to u = v = 0.
    fn from_xyz(xyz: XYZColor) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let (u_prime_n, v_prime_n) = *D65_UV_PRIME;
        let y_ratio = xyz.y / D65_WHITE_POINT[1];
        let l = if y_ratio <= (6.0 * 6.0 * 6.0) / (29.0 * 29.0 * 29.0) {
            (29.0 * 29.0 * 29.0) / (3.0 * 3.0 * 3.0) * y_ratio
        } else {
            116.0 * y_ratio.cbrt() - 16.0
        };
        if xyz.x + 15.0 * xyz.y + 3.0 * xyz.z == 0.0 {
            return CIELUVColor { l, u: 0.0, v: 0.0 };
        }
        let u = 13.0 * l * (u_prime(xyz.x, xyz.y, xyz.z) - u_prime_n);
        let v = 13.0 * l * (v_prime(xyz.x, xyz.y, xyz.z) - v_prime_n);
        CIELUVColor { l, u, v }
    }
    /// Returns a new `XYZColor` that matches the given color. Lightness 0 is black no matter what u
    /// and v say.
    fn to_xyz(&self) -> XYZColor {
        if self.l == 0.0 {
            return XYZColor { x: 0.0, y: 0.0, z: 0.0 };
        }
        let (u_prime_n, v_prime_n) = *D65_UV_PRIME;
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;
        let y = if self.l <= 8.0 {
            D65_WHITE_POINT[1] * self.l * ((3.0 * 3.0 * 3.0) / (29.0 * 29.0 * 29.0))
        } else {
            let tmp = (self.l + 16.0) / 116.0;
            D65_WHITE_POINT[1] * tmp * tmp * tmp
        };
        let x = y * (9.0 * u_prime) / (4.0 * v_prime);
        let z = y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime);
        XYZColor { x, y, z }
    }
}

impl CIELUVColor {
    /// Converts to the polar form directly, without going through XYZ.
    pub fn to_lch(&self) -> CIELCHuvColor {
        CIELCHuvColor::from_luv(*self)
    }

    /// The saturation of this color: chroma divided by lightness.
    pub fn saturation(&self) -> f32 {
        saturation(self.l, self.u.hypot(self.v))
    }

    /// Returns `true` if every component of the two colors is within `tolerance` of the other.
    pub fn approx_equal(&self, other: &CIELUVColor, tolerance: f32) -> bool {
        (self.l - other.l).abs() <= tolerance
            && (self.u - other.u).abs() <= tolerance
            && (self.v - other.v).abs() <= tolerance
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl Into<Coord> for CIELUVColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.u,
            z: self.v,
        }
    }
}
