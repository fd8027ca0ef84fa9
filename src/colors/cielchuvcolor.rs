//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIELCH. Carmine measures hue in radians,
//! since every consumer of the hue is trigonometry.

use color::{Color, XYZColor};
use colors::cieluvcolor::{self, CIELUVColor};
use coord::Coord;
use mix::normalize_hue;

/// The polar version of CIELUV. Lightness is shared with CIELUV; chroma is the distance from the
/// neutral axis and hue the angle around it.
/// # Example
///
/// ```
/// # use carmine::prelude::*;
/// # use carmine::colors::CIELCHuvColor;
/// // red sits a little above 0 radians, yellow just short of a quarter turn
/// let red: CIELCHuvColor = RGBColor{r: 1., g: 0., b: 0.}.convert();
/// let yellow: CIELCHuvColor = RGBColor{r: 1., g: 1., b: 0.}.convert();
/// assert!(red.h > 0.1 && red.h < 0.3);
/// assert!(yellow.h > 1.4 && yellow.h < 1.6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The lightness component. Exactly the same as CIELUV. Varies between 0 and 100 by definition.
    pub l: f32,
    /// The chroma component: essentially, how colorful the color is compared to a gray of the same
    /// lightness. Never negative.
    pub c: f32,
    /// The hue angle in radians, in [0, 2π).
    pub h: f32,
}

impl CIELCHuvColor {
    /// Converts from CIELUV directly: chroma is the length of (u, v), hue its angle.
    pub fn from_luv(luv: CIELUVColor) -> CIELCHuvColor {
        CIELCHuvColor {
            l: luv.l,
            c: luv.u.hypot(luv.v),
            h: normalize_hue(luv.v.atan2(luv.u)),
        }
    }

    /// Converts back to CIELUV directly.
    pub fn to_luv(&self) -> CIELUVColor {
        CIELUVColor {
            l: self.l,
            u: self.c * self.h.cos(),
            v: self.c * self.h.sin(),
        }
    }

    /// Builds a color from lightness, saturation, and hue rather than chroma.
    pub fn from_saturation(l: f32, s: f32, h: f32) -> CIELCHuvColor {
        CIELCHuvColor {
            l,
            c: cieluvcolor::chroma(l, s),
            h,
        }
    }

    /// The saturation of this color: chroma divided by lightness.
    pub fn saturation(&self) -> f32 {
        cieluvcolor::saturation(self.l, self.c)
    }
}

impl Color for CIELCHuvColor {
    /// Converts from XYZ to CIELCHuv through CIELUV.
    fn from_xyz(xyz: XYZColor) -> CIELCHuvColor {
        CIELCHuvColor::from_luv(CIELUVColor::from_xyz(xyz))
    }
    /// Gets the XYZ color that corresponds to this one, through CIELUV.
    fn to_xyz(&self) -> XYZColor {
        self.to_luv().to_xyz()
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl Into<Coord> for CIELCHuvColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.c,
            z: self.h,
        }
    }
}
