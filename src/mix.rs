//! Describes colors that can be mixed with other colors in their own 3D space, and the hue
//! arithmetic that has to go alongside it.
//!
//! Note that mixing differs depending on the color space being used: a straight line in CIELUV is a
//! curve in sRGB and vice versa. The color map generators mix in CIELUV on purpose, and only ever mix
//! colors of the same type, so `A.mix(B)` always equals `B.mix(A)`.
//!
//! Hues are angles, and angles wrap. Mixing two hues on either side of 0 the naive way walks the
//! long way around the circle; [`mix_hue`] always takes the short way.

use std::f32::consts::PI;

use color::Color;
use coord::Coord;

/// A full turn, in radians.
pub const TWO_PI: f32 = 2.0 * PI;

/// Describes a Color that can be mixed with other colors of its type by treating both as points in
/// 3D space.
pub trait Mix: Color {
    /// Given two Colors, returns a Color representing their midpoint.
    fn mix(self, other: Self) -> Self;
    /// Linearly interpolates between two Colors: `t = 0` gives `self` and `t = 1` gives `other`.
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl<T: Color + From<Coord> + Into<Coord>> Mix for T {
    fn mix(self, other: T) -> T {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        T::from(c1.midpoint(&c2))
    }
    fn lerp(self, other: T, t: f32) -> T {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        T::from(c1.lerp(&c2, t))
    }
}

/// Brings any angle into [0, 2π).
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(TWO_PI);
    // tiny negative angles round up to a full turn
    if h >= TWO_PI {
        0.0
    } else {
        h
    }
}

/// Blends hue `h0` towards hue `h1` by `alpha`, along the shorter arc between them. The result is in
/// [0, 2π).
/// # Example
/// ```
/// # use carmine::mix::mix_hue;
/// // halfway between 0.1 and 6.2 radians is next to 0, not next to π
/// let h = mix_hue(0.5, 0.1, 6.2);
/// assert!(h < 0.1);
/// ```
pub fn mix_hue(alpha: f32, h0: f32, h1: f32) -> f32 {
    let m = (PI + h1 - h0).rem_euclid(TWO_PI) - PI;
    normalize_hue(h0 + alpha * m)
}

/// The angular distance between two hues in [0, 2π), between 0 and π.
pub fn hue_difference(h0: f32, h1: f32) -> f32 {
    let t = (h1 - h0).abs();
    if t < PI {
        t
    } else {
        TWO_PI - t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::CIELUVColor;

    #[test]
    fn test_mix_hue_crosses_seam() {
        // 0.1 and 6.2 radians are 0.183 apart through 0, not 6.1 apart through π
        let forward = mix_hue(0.5, 0.1, 6.2);
        let backward = mix_hue(0.5, 6.2, 0.1);
        let expected = normalize_hue(0.1 - 0.5 * (TWO_PI - 6.1));
        assert!(approx_eq!(f32, forward, expected, epsilon = 1e-5));
        assert!(approx_eq!(f32, backward, expected, epsilon = 1e-5));
        assert!(hue_difference(forward, 0.1) < 0.1);
        assert!(hue_difference(forward, 6.2) < 0.1);
    }

    #[test]
    fn test_mix_hue_endpoints() {
        assert!(approx_eq!(f32, mix_hue(0., 1.2, 4.0), 1.2, epsilon = 1e-6));
        assert!(approx_eq!(f32, mix_hue(1., 1.2, 4.0), 4.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, mix_hue(1., 0.1, 6.2), 6.2, epsilon = 1e-5));
        // without crossing the seam it is an ordinary lerp
        assert!(approx_eq!(f32, mix_hue(0.25, 1.0, 2.0), 1.25, epsilon = 1e-6));
    }

    #[test]
    fn test_hue_difference_is_symmetric() {
        assert!(approx_eq!(f32, hue_difference(0.1, 6.2), TWO_PI - 6.1, epsilon = 1e-5));
        assert!(approx_eq!(f32, hue_difference(6.2, 0.1), TWO_PI - 6.1, epsilon = 1e-5));
        assert!(approx_eq!(f32, hue_difference(1., 2.5), 1.5, epsilon = 1e-6));
    }

    #[test]
    fn test_normalize_hue() {
        assert!(approx_eq!(f32, normalize_hue(-0.5), TWO_PI - 0.5, epsilon = 1e-6));
        assert!(approx_eq!(f32, normalize_hue(TWO_PI + 0.25), 0.25, epsilon = 1e-5));
        assert_eq!(normalize_hue(1.), 1.);
    }

    #[test]
    fn test_normalize_hue_stays_below_full_turn() {
        for &h in [-1e-9f32, -1e-7, -TWO_PI, TWO_PI, 3.0 * TWO_PI].iter() {
            let n = normalize_hue(h);
            assert!(n >= 0.0 && n < TWO_PI, "{} -> {}", h, n);
        }
        assert_eq!(normalize_hue(-1e-9), 0.0);
        assert!(mix_hue(0.5, -1e-9, -1e-9) < TWO_PI);
    }

    #[test]
    fn test_luv_mixing() {
        let luv = CIELUVColor{l: 45.0, u: 67.0, v: 49.0};
        let luv2 = CIELUVColor{l: 53.0, u: 59.0, v: 3.0};
        let luv_mixed = luv.mix(luv2);
        assert!(luv_mixed.approx_equal(&CIELUVColor{l: 49.0, u: 63.0, v: 26.0}, 1e-5));
        assert!(luv.lerp(luv2, 0.25).approx_equal(&CIELUVColor{l: 47.0, u: 65.0, v: 37.5}, 1e-5));
    }
}
