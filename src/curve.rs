//! This module builds the lightness-monotonic curve that every Brewer-like color map walks along.
//!
//! For a single hue, six anchors in CIELUV are laid out: a black endpoint `p0`, the most saturated
//! in-gamut color `p1`, and a light endpoint `p2` pulled towards a fixed bright yellow by the warmth
//! parameter. The saturation parameter then pulls two control points `q0` and `q2` towards `p1`, and
//! `q1` sits halfway between them. The curve is the pair of quadratic Bézier segments `p0 q0 q1` and
//! `q1 q2 p2`, which meet smoothly at `q1`.
//!
//! Lightness along each segment is itself a quadratic in the Bézier parameter, and it only ever
//! increases. So instead of sampling the curve at even parameter steps (which would give uneven
//! lightness steps), a sample picks its lightness first and inverts the quadratic to find where on
//! the curve that lightness is reached.

use std::ops::{Add, Mul};

use color::Color;
use colors::{CIELCHuvColor, CIELUVColor, RGBColor};
use coord::Coord;
use gamut::{max_saturation, most_saturated_in_srgb};
use mix::{mix_hue, normalize_hue, Mix};

/// The fixed light anchor that curves bend towards as warmth increases: pure yellow, the lightest
/// saturated color a display can show.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrightPoint {
    /// The bright point itself.
    pub luv: CIELUVColor,
    /// Its CIELCHuv hue, in radians.
    pub hue: f32,
    /// Its saturation.
    pub saturation: f32,
}

lazy_static! {
    /// Linear RGB (1, 1, 0) in CIELUV, along with its hue and saturation.
    pub static ref BRIGHT_POINT: BrightPoint = {
        let luv: CIELUVColor = RGBColor { r: 1., g: 1., b: 0. }.convert();
        let lch = luv.to_lch();
        BrightPoint {
            luv,
            hue: lch.h,
            saturation: lch.saturation(),
        }
    };
}

/// Evaluates the quadratic Bézier curve with control points `b0`, `b1`, `b2` at `t`.
pub fn bezier<T>(b0: T, b1: T, b2: T, t: f32) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    let a = (1.0 - t) * (1.0 - t);
    let b = 2.0 * (1.0 - t) * t;
    let c = t * t;
    b0 * a + b1 * b + b2 * c
}

/// Given the scalar control points of a quadratic Bézier curve and a value `v` it reaches, returns
/// the parameter at which it is reached. The discriminant is clamped at 0, so a `v` slightly outside
/// the curve's range still gives the nearest parameter rather than NaN.
///
/// When the control points are evenly spaced the curve is linear in its parameter and the quadratic
/// formula degenerates; the linear solution is used instead.
/// # Example
/// ```
/// # use carmine::curve::{bezier, inverse_bezier};
/// let t = inverse_bezier(0., 30., 50., bezier(0f32, 30., 50., 0.4));
/// assert!((t - 0.4).abs() <= 1e-5);
/// ```
pub fn inverse_bezier(b0: f32, b1: f32, b2: f32, v: f32) -> f32 {
    let denominator = b0 - 2.0 * b1 + b2;
    if denominator == 0.0 {
        return (v - b0) / (2.0 * (b1 - b0));
    }
    (b0 - b1 + (b1 * b1 - b0 * b2 + denominator * v).max(0.0).sqrt()) / denominator
}

/// The anchors of one hue's curve. See the module documentation for what each one is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrewerCurve {
    /// The dark endpoint: black, with zero chroma.
    pub p0: CIELUVColor,
    /// The most saturated in-gamut color of the curve's hue.
    pub p1: CIELUVColor,
    /// The light endpoint.
    pub p2: CIELUVColor,
    /// Control point of the dark segment.
    pub q0: CIELUVColor,
    /// Where the two segments meet.
    pub q1: CIELUVColor,
    /// Control point of the light segment.
    pub q2: CIELUVColor,
}

impl BrewerCurve {
    /// Lays out the anchors for a hue in radians. `saturation` pulls the curve towards the most
    /// saturated color of the hue, and `warmth` moves the light end towards yellow.
    pub fn new(hue: f32, saturation: f32, warmth: f32) -> BrewerCurve {
        let bright = *BRIGHT_POINT;
        let hue = normalize_hue(hue);

        let p0 = CIELCHuvColor {
            l: 0.0,
            c: 0.0,
            h: hue,
        }.to_luv();
        let p1 = most_saturated_in_srgb(hue);

        let p2l = (1.0 - warmth) * 100.0 + warmth * bright.luv.l;
        let p2h = mix_hue(warmth, hue, bright.hue);
        let p2s = max_saturation(p2l, p2h).min(warmth * saturation * bright.saturation);
        let p2 = CIELCHuvColor::from_saturation(p2l, p2s, p2h).to_luv();

        let q0 = p0.lerp(p1, saturation);
        let q2 = p2.lerp(p1, saturation);
        let q1 = q0.mix(q2);

        trace!(
            "curve for hue {}: p1 {:?}, p2 {:?}, q1 {:?}",
            hue,
            p1,
            p2,
            q1
        );
        BrewerCurve {
            p0,
            p1,
            p2,
            q0,
            q1,
            q2,
        }
    }

    /// The lightness a sample at position `t` in [0, 1] targets. Lightness steps grow evenly in
    /// perceived size: `contrast` sets how much of the lightness range the map spans, `brightness`
    /// where that span starts.
    pub fn lightness(t: f32, contrast: f32, brightness: f32) -> f32 {
        125.0 - 125.0 * 0.2f32.powf((1.0 - contrast) * brightness + t * contrast)
    }

    /// Finds the point on the curve with the lightness [`BrewerCurve::lightness`] gives for `t`.
    pub fn entry(&self, t: f32, contrast: f32, brightness: f32) -> CIELUVColor {
        let l = BrewerCurve::lightness(t, contrast, brightness);
        let (p0, p2): (Coord, Coord) = (self.p0.into(), self.p2.into());
        let (q0, q1, q2): (Coord, Coord, Coord) = (self.q0.into(), self.q1.into(), self.q2.into());

        let s = if l <= q1.x {
            0.5 * inverse_bezier(p0.x, q0.x, q1.x, l)
        } else {
            0.5 * inverse_bezier(q1.x, q2.x, p2.x, l) + 0.5
        };
        let point = if s <= 0.5 {
            bezier(p0, q0, q1, 2.0 * s)
        } else {
            bezier(q1, q2, p2, 2.0 * (s - 0.5))
        };
        point.into()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use colors::SRGBColor;

    #[test]
    fn test_bright_point_is_yellow() {
        let bright = *BRIGHT_POINT;
        assert!(bright.luv.l > 95. && bright.luv.l < 99.);
        assert!(bright.hue > 1.4 && bright.hue < 1.6);
        assert!(bright.saturation > 1.0);
    }

    #[test]
    fn test_inverse_bezier_recovers_parameter() {
        let controls = [(0f32, 20f32, 45f32), (45., 70., 98.), (10., 10.5, 90.), (0., 25., 50.)];
        for &(b0, b1, b2) in controls.iter() {
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                let v = bezier(b0, b1, b2, t);
                let t2 = inverse_bezier(b0, b1, b2, v);
                assert!(approx_eq!(f32, t, t2, epsilon = 1e-3), "{:?} {} {}", (b0, b1, b2), t, t2);
            }
        }
    }

    #[test]
    fn test_inverse_bezier_clamps_discriminant() {
        // 0 -> 40 -> 50 peaks at 50; asking for more than that still gives a finite answer
        let t = inverse_bezier(0., 40., 50., 60.);
        assert!(t.is_finite());
    }

    #[test]
    fn test_bezier_endpoints() {
        let b0 = Coord{x: 0., y: 1., z: 2.};
        let b1 = Coord{x: 5., y: 5., z: 5.};
        let b2 = Coord{x: 10., y: -3., z: 4.};
        assert_eq!(bezier(b0, b1, b2, 0.), b0);
        assert_eq!(bezier(b0, b1, b2, 1.), b2);
    }

    #[test]
    fn test_anchors() {
        let curve = BrewerCurve::new(4.0, 0.6, 0.15);
        assert_eq!(curve.p0, CIELUVColor{l: 0., u: 0., v: 0.});
        assert!(curve.p2.l > 97. && curve.p2.l < 100.);
        assert!(curve.q0.l < curve.q1.l && curve.q1.l < curve.q2.l);
        let mid: Coord = curve.q0.into();
        let expected = mid.midpoint(&curve.q2.into());
        assert!(curve.q1.approx_equal(&expected.into(), 1e-4));
    }

    #[test]
    fn test_entries_have_target_lightness() {
        let curve = BrewerCurve::new(0.5, 0.6, 0.15);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let entry = curve.entry(t, 0.88, 0.75);
            let l = BrewerCurve::lightness(t, 0.88, 0.75);
            assert!(approx_eq!(f32, entry.l, l, epsilon = 1e-2), "{} {}", entry.l, l);
        }
    }

    #[test]
    fn test_entries_are_monotonic() {
        for &hue in [0.0, 1.0, 2.5, 4.0, 5.5].iter() {
            let curve = BrewerCurve::new(hue, 0.6, 0.15);
            let mut last = -1.0;
            for i in 0..=50 {
                let entry = curve.entry(i as f32 / 50.0, 0.88, 0.75);
                assert!(entry.l > last, "hue {}: {} after {}", hue, entry.l, last);
                last = entry.l;
            }
        }
    }

    #[test]
    fn test_full_contrast_reaches_black() {
        let curve = BrewerCurve::new(2.0, 0.6, 0.15);
        let black: SRGBColor = curve.entry(0., 1., 0.75).convert();
        assert_eq!(black.to_bytes(), [0, 0, 0]);
    }
}
