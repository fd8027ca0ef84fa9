//! This module finds the edge of the sRGB gamut in CIELUV. Given a hue, it computes the most
//! saturated color of that hue that still fits in the sRGB cube, without any iteration: the cube's
//! surface is made of faces on which one channel is 0 and another is 1, and along the ray of a fixed
//! hue the remaining channel satisfies a single linear equation.
//!
//! The six corners of the cube that are neither black nor white (red, yellow, green, cyan, blue,
//! magenta) split the hue circle into six sectors, one per pair of faces. Their hues do not depend on
//! anything, so they are computed once per process.

use color::Color;
use colors::srgbcolor::srgb_encode;
use colors::{CIELUVColor, SRGBColor};
use consts::STANDARD_RGB_TO_XYZ_MAT;
use illuminants::D65_UV_PRIME;
use mix::normalize_hue;
use num;

/// The CIELCHuv hue of a gamma-encoded sRGB color.
fn srgb_hue(r: f32, g: f32, b: f32) -> f32 {
    SRGBColor { r, g, b }.convert::<CIELUVColor>().to_lch().h
}

lazy_static! {
    /// The hues of red, yellow, green, cyan, blue, and magenta, in that (increasing) order.
    pub static ref GAMUT_HUES: [f32; 6] = [
        srgb_hue(1., 0., 0.),
        srgb_hue(1., 1., 0.),
        srgb_hue(0., 1., 0.),
        srgb_hue(0., 1., 1.),
        srgb_hue(0., 0., 1.),
        srgb_hue(1., 0., 1.),
    ];
}

/// For a hue, the channel indices `(free, zero, one)`: which channel varies along the gamut edge,
/// which is held at 0, and which is held at 1.
fn sector_channels(hue: f32) -> (usize, usize, usize) {
    let h = &*GAMUT_HUES;
    if hue < h[0] {
        (2, 1, 0)
    } else if hue < h[1] {
        (1, 2, 0)
    } else if hue < h[2] {
        (0, 2, 1)
    } else if hue < h[3] {
        (2, 0, 1)
    } else if hue < h[4] {
        (1, 0, 2)
    } else if hue < h[5] {
        (0, 1, 2)
    } else {
        (2, 1, 0)
    }
}

/// Computes the most saturated color that fits in the sRGB cube for the given CIELCHuv hue (in
/// radians; any angle is brought into [0, 2π) first), and returns it in CIELUV.
///
/// The result always lies on the surface of the cube: one channel is 0, one is 1. Callers that
/// need the boundary for the same hue many times should compute it once and reuse it.
/// # Example
/// ```
/// # use carmine::prelude::*;
/// # use carmine::gamut::most_saturated_in_srgb;
/// let blue_hue = RGBColor{r: 0., g: 0., b: 1.}.convert::<carmine::colors::CIELCHuvColor>().h;
/// let edge = most_saturated_in_srgb(blue_hue);
/// let srgb: SRGBColor = edge.convert();
/// assert_eq!(srgb.to_bytes(), [0, 0, 255]);
/// ```
pub fn most_saturated_in_srgb(hue: f32) -> CIELUVColor {
    let hue = normalize_hue(hue);
    let (i, j, k) = sector_channels(hue);
    let m = STANDARD_RGB_TO_XYZ_MAT();
    let (u_prime_n, v_prime_n) = *D65_UV_PRIME;

    // (alpha, beta) is the normal of the hue ray in the u'v' plane; a color is on the ray when its
    // u'v' offset from white is orthogonal to it, which is linear in the channels once both
    // chromaticity denominators are multiplied out
    let alpha = -hue.sin();
    let beta = hue.cos();
    let t = alpha * u_prime_n + beta * v_prime_n;
    let weight = |c: usize| {
        t * (m[(0, c)] + 15.0 * m[(1, c)] + 3.0 * m[(2, c)])
            - (4.0 * alpha * m[(0, c)] + 9.0 * beta * m[(1, c)])
    };
    let q0 = weight(k);
    let q1 = weight(i);

    let mut srgb = [0.0f32; 3];
    srgb[j] = 0.0;
    srgb[k] = 1.0;
    srgb[i] = srgb_encode(num::clamp(-q0 / q1, 0.0, 1.0));

    SRGBColor {
        r: srgb[0],
        g: srgb[1],
        b: srgb[2],
    }.convert()
}

/// Approximates the largest saturation available at lightness `l` and hue `h` inside the sRGB gamut.
///
/// The gamut's saturation envelope at a fixed hue is modeled as two straight segments: from black
/// (lightness 0) up to the most saturated color, and from there to white (lightness 100). The result
/// is exact at those three points and an underestimate elsewhere.
pub fn max_saturation(l: f32, h: f32) -> f32 {
    let boundary = most_saturated_in_srgb(h);
    let end_l = if l > boundary.l { 100.0 } else { 0.0 };
    let end = CIELUVColor {
        l: end_l,
        u: 0.0,
        v: 0.0,
    };
    let alpha = (end.l - l) / (end.l - boundary.l);
    let boundary_s = boundary.saturation();
    let end_s = end.saturation();
    alpha * (boundary_s - end_s) + end_s
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use mix::TWO_PI;

    fn hues() -> Vec<f32> {
        (0..360).map(|i| i as f32 * TWO_PI / 360.0).collect()
    }

    #[test]
    fn test_gamut_hues_are_increasing() {
        let h = *GAMUT_HUES;
        for w in h.windows(2) {
            assert!(w[0] < w[1], "{:?}", h);
        }
        // red is the only primary with a hue just past 0
        assert!(h[0] > 0.1 && h[0] < 0.3);
    }

    #[test]
    fn test_boundary_lies_on_cube_surface() {
        for h in hues() {
            let srgb: SRGBColor = most_saturated_in_srgb(h).convert();
            let channels = [srgb.r, srgb.g, srgb.b];
            assert!(channels.iter().any(|&c| c.abs() <= 1e-4), "{} {:?}", h, srgb);
            assert!(channels.iter().any(|&c| (c - 1.0).abs() <= 1e-4), "{} {:?}", h, srgb);
        }
    }

    #[test]
    fn test_boundary_has_requested_hue() {
        for h in hues() {
            let lch = most_saturated_in_srgb(h).to_lch();
            let diff = ::mix::hue_difference(lch.h, h);
            assert!(diff < 0.02, "{} -> {}", h, lch.h);
        }
    }

    #[test]
    fn test_primaries_are_their_own_boundary() {
        let red = SRGBColor{r: 1., g: 0., b: 0.};
        let luv: CIELUVColor = red.convert();
        let edge = most_saturated_in_srgb(luv.to_lch().h);
        assert!(edge.approx_equal(&luv, 0.05), "{:?} {:?}", edge, luv);
    }

    #[test]
    fn test_black_and_white_have_no_saturation() {
        for h in hues() {
            assert_eq!(max_saturation(0., h), 0.);
            assert_eq!(max_saturation(100., h), 0.);
        }
    }

    #[test]
    fn test_max_saturation_peaks_at_boundary() {
        let h = 4.0;
        let edge = most_saturated_in_srgb(h);
        let peak = max_saturation(edge.l, h);
        assert!(approx_eq!(f32, peak, edge.saturation(), epsilon = 1e-4));
        assert!(max_saturation(edge.l * 0.5, h) < peak);
        assert!(max_saturation(edge.l + 0.5 * (100. - edge.l), h) < peak);
    }

    #[test]
    fn test_boundary_wraps_full_turns() {
        for &h in [0.05f32, 1.0, 2.5, 4.0, 6.2].iter() {
            let edge = most_saturated_in_srgb(h);
            let above = most_saturated_in_srgb(h + TWO_PI);
            let below = most_saturated_in_srgb(h - TWO_PI);
            assert!(edge.approx_equal(&above, 1e-2), "{} {:?} {:?}", h, edge, above);
            assert!(edge.approx_equal(&below, 1e-2), "{} {:?} {:?}", h, edge, below);
        }
        assert!(approx_eq!(
            f32,
            max_saturation(60., 1.0 + TWO_PI),
            max_saturation(60., 1.0),
            epsilon = 1e-3
        ));
    }
}
