//! This module implements D. A. Green's CubeHelix color scheme: a spiral around the gray diagonal
//! of the RGB cube, from black to white, whose perceived brightness increases monotonically.
//!
//! Unlike the Brewer-like generators, CubeHelix never touches CIELUV. It works directly in display
//! RGB, and the spiral can poke out of the cube for strong saturations; such samples are clipped back
//! in and counted.

use std::f32::consts::PI;

use bound::Bound;
use color::Color;
use colormap::{unit_interval, ColorMap};
use colors::SRGBColor;

/// The unclipped point of the helix at position `fract` in [0, 1].
fn helix_point(fract: f32, hue: f32, rotations: f32, saturation: f32, gamma: f32) -> SRGBColor {
    let angle = 2.0 * PI * (hue / 3.0 + 1.0 + rotations * fract);
    let fract = fract.powf(gamma);
    let amp = saturation * fract * (1.0 - fract) / 2.0;
    let (s, c) = angle.sin_cos();
    SRGBColor {
        r: fract + amp * (-0.14861 * c + 1.78277 * s),
        g: fract + amp * (-0.29227 * c - 0.90649 * s),
        b: fract + amp * (1.97294 * c),
    }
}

/// Generates a CubeHelix map of `n` colors, from black at index 0 to white at index `n - 1`.
///
/// `hue` is the start color (0 is blue, 1 red, 2 green: each unit is a third of a turn), `rotations`
/// the number of turns around the gray axis over the whole map, `saturation` the radius of the
/// spiral, and `gamma` bends the lightness ramp. Returns `3 * n` sRGB bytes and the number of colors
/// that had at least one channel clipped.
///
/// Bytes are truncated rather than rounded, so that the output matches other CubeHelix
/// implementations byte for byte.
/// # Example
/// ```
/// # use carmine::cubehelix::cube_helix;
/// let (map, clipped) = cube_helix(256, 0.5, -1.5, 1.2, 1.0);
/// assert_eq!(&map[..3], &[0, 0, 0]);
/// assert_eq!(&map[765..], &[255, 255, 255]);
/// assert!(clipped < 256);
/// ```
pub fn cube_helix(
    n: usize,
    hue: f32,
    rotations: f32,
    saturation: f32,
    gamma: f32,
) -> (Vec<u8>, usize) {
    debug!(
        "cubehelix map: n = {}, hue = {}, rotations = {}, saturation = {}, gamma = {}",
        n, hue, rotations, saturation, gamma
    );
    let last = if n < 2 { 1.0 } else { n as f32 - 1.0 };
    let mut colormap = Vec::with_capacity(3 * n);
    let mut clippings = 0;
    for i in 0..n {
        let fract = i as f32 / last;
        let (color, clipped) =
            helix_point(fract, hue, rotations, saturation, gamma).clamped_checked();
        if clipped {
            trace!("cubehelix color {} clipped to {:?}", i, color);
            clippings += 1;
        }
        colormap.push((color.r * 255.0) as u8);
        colormap.push((color.g * 255.0) as u8);
        colormap.push((color.b * 255.0) as u8);
    }
    debug!("cubehelix map: {} of {} colors clipped", clippings, n);
    (colormap, clippings)
}

/// The parameters of a CubeHelix map.
/// # Example
/// ```
/// # use carmine::prelude::*;
/// let params = CubeHelixParams::default().with_rotations(-1.0);
/// let (map, _clipped) = params.generate(16);
/// assert_eq!(map.len(), 48);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeHelixParams {
    /// The start color, in thirds of a turn: 0 is blue, 1 red, 2 green.
    pub hue: f32,
    /// The number of turns around the gray axis. Negative values turn the other way.
    pub rotations: f32,
    /// The radius of the spiral.
    pub saturation: f32,
    /// Lightness is raised to this power.
    pub gamma: f32,
}

impl Default for CubeHelixParams {
    fn default() -> CubeHelixParams {
        CubeHelixParams {
            hue: 0.5,
            rotations: -1.5,
            saturation: 1.2,
            gamma: 1.0,
        }
    }
}

impl CubeHelixParams {
    /// Sets the start hue.
    pub fn with_hue(mut self, hue: f32) -> CubeHelixParams {
        self.hue = hue;
        self
    }
    /// Sets the number of rotations.
    pub fn with_rotations(mut self, rotations: f32) -> CubeHelixParams {
        self.rotations = rotations;
        self
    }
    /// Sets the saturation.
    pub fn with_saturation(mut self, saturation: f32) -> CubeHelixParams {
        self.saturation = saturation;
        self
    }
    /// Sets gamma.
    pub fn with_gamma(mut self, gamma: f32) -> CubeHelixParams {
        self.gamma = gamma;
        self
    }

    /// Generates `n` colors with [`cube_helix`], along with the clip count.
    pub fn generate(&self, n: usize) -> (Vec<u8>, usize) {
        cube_helix(n, self.hue, self.rotations, self.saturation, self.gamma)
    }
}

/// Samples the helix continuously, clipping silently.
impl<T: Color> ColorMap<T> for CubeHelixParams {
    fn transform_single(&self, x: f32) -> T {
        helix_point(
            unit_interval(x),
            self.hue,
            self.rotations,
            self.saturation,
            self.gamma,
        ).clamped()
            .convert()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use serde_json;

    #[test]
    fn test_reference_endpoints() {
        let (map, _) = cube_helix(256, 0., -1.5, 1.0, 1.0);
        assert_eq!(map.len(), 768);
        assert_eq!(&map[..3], &[0, 0, 0]);
        assert_eq!(&map[765..], &[255, 255, 255]);
    }

    #[test]
    fn test_reference_bytes() {
        let (map, clipped) = cube_helix(256, 0., -1.5, 1.0, 1.0);
        assert_eq!(clipped, 0);
        let start: [u8; 24] = [
            0, 0, 0, 0, 0, 1, 1, 1, 3, 2, 2, 5, 3, 3, 7, 3, 4, 9, 4, 5, 11, 4, 6, 13,
        ];
        assert_eq!(&map[..24], &start[..]);

        let (map, clipped) = CubeHelixParams::default().generate(16);
        assert_eq!(clipped, 0);
        let expected: [u8; 48] = [
            0, 0, 0, 22, 10, 34, 24, 32, 68, 16, 62, 83, 14, 94, 74, 35, 116, 51, 80, 125, 35, 138,
            122, 45, 190, 117, 85, 218, 121, 145, 219, 138, 203, 204, 167, 240, 191, 201, 251, 195,
            229, 244, 220, 246, 239, 255, 255, 255,
        ];
        assert_eq!(map.len(), expected.len());
        for (i, (&a, &b)) in map.iter().zip(expected.iter()).enumerate() {
            assert!((i16::from(a) - i16::from(b)).abs() <= 1, "byte {}: {} {}", i, a, b);
        }
    }

    #[test]
    fn test_brightness_follows_gray_axis() {
        // the helix is perpendicular to the gray axis under these luminance weights
        for i in 0..=100 {
            let fract = i as f32 / 100.0;
            let (color, clipped) = helix_point(fract, 0., -1.5, 1.0, 1.0).clamped_checked();
            if clipped {
                continue;
            }
            let luminance = 0.30 * color.r + 0.59 * color.g + 0.11 * color.b;
            assert!(approx_eq!(f32, luminance, fract, epsilon = 2e-3), "{} {}", fract, luminance);
        }
    }

    #[test]
    fn test_clip_count_is_reproducible() {
        let first = cube_helix(256, 0., -1.5, 1.0, 1.0);
        let second = cube_helix(256, 0., -1.5, 1.0, 1.0);
        assert_eq!(first, second);
        // a wide spiral has to leave the cube somewhere
        let (_, clipped) = cube_helix(256, 0.5, -1.5, 3.0, 1.0);
        assert!(clipped > 0);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let (map, clipped) = cube_helix(64, 1.0, 2.0, 0.0, 0.8);
        assert_eq!(clipped, 0);
        for c in map.chunks(3) {
            assert!(c[0] == c[1] && c[1] == c[2], "{:?}", c);
        }
    }

    #[test]
    fn test_gamma_darkens() {
        let (linear, _) = cube_helix(3, 0.5, 0., 0., 1.0);
        let (dark, _) = cube_helix(3, 0.5, 0., 0., 2.0);
        assert!(dark[3] < linear[3]);
    }

    #[test]
    fn test_continuous_matches_discrete() {
        let params = CubeHelixParams::default();
        let (discrete, _) = params.generate(11);
        for i in 0..11 {
            let c: SRGBColor = params.transform_single(i as f32 / 10.0);
            let expected = SRGBColor::from_bytes([discrete[3 * i], discrete[3 * i + 1], discrete[3 * i + 2]]);
            // truncated bytes are up to one step below
            assert!(c.approx_equal(&expected, 2.0 / 255.0), "{} {:?} {:?}", i, c, expected);
        }
    }

    #[test]
    fn test_params_serde_roundtrip() {
        let params = CubeHelixParams::default().with_gamma(0.7).with_hue(2.0);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(serde_json::from_str::<CubeHelixParams>(&json).unwrap(), params);
        assert_eq!((params.rotations, params.saturation), (-1.5, 1.2));
    }
}
