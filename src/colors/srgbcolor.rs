//! This module implements sRGB, the gamma-encoded RGB that displays, image files, and the color map
//! byte output all speak. It differs from linear RGB only by the piecewise sRGB transfer function,
//! applied to each channel independently.

use bound::Bound;
use color::{Color, XYZColor};
use colors::rgbcolor::RGBColor;
use coord::Coord;

/// Encodes a linear light value with the sRGB transfer function: linear below 0.0031308, a 1/2.4
/// power curve above it.
pub fn srgb_encode(x: f32) -> f32 {
    if x <= 0.0031308 {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an sRGB value back to linear light. The inverse of [`srgb_encode`], with its breakpoint
/// at 0.04045.
pub fn srgb_decode(x: f32) -> f32 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// A color in sRGB, with gamma-encoded components between 0 and 1.
/// # Example
/// ```
/// # use carmine::prelude::*;
/// let mid_gray = SRGBColor::from_bytes([128, 128, 128]);
/// let linear = mid_gray.to_linear();
/// // perceptual mid-gray is only about a fifth of the light of white
/// assert!((linear.r - 0.2158).abs() <= 1e-3);
/// assert_eq!(mid_gray.to_bytes(), [128, 128, 128]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SRGBColor {
    /// The red component, gamma-encoded.
    pub r: f32,
    /// The green component, gamma-encoded.
    pub g: f32,
    /// The blue component, gamma-encoded.
    pub b: f32,
}

impl SRGBColor {
    /// Applies the sRGB transfer function to each channel of a linear color.
    pub fn from_linear(rgb: RGBColor) -> SRGBColor {
        SRGBColor {
            r: srgb_encode(rgb.r),
            g: srgb_encode(rgb.g),
            b: srgb_encode(rgb.b),
        }
    }

    /// Undoes the sRGB transfer function on each channel.
    pub fn to_linear(&self) -> RGBColor {
        RGBColor {
            r: srgb_decode(self.r),
            g: srgb_decode(self.g),
            b: srgb_decode(self.b),
        }
    }

    /// Builds a color from three 0-255 bytes.
    pub fn from_bytes(bytes: [u8; 3]) -> SRGBColor {
        SRGBColor {
            r: f32::from(bytes[0]) / 255.0,
            g: f32::from(bytes[1]) / 255.0,
            b: f32::from(bytes[2]) / 255.0,
        }
    }

    /// Quantizes to three 0-255 bytes, rounding half away from zero. Components are clamped to
    /// [0, 1] first; a NaN component (which only the degenerate L = 0 corner of CIELUV can produce)
    /// becomes 0.
    pub fn to_bytes(&self) -> [u8; 3] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Returns `true` if every component of the two colors is within `tolerance` of the other.
    pub fn approx_equal(&self, other: &SRGBColor, tolerance: f32) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
    }
}

impl Color for SRGBColor {
    /// Converts through linear RGB, which clips to the unit cube before encoding.
    fn from_xyz(xyz: XYZColor) -> SRGBColor {
        SRGBColor::from_linear(RGBColor::from_xyz(xyz))
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_linear().to_xyz()
    }
}

impl Bound for SRGBColor {
    fn bounds() -> [(f32, f32); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl From<Coord> for SRGBColor {
    fn from(c: Coord) -> SRGBColor {
        SRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for SRGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_transfer_function_roundtrip() {
        for i in 0..=100 {
            let x = i as f32 / 100.0;
            assert!(approx_eq!(f32, srgb_decode(srgb_encode(x)), x, epsilon = 1e-5), "{}", x);
        }
    }

    #[test]
    fn test_transfer_function_breakpoints() {
        // both pieces agree (to within rounding) at the breakpoint
        let below = 0.0031308 * 12.92;
        let above = 1.055 * 0.0031308f32.powf(1.0 / 2.4) - 0.055;
        assert!(approx_eq!(f32, below, above, epsilon = 1e-4));
        assert_eq!(srgb_encode(0.), 0.);
        assert!(approx_eq!(f32, srgb_encode(1.), 1., epsilon = 1e-6));
    }

    #[test]
    fn test_srgb_linear_roundtrip() {
        let srgb = SRGBColor{r: 0.2, g: 0.6, b: 0.95};
        let back = SRGBColor::from_linear(srgb.to_linear());
        assert!(back.approx_equal(&srgb, 1e-5));
    }

    #[test]
    fn test_byte_quantization() {
        assert_eq!(SRGBColor{r: 0., g: 0.5, b: 1.}.to_bytes(), [0, 128, 255]);
        assert_eq!(SRGBColor{r: -0.2, g: 1.3, b: ::std::f32::NAN}.to_bytes(), [0, 255, 0]);
        assert_eq!(SRGBColor::from_bytes([12, 200, 37]).to_bytes(), [12, 200, 37]);
    }
}
