//! This module provides the reference white used throughout Carmine, CIE standard illuminant D65,
//! along with the CIE 1976 UCS chromaticity coordinates u′ and v′ that CIELUV is built on. The white
//! point is normalized so that the Y (luminance) value is 100.
//!
//! Carmine only ever works in D65: sRGB is defined relative to it, and the color map algorithms
//! never change illuminants, so there is no chromatic adaptation anywhere in the crate.

/// The X, Y, and Z coordinates of D65 white.
pub static D65_WHITE_POINT: [f32; 3] = [95.047, 100.000, 108.883];

/// The u′ chromaticity coordinate of an XYZ triple.
pub fn u_prime(x: f32, y: f32, z: f32) -> f32 {
    4.0 * x / (x + 15.0 * y + 3.0 * z)
}

/// The v′ chromaticity coordinate of an XYZ triple.
pub fn v_prime(x: f32, y: f32, z: f32) -> f32 {
    9.0 * y / (x + 15.0 * y + 3.0 * z)
}

lazy_static! {
    /// The (u′, v′) chromaticity of D65 white, which CIELUV measures every color against.
    pub static ref D65_UV_PRIME: (f32, f32) = {
        let [x, y, z] = D65_WHITE_POINT;
        (u_prime(x, y, z), v_prime(x, y, z))
    };
}
