//! This file provides the constant matrices used for converting between linear RGB and CIE XYZ. They
//! are the published four- and seven-digit sRGB matrices, written out rather than computed from each
//! other, so every conversion rounds the same way on every run.

use na::{Matrix3, Vector3};

/// The linear sRGB to CIE XYZ matrix (D65), with XYZ normalized so that Y ranges from 0 to 1.
/// Multiply by 100 to get the conventional 0-100 XYZ scale used everywhere else in Carmine.
#[allow(non_snake_case)]
pub fn STANDARD_RGB_TO_XYZ_MAT() -> Matrix3<f32> {
    Matrix3::new(
        0.4124, 0.3576, 0.1805,
        0.2126, 0.7152, 0.0722,
        0.0193, 0.1192, 0.9505,
    )
}

/// The inverse of [`STANDARD_RGB_TO_XYZ_MAT`], at higher precision.
#[allow(non_snake_case)]
pub fn STANDARD_XYZ_TO_RGB_MAT() -> Matrix3<f32> {
    Matrix3::new(
        3.2406255, -1.5372080, -0.4986286,
        -0.9689307, 1.8757561, 0.0415175,
        0.0557101, -0.2040211, 1.0569959,
    )
}

/// Matrix-vector product on plain triples.
pub fn transform(m: Matrix3<f32>, v: [f32; 3]) -> [f32; 3] {
    let out = m * Vector3::new(v[0], v[1], v[2]);
    [out[0], out[1], out[2]]
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_matrices_are_inverses() {
        let prod = STANDARD_XYZ_TO_RGB_MAT() * STANDARD_RGB_TO_XYZ_MAT();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(approx_eq!(f32, prod[(i, j)], expected, epsilon = 1e-3));
            }
        }
    }

    #[test]
    fn test_white_maps_to_unit_luminance() {
        let xyz = transform(STANDARD_RGB_TO_XYZ_MAT(), [1., 1., 1.]);
        assert!(approx_eq!(f32, xyz[1], 1.0, epsilon = 1e-6));
    }
}
