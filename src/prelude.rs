//! This module simply brings the most common Carmine functionality under a single namespace, to
//! prevent excessive imports. The prelude includes every trait in Carmine, the two RGB color types
//! that callers meet at the edges, the generators with their parameter structs, and the method
//! enumeration. The CIE spaces in the [`colors`] module are not included.
//!
//! [`colors`]: ../colors/index.html

pub use bound::Bound;
pub use brewer::{
    brewer_diverging, brewer_qualitative, brewer_sequential, default_contrast_for_small_n,
    DivergingParams, QualitativeParams, SequentialParams,
};
pub use color::{Color, XYZColor};
pub use colormap::{ColorMap, Method, MethodParams, MethodParseError, ALL_METHODS};
pub use colors::{RGBColor, SRGBColor};
pub use cubehelix::{cube_helix, CubeHelixParams};
pub use mix::Mix;
