//! Carmine generates color maps from intuitive parameters. Instead of picking colors by hand, or
//! picking endpoints and interpolating between them in RGB (which gives muddy middles and uneven
//! steps), a caller asks for, say, a sequential map of a given hue, contrast, and warmth, and gets
//! colors whose lightness steps look even.
//!
//! The Brewer-like methods work in CIELUV, where lightness is close to perceptually uniform and the
//! edge of the sRGB gamut can be found in closed form. CubeHelix works directly in display RGB.
//! Every generator is a pure function of its parameters, and returns plain sRGB bytes.
//!
//! # Example
//! ```
//! # use carmine::prelude::*;
//! let map = brewer_sequential(9, 4.0, default_contrast_for_small_n(9), 0.6, 0.75, 0.15);
//! assert_eq!(map.len(), 27);
//! let (helix, clipped) = CubeHelixParams::default().generate(256);
//! assert_eq!(helix.len(), 768);
//! assert!(clipped < 256);
//! ```

#![doc(html_root_url = "https://docs.rs/carmine/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate nalgebra as na;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod bound;
pub mod brewer;
pub mod color;
pub mod colormap;
pub mod colors;
mod consts;
pub mod coord;
pub mod cubehelix;
pub mod curve;
pub mod gamut;
pub mod illuminants;
pub mod mix;
pub mod prelude;
