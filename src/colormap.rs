//! This module defines a generalized trait for a colormap, a mapping of the numbers between 0 and 1
//! to colors in a continuous way, and names the color map methods Carmine knows, so that a caller
//! can pick one by name and find the literature it comes from.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use brewer::{DivergingParams, QualitativeParams, SequentialParams};
use color::Color;
use cubehelix::CubeHelixParams;
use num;

/// A trait that models a colormap, a continuous mapping of the numbers between 0 and 1 to
/// colors. Any color output format is supported, but it must be consistent.
pub trait ColorMap<T: Color> {
    /// Maps a given number between 0 and 1 to a given output Color. Numbers outside of that range
    /// are clamped into it, so this never fails.
    fn transform_single(&self, x: f32) -> T;
    /// Maps a given collection of numbers between 0 and 1 to a Vec of Colors.
    fn transform<U: IntoIterator<Item = f32>>(&self, inputs: U) -> Vec<T> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }
}

/// Clamps a color map input into [0, 1].
pub(crate) fn unit_interval(x: f32) -> f32 {
    num::clamp(x, 0.0, 1.0)
}

/// The color map generation methods.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// One hue, light to dark. See [`brewer_sequential`](../brewer/fn.brewer_sequential.html).
    #[serde(rename = "brewer-sequential")]
    BrewerSequential,
    /// Two hues meeting at a light neutral. See
    /// [`brewer_diverging`](../brewer/fn.brewer_diverging.html).
    #[serde(rename = "brewer-diverging")]
    BrewerDiverging,
    /// Distinct hues of similar brightness. See
    /// [`brewer_qualitative`](../brewer/fn.brewer_qualitative.html).
    #[serde(rename = "brewer-qualitative")]
    BrewerQualitative,
    /// A spiral around the gray axis of the RGB cube. See
    /// [`cube_helix`](../cubehelix/fn.cube_helix.html).
    #[serde(rename = "cubehelix")]
    CubeHelix,
}

/// Every method, in a stable order.
pub const ALL_METHODS: [Method; 4] = [
    Method::BrewerSequential,
    Method::BrewerDiverging,
    Method::BrewerQualitative,
    Method::CubeHelix,
];

const WIJFFELAARS_2008: &str = "M. Wijffelaars, R. Vliegen, J. J. van Wijk, E.-J. van der Linden. \
    Generating Color Palettes using Intuitive Parameters. \
    Computer Graphics Forum 27(3), 2008.";

const GREEN_2011: &str = "D. A. Green. A colour scheme for the display of astronomical intensity \
    images. Bulletin of the Astronomical Society of India 39(2), 2011.";

impl Method {
    /// The name used by [`Display`](#impl-Display) and [`FromStr`](#impl-FromStr).
    pub fn name(self) -> &'static str {
        match self {
            Method::BrewerSequential => "brewer-sequential",
            Method::BrewerDiverging => "brewer-diverging",
            Method::BrewerQualitative => "brewer-qualitative",
            Method::CubeHelix => "cubehelix",
        }
    }

    /// The publication that describes the method.
    /// # Example
    /// ```
    /// # use carmine::prelude::*;
    /// assert!(Method::CubeHelix.reference().contains("Green"));
    /// ```
    pub fn reference(self) -> &'static str {
        match self {
            Method::BrewerSequential | Method::BrewerDiverging | Method::BrewerQualitative => {
                WIJFFELAARS_2008
            }
            Method::CubeHelix => GREEN_2011,
        }
    }

    /// The default parameters of the method.
    pub fn default_params(self) -> MethodParams {
        match self {
            Method::BrewerSequential => MethodParams::Sequential(SequentialParams::default()),
            Method::BrewerDiverging => MethodParams::Diverging(DivergingParams::default()),
            Method::BrewerQualitative => MethodParams::Qualitative(QualitativeParams::default()),
            Method::CubeHelix => MethodParams::CubeHelix(CubeHelixParams::default()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error in parsing a method name.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum MethodParseError {
    /// The string was empty or only whitespace.
    Empty,
    /// The string did not name any method.
    UnknownMethod,
}

impl fmt::Display for MethodParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MethodParseError::Empty => write!(f, "Empty color map method name"),
            MethodParseError::UnknownMethod => write!(f, "Unknown color map method"),
        }
    }
}

impl Error for MethodParseError {}

impl FromStr for Method {
    type Err = MethodParseError;

    /// Parses a method name, ignoring case and surrounding whitespace.
    /// # Example
    /// ```
    /// # use carmine::prelude::*;
    /// let method: Method = " CubeHelix ".parse().unwrap();
    /// assert_eq!(method, Method::CubeHelix);
    /// assert!("rainbow".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Method, MethodParseError> {
        let name = s.trim().to_lowercase();
        if name.is_empty() {
            return Err(MethodParseError::Empty);
        }
        ALL_METHODS
            .iter()
            .find(|m| m.name() == name)
            .cloned()
            .ok_or(MethodParseError::UnknownMethod)
    }
}

/// The parameters of any one method, for callers that choose the method at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodParams {
    /// A sequential map.
    Sequential(SequentialParams),
    /// A diverging map.
    Diverging(DivergingParams),
    /// A qualitative map.
    Qualitative(QualitativeParams),
    /// A CubeHelix map.
    CubeHelix(CubeHelixParams),
}

impl MethodParams {
    /// The method these parameters belong to.
    pub fn method(&self) -> Method {
        match *self {
            MethodParams::Sequential(_) => Method::BrewerSequential,
            MethodParams::Diverging(_) => Method::BrewerDiverging,
            MethodParams::Qualitative(_) => Method::BrewerQualitative,
            MethodParams::CubeHelix(_) => Method::CubeHelix,
        }
    }

    /// Generates `n` colors as sRGB bytes, along with the number of colors that were clipped to fit
    /// the sRGB cube. Only CubeHelix counts clipping; the other methods always report 0.
    /// # Example
    /// ```
    /// # use carmine::prelude::*;
    /// for method in ALL_METHODS.iter() {
    ///     let (map, _clipped) = method.default_params().generate(8);
    ///     assert_eq!(map.len(), 24);
    /// }
    /// ```
    pub fn generate(&self, n: usize) -> (Vec<u8>, usize) {
        match *self {
            MethodParams::Sequential(ref p) => (p.generate(n), 0),
            MethodParams::Diverging(ref p) => (p.generate(n), 0),
            MethodParams::Qualitative(ref p) => (p.generate(n), 0),
            MethodParams::CubeHelix(ref p) => p.generate(n),
        }
    }
}
