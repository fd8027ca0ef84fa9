//! This module contains the three Brewer-like color map generators, which mimic the look of the
//! hand-picked ColorBrewer palettes from a handful of intuitive parameters.
//!
//! - Sequential maps walk one hue's curve from light to dark.
//! - Diverging maps join two hues' curves at a shared light neutral in the middle.
//! - Qualitative maps step around the hue circle, keeping all colors at a similar apparent
//!   brightness.
//!
//! Each generator comes in two forms: a free function that writes `n` sRGB byte triples, and a
//! parameter struct with sensible defaults that can do the same through
//! [`generate`](SequentialParams::generate) or be sampled continuously through
//! [`ColorMap`](../colormap/trait.ColorMap.html).
//!
//! All angles are in radians. Parameters are not range-checked: saturation, contrast, brightness,
//! and warmth are expected to lie in [0, 1].

use std::f32::consts::PI;

use color::Color;
use colormap::{unit_interval, ColorMap};
use colors::{CIELCHuvColor, CIELUVColor, RGBColor, SRGBColor};
use curve::{BrewerCurve, BRIGHT_POINT};
use gamut::max_saturation;
use mix::{hue_difference, normalize_hue, Mix, TWO_PI};

lazy_static! {
    /// The saturation of pure red, the most saturated color in the sRGB gamut.
    pub static ref RED_SATURATION: f32 =
        RGBColor { r: 1., g: 0., b: 0. }.convert::<CIELUVColor>().saturation();
}

/// The contrast that looks best for a discrete map of `n` colors: few colors should not span the
/// whole lightness range, or neighbors end up too far apart.
/// # Example
/// ```
/// # use carmine::brewer::default_contrast_for_small_n;
/// assert!((default_contrast_for_small_n(3) - 0.52).abs() <= 1e-6);
/// assert_eq!(default_contrast_for_small_n(256), 0.88);
/// ```
pub fn default_contrast_for_small_n(n: usize) -> f32 {
    (0.34 + 0.06 * n as f32).min(0.88)
}

/// [`default_contrast_for_small_n`] for sequential maps.
pub fn sequential_default_contrast_for_small_n(n: usize) -> f32 {
    default_contrast_for_small_n(n)
}

/// [`default_contrast_for_small_n`] for diverging maps.
pub fn diverging_default_contrast_for_small_n(n: usize) -> f32 {
    default_contrast_for_small_n(n)
}

/// The divisor that turns an index into a position in [0, 1]. A single color sits at position 0.
fn last_index(n: usize) -> f32 {
    if n < 2 {
        1.0
    } else {
        n as f32 - 1.0
    }
}

fn luv_to_bytes(color: CIELUVColor) -> [u8; 3] {
    color.convert::<SRGBColor>().to_bytes()
}

/// Generates a sequential map of `n` colors of a single hue, running from light (index 0) to dark.
///
/// `contrast` sets how much of the lightness range the map spans and `brightness` how light it
/// starts; `saturation` bends the curve towards the hue's most saturated color, and `warmth` tints
/// the light end towards yellow. The result holds `3 * n` bytes, one sRGB triple per color.
/// # Example
/// ```
/// # use carmine::brewer::brewer_sequential;
/// let blues = brewer_sequential(5, 4.0, 0.64, 0.6, 0.75, 0.15);
/// assert_eq!(blues.len(), 15);
/// // the first color is the lightest
/// let sum = |i: usize| blues[3 * i..3 * i + 3].iter().map(|&b| u32::from(b)).sum::<u32>();
/// assert!(sum(0) > sum(4));
/// ```
pub fn brewer_sequential(
    n: usize,
    hue: f32,
    contrast: f32,
    saturation: f32,
    brightness: f32,
    warmth: f32,
) -> Vec<u8> {
    debug!(
        "sequential map: n = {}, hue = {}, contrast = {}, saturation = {}, brightness = {}, warmth = {}",
        n, hue, contrast, saturation, brightness, warmth
    );
    let curve = BrewerCurve::new(hue, saturation, warmth);
    let last = last_index(n);
    let mut colormap = Vec::with_capacity(3 * n);
    for i in 0..n {
        let t = (n - 1 - i) as f32 / last;
        let color = curve.entry(t, contrast, brightness);
        trace!("sequential color {} at t = {}: {:?}", i, t, color);
        colormap.extend_from_slice(&luv_to_bytes(color));
    }
    colormap
}

/// The neutral color between two curves' light ends, desaturated and tinted towards the bright
/// point's hue by `warmth`.
fn blended_neutral(c0: CIELUVColor, c1: CIELUVColor, warmth: f32) -> CIELUVColor {
    let bright = *BRIGHT_POINT;
    let neutral_saturation = 0.5 * (c0.saturation() + c1.saturation()) * warmth;
    let l = 0.5 * (c0.l + c1.l);
    let s = max_saturation(l, bright.hue).min(neutral_saturation);
    CIELCHuvColor::from_saturation(l, s, bright.hue).to_luv()
}

/// Generates a diverging map of `n` colors: the first half runs from dark to light along the curve
/// of `hue`, the second half from light to dark along the curve of `hue + divergence`.
///
/// When `n` is odd, the middle color is a neutral. Small maps (up to 9 colors) get a distinct
/// desaturated neutral tinted towards yellow; larger ones, which look continuous, use the plain
/// average of both curves' light ends so that no visible band appears in the middle.
/// # Example
/// ```
/// # use carmine::brewer::brewer_diverging;
/// use std::f32::consts::PI;
/// let map = brewer_diverging(7, 0.2, 4. * PI / 3., 0.76, 0.6, 0.75, 0.15);
/// assert_eq!(map.len(), 21);
/// ```
pub fn brewer_diverging(
    n: usize,
    hue: f32,
    divergence: f32,
    contrast: f32,
    saturation: f32,
    brightness: f32,
    warmth: f32,
) -> Vec<u8> {
    debug!(
        "diverging map: n = {}, hue = {}, divergence = {}, contrast = {}, saturation = {}, \
         brightness = {}, warmth = {}",
        n, hue, divergence, contrast, saturation, brightness, warmth
    );
    let curves = diverging_curves(hue, divergence, saturation, warmth);
    let last = last_index(n);
    let mut colormap = Vec::with_capacity(3 * n);
    for i in 0..n {
        let color = if n % 2 == 1 && i == n / 2 {
            let c0 = curves[0].entry(1.0, contrast, brightness);
            let c1 = curves[1].entry(1.0, contrast, brightness);
            if n <= 9 {
                blended_neutral(c0, c1, warmth)
            } else {
                c0.mix(c1)
            }
        } else {
            let t = i as f32 / last;
            if i < n / 2 {
                curves[0].entry(2.0 * t, contrast, brightness)
            } else {
                curves[1].entry(2.0 * (1.0 - t), contrast, brightness)
            }
        };
        trace!("diverging color {}: {:?}", i, color);
        colormap.extend_from_slice(&luv_to_bytes(color));
    }
    colormap
}

fn diverging_curves(hue: f32, divergence: f32, saturation: f32, warmth: f32) -> [BrewerCurve; 2] {
    let other_hue = normalize_hue(hue + divergence);
    [
        BrewerCurve::new(hue, saturation, warmth),
        BrewerCurve::new(other_hue, saturation, warmth),
    ]
}

/// One color of a qualitative map, at position `t` in [0, 1] along the hue sweep.
fn qualitative_entry(
    t: f32,
    hue: f32,
    divergence: f32,
    contrast: f32,
    saturation: f32,
    brightness: f32,
) -> CIELUVColor {
    let bright = *BRIGHT_POINT;
    let start = hue / TWO_PI;
    let range = divergence / TWO_PI;
    let l0 = brightness * bright.luv.l;
    let l1 = (1.0 - contrast) * l0;

    let h = normalize_hue(TWO_PI * (start + t * range));
    // hues far from yellow look darker than yellow at the same lightness
    let alpha = hue_difference(h, bright.hue) / PI;
    let l = (1.0 - alpha) * l0 + alpha * l1;
    let s = max_saturation(l, h).min(saturation * *RED_SATURATION);
    CIELCHuvColor::from_saturation(l, s, h).to_luv()
}

/// Generates a qualitative map of `n` colors with hues evenly spread over `divergence` radians
/// starting at `hue`.
///
/// Colors are lightest (`brightness` times the lightness of yellow) near the hue of yellow and
/// darken by up to a factor of `1 - contrast` for the hue opposite to it; saturation is capped at
/// `saturation` times the saturation of pure red.
pub fn brewer_qualitative(
    n: usize,
    hue: f32,
    divergence: f32,
    contrast: f32,
    saturation: f32,
    brightness: f32,
) -> Vec<u8> {
    debug!(
        "qualitative map: n = {}, hue = {}, divergence = {}, contrast = {}, saturation = {}, \
         brightness = {}",
        n, hue, divergence, contrast, saturation, brightness
    );
    let last = last_index(n);
    let mut colormap = Vec::with_capacity(3 * n);
    for i in 0..n {
        let t = i as f32 / last;
        let color = qualitative_entry(t, hue, divergence, contrast, saturation, brightness);
        trace!("qualitative color {} at t = {}: {:?}", i, t, color);
        colormap.extend_from_slice(&luv_to_bytes(color));
    }
    colormap
}

/// The parameters of a sequential map.
/// # Example
/// ```
/// # use carmine::prelude::*;
/// let greens = SequentialParams::default().with_hue(2.2).with_contrast(0.7);
/// assert_eq!(greens.generate(9).len(), 27);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequentialParams {
    /// The hue of the curve, in radians.
    pub hue: f32,
    /// How much of the lightness range the map spans.
    pub contrast: f32,
    /// How close the middle of the map gets to the most saturated color of the hue.
    pub saturation: f32,
    /// How light the light end is.
    pub brightness: f32,
    /// How far the light end is tinted towards yellow.
    pub warmth: f32,
}

impl Default for SequentialParams {
    fn default() -> SequentialParams {
        SequentialParams {
            hue: 0.0,
            contrast: default_contrast_for_small_n(256),
            saturation: 0.6,
            brightness: 0.75,
            warmth: 0.15,
        }
    }
}

impl SequentialParams {
    /// Sets the hue.
    pub fn with_hue(mut self, hue: f32) -> SequentialParams {
        self.hue = hue;
        self
    }
    /// Sets the contrast.
    pub fn with_contrast(mut self, contrast: f32) -> SequentialParams {
        self.contrast = contrast;
        self
    }
    /// Sets the saturation.
    pub fn with_saturation(mut self, saturation: f32) -> SequentialParams {
        self.saturation = saturation;
        self
    }
    /// Sets the brightness.
    pub fn with_brightness(mut self, brightness: f32) -> SequentialParams {
        self.brightness = brightness;
        self
    }
    /// Sets the warmth.
    pub fn with_warmth(mut self, warmth: f32) -> SequentialParams {
        self.warmth = warmth;
        self
    }

    /// Generates `n` colors with [`brewer_sequential`].
    pub fn generate(&self, n: usize) -> Vec<u8> {
        brewer_sequential(
            n,
            self.hue,
            self.contrast,
            self.saturation,
            self.brightness,
            self.warmth,
        )
    }

    /// Builds the curve once, for sampling the map continuously.
    pub fn color_map(&self) -> SequentialMap {
        SequentialMap {
            params: *self,
            curve: BrewerCurve::new(self.hue, self.saturation, self.warmth),
        }
    }
}

/// A continuous sequential map: 0 is the light end, 1 the dark end.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SequentialMap {
    params: SequentialParams,
    curve: BrewerCurve,
}

impl<T: Color> ColorMap<T> for SequentialMap {
    fn transform_single(&self, x: f32) -> T {
        let t = 1.0 - unit_interval(x);
        self.curve
            .entry(t, self.params.contrast, self.params.brightness)
            .convert()
    }
}

/// The parameters of a diverging map.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergingParams {
    /// The hue of the first half, in radians.
    pub hue: f32,
    /// How far around the hue circle the second half's hue is, in radians.
    pub divergence: f32,
    /// How much of the lightness range each half spans.
    pub contrast: f32,
    /// How close each half gets to the most saturated color of its hue.
    pub saturation: f32,
    /// How light the neutral middle is.
    pub brightness: f32,
    /// How far the middle is tinted towards yellow.
    pub warmth: f32,
}

impl Default for DivergingParams {
    fn default() -> DivergingParams {
        DivergingParams {
            hue: 0.0,
            divergence: 2.0 * TWO_PI / 3.0,
            contrast: default_contrast_for_small_n(256),
            saturation: 0.6,
            brightness: 0.75,
            warmth: 0.15,
        }
    }
}

impl DivergingParams {
    /// Sets the hue.
    pub fn with_hue(mut self, hue: f32) -> DivergingParams {
        self.hue = hue;
        self
    }
    /// Sets the divergence.
    pub fn with_divergence(mut self, divergence: f32) -> DivergingParams {
        self.divergence = divergence;
        self
    }
    /// Sets the contrast.
    pub fn with_contrast(mut self, contrast: f32) -> DivergingParams {
        self.contrast = contrast;
        self
    }
    /// Sets the saturation.
    pub fn with_saturation(mut self, saturation: f32) -> DivergingParams {
        self.saturation = saturation;
        self
    }
    /// Sets the brightness.
    pub fn with_brightness(mut self, brightness: f32) -> DivergingParams {
        self.brightness = brightness;
        self
    }
    /// Sets the warmth.
    pub fn with_warmth(mut self, warmth: f32) -> DivergingParams {
        self.warmth = warmth;
        self
    }

    /// Generates `n` colors with [`brewer_diverging`].
    pub fn generate(&self, n: usize) -> Vec<u8> {
        brewer_diverging(
            n,
            self.hue,
            self.divergence,
            self.contrast,
            self.saturation,
            self.brightness,
            self.warmth,
        )
    }

    /// Builds both curves once, for sampling the map continuously.
    pub fn color_map(&self) -> DivergingMap {
        DivergingMap {
            params: *self,
            curves: diverging_curves(self.hue, self.divergence, self.saturation, self.warmth),
        }
    }
}

/// A continuous diverging map. The middle, at exactly 0.5, is the average of both curves' light
/// ends, as in large discrete maps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DivergingMap {
    params: DivergingParams,
    curves: [BrewerCurve; 2],
}

impl<T: Color> ColorMap<T> for DivergingMap {
    fn transform_single(&self, x: f32) -> T {
        let x = unit_interval(x);
        let (contrast, brightness) = (self.params.contrast, self.params.brightness);
        let color = if x < 0.5 {
            self.curves[0].entry(2.0 * x, contrast, brightness)
        } else if x > 0.5 {
            self.curves[1].entry(2.0 * (1.0 - x), contrast, brightness)
        } else {
            let c0 = self.curves[0].entry(1.0, contrast, brightness);
            let c1 = self.curves[1].entry(1.0, contrast, brightness);
            c0.mix(c1)
        };
        color.convert()
    }
}

/// The parameters of a qualitative map.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeParams {
    /// The hue of the first color, in radians.
    pub hue: f32,
    /// How far around the hue circle the colors spread, in radians.
    pub divergence: f32,
    /// How much darker than yellow-ish colors the other colors may get.
    pub contrast: f32,
    /// The saturation cap, relative to pure red.
    pub saturation: f32,
    /// The lightness of colors near yellow, relative to yellow.
    pub brightness: f32,
}

impl Default for QualitativeParams {
    fn default() -> QualitativeParams {
        QualitativeParams {
            hue: 0.0,
            divergence: 2.0 * TWO_PI / 3.0,
            contrast: 0.5,
            saturation: 0.5,
            brightness: 0.8,
        }
    }
}

impl QualitativeParams {
    /// Sets the hue.
    pub fn with_hue(mut self, hue: f32) -> QualitativeParams {
        self.hue = hue;
        self
    }
    /// Sets the divergence.
    pub fn with_divergence(mut self, divergence: f32) -> QualitativeParams {
        self.divergence = divergence;
        self
    }
    /// Sets the contrast.
    pub fn with_contrast(mut self, contrast: f32) -> QualitativeParams {
        self.contrast = contrast;
        self
    }
    /// Sets the saturation.
    pub fn with_saturation(mut self, saturation: f32) -> QualitativeParams {
        self.saturation = saturation;
        self
    }
    /// Sets the brightness.
    pub fn with_brightness(mut self, brightness: f32) -> QualitativeParams {
        self.brightness = brightness;
        self
    }

    /// Generates `n` colors with [`brewer_qualitative`].
    pub fn generate(&self, n: usize) -> Vec<u8> {
        brewer_qualitative(
            n,
            self.hue,
            self.divergence,
            self.contrast,
            self.saturation,
            self.brightness,
        )
    }
}

/// Samples the hue sweep continuously: 0 is `hue`, 1 is `hue + divergence`.
impl<T: Color> ColorMap<T> for QualitativeParams {
    fn transform_single(&self, x: f32) -> T {
        qualitative_entry(
            unit_interval(x),
            self.hue,
            self.divergence,
            self.contrast,
            self.saturation,
            self.brightness,
        ).convert()
    }
}
