//! This module contains the color spaces the color map pipeline moves through, one per file, each
//! implementing [`Color`]. For convenience, each main type is imported into this module's namespace
//! directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cielchuvcolor;
pub mod cieluvcolor;
pub mod rgbcolor;
pub mod srgbcolor;

// for convenience, use this namespace for the color objects
pub use self::cielchuvcolor::CIELCHuvColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::rgbcolor::RGBColor;
pub use self::srgbcolor::SRGBColor;
