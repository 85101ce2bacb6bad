//! colorcast fans a single sRGB color out into every CSS Color 4
//! representation and renders each one as canonical CSS text.
//!
//! ```rust
//! use colorcast::Color;
//!
//! let (color, issues) = Color::parse_hex("#4FACFE", None);
//! assert!(issues.is_empty());
//!
//! let css = color.convert().to_css();
//! assert_eq!(css.rgb, "rgb(79 172 254)");
//! assert_eq!(css.hsl, "hsl(208 99% 65%)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod css;
mod math;
pub mod models;
mod parse;


pub use color::{Color, Component, Components, Space};
pub use convert::Conversions;
pub use css::CssOutput;
pub use models::{
    DisplayP3, DisplayP3Linear, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Srgb, SrgbLinear, ToXyz, XyzD65,
};
pub use parse::HexIssues;
