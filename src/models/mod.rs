//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on the models a representation is actually derived from,
//! keeping each conversion path explicit.

pub mod hsl;
pub mod hwb;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hsl::Hsl;
pub use hwb::Hwb;
pub use lab::{Lab, Lch, Oklab, Oklch, Polar, Rectangular};
pub use rgb::{DisplayP3, DisplayP3Linear, Srgb, SrgbLinear};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65};
