//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white point for the CIE-XYZ color space.
pub trait WhitePoint {
    /// The tristimulus values of the reference white, on the 0-100 scale.
    const WHITE_POINT: Components;
}

/// The D65 daylight illuminant.
#[derive(Clone, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(95.047, 100.0, 108.883);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

colorcast_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white
    /// point reference. Tristimulus values are carried on the 0-100 scale.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;
