//! Models for rectangular and polar coordinate systems used to model CIE-Lab,
//! CIE-LCh, Oklab and Oklch.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::{
        rgb::SrgbLinear,
        xyz::{WhitePoint, XyzD65, D65},
    },
};

pub(crate) mod space {
    /// This trait is used to identify tags that specify a color space.
    pub trait Space {}

    /// Tag for the CIE-Lab color space.
    #[derive(Clone, Debug)]
    pub struct Lab;
    impl Space for Lab {}

    /// Tag for the Oklab color space.
    #[derive(Clone, Debug)]
    pub struct Oklab;
    impl Space for Oklab {}
}

colorcast_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    pub struct Rectangular<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    ///
    /// An achromatic color has no meaningful hue angle, so it is pinned to 0
    /// instead of left to whatever atan2 makes of the rounding noise in `a`
    /// and `b`.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Polar::new(self.lightness, chroma, hue)
    }
}

colorcast_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    pub struct Polar<S: space::Space> {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees inside [0, 360).
        pub hue: Component,
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// rectangular orthogonal form.
pub type Lab = Rectangular<space::Lab>;

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        const EPSILON: Component = 0.008856;
        const LINEAR_SLOPE: Component = 7.787;

        let adapted = Components(
            value.x / D65::WHITE_POINT.0,
            value.y / D65::WHITE_POINT.1,
            value.z / D65::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                LINEAR_SLOPE * v + 16.0 / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

/// The model for a color specified in the CIE-Lab color space with the
/// cylindrical polar form.
pub type Lch = Polar<space::Lab>;

/// The model for a color specified in the Oklab color space with the
/// rectangular orthogonal form.
pub type Oklab = Rectangular<space::Oklab>;

impl From<SrgbLinear> for Oklab {
    fn from(value: SrgbLinear) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const RGB_TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(
            &RGB_TO_LMS,
            Components(value.red, value.green, value.blue),
        );
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

/// The model for a color specified in the Oklab color space with the
/// cylindrical polar form.
pub type Oklch = Polar<space::Oklab>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn converting_to_polar_pins_hue_to_zero_without_chroma() {
        let polar = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(polar.hue, 0.0);
        assert_eq!(polar.chroma, 0.0);
        assert_eq!(polar.lightness, 50.0);
    }

    #[test]
    fn polar_hue_stays_in_range_for_all_quadrants() {
        let cases: &[(Component, Component, Component)] = &[
            (1.0, 1.0, 45.0),
            (-1.0, 1.0, 135.0),
            (-1.0, -1.0, 225.0),
            (1.0, -1.0, 315.0),
            (0.0, 1.0, 90.0),
            (0.0, -1.0, 270.0),
            (-1.0, 0.0, 180.0),
            (1.0, 0.0, 0.0),
        ];

        for &(a, b, expected) in cases {
            let polar = Lab::new(50.0, a, b).to_polar();
            assert!((0.0..360.0).contains(&polar.hue));
            assert_component_eq!(polar.hue, expected);
        }
    }

    #[test]
    fn lab_nonlinearity_uses_the_linear_segment_near_black() {
        // All axes far below the 0.008856 threshold.
        let lab = Lab::from(XyzD65::new(0.047, 0.05, 0.054));
        let f = |v: Component| 7.787 * v + 16.0 / 116.0;

        assert_component_eq!(lab.lightness, 116.0 * f(0.0005) - 16.0);
        assert_component_eq!(lab.a, 500.0 * (f(0.047 / 95.047) - f(0.0005)));
    }
}
