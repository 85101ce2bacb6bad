//! Model a color in RGB color spaces, gamma encoded or linear light.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz, XyzD65, D65},
};

pub(crate) mod encoding {
    use crate::color::Components;

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Tag for models carrying gamma encoded values.
    #[derive(Clone, Debug)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Tag for models carrying linear light values.
    #[derive(Clone, Debug)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}

    /// The transfer function pair of an RGB color space.
    pub trait GammaConversion {
        /// Apply the gamma encoding to linear light components.
        fn to_gamma_encoded(from: &Components) -> Components;
        /// Remove the gamma encoding from encoded components.
        fn to_linear_light(from: &Components) -> Components;
    }
}

pub(crate) mod space {
    use super::encoding::GammaConversion;
    use crate::color::Components;

    /// This trait is used to identify tags that specify a color space.
    pub trait Space {}

    /// Tag for the sRGB color space.
    #[derive(Clone, Debug)]
    pub struct Srgb;

    impl Space for Srgb {}

    impl GammaConversion for Srgb {
        fn to_gamma_encoded(from: &Components) -> Components {
            from.map(|value| {
                if value <= 0.0031308 {
                    12.92 * value
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
        }

        fn to_linear_light(from: &Components) -> Components {
            from.map(|value| {
                if value <= 0.04045 {
                    value / 12.92
                } else {
                    ((value + 0.055) / 1.055).powf(2.4)
                }
            })
        }
    }

    /// Tag for the display-p3 color space, which shares the sRGB transfer
    /// function.
    #[derive(Clone, Debug)]
    pub struct DisplayP3;

    impl Space for DisplayP3 {}

    impl GammaConversion for DisplayP3 {
        fn to_gamma_encoded(from: &Components) -> Components {
            Srgb::to_gamma_encoded(from)
        }

        fn to_linear_light(from: &Components) -> Components {
            Srgb::to_linear_light(from)
        }
    }
}

colorcast_macros::gen_model! {
    /// A color specified in an RGB color space.
    pub struct Rgb<S: space::Space, E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl<S: space::Space + encoding::GammaConversion> Rgb<S, encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<S, encoding::LinearLight> {
        let Components(red, green, blue) =
            S::to_linear_light(&Components(self.red, self.green, self.blue));
        Rgb::new(red, green, blue)
    }
}

impl<S: space::Space + encoding::GammaConversion> Rgb<S, encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<S, encoding::GammaEncoded> {
        let Components(red, green, blue) =
            S::to_gamma_encoded(&Components(self.red, self.green, self.blue));
        Rgb::new(red, green, blue)
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<space::Srgb, encoding::GammaEncoded>;

impl Srgb {
    /// Build the model from 8-bit channels, normalized to [0, 1].
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Snap each channel back to the nearest 8-bit value.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        let snap = |v: Component| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        (snap(self.red), snap(self.green), snap(self.blue))
    }
}

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<space::Srgb, encoding::LinearLight>;

impl ToXyz<D65> for SrgbLinear {
    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        transform(&TO_XYZ, Components(self.red, self.green, self.blue))
            .map(|v| v * 100.0)
            .into()
    }
}

/// Model for a color in the display-p3 color space with gamma encoding.
pub type DisplayP3 = Rgb<space::DisplayP3, encoding::GammaEncoded>;

/// Model for a color in the display-p3 color space without gamma encoding.
pub type DisplayP3Linear = Rgb<space::DisplayP3, encoding::LinearLight>;

impl From<XyzD65> for DisplayP3Linear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
            -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
            -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
        );

        // The XYZ model carries 0-100 values; the matrix expects 0-1.
        let xyz = Components(value.x, value.y, value.z).map(|v| v / 100.0);
        transform(&FROM_XYZ, xyz).into()
    }
}
