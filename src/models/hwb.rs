//! Model a color with the HWB notation in the sRGB color space.

use crate::color::Component;

colorcast_macros::gen_model! {
    /// A color specified with the HWB notation in the sRGB color space.
    ///
    /// Shares its hue with the HSL notation; whiteness and blackness are
    /// stored in whole percent.
    pub struct Hwb {
        /// The hue component of the color.
        pub hue: Component,
        /// The whiteness component of the color.
        pub whiteness: Component,
        /// The blackness component of the color.
        pub blackness: Component,
    }
}
