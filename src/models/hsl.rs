//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

colorcast_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Components are stored the way the notation is authored: hue in whole
    /// degrees inside [0, 360), saturation and lightness in whole percent.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}
