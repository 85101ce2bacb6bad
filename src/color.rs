//! Core value types shared by every color model.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The CSS notations a converted color can be rendered in.
/// <https://drafts.csswg.org/css-color-4/#color-type>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// The sRGB color space, rendered with the `rgb()` function.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb,
    /// The HSL (hue, saturation, lightness) notation.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl,
    /// The HWB (hue, whiteness, blackness) notation.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb,
    /// CIE-Lab.
    Lab,
    /// CIE-LCh, the polar form of Lab.
    Lch,
    /// Oklab.
    Oklab,
    /// Oklch, the polar form of Oklab.
    Oklch,
    /// CIE-XYZ with a D65 white point, rendered as `color(xyz-d65 …)`.
    XyzD65,
    /// display-p3, rendered as `color(display-p3 …)`.
    DisplayP3,
}

/// An 8-bit sRGB color with an alpha channel.
///
/// This is the source of truth for a conversion: every other representation
/// is recomputed from these channels on each input change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha component, in [0, 1].
    pub alpha: Component,
}

impl Color {
    /// Create a new [`Color`] from 8-bit channels. A missing alpha means
    /// fully opaque; a supplied alpha is clamped into [0, 1].
    pub fn new(red: u8, green: u8, blue: u8, alpha: impl Into<Option<Component>>) -> Self {
        let alpha = alpha.into().unwrap_or(1.0).clamp(0.0, 1.0);
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}
