//! Render each computed representation to its canonical CSS notation.
//!
//! All functional notations use the modern space separated syntax with a
//! `/ alpha` suffix, and the suffix (or the trailing hex byte pair) is only
//! emitted when the color is not fully opaque, so formatting an opaque color
//! round trips losslessly through its own notation.

use std::fmt::Write;

use crate::{
    color::{Component, Space},
    convert::Conversions,
};

/// The canonical CSS text for every notation of one converted color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssOutput {
    /// Uppercase hex notation, e.g. `#4FACFE`.
    pub hex: String,
    /// `rgb(r g b)`.
    pub rgb: String,
    /// `hsl(h s% l%)`.
    pub hsl: String,
    /// `hwb(h w% b%)`.
    pub hwb: String,
    /// `lab(L a b)`.
    pub lab: String,
    /// `lch(L C h)`.
    pub lch: String,
    /// `oklab(L a b)`.
    pub oklab: String,
    /// `oklch(L C h)`.
    pub oklch: String,
    /// `color(xyz-d65 x y z)`.
    pub xyz: String,
    /// `color(display-p3 r g b)`.
    pub display_p3: String,
}

impl Conversions {
    /// Render every notation at once.
    pub fn to_css(&self) -> CssOutput {
        CssOutput {
            hex: self.hex(),
            rgb: self.rgb(),
            hsl: self.hsl(),
            hwb: self.hwb(),
            lab: self.lab(),
            lch: self.lch(),
            oklab: self.oklab(),
            oklch: self.oklch(),
            xyz: self.xyz(),
            display_p3: self.display_p3(),
        }
    }

    /// The CSS text for a single notation, e.g. for a clipboard copy action.
    /// Hex is a spelling of [`Space::Srgb`] and is reached through [`Self::hex`].
    pub fn css(&self, space: Space) -> String {
        match space {
            Space::Srgb => self.rgb(),
            Space::Hsl => self.hsl(),
            Space::Hwb => self.hwb(),
            Space::Lab => self.lab(),
            Space::Lch => self.lch(),
            Space::Oklab => self.oklab(),
            Space::Oklch => self.oklch(),
            Space::XyzD65 => self.xyz(),
            Space::DisplayP3 => self.display_p3(),
        }
    }

    /// Uppercase 6-digit hex, with a trailing alpha byte only when the color
    /// is not fully opaque.
    pub fn hex(&self) -> String {
        let mut out = format!(
            "#{:02X}{:02X}{:02X}",
            self.source.red, self.source.green, self.source.blue
        );
        if self.source.alpha < 1.0 {
            let byte = (self.source.alpha * 255.0).round() as u8;
            let _ = write!(out, "{:02X}", byte);
        }
        out
    }

    /// `rgb(r g b)`, integers straight from the source channels.
    pub fn rgb(&self) -> String {
        self.func(
            "rgb",
            format!(
                "{} {} {}",
                self.source.red, self.source.green, self.source.blue
            ),
        )
    }

    /// `hsl(h s% l%)`, whole degrees and percent.
    pub fn hsl(&self) -> String {
        self.func(
            "hsl",
            format!(
                "{} {}% {}%",
                fixed(self.hsl.hue, 0),
                fixed(self.hsl.saturation, 0),
                fixed(self.hsl.lightness, 0)
            ),
        )
    }

    /// `hwb(h w% b%)`, whole degrees and percent.
    pub fn hwb(&self) -> String {
        self.func(
            "hwb",
            format!(
                "{} {}% {}%",
                fixed(self.hwb.hue, 0),
                fixed(self.hwb.whiteness, 0),
                fixed(self.hwb.blackness, 0)
            ),
        )
    }

    /// `lab(L a b)` with 2 decimal places.
    pub fn lab(&self) -> String {
        self.func(
            "lab",
            format!(
                "{} {} {}",
                fixed(self.lab.lightness, 2),
                fixed(self.lab.a, 2),
                fixed(self.lab.b, 2)
            ),
        )
    }

    /// `lch(L C h)` with 2 decimal places.
    pub fn lch(&self) -> String {
        self.func(
            "lch",
            format!(
                "{} {} {}",
                fixed(self.lch.lightness, 2),
                fixed(self.lch.chroma, 2),
                fixed(self.lch.hue, 2)
            ),
        )
    }

    /// `oklab(L a b)` with 4 decimal places.
    pub fn oklab(&self) -> String {
        self.func(
            "oklab",
            format!(
                "{} {} {}",
                fixed(self.oklab.lightness, 4),
                fixed(self.oklab.a, 4),
                fixed(self.oklab.b, 4)
            ),
        )
    }

    /// `oklch(L C h)` with 4 decimal places for lightness and chroma, 2 for
    /// the hue.
    pub fn oklch(&self) -> String {
        self.func(
            "oklch",
            format!(
                "{} {} {}",
                fixed(self.oklch.lightness, 4),
                fixed(self.oklch.chroma, 4),
                fixed(self.oklch.hue, 2)
            ),
        )
    }

    /// `color(xyz-d65 x y z)`, rescaled from the internal 0-100 range to the
    /// 0-1 range the `color()` function expects.
    pub fn xyz(&self) -> String {
        self.func(
            "color",
            format!(
                "xyz-d65 {} {} {}",
                fixed(self.xyz.x / 100.0, 4),
                fixed(self.xyz.y / 100.0, 4),
                fixed(self.xyz.z / 100.0, 4)
            ),
        )
    }

    /// `color(display-p3 r g b)` with 4 decimal places.
    pub fn display_p3(&self) -> String {
        self.func(
            "color",
            format!(
                "display-p3 {} {} {}",
                fixed(self.display_p3.red, 4),
                fixed(self.display_p3.green, 4),
                fixed(self.display_p3.blue, 4)
            ),
        )
    }

    fn func(&self, name: &str, body: String) -> String {
        let mut out = format!("{}({}", name, body);
        if self.source.alpha != 1.0 {
            out.push_str(" / ");
            out.push_str(&format_alpha(self.source.alpha));
        }
        out.push(')');
        out
    }
}

/// Format a component with a fixed number of decimals, folding the `-0`
/// rendering of small negative values back to plain zero.
fn fixed(value: Component, decimals: usize) -> String {
    let out = format!("{:.*}", decimals, value);
    if out.starts_with('-') && out[1..].bytes().all(|b| b == b'0' || b == b'.') {
        out[1..].to_string()
    } else {
        out
    }
}

/// Alpha is rendered with up to 3 decimals, trailing zeros trimmed.
fn format_alpha(alpha: Component) -> String {
    let mut out = format!("{:.3}", alpha);
    while out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
    out
}
