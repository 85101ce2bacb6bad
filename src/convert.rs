//! The conversion pipeline: fan a source color out into every supported
//! representation in one pass.
//!
//! The CIE branch (XYZ → Lab → LCh), the OK branch (Oklab → Oklch), the
//! cylindrical branch (HSL/HWB) and the wide gamut branch (display-p3) are
//! all derived independently from the decoded source; nothing is shared or
//! cached between runs, so converting the same input twice always yields the
//! same result.

use crate::{
    color::Color,
    models::{
        DisplayP3, DisplayP3Linear, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Srgb, SrgbLinear, ToXyz,
        XyzD65,
    },
};

/// Every representation of a single source [`Color`], computed in one pass.
#[derive(Clone, Debug)]
pub struct Conversions {
    /// The source color the representations were derived from.
    pub source: Color,
    /// The gamma decoded source channels.
    pub linear: SrgbLinear,
    /// CIE-XYZ (D65), scaled 0-100.
    pub xyz: XyzD65,
    /// CIE-Lab.
    pub lab: Lab,
    /// CIE-LCh.
    pub lch: Lch,
    /// Oklab.
    pub oklab: Oklab,
    /// Oklch.
    pub oklch: Oklch,
    /// The HSL notation, rounded to whole degrees/percent.
    pub hsl: Hsl,
    /// The HWB notation, rounded to whole degrees/percent.
    pub hwb: Hwb,
    /// display-p3, gamma encoded.
    pub display_p3: DisplayP3,
}

impl Color {
    /// Recompute every representation from the source channels.
    pub fn convert(&self) -> Conversions {
        let srgb = Srgb::from_bytes(self.red, self.green, self.blue);
        let linear = srgb.to_linear_light();

        // CIE branch.
        let xyz = linear.to_xyz();
        let lab = Lab::from(xyz.clone());
        let mut lch = lab.to_polar();

        // OK branch.
        let oklab = Oklab::from(linear.clone());
        let mut oklch = oklab.to_polar();

        // r == g == b is achromatic by construction, but rounding noise in
        // the matrix pipeline leaves a chroma slightly above the zero guard
        // in `to_polar`, which would hand atan2 an arbitrary angle.
        if self.red == self.green && self.green == self.blue {
            lch.hue = 0.0;
            oklch.hue = 0.0;
        }

        // Cylindrical branch.
        let hsl: Hsl = util::rgb_to_hsl(&srgb.to_components()).into();
        let hwb: Hwb = util::rgb_to_hwb(&srgb.to_components()).into();

        // Wide gamut branch.
        let display_p3 = DisplayP3Linear::from(xyz.clone()).to_gamma_encoded();

        Conversions {
            source: *self,
            linear,
            xyz,
            lab,
            lch,
            oklab,
            oklch,
            hsl,
            hwb,
            display_p3,
        }
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::normalize_hue;

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. An achromatic color has hue 0 by convention.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (normalize_hue(hue), min, max)
    }

    /// Convert from RGB notation to HSL notation, with hue in whole degrees
    /// and saturation/lightness in whole percent.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Rounding can push a hue just under 360 back up to a full turn.
        Components(
            normalize_hue(hue.round()),
            (saturation * 100.0).round(),
            (lightness * 100.0).round(),
        )
    }

    /// Convert from RGB notation to HWB notation, sharing its hue with HSL.
    pub fn rgb_to_hwb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        Components(
            normalize_hue(hue.round()),
            (min * 100.0).round(),
            ((1.0 - max) * 100.0).round(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_reaches_the_top_of_every_scale() {
        let c = Color::new(255, 255, 255, None).convert();

        assert_abs_diff_eq!(c.lab.lightness, 100.0, epsilon = 0.5);
        assert_abs_diff_eq!(c.lab.a, 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(c.lab.b, 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(c.oklab.lightness, 1.0, epsilon = 0.01);

        assert_eq!(c.hsl.hue, 0.0);
        assert_eq!(c.hsl.saturation, 0.0);
        assert_eq!(c.hsl.lightness, 100.0);
        assert_eq!(c.hwb.whiteness, 100.0);
        assert_eq!(c.hwb.blackness, 0.0);
    }

    #[test]
    fn black_is_the_origin() {
        let c = Color::new(0, 0, 0, None).convert();

        assert_component_eq!(c.lab.lightness, 0.0);
        assert_component_eq!(c.lab.a, 0.0);
        assert_component_eq!(c.lab.b, 0.0);
        assert_eq!(c.hsl.hue, 0.0);
        assert_eq!(c.hsl.saturation, 0.0);
        assert_eq!(c.hsl.lightness, 0.0);
        assert_eq!(c.hwb.hue, 0.0);
        assert_eq!(c.lch.hue, 0.0);
        assert_eq!(c.oklch.hue, 0.0);
    }

    #[test]
    fn achromatic_grays_have_no_hue_or_chroma() {
        for byte in [1u8, 64, 128, 200, 254] {
            let c = Color::new(byte, byte, byte, None).convert();

            assert_eq!(c.hsl.hue, 0.0);
            assert_eq!(c.hsl.saturation, 0.0);
            assert_eq!(c.hwb.hue, 0.0);
            assert_abs_diff_eq!(c.lch.chroma, 0.0, epsilon = 1.0e-3);
            assert_eq!(c.lch.hue, 0.0);
            assert_abs_diff_eq!(c.oklch.chroma, 0.0, epsilon = 1.0e-3);
            assert_eq!(c.oklch.hue, 0.0);
        }
    }

    #[test]
    fn every_hue_stays_in_range() {
        // Saturated primaries and mixes land in all atan2 quadrants.
        let samples: &[(u8, u8, u8)] = &[
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
            (79, 172, 254),
            (210, 105, 30),
            (12, 34, 56),
        ];

        for &(r, g, b) in samples {
            let c = Color::new(r, g, b, None).convert();
            for hue in [c.lch.hue, c.oklch.hue, c.hsl.hue, c.hwb.hue] {
                assert!((0.0..360.0).contains(&hue), "hue {} for {:?}", hue, (r, g, b));
            }
        }
    }

    #[test]
    fn hsl_hue_that_rounds_to_a_full_turn_wraps_to_zero() {
        // Raw hue is about 359.53 degrees; rounding to whole degrees must
        // wrap back to 0, never render 360.
        let c = Color::new(255, 1, 3, None).convert();
        assert_eq!(c.hsl.hue, 0.0);
        assert_eq!(c.hwb.hue, 0.0);
    }

    #[test]
    fn known_fixture_4facfe() {
        let c = Color::new(79, 172, 254, None).convert();

        assert_eq!(c.hsl.hue, 208.0);
        assert_eq!(c.hsl.saturation, 99.0);
        assert_eq!(c.hsl.lightness, 65.0);

        assert_eq!(c.hwb.hue, 208.0);
        assert_eq!(c.hwb.whiteness, 31.0);
        assert_eq!(c.hwb.blackness, 0.0);

        assert_abs_diff_eq!(c.lab.lightness, 68.255, epsilon = 0.02);
        assert_abs_diff_eq!(c.lab.a, -1.877, epsilon = 0.02);
        assert_abs_diff_eq!(c.lab.b, -48.653, epsilon = 0.02);

        assert_abs_diff_eq!(c.lch.chroma, 48.689, epsilon = 0.05);
        assert_abs_diff_eq!(c.lch.hue, 267.79, epsilon = 0.2);

        assert_abs_diff_eq!(c.oklab.lightness, 0.72453, epsilon = 0.001);
        assert_abs_diff_eq!(c.oklch.chroma, 0.14865, epsilon = 0.001);
        assert_abs_diff_eq!(c.oklch.hue, 248.08, epsilon = 0.2);
    }

    #[test]
    fn display_p3_matches_reference_conversion() {
        // rgb(210, 105, 30) -> color(display-p3 0.770569 0.434015 0.199849)
        let c = Color::new(210, 105, 30, None).convert();

        assert_abs_diff_eq!(c.display_p3.red, 0.770569, epsilon = 1.0e-3);
        assert_abs_diff_eq!(c.display_p3.green, 0.434015, epsilon = 1.0e-3);
        assert_abs_diff_eq!(c.display_p3.blue, 0.199849, epsilon = 1.0e-3);
    }

    #[test]
    fn alpha_is_carried_untouched() {
        let c = Color::new(79, 172, 254, 0.25).convert();
        let alpha: Component = c.source.alpha;
        assert_eq!(alpha, 0.25);
    }
}
