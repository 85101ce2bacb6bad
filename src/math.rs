//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 component transform, stored in a 4x4 matrix.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from the 9 elements of a 3x3 matrix, given in
/// column vectors.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Normalize a hue angle in degrees into the range [0, 360).
///
/// `rem_euclid` already handles negative angles and angles past a full turn,
/// but a tiny negative input can round to exactly 360.0 in floating point,
/// so that case folds back to 0.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Check whether a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(540.0), 180.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(-360.0), 0.0);
    }

    #[test]
    fn normalize_hue_handles_negative_residue() {
        // A residue this small rounds to a full turn in f32; the result must
        // still land inside [0, 360).
        for hue in [-1.0e-7, -1.0e-12, Component::MIN_POSITIVE, -720.0] {
            let normalized = normalize_hue(hue);
            assert!((0.0..360.0).contains(&normalized), "hue {}", normalized);
        }
    }

    #[test]
    fn transform_applies_matrix() {
        let identity = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let result = transform(&identity, Components(0.25, 0.5, 0.75));
        assert_eq!(result, Components(0.25, 0.5, 0.75));
    }
}
