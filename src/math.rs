//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix. Components are multiplied as
/// row vectors, so each group of three arguments is one *column* of the
/// conventional matrix.
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
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

/// Linear interpolation from `a` to `b` at progress `t`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// True if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transform_uses_columns() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 4.0, 7.0,
            2.0, 5.0, 8.0,
            3.0, 6.0, 9.0,
        );
        let Components(x, y, z) = transform(&M, Components(1.0, 1.0, 1.0));
        assert_component_eq!(x, 6.0);
        assert_component_eq!(y, 15.0);
        assert_component_eq!(z, 24.0);

        let Components(x, y, z) = transform(&M, Components(1.0, 0.0, 0.0));
        assert_component_eq!(x, 1.0);
        assert_component_eq!(y, 4.0);
        assert_component_eq!(z, 7.0);
    }

    #[test]
    fn hue_wraps() {
        assert_component_eq!(normalize_hue(370.0), 10.0);
        assert_component_eq!(normalize_hue(-90.0), 270.0);
        assert_component_eq!(normalize_hue(360.0), 0.0);
        assert!(normalize_hue(-1.0e-9) < 360.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.25, 0.75, 0.0), 0.25);
        assert_eq!(lerp(0.25, 0.75, 1.0), 0.75);
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
    }
}
