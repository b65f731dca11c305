//! Model a color in the Oklab perceptual color space.
//! <https://bottosson.github.io/posts/oklab/>

use crate::color::Component;
use crate::math::{transform, transform_3x3, Transform};
use crate::models::SrgbLinear;

hexpalette_macros::gen_model! {
    /// A color in the Oklab color space.
    pub struct Oklab {
        /// Perceived lightness.
        pub lightness: Component,
        /// Green/red axis.
        pub a: Component,
        /// Blue/yellow axis.
        pub b: Component,
    }
}

impl Oklab {
    /// Calculate deltaE OK (simple root sum of squares).
    /// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
    pub fn delta(&self, other: &Self) -> Component {
        let d = self.to_components() - other.to_components();
        (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt()
    }
}

impl SrgbLinear {
    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_LMS: Transform = transform_3x3(
            0.4122214708, 0.2119034982, 0.0883024619,
            0.5363325363, 0.6806995451, 0.2817188376,
            0.0514459929, 0.1073969566, 0.6299787005,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&TO_LMS, self.to_components()).map(|v| v.cbrt());
        transform(&TO_OKLAB, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Srgb;

    #[test]
    fn white_and_black() {
        let white = SrgbLinear::new(1.0, 1.0, 1.0).to_oklab();
        approx::assert_abs_diff_eq!(white.lightness, 1.0, epsilon = 1.0e-4);
        approx::assert_abs_diff_eq!(white.a, 0.0, epsilon = 1.0e-4);
        approx::assert_abs_diff_eq!(white.b, 0.0, epsilon = 1.0e-4);

        let black = SrgbLinear::new(0.0, 0.0, 0.0).to_oklab();
        assert_eq!(black.lightness, 0.0);
    }

    #[test]
    fn chocolate() {
        let oklab = Srgb::new(0.823529, 0.411765, 0.117647)
            .to_linear_light()
            .to_oklab();
        approx::assert_abs_diff_eq!(oklab.lightness, 0.634398, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(oklab.a, 0.099074, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(oklab.b, 0.119193, epsilon = 1.0e-3);
    }

    #[test]
    fn delta_is_symmetric_and_zero_on_self() {
        let a = Oklab::new(0.5, 0.1, -0.1);
        let b = Oklab::new(0.7, -0.05, 0.02);
        assert_eq!(a.delta(&a), 0.0);
        assert_eq!(a.delta(&b), b.delta(&a));
    }
}
