//! Model a color in the LMS cone response space used to simulate
//! dichromatic vision.

use crate::color::Component;
use crate::math::{transform, transform_3x3, Transform};
use crate::models::SrgbLinear;

hexpalette_macros::gen_model! {
    /// Long, medium and short wavelength cone responses in the
    /// Hunt-Pointer-Estevez space, normalized so that D65 white is (1, 1, 1).
    pub struct Lms {
        /// Response of the long wavelength cones.
        pub long: Component,
        /// Response of the medium wavelength cones.
        pub medium: Component,
        /// Response of the short wavelength cones.
        pub short: Component,
    }
}

impl Lms {
    /// Convert the cone responses back to linear sRGB. The result may be
    /// outside of `[0, 1]`.
    pub fn to_srgb_linear(&self) -> SrgbLinear {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_RGB: Transform = transform_3x3(
             5.4722120584, -1.1252418955,  0.0298016512,
            -4.6419600984,  2.2931709381, -0.1931807283,
             0.1696370768, -0.1678952022,  1.1636478928,
        );

        transform(&TO_RGB, self.to_components()).into()
    }
}

impl SrgbLinear {
    /// Convert this color to cone responses. This is the sRGB to CIE-XYZ
    /// matrix followed by the Hunt-Pointer-Estevez matrix.
    pub fn to_lms(&self) -> Lms {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_LMS: Transform = transform_3x3(
            0.3139902162, 0.1553724063, 0.0177523870,
            0.6395129383, 0.7578944616, 0.1094420944,
            0.0464975462, 0.0867014186, 0.8725692246,
        );

        transform(&TO_LMS, self.to_components()).into()
    }
}
