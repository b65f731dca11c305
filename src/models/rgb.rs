//! Model a color in the sRGB color space.

use crate::color::Component;

pub mod encoding {
    //! Tags for the transfer function applied to RGB components.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded with the sRGB transfer function.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

hexpalette_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs <= 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            })
            .into()
    }

    /// The luminance (Y) of this color with Rec. 709 coefficients.
    pub fn luminance(&self) -> Component {
        0.2126 * self.red + 0.7152 * self.green + 0.0722 * self.blue
    }

    /// Clamp every component into `[0, 1]`.
    pub fn clip(&self) -> Self {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }
}
