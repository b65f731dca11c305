//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;
use crate::math::normalize_hue;

hexpalette_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space. Hue
    /// is in degrees, saturation and lightness are in `[0, 1]`.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The lightness component of the color.
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy with the hue rotated by `degrees`, wrapped into
    /// `[0, 360)`.
    pub fn rotate(&self, degrees: Component) -> Self {
        Self::new(
            normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }

    /// Return a copy with `delta` added to the lightness, clamped into
    /// `[0, 1]`.
    pub fn lighten(&self, delta: Component) -> Self {
        Self::new(
            self.hue,
            self.saturation,
            (self.lightness + delta).clamp(0.0, 1.0),
        )
    }
}
