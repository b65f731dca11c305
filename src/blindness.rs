//! Simulation of color vision deficiencies.
//!
//! Dichromacies are simulated by replacing the response of the missing cone
//! type with a combination of the two remaining ones, such that white and a
//! pair of anchor hues the dichromat still sees correctly stay fixed. The
//! projections are the ones derived by Jim Schmitz, "Color Blindness
//! Simulation Research" (2016), in the Hunt-Pointer-Estevez LMS space.
//! Achromatopsia replaces the color with a gray of the same relative
//! luminance.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{transform, transform_3x3, Transform};
use crate::models::{Lms, SrgbLinear};

/// A color vision deficiency that can be simulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// No functioning long wavelength cones (red blindness).
    Protanopia,
    /// No functioning medium wavelength cones (green blindness).
    Deuteranopia,
    /// No functioning short wavelength cones (blue blindness).
    Tritanopia,
    /// No color perception at all.
    Achromatopsia,
}

impl Deficiency {
    /// All deficiencies in the order they appear in a [`BlindnessSet`].
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    /// Approximate how `color` is perceived with this deficiency.
    pub fn simulate(self, color: &Color) -> Color {
        let linear = color.srgb().to_linear_light();

        let simulated = match self {
            Self::Protanopia => dichromat(&linear, &PROTANOPIA),
            Self::Deuteranopia => dichromat(&linear, &DEUTERANOPIA),
            Self::Tritanopia => dichromat(&linear, &TRITANOPIA),
            Self::Achromatopsia => {
                let y = linear.luminance();
                SrgbLinear::new(y, y, y)
            }
        };

        Color::from_srgb(&simulated.clip().to_gamma_encoded())
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const PROTANOPIA: Transform = transform_3x3(
     0.0,        0.0, 0.0,
     1.05118294, 1.0, 0.0,
    -0.05116099, 0.0, 1.0,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const DEUTERANOPIA: Transform = transform_3x3(
    1.0, 0.9513092,  0.0,
    0.0, 0.0,        0.0,
    0.0, 0.04866992, 1.0,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TRITANOPIA: Transform = transform_3x3(
    1.0, 0.0, -0.86744736,
    0.0, 1.0,  1.86727089,
    0.0, 0.0,  0.0,
);

fn dichromat(linear: &SrgbLinear, projection: &Transform) -> SrgbLinear {
    let lms: Lms = transform(projection, linear.to_lms().to_components()).into();
    lms.to_srgb_linear()
}

/// A color together with how it appears under each simulated deficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlindnessSet {
    /// The color as given.
    pub original: Color,
    /// See [`Deficiency::Protanopia`].
    pub protanopia: Color,
    /// See [`Deficiency::Deuteranopia`].
    pub deuteranopia: Color,
    /// See [`Deficiency::Tritanopia`].
    pub tritanopia: Color,
    /// See [`Deficiency::Achromatopsia`].
    pub achromatopsia: Color,
}

impl BlindnessSet {
    /// The five colors in a fixed order: original, protanopia, deuteranopia,
    /// tritanopia, achromatopsia.
    pub fn to_vec(&self) -> Vec<Color> {
        vec![
            self.original,
            self.protanopia,
            self.deuteranopia,
            self.tritanopia,
            self.achromatopsia,
        ]
    }

    /// The simulated color for one deficiency.
    pub fn get(&self, deficiency: Deficiency) -> Color {
        match deficiency {
            Deficiency::Protanopia => self.protanopia,
            Deficiency::Deuteranopia => self.deuteranopia,
            Deficiency::Tritanopia => self.tritanopia,
            Deficiency::Achromatopsia => self.achromatopsia,
        }
    }
}

/// Simulate every supported deficiency for `color`.
pub fn simulate(color: &Color) -> BlindnessSet {
    BlindnessSet {
        original: *color,
        protanopia: Deficiency::Protanopia.simulate(color),
        deuteranopia: Deficiency::Deuteranopia.simulate(color),
        tritanopia: Deficiency::Tritanopia.simulate(color),
        achromatopsia: Deficiency::Achromatopsia.simulate(color),
    }
}
