//! Derive related colors from a source color.
//!
//! Harmonies rotate the hue in the HSL model and keep saturation and
//! lightness. Shades, tints and tones mix the source with black, white and
//! mid-gray. Every function is deterministic and never includes a random
//! component, so results can be cached and compared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blindness;
use crate::color::{Color, Component};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::models::Oklab;

/// Default spacing in degrees between the colors returned by [`hues`].
pub const DEFAULT_HUE_STEP: u16 = 36;

/// Default number of colors returned by [`shades`], [`tints`] and [`tones`].
pub const DEFAULT_STEPS: usize = 10;

/// Hue and lightness offsets that produce the [`alternatives`] of a color.
#[rustfmt::skip]
const ALTERNATIVE_OFFSETS: [(Component, Component); 8] = [
    (-30.0,  0.0),
    ( 30.0,  0.0),
    (-15.0, -0.1),
    ( 15.0,  0.1),
    (  0.0, -0.2),
    (  0.0,  0.2),
    (-45.0,  0.1),
    ( 45.0, -0.1),
];

/// Smallest deltaE OK between two [`alternatives`], one just noticeable
/// difference.
pub const JND: Component = 0.02;

/// Lightness change between the extra steps used to fill up [`alternatives`].
const LIGHTNESS_STEP: Component = 0.05;

fn rotations(color: &Color, offsets: &[Component]) -> Vec<Color> {
    let hsl = color.hsl();
    offsets
        .iter()
        .map(|&degrees| Color::from_hsl(&hsl.rotate(degrees)))
        .collect()
}

/// The color on the opposite side of the hue circle, 180° apart.
pub fn complementary(color: &Color) -> Vec<Color> {
    rotations(color, &[180.0])
}

/// The two colors 120° and 240° apart.
pub fn triadic(color: &Color) -> Vec<Color> {
    rotations(color, &[120.0, 240.0])
}

/// The three colors 90°, 180° and 270° apart.
pub fn square(color: &Color) -> Vec<Color> {
    rotations(color, &[90.0, 180.0, 270.0])
}

/// The two neighbors of the complementary color, 150° and 210° apart.
pub fn split_complementary(color: &Color) -> Vec<Color> {
    rotations(color, &[150.0, 210.0])
}

/// A full turn around the hue circle in steps of [`DEFAULT_HUE_STEP`]
/// degrees, not including the source color.
pub fn hues(color: &Color) -> Vec<Color> {
    hues_with_step(color, DEFAULT_HUE_STEP)
}

/// A full turn around the hue circle in steps of `step` degrees, not
/// including the source color. A step of 0 yields nothing.
///
/// Grays have no hue to turn, so every entry of an achromatic color is the
/// source color again.
pub fn hues_with_step(color: &Color, step: u16) -> Vec<Color> {
    if step == 0 {
        return Vec::new();
    }

    let offsets = (1..)
        .map(|i| i * u32::from(step))
        .take_while(|&offset| offset < 360)
        .map(|offset| offset as Component)
        .collect::<Vec<_>>();

    rotations(color, &offsets)
}

/// Variants close to the source color: small hue shifts, lighter and darker
/// versions and combinations of both.
///
/// Every entry is at least [`JND`] away from the source and from every
/// earlier entry. Rotating the hue of a gray does nothing and lightness
/// clamps at black and white, so offsets that land too close are skipped and
/// the list is topped up with plain lightness steps, darker first.
pub fn alternatives(color: &Color) -> Vec<Color> {
    let hsl = color.hsl();

    let offsets = ALTERNATIVE_OFFSETS
        .iter()
        .map(|&(degrees, lightness)| hsl.rotate(degrees).lighten(lightness));
    let steps = (1..20).flat_map(|i| {
        let delta = i as Component * LIGHTNESS_STEP;
        [hsl.lighten(-delta), hsl.lighten(delta)]
    });

    let source = color.oklab();
    let mut picked: Vec<(Color, Oklab)> = Vec::with_capacity(ALTERNATIVE_OFFSETS.len());
    for candidate in offsets.chain(steps).map(|hsl| Color::from_hsl(&hsl)) {
        if picked.len() == ALTERNATIVE_OFFSETS.len() {
            break;
        }

        let oklab = candidate.oklab();
        let distinct = std::iter::once(&source)
            .chain(picked.iter().map(|(_, other)| other))
            .all(|other| other.delta(&oklab) >= JND);
        if distinct {
            picked.push((candidate, oklab));
        }
    }

    picked.into_iter().map(|(color, _)| color).collect()
}

fn gradient(color: &Color, target: &Color, steps: usize) -> Vec<Color> {
    (0..steps)
        .map(|i| color.mix(target, i as Component / steps as Component))
        .collect()
}

/// The source color followed by progressively darker mixes with black.
pub fn shades(color: &Color) -> Vec<Color> {
    shades_with_steps(color, DEFAULT_STEPS)
}

/// Like [`shades`] with `steps` colors, mixing `i / steps` of black into the
/// `i`-th color.
pub fn shades_with_steps(color: &Color, steps: usize) -> Vec<Color> {
    gradient(color, &Color::BLACK, steps)
}

/// The source color followed by progressively lighter mixes with white.
pub fn tints(color: &Color) -> Vec<Color> {
    tints_with_steps(color, DEFAULT_STEPS)
}

/// Like [`tints`] with `steps` colors.
pub fn tints_with_steps(color: &Color, steps: usize) -> Vec<Color> {
    gradient(color, &Color::WHITE, steps)
}

/// The source color followed by progressively grayer mixes with
/// [`Color::MID_GRAY`].
pub fn tones(color: &Color) -> Vec<Color> {
    tones_with_steps(color, DEFAULT_STEPS)
}

/// Like [`tones`] with `steps` colors.
pub fn tones_with_steps(color: &Color, steps: usize) -> Vec<Color> {
    gradient(color, &Color::MID_GRAY, steps)
}

/// A named way of deriving a sequence of colors from one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    /// See [`shades`].
    Shades,
    /// See [`tints`].
    Tints,
    /// See [`tones`].
    Tones,
    /// See [`alternatives`].
    Alternatives,
    /// See [`hues`].
    Hues,
    /// See [`complementary`].
    Complementary,
    /// See [`triadic`].
    Triadic,
    /// See [`square`].
    Square,
    /// See [`split_complementary`].
    SplitComplementary,
    /// The five colors of [`blindness::simulate`], original first.
    Blindness,
}

impl Generator {
    /// Every generator, in a stable order.
    pub const ALL: [Generator; 10] = [
        Generator::Shades,
        Generator::Tints,
        Generator::Tones,
        Generator::Alternatives,
        Generator::Hues,
        Generator::Complementary,
        Generator::Triadic,
        Generator::Square,
        Generator::SplitComplementary,
        Generator::Blindness,
    ];

    /// Run this generator on `color` with the given settings.
    pub fn apply(self, color: &Color, config: &GeneratorConfig) -> Vec<Color> {
        match self {
            Self::Shades => shades_with_steps(color, config.steps),
            Self::Tints => tints_with_steps(color, config.steps),
            Self::Tones => tones_with_steps(color, config.steps),
            Self::Alternatives => alternatives(color),
            Self::Hues => hues_with_step(color, config.hue_step),
            Self::Complementary => complementary(color),
            Self::Triadic => triadic(color),
            Self::Square => square(color),
            Self::SplitComplementary => split_complementary(color),
            Self::Blindness => blindness::simulate(color).to_vec(),
        }
    }

    /// The name used for this generator in URLs and configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shades => "shades",
            Self::Tints => "tints",
            Self::Tones => "tones",
            Self::Alternatives => "alternatives",
            Self::Hues => "hues",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Square => "square",
            Self::SplitComplementary => "split-complementary",
            Self::Blindness => "blindness",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|generator| generator.as_str() == s)
            .ok_or_else(|| Error::UnknownGenerator(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_string).collect()
    }

    #[test]
    fn harmonies_of_red() {
        let red = parse("#ff0000").unwrap();
        assert_eq!(hexes(&complementary(&red)), ["#00ffff"]);
        assert_eq!(hexes(&triadic(&red)), ["#00ff00", "#0000ff"]);
        assert_eq!(hexes(&square(&red)), ["#80ff00", "#00ffff", "#8000ff"]);
        assert_eq!(hexes(&split_complementary(&red)), ["#00ff80", "#0080ff"]);
    }

    #[test]
    fn complementary_twice_returns_to_the_source_hue() {
        for hex in ["#ff0000", "#3366cc", "#cc9933", "#00ff00", "#ff00ff"] {
            let color = parse(hex).unwrap();
            let twice = complementary(&complementary(&color)[0])[0];
            assert_eq!(twice.to_hsl().0, color.to_hsl().0, "{hex}");
        }
        let color = parse("#3366cc").unwrap();
        assert_eq!(hexes(&complementary(&color)), ["#cc9933"]);
        assert_eq!(complementary(&complementary(&color)[0])[0], color);
    }

    #[test]
    fn hue_steps() {
        let red = parse("#ff0000").unwrap();
        let hues = hues(&red);
        assert_eq!(hues.len(), 9);
        assert!(!hues.contains(&red));
        assert_eq!(hues[4], parse("#00ffff").unwrap());

        assert_eq!(hues_with_step(&red, 90).len(), 3);
        assert_eq!(hues_with_step(&red, 120), triadic(&red));
        assert_eq!(hues_with_step(&red, 7).len(), 51);
        assert!(hues_with_step(&red, 0).is_empty());
        assert!(hues_with_step(&red, 360).is_empty());

        let gray = parse("#808080").unwrap();
        assert!(super::hues(&gray).iter().all(|c| *c == gray));
    }

    #[test]
    fn gradients_start_at_the_source() {
        for hex in ["#3366cc", "#000000", "#ffffff", "#d2691e"] {
            let color = parse(hex).unwrap();
            assert_eq!(shades(&color)[0], color);
            assert_eq!(tints(&color)[0], color);
            assert_eq!(tones(&color)[0], color);
            assert_eq!(shades(&color).len(), DEFAULT_STEPS);
        }
    }

    #[test]
    fn gradients_move_toward_their_target() {
        let color = parse("#3366cc").unwrap();

        let shades = shades(&color);
        assert!(shades.windows(2).all(|w| w[1].blue <= w[0].blue));
        assert_eq!(shades[5], Color::new(26, 51, 102));

        let tints = tints(&color);
        assert!(tints.windows(2).all(|w| w[1].red >= w[0].red));

        let tones = tones(&Color::WHITE);
        assert!(tones.windows(2).all(|w| w[1].red <= w[0].red));
        assert!(tones.iter().all(|c| c.red >= 128));

        assert!(shades_with_steps(&color, 0).is_empty());
        assert_eq!(tints_with_steps(&color, 1), [color]);
    }

    #[test]
    fn alternatives_are_distinct_variants() {
        let color = parse("#3366cc").unwrap();
        let alternatives = alternatives(&color);
        assert_eq!(alternatives.len(), 8);
        assert!(!alternatives.contains(&color));
        assert_eq!(alternatives[0], Color::from_hsl(&color.hsl().rotate(-30.0)));
        assert_eq!(alternatives[4], Color::from_hsl(&color.hsl().lighten(-0.2)));
    }

    #[test]
    fn alternatives_of_grays() {
        for hex in ["#ffffff", "#000000", "#808080", "#fefefe", "#010101"] {
            let color = parse(hex).unwrap();
            let alternatives = alternatives(&color);
            assert_eq!(alternatives.len(), 8, "{hex}");
            assert!(!alternatives.contains(&color), "{hex}");

            for (i, a) in alternatives.iter().enumerate() {
                assert!(a.oklab().delta(&color.oklab()) >= JND, "{hex} {a}");
                for b in &alternatives[..i] {
                    assert_ne!(a, b, "{hex}");
                    assert!(a.oklab().delta(&b.oklab()) >= JND, "{hex} {a} {b}");
                }
            }
        }

        // Nothing is lighter than white or darker than black.
        assert!(alternatives(&Color::WHITE).iter().all(|c| c.red < 255));
        assert!(alternatives(&Color::BLACK).iter().all(|c| c.red > 0));
    }

    #[test]
    fn deterministic() {
        let color = parse("#1e90ff").unwrap();
        let config = GeneratorConfig::default();
        for generator in Generator::ALL {
            assert_eq!(
                generator.apply(&color, &config),
                generator.apply(&color, &config),
                "{generator}"
            );
        }
    }

    #[test]
    fn generator_names() {
        for generator in Generator::ALL {
            assert_eq!(generator.as_str().parse::<Generator>().unwrap(), generator);
        }
        assert!("gradients".parse::<Generator>().is_err());
        assert_eq!(
            serde_json::to_string(&Generator::SplitComplementary).unwrap(),
            "\"split-complementary\""
        );
    }

    #[test]
    fn blindness_generator_lists_five_colors() {
        let color = parse("#3366cc").unwrap();
        let colors = Generator::Blindness.apply(&color, &GeneratorConfig::default());
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], color);
    }
}
