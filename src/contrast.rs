//! Relative luminance and WCAG contrast scoring.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Component};

/// Minimum contrast for large text at level AA.
pub const LARGE_TEXT_RATIO: Component = 3.0;
/// Minimum contrast for normal text at level AA.
pub const SMALL_TEXT_RATIO: Component = 4.5;
/// Minimum contrast for normal text at level AAA.
pub const ENHANCED_RATIO: Component = 7.0;

/// Relative luminance above which a color counts as light.
///
/// This is the luminance at which black and white overlay content have the
/// same contrast ratio against the color: `sqrt(1.05 * 0.05) - 0.05`. Above it
/// dark content reads better, below it light content does.
#[allow(clippy::excessive_precision)]
pub const LIGHT_THRESHOLD: Component = 0.179_129_1;

bitflags! {
    /// WCAG 2.1 conformance levels met by a contrast ratio.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Compliance : u8 {
        /// Large text at level AA (3:1).
        const AA_LARGE = 1 << 0;
        /// Normal text at level AA (4.5:1).
        const AA = 1 << 1;
        /// Large text at level AAA (4.5:1).
        const AAA_LARGE = 1 << 2;
        /// Normal text at level AAA (7:1).
        const AAA = 1 << 3;
    }
}

/// The contrast between a foreground and a background color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// The contrast ratio, in `[1, 21]`.
    pub score: Component,
    /// Whether the ratio is enough for large text.
    #[serde(rename = "large")]
    pub passes_large: bool,
    /// Whether the ratio is enough for normal sized text.
    #[serde(rename = "small")]
    pub passes_small: bool,
}

impl ContrastResult {
    fn from_score(score: Component) -> Self {
        Self {
            score,
            passes_large: score >= LARGE_TEXT_RATIO,
            passes_small: score >= SMALL_TEXT_RATIO,
        }
    }

    /// Every conformance level this contrast satisfies.
    pub fn compliance(&self) -> Compliance {
        let mut levels = Compliance::empty();
        if self.score >= LARGE_TEXT_RATIO {
            levels |= Compliance::AA_LARGE;
        }
        if self.score >= SMALL_TEXT_RATIO {
            levels |= Compliance::AA | Compliance::AAA_LARGE;
        }
        if self.score >= ENHANCED_RATIO {
            levels |= Compliance::AAA;
        }
        levels
    }
}

/// Contrast of a color used as content in both display modes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeContrast {
    /// The color on a white background.
    pub light: ContrastResult,
    /// The color on a black background.
    pub dark: ContrastResult,
}

/// The relative luminance of a color, from 0 for black to 1 for white.
pub fn relative_luminance(color: &Color) -> Component {
    color.srgb().to_linear_light().luminance()
}

/// Score the contrast of `foreground` on `background`. The score does not
/// depend on the order of the arguments.
pub fn contrast(foreground: &Color, background: &Color) -> ContrastResult {
    let a = relative_luminance(foreground);
    let b = relative_luminance(background);
    let (lighter, darker) = if a > b { (a, b) } else { (b, a) };

    // The ratio is taken in double precision so that black on white scores
    // exactly 21 with 32-bit components.
    let ratio = (f64::from(lighter) + 0.05) / (f64::from(darker) + 0.05);
    ContrastResult::from_score(ratio.clamp(1.0, 21.0) as Component)
}

/// Score `color` as content on white and on black.
pub fn mode_contrast(color: &Color) -> ModeContrast {
    ModeContrast {
        light: contrast(color, &Color::WHITE),
        dark: contrast(color, &Color::BLACK),
    }
}

/// Whether `color` is light, meaning dark overlay content should be used on
/// top of it. See [`LIGHT_THRESHOLD`].
pub fn is_light(color: &Color) -> bool {
    relative_luminance(color) > LIGHT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, parse};

    #[test]
    fn black_and_white() {
        let result = contrast(&Color::WHITE, &Color::BLACK);
        assert_eq!(result.score, 21.0);
        assert!(result.passes_large);
        assert!(result.passes_small);
        assert_eq!(result.compliance(), Compliance::all());
    }

    #[test]
    fn same_color_is_one() {
        for hex in ["#000000", "#ffffff", "#777777", "#3366cc", "#ff0000"] {
            let color = parse(hex).unwrap();
            let result = contrast(&color, &color);
            assert_eq!(result.score, 1.0);
            assert!(!result.passes_large);
            assert!(!result.passes_small);
            assert!(result.compliance().is_empty());
        }
    }

    #[test]
    fn symmetric() {
        let colors = ["#000000", "#ffffff", "#767676", "#3366cc", "#ffcc00", "#1e90ff"];
        for a in colors {
            for b in colors {
                let a = parse(a).unwrap();
                let b = parse(b).unwrap();
                assert_eq!(contrast(&a, &b).score, contrast(&b, &a).score);
            }
        }
    }

    #[test]
    fn thresholds() {
        // #767676 on white is the classic smallest gray passing AA.
        let result = contrast(&parse("#767676").unwrap(), &Color::WHITE);
        assert!(result.score > 4.5 && result.score < 4.6);
        assert!(result.passes_small);
        assert_eq!(result.compliance(), Compliance::AA_LARGE | Compliance::AA | Compliance::AAA_LARGE);

        // #777777 just misses it.
        let result = contrast(&parse("#777777").unwrap(), &Color::WHITE);
        assert!(result.passes_large);
        assert!(!result.passes_small);
        assert_eq!(result.compliance(), Compliance::AA_LARGE);

        let result = contrast(&parse("#999999").unwrap(), &Color::WHITE);
        assert!(!result.passes_large);
    }

    #[test]
    fn luminance() {
        assert_component_eq!(relative_luminance(&Color::WHITE), 1.0);
        assert_component_eq!(relative_luminance(&Color::BLACK), 0.0);
        assert_component_eq!(relative_luminance(&parse("#ff0000").unwrap()), 0.2126);
        assert_component_eq!(relative_luminance(&parse("#00ff00").unwrap()), 0.7152);
        assert_component_eq!(relative_luminance(&parse("#0000ff").unwrap()), 0.0722);
    }

    #[test]
    fn light_and_dark() {
        assert!(is_light(&Color::WHITE));
        assert!(!is_light(&Color::BLACK));
        assert!(is_light(&parse("#ffff00").unwrap()));
        assert!(!is_light(&parse("#0000ff").unwrap()));
        assert!(is_light(&parse("#808080").unwrap()));
        assert!(!is_light(&parse("#595959").unwrap()));
    }

    #[test]
    fn modes() {
        let result = mode_contrast(&Color::BLACK);
        assert_eq!(result.light.score, 21.0);
        assert_eq!(result.dark.score, 1.0);
    }

    #[test]
    fn serializes_with_short_keys() {
        let json = serde_json::to_value(contrast(&Color::WHITE, &Color::BLACK)).unwrap();
        assert_eq!(json["large"], true);
        assert_eq!(json["small"], true);
        assert_eq!(json["score"], 21.0);
    }
}
