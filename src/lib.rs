//! hexpalette is the color engine behind a palette tool. It parses and formats
//! hex colors, scores contrast for accessibility, simulates color vision
//! deficiencies, derives harmonies and gradients, names colors and models
//! palettes of paired light and dark colors.
//!
//! ```rust
//! use hexpalette::{contrast, parse, Color};
//!
//! let color = parse("#3366cc").unwrap();
//! assert!(contrast(&color, &Color::WHITE).passes_large);
//! assert_eq!(hexpalette::complementary(&color)[0].to_string(), "#cc9933");
//! ```

#![deny(missing_docs)]

mod blindness;
mod color;
mod config;
mod contrast;
mod convert;
mod error;
mod harmony;
mod history;
mod interpolate;
mod math;
pub mod models;
mod names;
mod palette;


pub use blindness::{simulate, simulate as simulate_blindness, BlindnessSet, Deficiency};
pub use color::{parse, Color, Component, Components, Format};
pub use config::{Config, GeneratorConfig, DEFAULT_HISTORY_LIMIT};
pub use contrast::{
    contrast, is_light, mode_contrast, relative_luminance, Compliance, ContrastResult,
    ModeContrast, ENHANCED_RATIO, LARGE_TEXT_RATIO, LIGHT_THRESHOLD, SMALL_TEXT_RATIO,
};
pub use error::{Error, Result};
pub use harmony::{
    alternatives, complementary, hues, hues_with_step, shades, shades_with_steps,
    split_complementary, square, tints, tints_with_steps, tones, tones_with_steps, triadic,
    Generator, DEFAULT_HUE_STEP, DEFAULT_STEPS, JND,
};
pub use history::History;
pub use names::{named, nearest, nearest_name, table as named_colors, NamedColor};
pub use palette::{ColorMode, ColorPalette, Id, PaletteColor, Palettes};
