//! A [`Color`] is a normalized sRGB value as it is passed around the color
//! tool: three 8-bit channels, rendered canonically as `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Hsl, Oklab, Srgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl std::ops::Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

/// A normalized sRGB color.
///
/// Every way of building a [`Color`] from text goes through [`parse`], so a
/// value of this type is always valid. The canonical textual form is `#`
/// followed by six lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Color {
    /// Pure white, `#ffffff`.
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// The gray halfway between black and white, `#808080`.
    pub const MID_GRAY: Color = Color::new(128, 128, 128);

    /// Create a color from its 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Return the channels as an `(r, g, b)` triple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Return the color in HSL notation, rounded to whole degrees and
    /// percentages. Hue is in `[0, 360)`.
    pub fn to_hsl(&self) -> (u16, u8, u8) {
        let hsl = self.hsl();
        let hue = hsl.hue.round() as u16 % 360;
        let saturation = (hsl.saturation * 100.0).round() as u8;
        let lightness = (hsl.lightness * 100.0).round() as u8;
        (hue, saturation, lightness)
    }

    /// The gamma encoded sRGB model of this color with components in
    /// `[0, 1]`.
    pub fn srgb(&self) -> Srgb {
        Srgb::new(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        )
    }

    /// The unrounded HSL model of this color.
    pub fn hsl(&self) -> Hsl {
        self.srgb().to_hsl()
    }

    /// The Oklab model of this color, for perceptual distances.
    pub fn oklab(&self) -> Oklab {
        self.srgb().to_linear_light().to_oklab()
    }

    /// Build a color from an sRGB model. Components are clamped to `[0, 1]`
    /// and rounded to the nearest channel value.
    pub fn from_srgb(srgb: &Srgb) -> Self {
        let channel = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(srgb.red), channel(srgb.green), channel(srgb.blue))
    }

    /// Build a color from an HSL model.
    pub fn from_hsl(hsl: &Hsl) -> Self {
        Self::from_srgb(&hsl.to_srgb())
    }

    /// Render the color in the given notation.
    ///
    /// ```rust
    /// use hexpalette::{parse, Format};
    /// let red = parse("F00").unwrap();
    /// assert_eq!(red.format(Format::Hex), "#ff0000");
    /// assert_eq!(red.format(Format::Rgb), "rgb(255, 0, 0)");
    /// assert_eq!(red.format(Format::Hsl), "hsl(0, 100%, 50%)");
    /// ```
    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Hex => self.to_string(),
            Format::Rgb => format!("rgb({}, {}, {})", self.red, self.green, self.blue),
            Format::Hsl => {
                let (hue, saturation, lightness) = self.to_hsl();
                format!("hsl({hue}, {saturation}%, {lightness}%)")
            }
        }
    }
}

/// Parse a hex color. Accepts an optional leading `#` followed by either 3
/// or 6 hex digits in any case.
pub fn parse(input: &str) -> Result<Color> {
    let invalid = || Error::InvalidColorFormat(input.to_owned());

    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibble = |b: u8| match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    };

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let short = |i: usize| nibble(bytes[i]) * 17;
            Ok(Color::new(short(0), short(1), short(2)))
        }
        6 => {
            let long = |i: usize| nibble(bytes[i]) << 4 | nibble(bytes[i + 1]);
            Ok(Color::new(long(0), long(2), long(4)))
        }
        _ => Err(invalid()),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

/// The notations a [`Color`] can be rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(Error::UnknownFormat(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_long_forms() {
        assert_eq!(parse("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse("FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse("#F0a").unwrap(), Color::new(255, 0, 170));
        assert_eq!(parse("abc").unwrap().to_string(), "#aabbcc");
        assert_eq!(parse("#0A0b0C").unwrap().to_string(), "#0a0b0c");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "#", "#ff", "#ffff", "#fffff", "#fffffff", "#ggg", "##fff", " fff", "+12345", "ñab"] {
            assert!(
                matches!(parse(input), Err(Error::InvalidColorFormat(ref s)) if s == input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trip() {
        for input in ["#000000", "#ffffff", "#123456", "#abcdef", "#7f7f80"] {
            let color = parse(input).unwrap();
            assert_eq!(parse(&color.format(Format::Hex)).unwrap(), color);
            assert_eq!(color.format(Format::Hex), input);
        }
    }

    #[test]
    fn rgb_round_trip() {
        let color = parse("#d2691e").unwrap();
        let (r, g, b) = color.to_rgb();
        assert_eq!(Color::new(r, g, b), color);
        assert_eq!(Color::from_srgb(&color.srgb()), color);
    }

    #[test]
    fn hsl_round_trip_within_one_unit() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let color = Color::new(r, g, b);
                    let back = Color::from_hsl(&color.hsl());
                    assert!((back.red as i16 - r as i16).abs() <= 1);
                    assert!((back.green as i16 - g as i16).abs() <= 1);
                    assert!((back.blue as i16 - b as i16).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn rounded_hsl() {
        assert_eq!(parse("#ff0000").unwrap().to_hsl(), (0, 100, 50));
        assert_eq!(parse("#d2691e").unwrap().to_hsl(), (25, 75, 47));
        assert_eq!(parse("#808080").unwrap().to_hsl(), (0, 0, 50));
        assert_eq!(parse("#ffffff").unwrap().to_hsl(), (0, 0, 100));
    }

    #[test]
    fn formats() {
        let color = parse("#3366cc").unwrap();
        assert_eq!(color.format(Format::Hex), "#3366cc");
        assert_eq!(color.format(Format::Rgb), "rgb(51, 102, 204)");
        assert_eq!(color.format(Format::Hsl), "hsl(220, 60%, 50%)");
        assert_eq!("rgb".parse::<Format>().unwrap(), Format::Rgb);
        assert!("cmyk".parse::<Format>().is_err());
    }

    #[test]
    fn serde_uses_canonical_hex() {
        let color = parse("#ABC").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#aabbcc\"");
        let back: Color = serde_json::from_str("\"#AABBCC\"").unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"#xyz\"").is_err());
    }
}
