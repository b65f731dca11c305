//! Resolve a color to the closest entry of a fixed table of named colors.
//!
//! The table holds the CSS named colors in alphabetical order. Distances are
//! measured with deltaE OK, so "closest" follows perception rather than raw
//! channel differences.

use std::sync::LazyLock;

use serde::Serialize;

use crate::color::{Color, Component};
use crate::models::Oklab;

/// A color with a human readable name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NamedColor {
    /// The display name.
    pub name: &'static str,
    /// The color.
    pub hex: Color,
}

struct Entry {
    color: NamedColor,
    oklab: Oklab,
}

static TABLE: LazyLock<Vec<Entry>> = LazyLock::new(|| {
    NAMES
        .iter()
        .map(|&(name, rgb)| {
            let hex = Color::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
            Entry {
                color: NamedColor { name, hex },
                oklab: hex.oklab(),
            }
        })
        .collect()
});

/// The table entry perceptually closest to `color`. When several entries are
/// equally close, the first one in table order wins.
pub fn nearest(color: &Color) -> &'static NamedColor {
    let target = color.oklab();

    let mut best = &TABLE[0];
    let mut best_distance = Component::INFINITY;
    for entry in TABLE.iter() {
        let distance = entry.oklab.delta(&target);
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }

    &best.color
}

/// The name of the table entry perceptually closest to `color`.
pub fn nearest_name(color: &Color) -> &'static str {
    nearest(color).name
}

/// Pair every color with its nearest name, keeping the order.
pub fn named(colors: &[Color]) -> Vec<NamedColor> {
    colors
        .iter()
        .map(|hex| NamedColor {
            name: nearest_name(hex),
            hex: *hex,
        })
        .collect()
}

/// Every entry of the reference table, in table order.
pub fn table() -> impl Iterator<Item = &'static NamedColor> {
    TABLE.iter().map(|entry| &entry.color)
}

#[rustfmt::skip]
const NAMES: &[(&str, u32)] = &[
    ("Alice Blue", 0xf0f8ff),
    ("Antique White", 0xfaebd7),
    ("Aqua", 0x00ffff),
    ("Aquamarine", 0x7fffd4),
    ("Azure", 0xf0ffff),
    ("Beige", 0xf5f5dc),
    ("Bisque", 0xffe4c4),
    ("Black", 0x000000),
    ("Blanched Almond", 0xffebcd),
    ("Blue", 0x0000ff),
    ("Blue Violet", 0x8a2be2),
    ("Brown", 0xa52a2a),
    ("Burly Wood", 0xdeb887),
    ("Cadet Blue", 0x5f9ea0),
    ("Chartreuse", 0x7fff00),
    ("Chocolate", 0xd2691e),
    ("Coral", 0xff7f50),
    ("Cornflower Blue", 0x6495ed),
    ("Cornsilk", 0xfff8dc),
    ("Crimson", 0xdc143c),
    ("Cyan", 0x00ffff),
    ("Dark Blue", 0x00008b),
    ("Dark Cyan", 0x008b8b),
    ("Dark Goldenrod", 0xb8860b),
    ("Dark Gray", 0xa9a9a9),
    ("Dark Green", 0x006400),
    ("Dark Grey", 0xa9a9a9),
    ("Dark Khaki", 0xbdb76b),
    ("Dark Magenta", 0x8b008b),
    ("Dark Olive Green", 0x556b2f),
    ("Dark Orange", 0xff8c00),
    ("Dark Orchid", 0x9932cc),
    ("Dark Red", 0x8b0000),
    ("Dark Salmon", 0xe9967a),
    ("Dark Sea Green", 0x8fbc8f),
    ("Dark Slate Blue", 0x483d8b),
    ("Dark Slate Gray", 0x2f4f4f),
    ("Dark Slate Grey", 0x2f4f4f),
    ("Dark Turquoise", 0x00ced1),
    ("Dark Violet", 0x9400d3),
    ("Deep Pink", 0xff1493),
    ("Deep Sky Blue", 0x00bfff),
    ("Dim Gray", 0x696969),
    ("Dim Grey", 0x696969),
    ("Dodger Blue", 0x1e90ff),
    ("Fire Brick", 0xb22222),
    ("Floral White", 0xfffaf0),
    ("Forest Green", 0x228b22),
    ("Fuchsia", 0xff00ff),
    ("Gainsboro", 0xdcdcdc),
    ("Ghost White", 0xf8f8ff),
    ("Gold", 0xffd700),
    ("Goldenrod", 0xdaa520),
    ("Gray", 0x808080),
    ("Green", 0x008000),
    ("Green Yellow", 0xadff2f),
    ("Grey", 0x808080),
    ("Honeydew", 0xf0fff0),
    ("Hot Pink", 0xff69b4),
    ("Indian Red", 0xcd5c5c),
    ("Indigo", 0x4b0082),
    ("Ivory", 0xfffff0),
    ("Khaki", 0xf0e68c),
    ("Lavender", 0xe6e6fa),
    ("Lavender Blush", 0xfff0f5),
    ("Lawn Green", 0x7cfc00),
    ("Lemon Chiffon", 0xfffacd),
    ("Light Blue", 0xadd8e6),
    ("Light Coral", 0xf08080),
    ("Light Cyan", 0xe0ffff),
    ("Light Goldenrod Yellow", 0xfafad2),
    ("Light Gray", 0xd3d3d3),
    ("Light Green", 0x90ee90),
    ("Light Grey", 0xd3d3d3),
    ("Light Pink", 0xffb6c1),
    ("Light Salmon", 0xffa07a),
    ("Light Sea Green", 0x20b2aa),
    ("Light Sky Blue", 0x87cefa),
    ("Light Slate Gray", 0x778899),
    ("Light Slate Grey", 0x778899),
    ("Light Steel Blue", 0xb0c4de),
    ("Light Yellow", 0xffffe0),
    ("Lime", 0x00ff00),
    ("Lime Green", 0x32cd32),
    ("Linen", 0xfaf0e6),
    ("Magenta", 0xff00ff),
    ("Maroon", 0x800000),
    ("Medium Aquamarine", 0x66cdaa),
    ("Medium Blue", 0x0000cd),
    ("Medium Orchid", 0xba55d3),
    ("Medium Purple", 0x9370db),
    ("Medium Sea Green", 0x3cb371),
    ("Medium Slate Blue", 0x7b68ee),
    ("Medium Spring Green", 0x00fa9a),
    ("Medium Turquoise", 0x48d1cc),
    ("Medium Violet Red", 0xc71585),
    ("Midnight Blue", 0x191970),
    ("Mint Cream", 0xf5fffa),
    ("Misty Rose", 0xffe4e1),
    ("Moccasin", 0xffe4b5),
    ("Navajo White", 0xffdead),
    ("Navy", 0x000080),
    ("Old Lace", 0xfdf5e6),
    ("Olive", 0x808000),
    ("Olive Drab", 0x6b8e23),
    ("Orange", 0xffa500),
    ("Orange Red", 0xff4500),
    ("Orchid", 0xda70d6),
    ("Pale Goldenrod", 0xeee8aa),
    ("Pale Green", 0x98fb98),
    ("Pale Turquoise", 0xafeeee),
    ("Pale Violet Red", 0xdb7093),
    ("Papaya Whip", 0xffefd5),
    ("Peach Puff", 0xffdab9),
    ("Peru", 0xcd853f),
    ("Pink", 0xffc0cb),
    ("Plum", 0xdda0dd),
    ("Powder Blue", 0xb0e0e6),
    ("Purple", 0x800080),
    ("Rebecca Purple", 0x663399),
    ("Red", 0xff0000),
    ("Rosy Brown", 0xbc8f8f),
    ("Royal Blue", 0x4169e1),
    ("Saddle Brown", 0x8b4513),
    ("Salmon", 0xfa8072),
    ("Sandy Brown", 0xf4a460),
    ("Sea Green", 0x2e8b57),
    ("Seashell", 0xfff5ee),
    ("Sienna", 0xa0522d),
    ("Silver", 0xc0c0c0),
    ("Sky Blue", 0x87ceeb),
    ("Slate Blue", 0x6a5acd),
    ("Slate Gray", 0x708090),
    ("Slate Grey", 0x708090),
    ("Snow", 0xfffafa),
    ("Spring Green", 0x00ff7f),
    ("Steel Blue", 0x4682b4),
    ("Tan", 0xd2b48c),
    ("Teal", 0x008080),
    ("Thistle", 0xd8bfd8),
    ("Tomato", 0xff6347),
    ("Turquoise", 0x40e0d0),
    ("Violet", 0xee82ee),
    ("Wheat", 0xf5deb3),
    ("White", 0xffffff),
    ("White Smoke", 0xf5f5f5),
    ("Yellow", 0xffff00),
    ("Yellow Green", 0x9acd32),
];
