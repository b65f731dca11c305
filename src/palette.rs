//! Palettes of paired light and dark colors.
//!
//! A [`ColorPalette`] is never changed in place. Every operation borrows the
//! current value and returns a complete replacement, which the caller stores
//! as a whole. Readers holding the old value never see a partial update.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::names::nearest_name;

/// An opaque unique token identifying a palette or a palette color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// A fresh, globally unique id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which color of a pair is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Show the first color of each pair.
    #[default]
    Light,
    /// Show the second color of each pair.
    Dark,
}

impl ColorMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// One entry of a palette: a named pair of colors for light and dark mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Unique within the palette and stable across edits and reorders.
    pub id: Id,
    /// Display name.
    pub name: String,
    /// The `(light, dark)` pair.
    pub hex: (Color, Color),
}

impl PaletteColor {
    /// The color added to new palettes and by [`ColorPalette::create_default_color`].
    pub const DEFAULT_NAME: &'static str = "White";

    /// A new entry with a fresh id.
    pub fn new(name: impl Into<String>, hex: (Color, Color)) -> Self {
        Self {
            id: Id::generate(),
            name: name.into(),
            hex,
        }
    }

    /// A new entry named after the nearest named color, using `hex` for both
    /// modes.
    pub fn from_hex(hex: Color) -> Self {
        Self::new(nearest_name(&hex), (hex, hex))
    }

    /// The color of the pair shown in `mode`.
    pub fn resolve(&self, mode: ColorMode) -> Color {
        match mode {
            ColorMode::Light => self.hex.0,
            ColorMode::Dark => self.hex.1,
        }
    }

    fn with_fresh_id(&self) -> Self {
        Self {
            id: Id::generate(),
            ..self.clone()
        }
    }
}

impl Default for PaletteColor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, (Color::WHITE, Color::WHITE))
    }
}

/// A named, ordered collection of paired colors edited as a unit.
///
/// Deserializing checks the same invariants the operations keep: the name
/// and every color name are non-empty and color ids are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPalette")]
pub struct ColorPalette {
    /// Globally unique and immutable for the lifetime of the palette.
    pub uuid: Id,
    /// Never empty.
    pub name: String,
    /// Entries in display order.
    pub colors: Vec<PaletteColor>,
    /// The mode the palette is currently displayed in.
    pub color_mode: ColorMode,
    /// Time of the last change, as supplied by the caller.
    pub timestamp: u64,
}

fn non_empty(name: &str) -> Result<&str> {
    if name.is_empty() {
        Err(Error::EmptyName)
    } else {
        Ok(name)
    }
}

/// A [`ColorPalette`] as read from storage, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPalette {
    uuid: Id,
    name: String,
    colors: Vec<PaletteColor>,
    color_mode: ColorMode,
    timestamp: u64,
}

fn check_colors(colors: &[PaletteColor]) -> Result<()> {
    let mut ids = HashSet::with_capacity(colors.len());
    for color in colors {
        non_empty(&color.name)?;
        if !ids.insert(&color.id) {
            return Err(Error::DuplicateId(color.id.to_string()));
        }
    }
    Ok(())
}

impl TryFrom<StoredPalette> for ColorPalette {
    type Error = Error;

    fn try_from(stored: StoredPalette) -> Result<Self> {
        non_empty(&stored.name)?;
        check_colors(&stored.colors)?;

        Ok(Self {
            uuid: stored.uuid,
            name: stored.name,
            colors: stored.colors,
            color_mode: stored.color_mode,
            timestamp: stored.timestamp,
        })
    }
}

impl ColorPalette {
    /// A new palette holding one default color, displayed in light mode.
    pub fn new(name: &str, timestamp: u64) -> Result<Self> {
        Ok(Self {
            uuid: Id::generate(),
            name: non_empty(name)?.to_owned(),
            colors: vec![PaletteColor::default()],
            color_mode: ColorMode::Light,
            timestamp,
        })
    }

    fn with_colors(&self, colors: Vec<PaletteColor>) -> Self {
        Self {
            colors,
            ..self.clone()
        }
    }

    fn position(&self, id: &Id) -> Option<usize> {
        self.colors.iter().position(|color| &color.id == id)
    }

    /// Append a new entry with a fresh id.
    pub fn create_color(&self, name: &str, hex: (Color, Color)) -> Result<Self> {
        Ok(self.push(PaletteColor::new(non_empty(name)?, hex)))
    }

    /// Append a new default entry with a fresh id.
    pub fn create_default_color(&self) -> Self {
        self.push(PaletteColor::default())
    }

    /// Append an entry for `hex`, named after the nearest named color.
    pub fn add_hex(&self, hex: Color) -> Self {
        self.push(PaletteColor::from_hex(hex))
    }

    /// Append a copy of `color`, possibly taken from another palette, with a
    /// fresh id.
    pub fn clone_into(&self, color: &PaletteColor) -> Self {
        self.push(color.with_fresh_id())
    }

    fn push(&self, color: PaletteColor) -> Self {
        let mut colors = self.colors.clone();
        colors.push(color);
        self.with_colors(colors)
    }

    /// Replace the name and/or the pair of the entry with `id`. An unknown
    /// id leaves the palette unchanged.
    pub fn edit_color(
        &self,
        id: &Id,
        name: Option<&str>,
        hex: Option<(Color, Color)>,
    ) -> Result<Self> {
        let name = name.map(non_empty).transpose()?;

        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "edit of unknown palette color ignored");
            return Ok(self.clone());
        };

        let mut colors = self.colors.clone();
        let entry = &mut colors[index];
        if let Some(name) = name {
            entry.name = name.to_owned();
        }
        if let Some(hex) = hex {
            entry.hex = hex;
        }

        Ok(self.with_colors(colors))
    }

    /// Remove the entry with `id`, keeping the order of the others.
    pub fn delete_color(&self, id: &Id) -> Self {
        let colors = self
            .colors
            .iter()
            .filter(|color| &color.id != id)
            .cloned()
            .collect::<Vec<_>>();

        if colors.len() == self.colors.len() {
            tracing::debug!(%id, "delete of unknown palette color ignored");
        }

        self.with_colors(colors)
    }

    /// Insert a copy of the entry with `id`, with a fresh id, directly
    /// before it. An unknown id leaves the palette unchanged.
    pub fn duplicate_color(&self, id: &Id) -> Self {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "duplicate of unknown palette color ignored");
            return self.clone();
        };

        let mut colors = self.colors.clone();
        colors.insert(index, self.colors[index].with_fresh_id());
        self.with_colors(colors)
    }

    /// Put the entries in the order given by `ids`, which must name every
    /// entry exactly once.
    pub fn reorder(&self, ids: &[Id]) -> Result<Self> {
        if ids.len() != self.colors.len() {
            return Err(Error::InvalidReorder);
        }

        let mut seen = HashSet::with_capacity(ids.len());
        let colors = ids
            .iter()
            .map(|id| {
                if !seen.insert(id) {
                    return Err(Error::InvalidReorder);
                }
                self.position(id)
                    .map(|index| self.colors[index].clone())
                    .ok_or(Error::InvalidReorder)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self.with_colors(colors))
    }

    /// Give the palette a new name.
    pub fn rename(&self, name: &str) -> Result<Self> {
        Ok(Self {
            name: non_empty(name)?.to_owned(),
            ..self.clone()
        })
    }

    /// Switch between light and dark mode.
    pub fn toggle_color_mode(&self) -> Self {
        Self {
            color_mode: self.color_mode.toggled(),
            ..self.clone()
        }
    }

    /// Record the time of a change.
    pub fn touch(&self, timestamp: u64) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    /// The colors shown in the current mode, in order.
    pub fn resolved_hexes(&self) -> Vec<Color> {
        self.colors
            .iter()
            .map(|color| color.resolve(self.color_mode))
            .collect()
    }
}

/// All palettes of a user, in creation order.
///
/// Each palette is replaced as a whole. Two writers storing the same palette
/// are not reconciled; the later write wins. Uuids are unique, which is also
/// checked when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorPalette>", into = "Vec<ColorPalette>")]
pub struct Palettes(Vec<ColorPalette>);

impl TryFrom<Vec<ColorPalette>> for Palettes {
    type Error = Error;

    fn try_from(palettes: Vec<ColorPalette>) -> Result<Self> {
        let duplicate = {
            let mut uuids = HashSet::with_capacity(palettes.len());
            palettes
                .iter()
                .find(|p| !uuids.insert(&p.uuid))
                .map(|p| p.uuid.to_string())
        };
        match duplicate {
            Some(uuid) => Err(Error::DuplicateId(uuid)),
            None => Ok(Self(palettes)),
        }
    }
}

impl From<Palettes> for Vec<ColorPalette> {
    fn from(palettes: Palettes) -> Self {
        palettes.0
    }
}

impl Palettes {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette and add it at the end.
    pub fn create(&mut self, name: &str, timestamp: u64) -> Result<&ColorPalette> {
        let palette = ColorPalette::new(name, timestamp)?;
        self.0.push(palette);
        Ok(&self.0[self.0.len() - 1])
    }

    /// Store `palette`, replacing the one with the same uuid or adding it at
    /// the end.
    pub fn upsert(&mut self, palette: ColorPalette) {
        match self.0.iter_mut().find(|p| p.uuid == palette.uuid) {
            Some(existing) => *existing = palette,
            None => self.0.push(palette),
        }
    }

    /// Remove a palette for good.
    pub fn delete(&mut self, uuid: &Id) -> Option<ColorPalette> {
        let index = self.0.iter().position(|p| &p.uuid == uuid)?;
        Some(self.0.remove(index))
    }

    /// The palette with `uuid`.
    pub fn get(&self, uuid: &Id) -> Option<&ColorPalette> {
        self.0.iter().find(|p| &p.uuid == uuid)
    }

    /// Iterate over the palettes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorPalette> {
        self.0.iter()
    }

    /// The number of palettes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no palettes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
