//! colors and the palettes they are drawn from
use crate::error::ColorfillError;
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// the number of colors in the standard palette
pub const STANDARD_PALETTE_SIZE: usize = 6;

/// The standard six color palette, built once on first use
pub static STANDARD_PALETTE: Lazy<Palette> = Lazy::new(Palette::standard);

/// A palette index. A `Color` only means something relative to a palette size, which is
/// carried by the board it is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Color(u8);

impl Color {
    /// builds a color, failing if the index is outside `[0, palette_size)`
    pub fn new(index: usize, palette_size: usize) -> Result<Self, ColorfillError> {
        if index >= palette_size || index > u8::MAX as usize {
            return Err(ColorfillError::InvalidColorIndex {
                index,
                palette_size,
            });
        }
        Ok(Color(index as u8))
    }

    /// builds a color checked against the standard palette
    pub fn from_index(index: usize) -> Result<Self, ColorfillError> {
        Color::new(index, STANDARD_PALETTE_SIZE)
    }

    /// get a usize from a Color
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    #[allow(missing_docs)]
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// checks that this color fits in a palette of the given size
    pub fn check(self, palette_size: usize) -> Result<Self, ColorfillError> {
        Color::new(self.as_usize(), palette_size)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match STANDARD_PALETTE.name(*self) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Parses either a full name ("Blue") or a short code ("B") from the standard palette
impl FromStr for Color {
    type Err = ColorfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STANDARD_PALETTE.lookup(s)
    }
}

/// display metadata for one palette slot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    #[allow(missing_docs)]
    pub name: String,
    /// single character code, used when printing boards
    pub short_name: String,
    #[allow(missing_docs)]
    pub rgb: (u8, u8, u8),
}

/// An ordered set of colors with name and short code lookup in both directions.
///
/// The lookup tables are built when the palette is constructed and never change after.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_name: FxHashMap<String, u8>,
    by_short_name: FxHashMap<String, u8>,
}

impl Palette {
    /// Builds a palette from its entries. Names and short codes have to be unique, and there
    /// have to be between 1 and 256 entries.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, ColorfillError> {
        if entries.is_empty() {
            return Err(ColorfillError::InvalidPalette("a palette needs at least one color"));
        }
        if entries.len() > u8::MAX as usize + 1 {
            return Err(ColorfillError::InvalidPalette("a palette holds at most 256 colors"));
        }

        let mut by_name = FxHashMap::default();
        let mut by_short_name = FxHashMap::default();
        for (idx, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), idx as u8).is_some() {
                return Err(ColorfillError::InvalidPalette("duplicate color name"));
            }
            if by_short_name
                .insert(entry.short_name.clone(), idx as u8)
                .is_some()
            {
                return Err(ColorfillError::InvalidPalette("duplicate short name"));
            }
        }

        Ok(Palette {
            entries,
            by_name,
            by_short_name,
        })
    }

    /// Blue, Black, Red, Yellow, Orange, White
    pub fn standard() -> Self {
        let entries = [
            ("Blue", "B", (0, 0, 255)),
            ("Black", "K", (0, 0, 0)),
            ("Red", "R", (255, 0, 0)),
            ("Yellow", "Y", (255, 255, 0)),
            ("Orange", "O", (255, 165, 0)),
            ("White", "W", (255, 255, 255)),
        ]
        .iter()
        .map(|(name, short_name, rgb)| PaletteEntry {
            name: name.to_string(),
            short_name: short_name.to_string(),
            rgb: *rgb,
        })
        .collect();

        Palette::new(entries).expect("the standard palette is well formed")
    }

    /// how many colors this palette has
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// every color of this palette, in index order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.entries.len()).map(|idx| Color(idx as u8))
    }

    #[allow(missing_docs)]
    pub fn entry(&self, color: Color) -> Option<&PaletteEntry> {
        self.entries.get(color.as_usize())
    }

    #[allow(missing_docs)]
    pub fn name(&self, color: Color) -> Option<&str> {
        self.entry(color).map(|e| e.name.as_str())
    }

    #[allow(missing_docs)]
    pub fn short_name(&self, color: Color) -> Option<&str> {
        self.entry(color).map(|e| e.short_name.as_str())
    }

    #[allow(missing_docs)]
    pub fn rgb(&self, color: Color) -> Option<(u8, u8, u8)> {
        self.entry(color).map(|e| e.rgb)
    }

    /// find a color by its full name, e.g. "Blue"
    pub fn by_name(&self, name: &str) -> Result<Color, ColorfillError> {
        self.by_name
            .get(name)
            .map(|idx| Color(*idx))
            .ok_or_else(|| ColorfillError::UnknownColorName(name.to_string()))
    }

    /// find a color by its short code, e.g. "K"
    pub fn by_short_name(&self, short_name: &str) -> Result<Color, ColorfillError> {
        self.by_short_name
            .get(short_name)
            .map(|idx| Color(*idx))
            .ok_or_else(|| ColorfillError::UnknownColorName(short_name.to_string()))
    }

    /// single characters are looked up as short codes, anything longer as a full name
    pub fn lookup(&self, name: &str) -> Result<Color, ColorfillError> {
        if name.chars().count() > 1 {
            self.by_name(name)
        } else {
            self.by_short_name(name)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
