// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Simple data types

use crate::conv::to_usize;

/// Glyph identifier
///
/// This is a zero-based index into a font's metric table. It is distinct from
/// both the character code and the Unicode value of the character it renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphId(pub u16);

impl GlyphId {
    /// Get as `usize`
    #[inline]
    pub fn get(self) -> usize {
        to_usize(self.0)
    }
}

/// Unicode value reserved to terminate a metric table
pub const SENTINEL_UNICODE: u16 = 0xFFFF;

/// One entry of a metric table
///
/// Widths are in font design units (1/1000 em for all built-in fonts).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharWidthEntry {
    /// Code of the character in the font's built-in encoding
    pub char_code: i16,
    /// Unicode value of the character
    pub unicode: u16,
    /// Advance width in design units
    pub width: i16,
}

impl CharWidthEntry {
    /// The entry terminating every table
    pub const SENTINEL: CharWidthEntry = CharWidthEntry {
        char_code: -1,
        unicode: SENTINEL_UNICODE,
        width: 0,
    };

    /// True if this entry ends its table
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.unicode == SENTINEL_UNICODE
    }
}

/// A rectangle in font design units
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    /// Construct from `[left, bottom, right, top]` design units
    pub fn from_design_units(v: [i16; 4]) -> Self {
        Rect {
            left: v[0].into(),
            bottom: v[1].into(),
            right: v[2].into(),
            top: v[3].into(),
        }
    }

    /// Get as a `[left, bottom, right, top]` array
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.left, self.bottom, self.right, self.top]
    }
}
