// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font descriptor types

use super::tables::BuiltinFont;
use super::MetricsError;
use crate::data::{CharWidthEntry, Rect};
use crate::util::Entries;
use crate::GlyphId;
use std::collections::hash_map::{Entry, HashMap};

/// Design units per em of every built-in font
pub const UNITS_PER_EM: u16 = 1000;

/// Immutable metric data of one built-in font
///
/// Descriptors are constructed once by the [`Registry`](super::Registry) and
/// shared (via `Arc`) by all [`Base14Metrics`](crate::Base14Metrics) using the
/// font.
#[derive(Debug)]
pub struct FontDescriptor {
    name: &'static str,
    table: Box<[CharWidthEntry]>,
    is_symbolic: bool,
    ascent: i16,
    descent: i16,
    x_height: u16,
    cap_height: u16,
    bbox: Rect,
    // First-match indices into table
    by_code: HashMap<i16, GlyphId>,
    by_unicode: HashMap<u16, GlyphId>,
}

impl FontDescriptor {
    pub(crate) fn new(font: &BuiltinFont) -> Self {
        Self::from_table(
            font.name,
            font.table(),
            font.is_symbolic,
            (font.ascent, font.descent),
            (font.x_height, font.cap_height),
            Rect::from_design_units(font.bbox),
        )
    }

    fn from_table(
        name: &'static str,
        mut table: Vec<CharWidthEntry>,
        is_symbolic: bool,
        (ascent, descent): (i16, i16),
        (x_height, cap_height): (u16, u16),
        bbox: Rect,
    ) -> Self {
        // Everything past the first sentinel is unreachable; ensure it exists
        match table.iter().position(|e| e.is_sentinel()) {
            Some(pos) => table.truncate(pos + 1),
            None => table.push(CharWidthEntry::SENTINEL),
        }

        let mut by_code = HashMap::with_capacity(table.len());
        let mut by_unicode = HashMap::with_capacity(table.len());
        for (id, entry) in Entries::new(&table) {
            if let Entry::Vacant(e) = by_code.entry(entry.char_code) {
                e.insert(id);
            }
            if let Entry::Vacant(e) = by_unicode.entry(entry.unicode) {
                e.insert(id);
            }
        }

        FontDescriptor {
            name,
            table: table.into_boxed_slice(),
            is_symbolic,
            ascent,
            descent,
            x_height,
            cap_height,
            bbox,
            by_code,
            by_unicode,
        }
    }

    /// The PostScript name of the font
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The metric table, including the terminating sentinel
    #[inline]
    pub fn table(&self) -> &[CharWidthEntry] {
        &self.table
    }

    /// Iterate over table entries, excluding the sentinel
    #[inline]
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(&self.table)
    }

    /// Number of glyphs (table entries excluding the sentinel)
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len() - 1
    }

    /// True if the table has no glyphs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for fonts using a font-specific (non-Latin) encoding
    #[inline]
    pub fn is_symbolic(&self) -> bool {
        self.is_symbolic
    }

    /// Ascender in design units
    #[inline]
    pub fn ascent(&self) -> i16 {
        self.ascent
    }

    /// Descender in design units (usually negative)
    #[inline]
    pub fn descent(&self) -> i16 {
        self.descent
    }

    /// Height of lower-case letters in design units
    #[inline]
    pub fn x_height(&self) -> u16 {
        self.x_height
    }

    /// Height of capital letters in design units
    #[inline]
    pub fn cap_height(&self) -> u16 {
        self.cap_height
    }

    /// Font bounding box in design units
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// Design units per em
    #[inline]
    pub fn units_per_em(&self) -> u16 {
        UNITS_PER_EM
    }

    /// Get glyph identifier for a character code
    ///
    /// If the code is not found, `GlyphId(0)` is returned. Note that this is
    /// indistinguishable from a match on the first table entry; use
    /// [`Self::find_glyph_for_char_code`] where the difference matters.
    #[inline]
    pub fn glyph_id_for_char_code(&self, code: i32) -> GlyphId {
        self.find_glyph_for_char_code(code).unwrap_or_default()
    }

    /// Get glyph identifier for a Unicode value
    ///
    /// If the value is not found, `GlyphId(0)` is returned (see
    /// [`Self::glyph_id_for_char_code`]).
    #[inline]
    pub fn glyph_id_for_unicode(&self, unicode: u32) -> GlyphId {
        self.find_glyph_for_unicode(unicode).unwrap_or_default()
    }

    /// Find the first glyph with the given character code
    pub fn find_glyph_for_char_code(&self, code: i32) -> Option<GlyphId> {
        let code = i16::try_from(code).ok()?;
        self.by_code.get(&code).copied()
    }

    /// Find the first glyph with the given Unicode value
    ///
    /// The sentinel value `0xFFFF` never matches.
    pub fn find_glyph_for_unicode(&self, unicode: u32) -> Option<GlyphId> {
        let unicode = u16::try_from(unicode).ok()?;
        self.by_unicode.get(&unicode).copied()
    }

    /// Find a glyph by scanning the table up to the sentinel
    ///
    /// This is the unindexed equivalent of the `find_glyph_*` methods.
    pub fn scan(&self, mut f: impl FnMut(&CharWidthEntry) -> bool) -> Option<GlyphId> {
        self.entries().find(|(_, e)| f(e)).map(|(id, _)| id)
    }

    /// Get the raw width of a glyph in design units
    pub fn glyph_width(&self, id: GlyphId) -> Result<i16, MetricsError> {
        let len = self.len();
        match self.table.get(id.get()) {
            Some(entry) if id.get() < len => Ok(entry.width),
            _ => Err(MetricsError::IndexOutOfRange {
                index: id.get(),
                len,
            }),
        }
    }

    /// Raw width of the glyph resolved for a character code
    ///
    /// Unknown codes yield the width of glyph 0.
    pub fn char_code_width(&self, code: i32) -> i16 {
        let id = self.glyph_id_for_char_code(code);
        self.table[id.get()].width
    }

    /// Raw width of the glyph resolved for a Unicode value
    ///
    /// Unknown values yield the width of glyph 0.
    pub fn unicode_width(&self, unicode: u32) -> i16 {
        let id = self.glyph_id_for_unicode(unicode);
        self.table[id.get()].width
    }

    /// Widths for the PDF `Widths` array
    ///
    /// Returns one raw width per character code in `first..=last`. Codes
    /// absent from the table use the width of glyph 0. The result is empty
    /// when `first > last`.
    pub fn width_array(&self, first: u32, last: u32) -> Vec<f64> {
        (first..=last)
            .map(|code| {
                let code = i32::try_from(code).unwrap_or(i32::MAX);
                f64::from(self.char_code_width(code))
            })
            .collect()
    }
}
