// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Utility types and traits

use crate::conv::to_u16;
use crate::data::CharWidthEntry;
use crate::GlyphId;

/// Describes the state-of-preparation of a [`Base14Metrics`][crate::Base14Metrics]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Status {
    /// No font size has been set; only ascent and descent are known
    #[default]
    Unsized,
    /// Derived metrics match the current font size
    Sized,
}

impl Status {
    /// True if status is `Status::Sized`
    #[inline]
    pub fn is_sized(&self) -> bool {
        *self == Status::Sized
    }
}

/// An iterator over the entries of a metric table
///
/// Iteration yields `(GlyphId, &CharWidthEntry)` pairs and stops at the
/// sentinel entry, or at the end of the slice should the sentinel be missing.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    table: &'a [CharWidthEntry],
    i: usize,
}

impl<'a> Entries<'a> {
    /// Construct
    #[inline]
    pub fn new(table: &'a [CharWidthEntry]) -> Self {
        Entries { table, i: 0 }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (GlyphId, &'a CharWidthEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.table.get(self.i)?;
        if entry.is_sentinel() {
            return None;
        }
        let id = GlyphId(to_u16(self.i));
        self.i += 1;
        Some((id, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.table.len().saturating_sub(self.i)))
    }
}

impl<'a> std::iter::FusedIterator for Entries<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    const fn entry(char_code: i16, width: i16) -> CharWidthEntry {
        CharWidthEntry {
            char_code,
            unicode: char_code as u16,
            width,
        }
    }

    #[test]
    fn stops_at_sentinel() {
        let table = [
            entry(32, 250),
            entry(65, 722),
            CharWidthEntry::SENTINEL,
            entry(66, 667),
        ];
        let ids: Vec<_> = Entries::new(&table).map(|(id, _)| id).collect();
        assert_eq!(ids, [GlyphId(0), GlyphId(1)]);
    }

    #[test]
    fn stops_at_end() {
        let table = [entry(32, 250)];
        let mut iter = Entries::new(&table);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());

        assert_eq!(Entries::new(&[]).count(), 0);
    }
}
