// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Glyph identifiers are represented as `u16` and table lengths as `usize`;
//! no built-in table approaches `u16::MAX` entries, so conversions between
//! the two are always representable.

use easy_cast::Cast;

/// Factor converting PDF units (1/72 inch) to 1/1000 mm
///
/// A length in PDF units divided by this constant yields the same length in
/// thousandths of a millimetre (`72 / 25400`).
pub const CONVERSION_CONSTANT: f64 = 0.002834645669291339;

/// Convert `usize` → `u16`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value may be represented correctly by `u16`.
#[inline]
pub fn to_u16(x: usize) -> u16 {
    x.cast()
}

/// Convert `u16` → `usize`
#[inline]
pub fn to_usize(x: u16) -> usize {
    x.into()
}

/// Convert a length in PDF units to 1/1000 mm, truncating
///
/// Negative lengths saturate to zero.
#[inline]
pub fn pdf_to_mm(x: f64) -> u64 {
    (x / CONVERSION_CONSTANT).floor() as u64
}

/// Convert a (possibly negative) length in PDF units to 1/1000 mm, truncating
/// towards zero
#[inline]
pub fn pdf_to_mm_signed(x: f64) -> i64 {
    (x / CONVERSION_CONSTANT) as i64
}

/// Scale factor: output units per font design unit
///
/// For a font size in points this is `pt_size / units_per_em`. Values are
/// multiplied by the size before dividing by the em size, keeping results
/// exact where the inputs allow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DPU {
    size: f64,
    units_per_em: f64,
}

impl DPU {
    /// Construct from a font size and the em size in design units
    #[inline]
    pub fn new(size: f32, units_per_em: u16) -> Self {
        DPU {
            size: f64::from(size),
            units_per_em: f64::from(units_per_em),
        }
    }

    pub(crate) fn i32_to_pt(self, x: i32) -> f64 {
        f64::from(x) * self.size / self.units_per_em
    }
    pub(crate) fn i16_to_pt(self, x: i16) -> f64 {
        f64::from(x) * self.size / self.units_per_em
    }
}

/// Metrics for line marks
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineMetrics {
    pub position: f64,
    pub thickness: f64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_point() {
        // 1 pt = 0.3527... mm
        assert_eq!(pdf_to_mm(1.0), 352);
        assert_eq!(pdf_to_mm(-3.0), 0);
        assert_eq!(pdf_to_mm_signed(-1.0), -352);
    }

    #[test]
    fn dpu() {
        let dpu = DPU::new(12.0, 1000);
        assert_eq!(dpu.i16_to_pt(-500), -6.0);
        assert_eq!(dpu.i32_to_pt(925), 11.1);
    }
}
