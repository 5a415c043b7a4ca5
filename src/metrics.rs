// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Metrics engine

use crate::conv::{pdf_to_mm, pdf_to_mm_signed};
use crate::fonts::{FontDescriptor, MetricsError};
use crate::state::{Action, DerivedMetrics, RenderState, UpdateState};
use crate::text::{Text, Unit};
use crate::util::Status;
use crate::GlyphId;
use std::path::Path;
use std::sync::Arc;

/// Weight reported for all built-in fonts
pub const WEIGHT: u32 = 500;

/// Italic angle reported for all built-in fonts
pub const ITALIC_ANGLE: i32 = 0;

/// Kind of font program behind a [`FontMetrics`] implementation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontType {
    /// One of the fourteen standard Type 1 fonts
    Type1Base14,
}

/// Metrics consumed when writing font objects
///
/// This is the interface through which document writers query a font
/// regardless of where its metrics come from. Fonts without a backing file
/// fail [`Self::filename`], [`Self::font_data`] and [`Self::font_data_len`];
/// reaching these for such a font is a logic error in the caller (for
/// example, attempting to embed a standard font).
pub trait FontMetrics {
    /// Get the PostScript name of the font
    fn font_name(&self) -> &str;

    /// Get the kind of font
    fn font_type(&self) -> FontType;

    /// Subset prefix (`"ABCDEF+"`), or the empty string if not subsetted
    fn subset_prefix(&self) -> &str;

    /// Path of the font file
    fn filename(&self) -> Result<&Path, MetricsError>;

    /// Font program data
    fn font_data(&self) -> Result<&[u8], MetricsError>;

    /// Length of the font program data
    fn font_data_len(&self) -> Result<usize, MetricsError>;

    /// Widths of character codes `first..=last`, in design units
    fn width_array(&self, first: u32, last: u32) -> Vec<f64>;

    /// Bounding box `[left, bottom, right, top]`, in design units
    fn bounding_box(&self) -> [f64; 4];

    /// Weight (500 is normal)
    fn weight(&self) -> u32;

    /// Italic angle in degrees
    fn italic_angle(&self) -> i32;

    /// Ascender in design units
    fn pdf_ascent(&self) -> f64;

    /// Descender in design units
    fn pdf_descent(&self) -> f64;

    /// Height of capital letters in design units
    fn cap_height(&self) -> f64;

    /// True if this is a symbolic font
    fn is_symbol(&self) -> bool;
}

/// Metrics of a built-in font under a [`RenderState`]
///
/// Usage follows a "configure, then query" pattern: set the font size (and
/// optionally scaling and spacing), then query widths and line metrics. Only
/// changes to the font size cause derived metrics to be recomputed; scaling
/// and spacing are applied when widths are queried.
///
/// Lengths are in points (PDF units) unless noted otherwise. Methods with an
/// `_mm` suffix return lengths in 1/1000 mm.
///
/// The [`FontDescriptor`] is shared; rendering parameters belong to this
/// instance alone.
#[derive(Clone, Debug)]
pub struct Base14Metrics {
    font: Arc<FontDescriptor>,
    state: RenderState,
    derived: DerivedMetrics,
    status: Status,
}

/// Construction and configuration
impl Base14Metrics {
    /// Construct for a font
    ///
    /// The font size is initially zero; call [`Self::set_font_size`] before
    /// querying widths.
    pub fn new(font: Arc<FontDescriptor>) -> Self {
        let derived = DerivedMetrics::r#unsized(&font);
        Base14Metrics {
            font,
            state: RenderState::default(),
            derived,
            status: Status::Unsized,
        }
    }

    /// Construct with the given rendering parameters
    pub fn with_state(font: Arc<FontDescriptor>, state: RenderState) -> Self {
        let mut metrics = Self::new(font);
        metrics.update(|u| u.set_all(state));
        metrics
    }

    /// Access the font descriptor
    #[inline]
    pub fn font(&self) -> &Arc<FontDescriptor> {
        &self.font
    }

    /// Read the rendering parameters
    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Read the derived metrics
    ///
    /// Until a font size is set, these are [`DerivedMetrics::unsized`].
    #[inline]
    pub fn derived(&self) -> &DerivedMetrics {
        &self.derived
    }

    /// Whether a font size has been set
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Update rendering parameters
    ///
    /// Derived metrics are recomputed afterwards if required.
    pub fn update<F: FnOnce(&mut UpdateState)>(&mut self, f: F) {
        let mut update = UpdateState::new(&mut self.state);
        f(&mut update);
        let action = update.finish();

        if action == Action::Resize || !self.status.is_sized() {
            self.resize();
        }
    }

    fn resize(&mut self) {
        self.derived = DerivedMetrics::new(&self.font, self.state.font_size);
        self.status = Status::Sized;
        log::trace!(
            "Base14Metrics: {} at {}pt: line spacing {}",
            self.font.name(),
            self.state.font_size,
            self.derived.line_spacing,
        );
    }

    /// Set the font size in points
    ///
    /// Line spacing, ascent, descent and the strikeout position are
    /// recomputed. Setting the current size again has no effect.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.update(|u| u.set_font_size(font_size));
    }

    /// Get the font size in points
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.state.font_size
    }

    /// Set horizontal scaling in percent
    ///
    /// This compresses (< 100) or expands (> 100) text.
    #[inline]
    pub fn set_font_scale(&mut self, scale: f32) {
        self.state.scale = scale;
    }

    /// Get horizontal scaling in percent
    #[inline]
    pub fn font_scale(&self) -> f32 {
        self.state.scale
    }

    /// Set character spacing in percent
    #[inline]
    pub fn set_font_char_space(&mut self, char_spacing: f32) {
        self.state.char_spacing = char_spacing;
    }

    /// Get character spacing in percent
    #[inline]
    pub fn font_char_space(&self) -> f32 {
        self.state.char_spacing
    }
}

/// Glyph and text widths
impl Base14Metrics {
    /// Get glyph identifier for a character code
    ///
    /// Returns `GlyphId(0)` if the code is not found.
    #[inline]
    pub fn glyph_id(&self, code: i32) -> GlyphId {
        self.font.glyph_id_for_char_code(code)
    }

    /// Get glyph identifier for a Unicode value
    ///
    /// Returns `GlyphId(0)` if the value is not found.
    #[inline]
    pub fn glyph_id_unicode(&self, unicode: u32) -> GlyphId {
        self.font.glyph_id_for_unicode(unicode)
    }

    /// Get the raw width of a glyph in design units
    #[inline]
    pub fn glyph_width(&self, id: GlyphId) -> Result<i16, MetricsError> {
        self.font.glyph_width(id)
    }

    fn scale_width(&self, raw: i16) -> f64 {
        f64::from(raw) * self.state.scaled_size() / 1000.0 + self.state.spacing()
    }

    fn unit_width(&self, unit: Unit) -> f64 {
        let raw = match unit {
            Unit::Code(code) => {
                let code = i32::try_from(code).unwrap_or(i32::MAX);
                self.font.char_code_width(code)
            }
            Unit::Unicode(unicode) => self.font.unicode_width(unicode.into()),
        };
        self.scale_width(raw)
    }

    /// Width of a character given by code
    ///
    /// This includes character spacing. Unknown codes take the width of
    /// glyph 0.
    pub fn char_width(&self, c: u8) -> f64 {
        self.unit_width(Unit::Code(c.into()))
    }

    /// Width of a character given by code, in 1/1000 mm
    pub fn char_width_mm(&self, c: u8) -> u64 {
        pdf_to_mm(self.char_width(c))
    }

    /// Width of a character given by Unicode value
    ///
    /// This includes character spacing. Unknown values take the width of
    /// glyph 0.
    pub fn unicode_char_width(&self, c: u16) -> f64 {
        self.unit_width(Unit::Unicode(c))
    }

    /// Width of a text
    ///
    /// The text is measured up to its first zero unit. Empty text has zero
    /// width.
    /// ```
    /// # use base14_metrics::fonts::library;
    /// let mut metrics = library().metrics("Courier").unwrap();
    /// metrics.set_font_size(10.0);
    /// assert_eq!(metrics.string_width("abc"), 18.0);
    /// assert_eq!(metrics.string_width(&b"abc"[..]), 18.0);
    /// ```
    #[inline]
    pub fn string_width<'a>(&self, text: impl Into<Text<'a>>) -> f64 {
        self.string_width_len(text, 0)
    }

    /// Width of the first `len` units of a text
    ///
    /// If `len == 0`, the text is measured up to its first zero unit.
    pub fn string_width_len<'a>(&self, text: impl Into<Text<'a>>, len: usize) -> f64 {
        text.into()
            .units(len)
            .map(|unit| self.unit_width(unit))
            .sum()
    }

    /// Width of a text in 1/1000 mm
    #[inline]
    pub fn string_width_mm<'a>(&self, text: impl Into<Text<'a>>) -> u64 {
        pdf_to_mm(self.string_width(text))
    }

    /// Width of the first `len` units of a text in 1/1000 mm
    #[inline]
    pub fn string_width_len_mm<'a>(&self, text: impl Into<Text<'a>>, len: usize) -> u64 {
        pdf_to_mm(self.string_width_len(text, len))
    }
}

/// Vertical metrics
impl Base14Metrics {
    /// Ascender at the current font size
    ///
    /// Before a font size is set this is the ascender in design units.
    #[inline]
    pub fn ascent(&self) -> f64 {
        self.derived.ascent
    }

    /// Descender at the current font size (usually negative)
    ///
    /// Before a font size is set this is the descender in design units.
    #[inline]
    pub fn descent(&self) -> f64 {
        self.derived.descent
    }

    /// Ascender in design units
    #[inline]
    pub fn pdf_ascent(&self) -> f64 {
        self.font.ascent().into()
    }

    /// Descender in design units
    #[inline]
    pub fn pdf_descent(&self) -> f64 {
        self.font.descent().into()
    }

    /// Height of capital letters in design units
    #[inline]
    pub fn cap_height(&self) -> f64 {
        self.font.cap_height().into()
    }

    /// Height of lower-case letters in design units
    #[inline]
    pub fn x_height(&self) -> f64 {
        self.font.x_height().into()
    }

    /// Line spacing at the current font size
    #[inline]
    pub fn line_spacing(&self) -> f64 {
        self.derived.line_spacing
    }

    /// Line spacing in 1/1000 mm
    #[inline]
    pub fn line_spacing_mm(&self) -> u64 {
        pdf_to_mm(self.derived.line_spacing)
    }

    /// Underline thickness
    ///
    /// Always zero: built-in fonts carry no underline data.
    #[inline]
    pub fn underline_thickness(&self) -> f64 {
        self.derived.underline.thickness
    }

    /// Underline thickness in 1/1000 mm
    #[inline]
    pub fn underline_thickness_mm(&self) -> u64 {
        pdf_to_mm(self.derived.underline.thickness)
    }

    /// Underline position
    ///
    /// Always zero: built-in fonts carry no underline data.
    #[inline]
    pub fn underline_position(&self) -> f64 {
        self.derived.underline.position
    }

    /// Underline position in 1/1000 mm
    #[inline]
    pub fn underline_position_mm(&self) -> i64 {
        pdf_to_mm_signed(self.derived.underline.position)
    }

    /// Strikeout position
    ///
    /// Approximated as half the ascent.
    #[inline]
    pub fn strikeout_position(&self) -> f64 {
        self.derived.strikeout.position
    }

    /// Strikeout position in 1/1000 mm
    #[inline]
    pub fn strikeout_position_mm(&self) -> u64 {
        pdf_to_mm(self.derived.strikeout.position)
    }

    /// Strikeout thickness
    ///
    /// Always zero: built-in fonts carry no strikeout data.
    #[inline]
    pub fn strikeout_thickness(&self) -> f64 {
        self.derived.strikeout.thickness
    }

    /// Strikeout thickness in 1/1000 mm
    #[inline]
    pub fn strikeout_thickness_mm(&self) -> u64 {
        pdf_to_mm(self.derived.strikeout.thickness)
    }
}

impl FontMetrics for Base14Metrics {
    fn font_name(&self) -> &str {
        self.font.name()
    }

    fn font_type(&self) -> FontType {
        FontType::Type1Base14
    }

    fn subset_prefix(&self) -> &str {
        ""
    }

    fn filename(&self) -> Result<&Path, MetricsError> {
        log::warn!("{}: built-in font has no file", self.font.name());
        Err(MetricsError::FileNotFound)
    }

    fn font_data(&self) -> Result<&[u8], MetricsError> {
        log::warn!("{}: built-in font has no font data", self.font.name());
        Err(MetricsError::InvalidHandle)
    }

    fn font_data_len(&self) -> Result<usize, MetricsError> {
        log::warn!("{}: built-in font has no font data", self.font.name());
        Err(MetricsError::InvalidHandle)
    }

    fn width_array(&self, first: u32, last: u32) -> Vec<f64> {
        self.font.width_array(first, last)
    }

    fn bounding_box(&self) -> [f64; 4] {
        self.font.bounding_box().to_array()
    }

    fn weight(&self) -> u32 {
        WEIGHT
    }

    fn italic_angle(&self) -> i32 {
        ITALIC_ANGLE
    }

    fn pdf_ascent(&self) -> f64 {
        Base14Metrics::pdf_ascent(self)
    }

    fn pdf_descent(&self) -> f64 {
        Base14Metrics::pdf_descent(self)
    }

    fn cap_height(&self) -> f64 {
        Base14Metrics::cap_height(self)
    }

    fn is_symbol(&self) -> bool {
        self.font.is_symbolic()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::library;

    fn helvetica(size: f32) -> Base14Metrics {
        let mut metrics = library().metrics("Helvetica").unwrap();
        metrics.set_font_size(size);
        metrics
    }

    #[test]
    fn unsized_state() {
        let metrics = library().metrics("Times-Roman").unwrap();
        assert_eq!(metrics.status(), Status::Unsized);
        assert_eq!(metrics.ascent(), 683.0);
        assert_eq!(metrics.descent(), -217.0);
        assert_eq!(metrics.line_spacing(), 0.0);
        assert_eq!(metrics.strikeout_position(), 0.0);
        assert_eq!(metrics.char_width(b'A'), 0.0);
        assert_eq!(metrics.font_scale(), 100.0);
        assert_eq!(metrics.font_char_space(), 0.0);
    }

    #[test]
    fn first_resize_to_zero() {
        let mut metrics = library().metrics("Times-Roman").unwrap();
        metrics.set_font_size(0.0);
        assert!(metrics.status().is_sized());
        assert_eq!(metrics.line_spacing(), 0.0);
    }

    #[test]
    fn derived_metrics() {
        let metrics = helvetica(10.0);
        assert_eq!(metrics.ascent(), 7.18);
        assert_eq!(metrics.descent(), -2.07);
        assert_eq!(metrics.line_spacing(), 9.25);
        assert_eq!(metrics.strikeout_position(), 7.18 / 2.0);
        assert_eq!(metrics.strikeout_thickness(), 0.0);
        assert_eq!(metrics.underline_position(), 0.0);
        assert_eq!(metrics.underline_thickness(), 0.0);
        assert_eq!(metrics.pdf_ascent(), 718.0);
        assert_eq!(metrics.pdf_descent(), -207.0);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut metrics = helvetica(13.5);
        let before = *metrics.derived();
        metrics.set_font_size(13.5);
        assert_eq!(metrics.derived(), &before);
        metrics.set_font_size(27.0);
        assert_ne!(metrics.derived(), &before);
    }

    #[test]
    fn scale_and_spacing() {
        let mut metrics = helvetica(10.0);
        let derived = *metrics.derived();
        metrics.set_font_scale(50.0);
        assert_eq!(metrics.char_width(b'A'), 667.0 * 5.0 / 1000.0);
        metrics.set_font_char_space(10.0);
        assert_eq!(metrics.char_width(b'A'), 667.0 * 5.0 / 1000.0 + 0.5);
        assert_eq!(metrics.derived(), &derived);
    }

    #[test]
    fn update_in_bulk() {
        let mut metrics = helvetica(10.0);
        metrics.update(|u| {
            u.set_font_size(20.0);
            u.set_font_char_space(5.0);
            assert_eq!(u.state().font_size, 20.0);
        });
        assert_eq!(metrics.line_spacing(), 18.5);
        assert_eq!(metrics.char_width(b' '), 278.0 * 20.0 / 1000.0 + 1.0);
    }

    #[test]
    fn with_state() {
        let font = library().find_builtin("Courier").unwrap();
        let state = RenderState {
            font_size: 10.0,
            scale: 200.0,
            char_spacing: 0.0,
        };
        let metrics = Base14Metrics::with_state(font, state);
        assert_eq!(metrics.state(), &state);
        assert_eq!(metrics.char_width(b'x'), 12.0);
        assert_eq!(metrics.line_spacing(), 7.86);
    }

    #[test]
    fn glyph_lookup() {
        let metrics = helvetica(12.0);
        let id = metrics.glyph_id(i32::from(b'A'));
        assert_eq!(metrics.glyph_width(id).ok(), Some(667));
        assert_eq!(metrics.glyph_id_unicode(0x41), id);
        assert_eq!(metrics.glyph_id(0x1000), GlyphId(0));
        assert_eq!(metrics.glyph_id_unicode(0x391), GlyphId(0));
        assert!(metrics.glyph_width(GlyphId(u16::MAX)).is_err());
    }

    #[test]
    fn file_accessors_fail() {
        let metrics = helvetica(12.0);
        assert_eq!(metrics.filename().unwrap_err(), MetricsError::FileNotFound);
        assert_eq!(metrics.font_data().unwrap_err(), MetricsError::InvalidHandle);
        assert_eq!(
            metrics.font_data_len().unwrap_err(),
            MetricsError::InvalidHandle
        );
    }

    #[test]
    fn descriptor_values() {
        let metrics = helvetica(12.0);
        assert_eq!(metrics.font_name(), "Helvetica");
        assert_eq!(metrics.font_type(), FontType::Type1Base14);
        assert_eq!(metrics.subset_prefix(), "");
        assert_eq!(metrics.weight(), 500);
        assert_eq!(metrics.italic_angle(), 0);
        assert_eq!(FontMetrics::cap_height(&metrics), 718.0);
        assert_eq!(metrics.x_height(), 523.0);
        assert_eq!(
            FontMetrics::bounding_box(&metrics),
            [-166.0, -225.0, 1000.0, 931.0]
        );
        assert!(!metrics.is_symbol());
    }
}
