// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rendering parameters and derived metrics

use crate::conv::{LineMetrics, DPU};
use crate::fonts::FontDescriptor;

/// Parameters under which text is measured
///
/// A `RenderState` can be default-constructed (zero size, no scaling, no
/// extra spacing).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderState {
    /// Font size in points
    pub font_size: f32,
    /// Horizontal scaling in percent
    ///
    /// Values below 100 compress and values above 100 expand glyphs
    /// horizontally.
    pub scale: f32,
    /// Character spacing in percent of the (scaled) font size
    ///
    /// This is added once per character, independent of glyph width.
    pub char_spacing: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            font_size: 0.0,
            scale: 100.0,
            char_spacing: 0.0,
        }
    }
}

impl RenderState {
    /// Construct for the given font size, without scaling or spacing
    pub fn new(font_size: f32) -> Self {
        RenderState {
            font_size,
            ..Default::default()
        }
    }

    /// Width added to every character, in points
    #[inline]
    pub(crate) fn spacing(&self) -> f64 {
        self.scaled_size() * f64::from(self.char_spacing) / 100.0
    }

    /// Font size after horizontal scaling, in points
    #[inline]
    pub(crate) fn scaled_size(&self) -> f64 {
        f64::from(self.font_size) * f64::from(self.scale) / 100.0
    }
}

/// Metrics depending on the font size
///
/// All values are in points (PDF units).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    /// Ascender
    pub ascent: f64,
    /// Descender (usually negative)
    pub descent: f64,
    /// Distance between baselines of consecutive lines
    pub line_spacing: f64,
    /// Underline position and thickness
    ///
    /// Built-in fonts carry no underline data; both values remain zero.
    pub underline: LineMetrics,
    /// Strikeout position and thickness
    ///
    /// The position is synthesized as half the ascent. Built-in fonts carry
    /// no strikeout data: this is an approximation, and thickness remains
    /// zero.
    pub strikeout: LineMetrics,
}

impl DerivedMetrics {
    /// Metrics of a font before any size is set
    ///
    /// Ascent and descent hold the font's design-unit values; all other
    /// metrics are zero.
    pub fn r#unsized(font: &FontDescriptor) -> Self {
        DerivedMetrics {
            ascent: font.ascent().into(),
            descent: font.descent().into(),
            ..Default::default()
        }
    }

    /// Compute for a font at the given size
    pub fn new(font: &FontDescriptor, font_size: f32) -> Self {
        let dpu = DPU::new(font_size, font.units_per_em());
        let ascent = dpu.i16_to_pt(font.ascent());
        let descent = dpu.i16_to_pt(font.descent());
        let extent = i32::from(font.ascent()) + i32::from(font.descent()).abs();
        let line_spacing = dpu.i32_to_pt(extent);

        DerivedMetrics {
            ascent,
            descent,
            line_spacing,
            underline: LineMetrics::default(),
            strikeout: LineMetrics {
                position: ascent / 2.0,
                thickness: 0.0,
            },
        }
    }
}

/// Describes what needs recomputing after an update
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub(crate) enum Action {
    /// Nothing to do
    #[default]
    None,
    /// Derived metrics must be recomputed
    Resize,
}

/// Helper to modify a [`RenderState`]
///
/// See [`Base14Metrics::update`](crate::Base14Metrics::update).
#[derive(Debug)]
pub struct UpdateState<'a> {
    state: &'a mut RenderState,
    action: Action,
}

impl<'a> UpdateState<'a> {
    pub(crate) fn new(state: &'a mut RenderState) -> Self {
        let action = Action::None;
        UpdateState { state, action }
    }

    pub(crate) fn finish(self) -> Action {
        self.action
    }

    /// Read access to the state
    pub fn state(&self) -> &RenderState {
        self.state
    }

    /// Set font size in points
    pub fn set_font_size(&mut self, font_size: f32) {
        if font_size != self.state.font_size {
            self.state.font_size = font_size;
            self.action = Action::Resize;
        }
    }

    /// Set horizontal scaling in percent
    pub fn set_font_scale(&mut self, scale: f32) {
        self.state.scale = scale;
    }

    /// Set character spacing in percent
    pub fn set_font_char_space(&mut self, char_spacing: f32) {
        self.state.char_spacing = char_spacing;
    }

    /// Replace all parameters
    pub fn set_all(&mut self, state: RenderState) {
        self.set_font_size(state.font_size);
        self.set_font_scale(state.scale);
        self.set_font_char_space(state.char_spacing);
    }
}
