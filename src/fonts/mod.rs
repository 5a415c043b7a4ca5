// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Built-in font data
//!
//! The fourteen standard fonts are managed by the [`Registry`], of which a
//! static instance exists and can be accessed via [`library()`].
//!
//! ### Units
//!
//! Font sizes are specified in *points*, which are also the *PDF units* of
//! all lengths returned by this library:
//!
//! -   1 *Point* = 1/72 inch (~0.35mm)
//! -   The *point size* of a font is the number of points per *em*
//!
//! Metric tables use *design units*: each of the built-in fonts has 1000
//! design units per em. Thus a glyph 500 units wide occupies half an em, or
//! 6pt of a 12pt font.
//!
//! Some methods report lengths in 1/1000 mm instead; these are derived from
//! PDF units by division by [`crate::conv::CONVERSION_CONSTANT`].

mod descriptor;
mod library;
mod tables;

pub use descriptor::{FontDescriptor, UNITS_PER_EM};
pub use library::{library, MetricsError, Registry};
