// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text metrics for the fourteen standard PDF fonts
//!
//! These fonts (Courier, Helvetica and Times in four styles each, plus Symbol
//! and ZapfDingbats) may be used in a PDF document without embedding a font
//! program. This library provides their metrics from compiled-in tables, thus
//! text may be laid out without access to any font file.
//!
//! Fonts are found by name in the [`fonts::Registry`]; a [`Base14Metrics`]
//! binds a font to a font size, horizontal scaling and character spacing:
//! ```
//! use base14_metrics::fonts::library;
//!
//! let mut metrics = library().metrics("Helvetica").unwrap();
//! metrics.set_font_size(12.0);
//! assert_eq!(metrics.char_width(b'A'), 667.0 * 12.0 / 1000.0);
//! assert_eq!(metrics.line_spacing(), 11.1);
//! ```

pub mod conv;

mod data;
pub use data::*;

pub mod fonts;

mod metrics;
pub use metrics::*;

mod state;
pub use state::{DerivedMetrics, RenderState, UpdateState};

mod text;
pub use text::{Text, Unit};

pub mod util;
