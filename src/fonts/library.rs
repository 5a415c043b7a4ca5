// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Registry of built-in fonts

#![allow(clippy::len_without_is_empty)]

use super::tables::FONTS;
use super::FontDescriptor;
use crate::Base14Metrics;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

/// Font metrics errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The name does not match any built-in font
    #[error("no built-in font named {0:?}")]
    FontNotFound(String),
    /// Binary font data was requested from a font without any
    #[error("invalid handle: built-in fonts have no font data")]
    InvalidHandle,
    /// A file name was requested from a font not backed by a file
    #[error("file not found: built-in fonts have no font file")]
    FileNotFound,
    /// A glyph identifier beyond the end of the metric table
    #[error("glyph index {index} out of range (table length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Registry of the fourteen standard fonts
///
/// This maps font names to their [`FontDescriptor`]s. Descriptors are built
/// on construction and never modified thereafter; a process-wide instance is
/// available via [`library()`].
#[derive(Debug)]
pub struct Registry {
    // Vec-map: there are only fourteen entries
    fonts: Vec<Arc<FontDescriptor>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Construct, building all descriptors
    pub fn new() -> Self {
        let fonts: Vec<_> = FONTS
            .iter()
            .map(|font| Arc::new(FontDescriptor::new(font)))
            .collect();
        log::debug!("Registry: loaded {} built-in fonts", fonts.len());
        Registry { fonts }
    }

    /// Number of fonts
    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Iterate over the names of all fonts
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fonts.iter().map(|font| font.name())
    }

    /// Find a built-in font by name
    ///
    /// The match is exact and case-sensitive.
    pub fn find_builtin(&self, name: &str) -> Result<Arc<FontDescriptor>, MetricsError> {
        match self.fonts.iter().find(|font| font.name() == name) {
            Some(font) => Ok(font.clone()),
            None => {
                log::debug!("Registry: no match for {name:?}");
                Err(MetricsError::FontNotFound(name.to_string()))
            }
        }
    }

    /// Construct a metrics engine for a built-in font
    ///
    /// This is a wrapper around [`Registry::find_builtin`] and
    /// [`Base14Metrics::new`].
    #[inline]
    pub fn metrics(&self, name: &str) -> Result<Base14Metrics, MetricsError> {
        self.find_builtin(name).map(Base14Metrics::new)
    }
}

static LIBRARY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Access the process-wide [`Registry`]
pub fn library() -> &'static Registry {
    &LIBRARY
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_fonts() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 14);
        for name in registry.names() {
            let font = registry.find_builtin(name).unwrap();
            assert_eq!(font.name(), name);
        }
    }

    #[test]
    fn exact_match() {
        let registry = library();
        for name in ["helvetica", "Helvetica ", "Arial", "Times", ""] {
            assert_eq!(
                registry.find_builtin(name).unwrap_err(),
                MetricsError::FontNotFound(name.to_string())
            );
        }
    }

    #[test]
    fn shared_descriptor() {
        let a = library().find_builtin("Courier").unwrap();
        let b = library().find_builtin("Courier").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
