// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text input for width measurement

/// Text in one of the supported encodings
///
/// This type supports construction from `&[u8]`, `&[u16]` and `&str`:
/// ```
/// # use base14_metrics::Text;
/// let bytes = Text::from(&b"single-byte text"[..]);
/// let wide = Text::from("wide text");
/// assert_eq!(bytes.natural_len(), 16);
/// assert_eq!(wide.natural_len(), 9);
/// ```
///
/// In all encodings a zero code unit terminates the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Text<'a> {
    /// Single-byte text in the font's built-in encoding
    Bytes(&'a [u8]),
    /// UTF-16 code units stored in big-endian byte order
    ///
    /// Each unit is converted with [`u16::from_be`] before lookup, thus a unit
    /// read directly from big-endian PDF string data is interpreted correctly
    /// on any host.
    Utf16Be(&'a [u16]),
    /// Wide text
    ///
    /// Each `char` is reduced to its low byte, then looked up by character
    /// code as for [`Text::Bytes`].
    Wide(&'a str),
}

/// A unit of text, ready for lookup
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Character code in the font's built-in encoding
    Code(u32),
    /// Unicode code unit
    Unicode(u16),
}

impl<'a> Text<'a> {
    /// Construct UTF-16BE text from raw bytes
    ///
    /// Byte pairs are assembled most-significant byte first; an odd trailing
    /// byte is ignored.
    pub fn utf16_be_units(bytes: &[u8]) -> Vec<u16> {
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
            .collect()
    }

    /// True if the input holds no code units
    ///
    /// Text starting with a terminator is not empty but has a natural length
    /// of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of code units available
    ///
    /// This is the length of the input slice, ignoring terminators.
    pub fn len(&self) -> usize {
        match self {
            Text::Bytes(s) => s.len(),
            Text::Utf16Be(s) => s.len(),
            Text::Wide(s) => s.chars().count(),
        }
    }

    /// Number of code units before the first zero unit
    pub fn natural_len(&self) -> usize {
        match self {
            Text::Bytes(s) => s.iter().position(|b| *b == 0).unwrap_or(s.len()),
            Text::Utf16Be(s) => s.iter().position(|u| *u == 0).unwrap_or(s.len()),
            Text::Wide(s) => s.chars().take_while(|c| *c != '\0').count(),
        }
    }

    /// Iterate over the first `len` code units
    ///
    /// If `len == 0`, the natural length ([`Self::natural_len`]) is used.
    /// Otherwise `len` is clamped to the available input.
    pub fn units(&self, len: usize) -> impl Iterator<Item = Unit> + 'a {
        let len = match len {
            0 => self.natural_len(),
            n => n.min(self.len()),
        };
        let iter: Box<dyn Iterator<Item = Unit> + 'a> = match *self {
            Text::Bytes(s) => Box::new(s.iter().map(|b| Unit::Code((*b).into()))),
            Text::Utf16Be(s) => Box::new(s.iter().map(|u| Unit::Unicode(u16::from_be(*u)))),
            Text::Wide(s) => Box::new(s.chars().map(|c| Unit::Code(u32::from(c) & 0xFF))),
        };
        iter.take(len)
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    #[inline]
    fn from(s: &'a [u8]) -> Self {
        Text::Bytes(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Text<'a> {
    #[inline]
    fn from(s: &'a [u8; N]) -> Self {
        Text::Bytes(s)
    }
}

impl<'a> From<&'a [u16]> for Text<'a> {
    #[inline]
    fn from(s: &'a [u16]) -> Self {
        Text::Utf16Be(s)
    }
}

impl<'a> From<&'a str> for Text<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Text::Wide(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn natural_length() {
        assert_eq!(Text::from(&b"ab\0cd"[..]).natural_len(), 2);
        assert_eq!(Text::from(&b"abcd"[..]).natural_len(), 4);
        assert_eq!(Text::from("x\0y").natural_len(), 1);
        assert_eq!(Text::Utf16Be(&[0x4100, 0, 0x4200]).natural_len(), 1);
        assert!(Text::from(&b""[..]).is_empty());
        assert!(Text::from("").is_empty());

        let text = Text::from(&b"\0abc"[..]);
        assert_eq!(text.len(), 4);
        assert!(!text.is_empty());
        assert_eq!(text.natural_len(), 0);
    }

    #[test]
    fn explicit_length() {
        let text = Text::from(&b"ab\0cd"[..]);
        assert_eq!(text.units(4).count(), 4);
        assert_eq!(text.units(0).count(), 2);
        assert_eq!(text.units(99).count(), 5);
    }

    #[test]
    fn big_endian_units() {
        let units = Text::utf16_be_units(&[0x00, 0x41, 0x03, 0x91, 0xFF]);
        let text = Text::from(&units[..]);
        let decoded: Vec<_> = text.units(0).collect();
        assert_eq!(decoded, [Unit::Unicode(0x41), Unit::Unicode(0x391)]);
    }

    #[test]
    fn wide_units() {
        let decoded: Vec<_> = Text::from("Aé€Ł").units(0).collect();
        assert_eq!(
            decoded,
            [
                Unit::Code(0x41),
                Unit::Code(0xE9),
                Unit::Code(0xAC),
                Unit::Code(0x41)
            ]
        );
    }
}
