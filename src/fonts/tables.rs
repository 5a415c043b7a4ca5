// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Compiled-in metric data for the standard fonts
//!
//! Widths are in design units (1/1000 em) and follow the Adobe Font Metrics
//! files of the standard fonts.
//!
//! The twelve Latin fonts share one glyph set of 314 glyphs. Those glyphs
//! with a code in StandardEncoding carry that code; the rest carry code `-1`
//! and are reachable by Unicode value only. Widths of the Latin fonts are
//! stored per WinAnsiEncoding code, plus a short per-font list of glyphs
//! outside WinAnsiEncoding ([`Special`]).
//!
//! Symbol and ZapfDingbats pair a width array with the Unicode values of
//! their built-in encoding; both are indexed by `code - 0x20`.

use crate::data::CharWidthEntry;
use easy_cast::Cast;
use Advance::{Ansi, Own};
use Special::*;

/// First character code covered by the tables
const FIRST_CODE: u8 = 0x20;

/// Glyphs and widths of a built-in font
enum Glyphs {
    /// The standard Latin glyph set
    Latin {
        /// Widths by WinAnsiEncoding code
        ansi: &'static [u16; 224],
        /// Widths of glyphs outside WinAnsiEncoding, indexed by [`Special`]
        special: &'static [u16; SPECIAL_LEN],
    },
    /// A font-specific single-byte encoding
    Coded {
        encoding: &'static [u16; 224],
        widths: &'static [u16; 224],
    },
}

/// Static definition of a built-in font
pub(crate) struct BuiltinFont {
    pub name: &'static str,
    glyphs: Glyphs,
    pub is_symbolic: bool,
    pub ascent: i16,
    pub descent: i16,
    pub x_height: u16,
    pub cap_height: u16,
    /// `[left, bottom, right, top]`
    pub bbox: [i16; 4],
}

impl BuiltinFont {
    /// Build the metric table, terminated by [`CharWidthEntry::SENTINEL`]
    ///
    /// The space character (code `0x20`) always takes glyph id 0.
    pub fn table(&self) -> Vec<CharWidthEntry> {
        let mut table = match self.glyphs {
            Glyphs::Latin { ansi, special } => latin_table(ansi, special),
            Glyphs::Coded { encoding, widths } => coded_table(encoding, widths),
        };
        table.push(CharWidthEntry::SENTINEL);
        table
    }
}

fn latin_table(ansi: &[u16; 224], special: &[u16; SPECIAL_LEN]) -> Vec<CharWidthEntry> {
    let mut table = Vec::with_capacity(LATIN.len() + 1);
    for &(char_code, unicode, advance) in LATIN.iter() {
        let width = match advance {
            Ansi(code) => ansi[usize::from(code - FIRST_CODE)],
            Own(glyph) => special[glyph as usize],
        };
        table.push(CharWidthEntry {
            char_code,
            unicode,
            width: width.cast(),
        });
    }
    table
}

/// Codes undefined by the encoding (Unicode value zero) are skipped
fn coded_table(encoding: &[u16; 224], widths: &[u16; 224]) -> Vec<CharWidthEntry> {
    let mut table = Vec::with_capacity(encoding.len() + 1);
    let codes = (FIRST_CODE..=u8::MAX).zip(encoding.iter().zip(widths.iter()));
    for (code, (&unicode, &width)) in codes {
        if unicode == 0 {
            continue;
        }
        table.push(CharWidthEntry {
            char_code: code.into(),
            unicode,
            width: width.cast(),
        });
    }
    table
}

const COURIER_V: (i16, i16) = (629, -157);
const HELVETICA_V: (i16, i16) = (718, -207);
const TIMES_V: (i16, i16) = (683, -217);

const fn latin(
    name: &'static str,
    (ansi, special): (&'static [u16; 224], &'static [u16; SPECIAL_LEN]),
    (ascent, descent): (i16, i16),
    x_height: u16,
    cap_height: u16,
    bbox: [i16; 4],
) -> BuiltinFont {
    BuiltinFont {
        name,
        glyphs: Glyphs::Latin { ansi, special },
        is_symbolic: false,
        ascent,
        descent,
        x_height,
        cap_height,
        bbox,
    }
}

const COURIER_W: (&[u16; 224], &[u16; SPECIAL_LEN]) = (&COURIER, &COURIER_SPECIAL);
const HELVETICA_W: (&[u16; 224], &[u16; SPECIAL_LEN]) = (&HELVETICA, &HELVETICA_SPECIAL);
const HELVETICA_BOLD_W: (&[u16; 224], &[u16; SPECIAL_LEN]) =
    (&HELVETICA_BOLD, &HELVETICA_BOLD_SPECIAL);

#[rustfmt::skip]
pub(crate) static FONTS: [BuiltinFont; 14] = [
    latin("Courier", COURIER_W, COURIER_V, 426, 562, [-23, -250, 715, 805]),
    latin("Courier-Bold", COURIER_W, COURIER_V, 439, 562, [-113, -250, 749, 801]),
    latin("Courier-Oblique", COURIER_W, COURIER_V, 426, 562, [-27, -250, 849, 805]),
    latin("Courier-BoldOblique", COURIER_W, COURIER_V, 439, 562, [-57, -250, 869, 801]),
    latin("Helvetica", HELVETICA_W, HELVETICA_V, 523, 718, [-166, -225, 1000, 931]),
    latin("Helvetica-Bold", HELVETICA_BOLD_W, HELVETICA_V, 532, 718, [-170, -228, 1003, 962]),
    latin("Helvetica-Oblique", HELVETICA_W, HELVETICA_V, 523, 718, [-170, -225, 1116, 931]),
    latin("Helvetica-BoldOblique", HELVETICA_BOLD_W, HELVETICA_V, 532, 718, [-174, -228, 1114, 962]),
    latin("Times-Roman", (&TIMES_ROMAN, &TIMES_ROMAN_SPECIAL), TIMES_V, 450, 662, [-168, -218, 1000, 898]),
    latin("Times-Bold", (&TIMES_BOLD, &TIMES_BOLD_SPECIAL), TIMES_V, 461, 676, [-168, -218, 1000, 935]),
    latin("Times-Italic", (&TIMES_ITALIC, &TIMES_ITALIC_SPECIAL), TIMES_V, 441, 653, [-169, -217, 1010, 883]),
    latin("Times-BoldItalic", (&TIMES_BOLD_ITALIC, &TIMES_BOLD_ITALIC_SPECIAL), TIMES_V, 462, 669, [-200, -218, 996, 921]),
    // The symbolic fonts carry no vertical metrics, only a bounding box
    BuiltinFont {
        name: "Symbol",
        glyphs: Glyphs::Coded {
            encoding: &SYMBOL_ENCODING,
            widths: &SYMBOL,
        },
        is_symbolic: true,
        ascent: 0,
        descent: 0,
        x_height: 0,
        cap_height: 0,
        bbox: [-180, -293, 1090, 1010],
    },
    BuiltinFont {
        name: "ZapfDingbats",
        glyphs: Glyphs::Coded {
            encoding: &DINGBATS_ENCODING,
            widths: &ZAPF_DINGBATS,
        },
        is_symbolic: true,
        ascent: 0,
        descent: 0,
        x_height: 0,
        cap_height: 0,
        bbox: [-1, -143, 981, 820],
    },
];

/// Source of a Latin glyph's width
#[derive(Clone, Copy)]
enum Advance {
    /// Same width as the glyph at this WinAnsiEncoding code
    Ansi(u8),
    /// A glyph outside WinAnsiEncoding
    Own(Special),
}

/// Latin glyphs whose width is not found in WinAnsiEncoding
#[derive(Clone, Copy)]
enum Special {
    Fi,
    Fl,
    Minus,
    Dotlessi,
    Fraction,
    Breve,
    Dotaccent,
    Ring,
    Hungarumlaut,
    Ogonek,
    Caron,
    Commaaccent,
    GreaterEqual,
    LessEqual,
    NotEqual,
    Lozenge,
    PartialDiff,
    Radical,
    Summation,
    Delta,
    Dcaron,
    Lcaron,
    Tcaron,
    LcaronCap,
}

const SPECIAL_LEN: usize = LcaronCap as usize + 1;

const COURIER_SPECIAL: [u16; SPECIAL_LEN] = [600; SPECIAL_LEN];
#[rustfmt::skip]
const HELVETICA_SPECIAL: [u16; SPECIAL_LEN] = [
    500, 500, 584, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 471, 476, 453, 600, 612, 643, 299, 317, 556,
];
#[rustfmt::skip]
const HELVETICA_BOLD_SPECIAL: [u16; SPECIAL_LEN] = [
    611, 611, 584, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 494, 494, 549, 600, 612, 743, 400, 389, 611,
];
#[rustfmt::skip]
const TIMES_ROMAN_SPECIAL: [u16; SPECIAL_LEN] = [
    556, 556, 564, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 471, 476, 453, 600, 612, 588, 344, 326, 611,
];
#[rustfmt::skip]
const TIMES_BOLD_SPECIAL: [u16; SPECIAL_LEN] = [
    556, 556, 570, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 494, 494, 549, 600, 612, 672, 394, 416, 667,
];
#[rustfmt::skip]
const TIMES_ITALIC_SPECIAL: [u16; SPECIAL_LEN] = [
    500, 500, 675, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 471, 476, 453, 600, 612, 544, 300, 300, 611,
];
#[rustfmt::skip]
const TIMES_BOLD_ITALIC_SPECIAL: [u16; SPECIAL_LEN] = [
    556, 556, 606, 278, 167, 333, 333, 333, 333, 333, 333, 250,
    549, 549, 549, 494, 494, 549, 600, 612, 608, 382, 366, 611,
];

/// The standard Latin glyph set: `(StandardEncoding code, Unicode, width source)`
///
/// Encoded glyphs come first, in code order; unencoded glyphs follow.
#[rustfmt::skip]
static LATIN: [(i16, u16, Advance); 314] = [
    (0x20, 0x0020, Ansi(0x20)),
    (0x21, 0x0021, Ansi(0x21)),
    (0x22, 0x0022, Ansi(0x22)),
    (0x23, 0x0023, Ansi(0x23)),
    (0x24, 0x0024, Ansi(0x24)),
    (0x25, 0x0025, Ansi(0x25)),
    (0x26, 0x0026, Ansi(0x26)),
    (0x27, 0x2019, Ansi(0x92)), // quoteright
    (0x28, 0x0028, Ansi(0x28)),
    (0x29, 0x0029, Ansi(0x29)),
    (0x2A, 0x002A, Ansi(0x2A)),
    (0x2B, 0x002B, Ansi(0x2B)),
    (0x2C, 0x002C, Ansi(0x2C)),
    (0x2D, 0x002D, Ansi(0x2D)),
    (0x2E, 0x002E, Ansi(0x2E)),
    (0x2F, 0x002F, Ansi(0x2F)),
    (0x30, 0x0030, Ansi(0x30)),
    (0x31, 0x0031, Ansi(0x31)),
    (0x32, 0x0032, Ansi(0x32)),
    (0x33, 0x0033, Ansi(0x33)),
    (0x34, 0x0034, Ansi(0x34)),
    (0x35, 0x0035, Ansi(0x35)),
    (0x36, 0x0036, Ansi(0x36)),
    (0x37, 0x0037, Ansi(0x37)),
    (0x38, 0x0038, Ansi(0x38)),
    (0x39, 0x0039, Ansi(0x39)),
    (0x3A, 0x003A, Ansi(0x3A)),
    (0x3B, 0x003B, Ansi(0x3B)),
    (0x3C, 0x003C, Ansi(0x3C)),
    (0x3D, 0x003D, Ansi(0x3D)),
    (0x3E, 0x003E, Ansi(0x3E)),
    (0x3F, 0x003F, Ansi(0x3F)),
    (0x40, 0x0040, Ansi(0x40)),
    (0x41, 0x0041, Ansi(0x41)),
    (0x42, 0x0042, Ansi(0x42)),
    (0x43, 0x0043, Ansi(0x43)),
    (0x44, 0x0044, Ansi(0x44)),
    (0x45, 0x0045, Ansi(0x45)),
    (0x46, 0x0046, Ansi(0x46)),
    (0x47, 0x0047, Ansi(0x47)),
    (0x48, 0x0048, Ansi(0x48)),
    (0x49, 0x0049, Ansi(0x49)),
    (0x4A, 0x004A, Ansi(0x4A)),
    (0x4B, 0x004B, Ansi(0x4B)),
    (0x4C, 0x004C, Ansi(0x4C)),
    (0x4D, 0x004D, Ansi(0x4D)),
    (0x4E, 0x004E, Ansi(0x4E)),
    (0x4F, 0x004F, Ansi(0x4F)),
    (0x50, 0x0050, Ansi(0x50)),
    (0x51, 0x0051, Ansi(0x51)),
    (0x52, 0x0052, Ansi(0x52)),
    (0x53, 0x0053, Ansi(0x53)),
    (0x54, 0x0054, Ansi(0x54)),
    (0x55, 0x0055, Ansi(0x55)),
    (0x56, 0x0056, Ansi(0x56)),
    (0x57, 0x0057, Ansi(0x57)),
    (0x58, 0x0058, Ansi(0x58)),
    (0x59, 0x0059, Ansi(0x59)),
    (0x5A, 0x005A, Ansi(0x5A)),
    (0x5B, 0x005B, Ansi(0x5B)),
    (0x5C, 0x005C, Ansi(0x5C)),
    (0x5D, 0x005D, Ansi(0x5D)),
    (0x5E, 0x005E, Ansi(0x5E)),
    (0x5F, 0x005F, Ansi(0x5F)),
    (0x60, 0x2018, Ansi(0x91)), // quoteleft
    (0x61, 0x0061, Ansi(0x61)),
    (0x62, 0x0062, Ansi(0x62)),
    (0x63, 0x0063, Ansi(0x63)),
    (0x64, 0x0064, Ansi(0x64)),
    (0x65, 0x0065, Ansi(0x65)),
    (0x66, 0x0066, Ansi(0x66)),
    (0x67, 0x0067, Ansi(0x67)),
    (0x68, 0x0068, Ansi(0x68)),
    (0x69, 0x0069, Ansi(0x69)),
    (0x6A, 0x006A, Ansi(0x6A)),
    (0x6B, 0x006B, Ansi(0x6B)),
    (0x6C, 0x006C, Ansi(0x6C)),
    (0x6D, 0x006D, Ansi(0x6D)),
    (0x6E, 0x006E, Ansi(0x6E)),
    (0x6F, 0x006F, Ansi(0x6F)),
    (0x70, 0x0070, Ansi(0x70)),
    (0x71, 0x0071, Ansi(0x71)),
    (0x72, 0x0072, Ansi(0x72)),
    (0x73, 0x0073, Ansi(0x73)),
    (0x74, 0x0074, Ansi(0x74)),
    (0x75, 0x0075, Ansi(0x75)),
    (0x76, 0x0076, Ansi(0x76)),
    (0x77, 0x0077, Ansi(0x77)),
    (0x78, 0x0078, Ansi(0x78)),
    (0x79, 0x0079, Ansi(0x79)),
    (0x7A, 0x007A, Ansi(0x7A)),
    (0x7B, 0x007B, Ansi(0x7B)),
    (0x7C, 0x007C, Ansi(0x7C)),
    (0x7D, 0x007D, Ansi(0x7D)),
    (0x7E, 0x007E, Ansi(0x7E)),
    (0xA1, 0x00A1, Ansi(0xA1)), // exclamdown
    (0xA2, 0x00A2, Ansi(0xA2)), // cent
    (0xA3, 0x00A3, Ansi(0xA3)), // sterling
    (0xA4, 0x2044, Own(Fraction)), // fraction
    (0xA5, 0x00A5, Ansi(0xA5)), // yen
    (0xA6, 0x0192, Ansi(0x83)), // florin
    (0xA7, 0x00A7, Ansi(0xA7)), // section
    (0xA8, 0x00A4, Ansi(0xA4)), // currency
    (0xA9, 0x0027, Ansi(0x27)), // quotesingle
    (0xAA, 0x201C, Ansi(0x93)), // quotedblleft
    (0xAB, 0x00AB, Ansi(0xAB)), // guillemotleft
    (0xAC, 0x2039, Ansi(0x8B)), // guilsinglleft
    (0xAD, 0x203A, Ansi(0x9B)), // guilsinglright
    (0xAE, 0xFB01, Own(Fi)), // fi
    (0xAF, 0xFB02, Own(Fl)), // fl
    (0xB1, 0x2013, Ansi(0x96)), // endash
    (0xB2, 0x2020, Ansi(0x86)), // dagger
    (0xB3, 0x2021, Ansi(0x87)), // daggerdbl
    (0xB4, 0x00B7, Ansi(0xB7)), // periodcentered
    (0xB6, 0x00B6, Ansi(0xB6)), // paragraph
    (0xB7, 0x2022, Ansi(0x95)), // bullet
    (0xB8, 0x201A, Ansi(0x82)), // quotesinglbase
    (0xB9, 0x201E, Ansi(0x84)), // quotedblbase
    (0xBA, 0x201D, Ansi(0x94)), // quotedblright
    (0xBB, 0x00BB, Ansi(0xBB)), // guillemotright
    (0xBC, 0x2026, Ansi(0x85)), // ellipsis
    (0xBD, 0x2030, Ansi(0x89)), // perthousand
    (0xBF, 0x00BF, Ansi(0xBF)), // questiondown
    (0xC1, 0x0060, Ansi(0x60)), // grave
    (0xC2, 0x00B4, Ansi(0xB4)), // acute
    (0xC3, 0x02C6, Ansi(0x88)), // circumflex
    (0xC4, 0x02DC, Ansi(0x98)), // tilde
    (0xC5, 0x00AF, Ansi(0xAF)), // macron
    (0xC6, 0x02D8, Own(Breve)), // breve
    (0xC7, 0x02D9, Own(Dotaccent)), // dotaccent
    (0xC8, 0x00A8, Ansi(0xA8)), // dieresis
    (0xCA, 0x02DA, Own(Ring)), // ring
    (0xCB, 0x00B8, Ansi(0xB8)), // cedilla
    (0xCD, 0x02DD, Own(Hungarumlaut)), // hungarumlaut
    (0xCE, 0x02DB, Own(Ogonek)), // ogonek
    (0xCF, 0x02C7, Own(Caron)), // caron
    (0xD0, 0x2014, Ansi(0x97)), // emdash
    (0xE1, 0x00C6, Ansi(0xC6)), // AE
    (0xE3, 0x00AA, Ansi(0xAA)), // ordfeminine
    (0xE8, 0x0141, Ansi(0x4C)), // Lslash
    (0xE9, 0x00D8, Ansi(0xD8)), // Oslash
    (0xEA, 0x0152, Ansi(0x8C)), // OE
    (0xEB, 0x00BA, Ansi(0xBA)), // ordmasculine
    (0xF1, 0x00E6, Ansi(0xE6)), // ae
    (0xF5, 0x0131, Own(Dotlessi)), // dotlessi
    (0xF8, 0x0142, Ansi(0x6C)), // lslash
    (0xF9, 0x00F8, Ansi(0xF8)), // oslash
    (0xFA, 0x0153, Ansi(0x9C)), // oe
    (0xFB, 0x00DF, Ansi(0xDF)), // germandbls
    (-1, 0x00C1, Ansi(0xC1)), // Aacute
    (-1, 0x0102, Ansi(0x41)), // Abreve
    (-1, 0x00C2, Ansi(0xC2)), // Acircumflex
    (-1, 0x00C4, Ansi(0xC4)), // Adieresis
    (-1, 0x00C0, Ansi(0xC0)), // Agrave
    (-1, 0x0100, Ansi(0x41)), // Amacron
    (-1, 0x0104, Ansi(0x41)), // Aogonek
    (-1, 0x00C5, Ansi(0xC5)), // Aring
    (-1, 0x00C3, Ansi(0xC3)), // Atilde
    (-1, 0x0106, Ansi(0x43)), // Cacute
    (-1, 0x010C, Ansi(0x43)), // Ccaron
    (-1, 0x00C7, Ansi(0xC7)), // Ccedilla
    (-1, 0x010E, Ansi(0x44)), // Dcaron
    (-1, 0x0110, Ansi(0xD0)), // Dcroat
    (-1, 0x2206, Own(Delta)), // Delta
    (-1, 0x00C9, Ansi(0xC9)), // Eacute
    (-1, 0x011A, Ansi(0x45)), // Ecaron
    (-1, 0x00CA, Ansi(0xCA)), // Ecircumflex
    (-1, 0x00CB, Ansi(0xCB)), // Edieresis
    (-1, 0x0116, Ansi(0x45)), // Edotaccent
    (-1, 0x00C8, Ansi(0xC8)), // Egrave
    (-1, 0x0112, Ansi(0x45)), // Emacron
    (-1, 0x0118, Ansi(0x45)), // Eogonek
    (-1, 0x00D0, Ansi(0xD0)), // Eth
    (-1, 0x011E, Ansi(0x47)), // Gbreve
    (-1, 0x0122, Ansi(0x47)), // Gcommaaccent
    (-1, 0x00CD, Ansi(0xCD)), // Iacute
    (-1, 0x00CE, Ansi(0xCE)), // Icircumflex
    (-1, 0x00CF, Ansi(0xCF)), // Idieresis
    (-1, 0x0130, Ansi(0x49)), // Idotaccent
    (-1, 0x00CC, Ansi(0xCC)), // Igrave
    (-1, 0x012A, Ansi(0x49)), // Imacron
    (-1, 0x012E, Ansi(0x49)), // Iogonek
    (-1, 0x0136, Ansi(0x4B)), // Kcommaaccent
    (-1, 0x0139, Ansi(0x4C)), // Lacute
    (-1, 0x013D, Own(LcaronCap)), // Lcaron
    (-1, 0x013B, Ansi(0x4C)), // Lcommaaccent
    (-1, 0x0143, Ansi(0x4E)), // Nacute
    (-1, 0x0147, Ansi(0x4E)), // Ncaron
    (-1, 0x0145, Ansi(0x4E)), // Ncommaaccent
    (-1, 0x00D1, Ansi(0xD1)), // Ntilde
    (-1, 0x00D3, Ansi(0xD3)), // Oacute
    (-1, 0x00D4, Ansi(0xD4)), // Ocircumflex
    (-1, 0x00D6, Ansi(0xD6)), // Odieresis
    (-1, 0x00D2, Ansi(0xD2)), // Ograve
    (-1, 0x0150, Ansi(0x4F)), // Ohungarumlaut
    (-1, 0x014C, Ansi(0x4F)), // Omacron
    (-1, 0x00D5, Ansi(0xD5)), // Otilde
    (-1, 0x0154, Ansi(0x52)), // Racute
    (-1, 0x0158, Ansi(0x52)), // Rcaron
    (-1, 0x0156, Ansi(0x52)), // Rcommaaccent
    (-1, 0x015A, Ansi(0x53)), // Sacute
    (-1, 0x0160, Ansi(0x8A)), // Scaron
    (-1, 0x015E, Ansi(0x53)), // Scedilla
    (-1, 0x0218, Ansi(0x53)), // Scommaaccent
    (-1, 0x0164, Ansi(0x54)), // Tcaron
    (-1, 0x0162, Ansi(0x54)), // Tcommaaccent
    (-1, 0x00DE, Ansi(0xDE)), // Thorn
    (-1, 0x00DA, Ansi(0xDA)), // Uacute
    (-1, 0x00DB, Ansi(0xDB)), // Ucircumflex
    (-1, 0x00DC, Ansi(0xDC)), // Udieresis
    (-1, 0x00D9, Ansi(0xD9)), // Ugrave
    (-1, 0x0170, Ansi(0x55)), // Uhungarumlaut
    (-1, 0x016A, Ansi(0x55)), // Umacron
    (-1, 0x0172, Ansi(0x55)), // Uogonek
    (-1, 0x016E, Ansi(0x55)), // Uring
    (-1, 0x00DD, Ansi(0xDD)), // Yacute
    (-1, 0x0178, Ansi(0x9F)), // Ydieresis
    (-1, 0x0179, Ansi(0x5A)), // Zacute
    (-1, 0x017D, Ansi(0x8E)), // Zcaron
    (-1, 0x017B, Ansi(0x5A)), // Zdotaccent
    (-1, 0x00E1, Ansi(0xE1)), // aacute
    (-1, 0x0103, Ansi(0x61)), // abreve
    (-1, 0x00E2, Ansi(0xE2)), // acircumflex
    (-1, 0x00E4, Ansi(0xE4)), // adieresis
    (-1, 0x00E0, Ansi(0xE0)), // agrave
    (-1, 0x0101, Ansi(0x61)), // amacron
    (-1, 0x0105, Ansi(0x61)), // aogonek
    (-1, 0x00E5, Ansi(0xE5)), // aring
    (-1, 0x00E3, Ansi(0xE3)), // atilde
    (-1, 0x00A6, Ansi(0xA6)), // brokenbar
    (-1, 0x0107, Ansi(0x63)), // cacute
    (-1, 0x010D, Ansi(0x63)), // ccaron
    (-1, 0x00E7, Ansi(0xE7)), // ccedilla
    (-1, 0xF6C3, Own(Commaaccent)), // commaaccent
    (-1, 0x00A9, Ansi(0xA9)), // copyright
    (-1, 0x010F, Own(Dcaron)), // dcaron
    (-1, 0x0111, Ansi(0x64)), // dcroat
    (-1, 0x00B0, Ansi(0xB0)), // degree
    (-1, 0x00F7, Ansi(0xF7)), // divide
    (-1, 0x00E9, Ansi(0xE9)), // eacute
    (-1, 0x011B, Ansi(0x65)), // ecaron
    (-1, 0x00EA, Ansi(0xEA)), // ecircumflex
    (-1, 0x00EB, Ansi(0xEB)), // edieresis
    (-1, 0x0117, Ansi(0x65)), // edotaccent
    (-1, 0x00E8, Ansi(0xE8)), // egrave
    (-1, 0x0113, Ansi(0x65)), // emacron
    (-1, 0x0119, Ansi(0x65)), // eogonek
    (-1, 0x00F0, Ansi(0xF0)), // eth
    (-1, 0x011F, Ansi(0x67)), // gbreve
    (-1, 0x0123, Ansi(0x67)), // gcommaaccent
    (-1, 0x2265, Own(GreaterEqual)), // greaterequal
    (-1, 0x00ED, Ansi(0xED)), // iacute
    (-1, 0x00EE, Ansi(0xEE)), // icircumflex
    (-1, 0x00EF, Ansi(0xEF)), // idieresis
    (-1, 0x00EC, Ansi(0xEC)), // igrave
    (-1, 0x012B, Ansi(0x69)), // imacron
    (-1, 0x012F, Ansi(0x69)), // iogonek
    (-1, 0x0137, Ansi(0x6B)), // kcommaaccent
    (-1, 0x013A, Ansi(0x6C)), // lacute
    (-1, 0x013E, Own(Lcaron)), // lcaron
    (-1, 0x013C, Ansi(0x6C)), // lcommaaccent
    (-1, 0x2264, Own(LessEqual)), // lessequal
    (-1, 0x00AC, Ansi(0xAC)), // logicalnot
    (-1, 0x25CA, Own(Lozenge)), // lozenge
    (-1, 0x2212, Own(Minus)), // minus
    (-1, 0x00B5, Ansi(0xB5)), // mu
    (-1, 0x00D7, Ansi(0xD7)), // multiply
    (-1, 0x0144, Ansi(0x6E)), // nacute
    (-1, 0x0148, Ansi(0x6E)), // ncaron
    (-1, 0x0146, Ansi(0x6E)), // ncommaaccent
    (-1, 0x2260, Own(NotEqual)), // notequal
    (-1, 0x00F1, Ansi(0xF1)), // ntilde
    (-1, 0x00F3, Ansi(0xF3)), // oacute
    (-1, 0x00F4, Ansi(0xF4)), // ocircumflex
    (-1, 0x00F6, Ansi(0xF6)), // odieresis
    (-1, 0x00F2, Ansi(0xF2)), // ograve
    (-1, 0x0151, Ansi(0x6F)), // ohungarumlaut
    (-1, 0x014D, Ansi(0x6F)), // omacron
    (-1, 0x00BD, Ansi(0xBD)), // onehalf
    (-1, 0x00BC, Ansi(0xBC)), // onequarter
    (-1, 0x00B9, Ansi(0xB9)), // onesuperior
    (-1, 0x00F5, Ansi(0xF5)), // otilde
    (-1, 0x2202, Own(PartialDiff)), // partialdiff
    (-1, 0x00B1, Ansi(0xB1)), // plusminus
    (-1, 0x0155, Ansi(0x72)), // racute
    (-1, 0x221A, Own(Radical)), // radical
    (-1, 0x0159, Ansi(0x72)), // rcaron
    (-1, 0x0157, Ansi(0x72)), // rcommaaccent
    (-1, 0x00AE, Ansi(0xAE)), // registered
    (-1, 0x015B, Ansi(0x73)), // sacute
    (-1, 0x0161, Ansi(0x9A)), // scaron
    (-1, 0x015F, Ansi(0x73)), // scedilla
    (-1, 0x0219, Ansi(0x73)), // scommaaccent
    (-1, 0x2211, Own(Summation)), // summation
    (-1, 0x0165, Own(Tcaron)), // tcaron
    (-1, 0x0163, Ansi(0x74)), // tcommaaccent
    (-1, 0x00FE, Ansi(0xFE)), // thorn
    (-1, 0x00BE, Ansi(0xBE)), // threequarters
    (-1, 0x00B3, Ansi(0xB3)), // threesuperior
    (-1, 0x2122, Ansi(0x99)), // trademark
    (-1, 0x00B2, Ansi(0xB2)), // twosuperior
    (-1, 0x00FA, Ansi(0xFA)), // uacute
    (-1, 0x00FB, Ansi(0xFB)), // ucircumflex
    (-1, 0x00FC, Ansi(0xFC)), // udieresis
    (-1, 0x00F9, Ansi(0xF9)), // ugrave
    (-1, 0x0171, Ansi(0x75)), // uhungarumlaut
    (-1, 0x016B, Ansi(0x75)), // umacron
    (-1, 0x0173, Ansi(0x75)), // uogonek
    (-1, 0x016F, Ansi(0x75)), // uring
    (-1, 0x00FD, Ansi(0xFD)), // yacute
    (-1, 0x00FF, Ansi(0xFF)), // ydieresis
    (-1, 0x017A, Ansi(0x7A)), // zacute
    (-1, 0x017E, Ansi(0x9E)), // zcaron
    (-1, 0x017C, Ansi(0x7A)), // zdotaccent
];


/// Built-in encoding of Symbol (private-use values where Unicode has none)
#[rustfmt::skip]
const SYMBOL_ENCODING: [u16; 224] = [
    /* 0x20 */ 0x0020, 0x0021, 0x2200, 0x0023, 0x2203, 0x0025, 0x0026, 0x220B, 0x0028, 0x0029, 0x2217, 0x002B, 0x002C, 0x2212, 0x002E, 0x002F,
    /* 0x30 */ 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, 0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F,
    /* 0x40 */ 0x2245, 0x0391, 0x0392, 0x03A7, 0x0394, 0x0395, 0x03A6, 0x0393, 0x0397, 0x0399, 0x03D1, 0x039A, 0x039B, 0x039C, 0x039D, 0x039F,
    /* 0x50 */ 0x03A0, 0x0398, 0x03A1, 0x03A3, 0x03A4, 0x03A5, 0x03C2, 0x03A9, 0x039E, 0x03A8, 0x0396, 0x005B, 0x2234, 0x005D, 0x22A5, 0x005F,
    /* 0x60 */ 0xF8E5, 0x03B1, 0x03B2, 0x03C7, 0x03B4, 0x03B5, 0x03C6, 0x03B3, 0x03B7, 0x03B9, 0x03D5, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BF,
    /* 0x70 */ 0x03C0, 0x03B8, 0x03C1, 0x03C3, 0x03C4, 0x03C5, 0x03D6, 0x03C9, 0x03BE, 0x03C8, 0x03B6, 0x007B, 0x007C, 0x007D, 0x223C, 0x0000,
    /* 0x80 */ 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    /* 0x90 */ 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    /* 0xa0 */ 0x20AC, 0x03D2, 0x2032, 0x2264, 0x2044, 0x221E, 0x0192, 0x2663, 0x2666, 0x2665, 0x2660, 0x2194, 0x2190, 0x2191, 0x2192, 0x2193,
    /* 0xb0 */ 0x00B0, 0x00B1, 0x2033, 0x2265, 0x00D7, 0x221D, 0x2202, 0x2022, 0x00F7, 0x2260, 0x2261, 0x2248, 0x2026, 0xF8E6, 0xF8E7, 0x21B5,
    /* 0xc0 */ 0x2135, 0x2111, 0x211C, 0x2118, 0x2297, 0x2295, 0x2205, 0x2229, 0x222A, 0x2283, 0x2287, 0x2284, 0x2282, 0x2286, 0x2208, 0x2209,
    /* 0xd0 */ 0x2220, 0x2207, 0xF6DA, 0xF6D9, 0xF6DB, 0x220F, 0x221A, 0x22C5, 0x00AC, 0x2227, 0x2228, 0x21D4, 0x21D0, 0x21D1, 0x21D2, 0x21D3,
    /* 0xe0 */ 0x25CA, 0x2329, 0xF8E8, 0xF8E9, 0xF8EA, 0x2211, 0xF8EB, 0xF8EC, 0xF8ED, 0xF8EE, 0xF8EF, 0xF8F0, 0xF8F1, 0xF8F2, 0xF8F3, 0xF8F4,
    /* 0xf0 */ 0x0000, 0x232A, 0x222B, 0x2320, 0xF8F5, 0x2321, 0xF8F6, 0xF8F7, 0xF8F8, 0xF8F9, 0xF8FA, 0xF8FB, 0xF8FC, 0xF8FD, 0xF8FE, 0x0000,
];

/// Built-in encoding of ZapfDingbats
#[rustfmt::skip]
const DINGBATS_ENCODING: [u16; 224] = [
    /* 0x20 */ 0x0020, 0x2701, 0x2702, 0x2703, 0x2704, 0x260E, 0x2706, 0x2707, 0x2708, 0x2709, 0x261B, 0x261E, 0x270C, 0x270D, 0x270E, 0x270F,
    /* 0x30 */ 0x2710, 0x2711, 0x2712, 0x2713, 0x2714, 0x2715, 0x2716, 0x2717, 0x2718, 0x2719, 0x271A, 0x271B, 0x271C, 0x271D, 0x271E, 0x271F,
    /* 0x40 */ 0x2720, 0x2721, 0x2722, 0x2723, 0x2724, 0x2725, 0x2726, 0x2727, 0x2605, 0x2729, 0x272A, 0x272B, 0x272C, 0x272D, 0x272E, 0x272F,
    /* 0x50 */ 0x2730, 0x2731, 0x2732, 0x2733, 0x2734, 0x2735, 0x2736, 0x2737, 0x2738, 0x2739, 0x273A, 0x273B, 0x273C, 0x273D, 0x273E, 0x273F,
    /* 0x60 */ 0x2740, 0x2741, 0x2742, 0x2743, 0x2744, 0x2745, 0x2746, 0x2747, 0x2748, 0x2749, 0x274A, 0x274B, 0x25CF, 0x274D, 0x25A0, 0x274F,
    /* 0x70 */ 0x2750, 0x2751, 0x2752, 0x25B2, 0x25BC, 0x25C6, 0x2756, 0x25D7, 0x2758, 0x2759, 0x275A, 0x275B, 0x275C, 0x275D, 0x275E, 0x0000,
    /* 0x80 */ 0x2768, 0x2769, 0x276A, 0x276B, 0x276C, 0x276D, 0x276E, 0x276F, 0x2770, 0x2771, 0x2772, 0x2773, 0x2774, 0x2775, 0x0000, 0x0000,
    /* 0x90 */ 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    /* 0xa0 */ 0x0000, 0x2761, 0x2762, 0x2763, 0x2764, 0x2765, 0x2766, 0x2767, 0x2663, 0x2666, 0x2665, 0x2660, 0x2460, 0x2461, 0x2462, 0x2463,
    /* 0xb0 */ 0x2464, 0x2465, 0x2466, 0x2467, 0x2468, 0x2469, 0x2776, 0x2777, 0x2778, 0x2779, 0x277A, 0x277B, 0x277C, 0x277D, 0x277E, 0x277F,
    /* 0xc0 */ 0x2780, 0x2781, 0x2782, 0x2783, 0x2784, 0x2785, 0x2786, 0x2787, 0x2788, 0x2789, 0x278A, 0x278B, 0x278C, 0x278D, 0x278E, 0x278F,
    /* 0xd0 */ 0x2790, 0x2791, 0x2792, 0x2793, 0x2794, 0x2192, 0x2194, 0x2195, 0x2798, 0x2799, 0x279A, 0x279B, 0x279C, 0x279D, 0x279E, 0x279F,
    /* 0xe0 */ 0x27A0, 0x27A1, 0x27A2, 0x27A3, 0x27A4, 0x27A5, 0x27A6, 0x27A7, 0x27A8, 0x27A9, 0x27AA, 0x27AB, 0x27AC, 0x27AD, 0x27AE, 0x27AF,
    /* 0xf0 */ 0x0000, 0x27B1, 0x27B2, 0x27B3, 0x27B4, 0x27B5, 0x27B6, 0x27B7, 0x27B8, 0x27B9, 0x27BA, 0x27BB, 0x27BC, 0x27BD, 0x27BE, 0x0000,
];

/// Widths of the Latin fonts are indexed by WinAnsiEncoding `code - 0x20`
///
/// Courier is monospaced.
const COURIER: [u16; 224] = [600; 224];

/// Widths: Helvetica, Helvetica-Oblique
#[rustfmt::skip]
const HELVETICA: [u16; 224] = [
    /* 0x20 */ 278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    /* 0x30 */ 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    /* 0x40 */ 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    /* 0x50 */ 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    /* 0x60 */ 333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    /* 0x70 */ 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    /* 0x80 */ 556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    /* 0x90 */ 0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    /* 0xa0 */ 278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    /* 0xb0 */ 400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    /* 0xc0 */ 667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    /* 0xd0 */ 722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    /* 0xe0 */ 556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    /* 0xf0 */ 556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Widths: Helvetica-Bold, Helvetica-BoldOblique
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 224] = [
    /* 0x20 */ 278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    /* 0x30 */ 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    /* 0x40 */ 975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    /* 0x50 */ 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    /* 0x60 */ 333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    /* 0x70 */ 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    /* 0x80 */ 556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    /* 0x90 */ 0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    /* 0xa0 */ 278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    /* 0xb0 */ 400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    /* 0xc0 */ 722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    /* 0xd0 */ 722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    /* 0xe0 */ 556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    /* 0xf0 */ 611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Widths: Times-Roman
#[rustfmt::skip]
const TIMES_ROMAN: [u16; 224] = [
    /* 0x20 */ 250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    /* 0x30 */ 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    /* 0x40 */ 921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    /* 0x50 */ 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    /* 0x60 */ 333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    /* 0x70 */ 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
    /* 0x80 */ 500, 0, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 0, 611, 0,
    /* 0x90 */ 0, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 0, 444, 722,
    /* 0xa0 */ 250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    /* 0xb0 */ 400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    /* 0xc0 */ 722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    /* 0xd0 */ 722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    /* 0xe0 */ 444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    /* 0xf0 */ 500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

/// Widths: Times-Bold
#[rustfmt::skip]
const TIMES_BOLD: [u16; 224] = [
    /* 0x20 */ 250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    /* 0x30 */ 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    /* 0x40 */ 930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    /* 0x50 */ 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    /* 0x60 */ 333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    /* 0x70 */ 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520, 0,
    /* 0x80 */ 500, 0, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 1000, 0, 667, 0,
    /* 0x90 */ 0, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 0, 444, 722,
    /* 0xa0 */ 250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
    /* 0xb0 */ 400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
    /* 0xc0 */ 722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
    /* 0xd0 */ 722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
    /* 0xe0 */ 500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    /* 0xf0 */ 500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
];

/// Widths: Times-Italic
#[rustfmt::skip]
const TIMES_ITALIC: [u16; 224] = [
    /* 0x20 */ 250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    /* 0x30 */ 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    /* 0x40 */ 920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    /* 0x50 */ 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    /* 0x60 */ 333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    /* 0x70 */ 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541, 0,
    /* 0x80 */ 500, 0, 333, 500, 556, 889, 500, 500, 333, 1000, 500, 333, 944, 0, 556, 0,
    /* 0x90 */ 0, 333, 333, 556, 556, 350, 500, 889, 333, 980, 389, 333, 667, 0, 389, 556,
    /* 0xa0 */ 250, 389, 500, 500, 500, 500, 275, 500, 333, 760, 276, 500, 675, 333, 760, 333,
    /* 0xb0 */ 400, 675, 300, 300, 333, 500, 523, 250, 333, 300, 310, 500, 750, 750, 750, 500,
    /* 0xc0 */ 611, 611, 611, 611, 611, 611, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    /* 0xd0 */ 722, 667, 722, 722, 722, 722, 722, 675, 722, 722, 722, 722, 722, 556, 611, 500,
    /* 0xe0 */ 500, 500, 500, 500, 500, 500, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    /* 0xf0 */ 500, 500, 500, 500, 500, 500, 500, 675, 500, 500, 500, 500, 500, 444, 500, 444,
];

/// Widths: Times-BoldItalic
#[rustfmt::skip]
const TIMES_BOLD_ITALIC: [u16; 224] = [
    /* 0x20 */ 250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    /* 0x30 */ 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    /* 0x40 */ 832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    /* 0x50 */ 611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    /* 0x60 */ 333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    /* 0x70 */ 500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570, 0,
    /* 0x80 */ 500, 0, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 944, 0, 611, 0,
    /* 0x90 */ 0, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 667, 0, 389, 611,
    /* 0xa0 */ 250, 389, 500, 500, 500, 500, 220, 500, 333, 747, 266, 500, 606, 333, 747, 333,
    /* 0xb0 */ 400, 570, 300, 300, 333, 576, 500, 250, 333, 300, 300, 500, 750, 750, 750, 500,
    /* 0xc0 */ 667, 667, 667, 667, 667, 667, 944, 667, 667, 667, 667, 667, 389, 389, 389, 389,
    /* 0xd0 */ 722, 722, 722, 722, 722, 722, 722, 570, 722, 722, 722, 722, 722, 611, 611, 500,
    /* 0xe0 */ 500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    /* 0xf0 */ 500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 444, 500, 444,
];

/// Widths: Symbol
#[rustfmt::skip]
const SYMBOL: [u16; 224] = [
    /* 0x20 */ 250, 333, 713, 500, 549, 833, 778, 439, 333, 333, 500, 549, 250, 549, 250, 278,
    /* 0x30 */ 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 549, 549, 549, 444,
    /* 0x40 */ 549, 722, 667, 722, 612, 611, 763, 603, 722, 333, 631, 722, 686, 889, 722, 722,
    /* 0x50 */ 768, 741, 556, 592, 611, 690, 439, 768, 645, 795, 611, 333, 863, 333, 658, 500,
    /* 0x60 */ 500, 631, 549, 549, 494, 439, 521, 411, 603, 329, 603, 549, 549, 576, 521, 549,
    /* 0x70 */ 549, 521, 549, 603, 439, 576, 713, 686, 493, 686, 494, 480, 200, 480, 549, 0,
    /* 0x80 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0x90 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xa0 */ 750, 620, 247, 549, 167, 713, 500, 753, 753, 753, 753, 1042, 987, 603, 987, 603,
    /* 0xb0 */ 400, 549, 411, 549, 549, 713, 494, 460, 549, 549, 549, 549, 1000, 603, 1000, 658,
    /* 0xc0 */ 823, 686, 795, 987, 768, 768, 823, 768, 768, 713, 713, 713, 713, 713, 713, 768,
    /* 0xd0 */ 768, 713, 790, 790, 890, 823, 549, 250, 713, 603, 603, 1042, 987, 603, 987, 603,
    /* 0xe0 */ 494, 329, 790, 790, 786, 713, 384, 384, 384, 384, 384, 384, 494, 494, 494, 494,
    /* 0xf0 */ 0, 329, 274, 686, 686, 686, 384, 384, 384, 384, 384, 384, 494, 494, 494, 0,
];

/// Widths: ZapfDingbats
#[rustfmt::skip]
const ZAPF_DINGBATS: [u16; 224] = [
    /* 0x20 */ 278, 974, 961, 974, 980, 719, 789, 790, 791, 690, 960, 939, 549, 855, 911, 933,
    /* 0x30 */ 911, 945, 974, 755, 846, 762, 761, 571, 677, 763, 760, 759, 754, 494, 552, 537,
    /* 0x40 */ 577, 692, 786, 788, 788, 790, 793, 794, 816, 823, 789, 841, 823, 833, 816, 831,
    /* 0x50 */ 923, 744, 723, 749, 790, 792, 695, 776, 768, 792, 759, 707, 708, 682, 701, 826,
    /* 0x60 */ 815, 789, 789, 707, 687, 696, 689, 786, 787, 713, 791, 785, 791, 873, 761, 762,
    /* 0x70 */ 762, 759, 759, 892, 892, 788, 784, 438, 138, 277, 415, 392, 392, 668, 668, 0,
    /* 0x80 */ 390, 390, 317, 317, 276, 276, 509, 509, 410, 410, 234, 234, 334, 334, 0, 0,
    /* 0x90 */ 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    /* 0xa0 */ 0, 732, 544, 544, 910, 667, 760, 760, 776, 595, 694, 626, 788, 788, 788, 788,
    /* 0xb0 */ 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788,
    /* 0xc0 */ 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788, 788,
    /* 0xd0 */ 788, 788, 788, 788, 894, 838, 1016, 458, 748, 924, 748, 918, 927, 928, 928, 834,
    /* 0xe0 */ 873, 828, 924, 924, 917, 930, 931, 463, 883, 836, 836, 867, 867, 696, 696, 874,
    /* 0xf0 */ 0, 874, 760, 946, 771, 865, 771, 888, 967, 888, 831, 873, 927, 970, 918, 0,
];

#[cfg(test)]
mod test {
    use super::*;

    fn find(table: &[CharWidthEntry], unicode: u16) -> &CharWidthEntry {
        table.iter().find(|e| e.unicode == unicode).unwrap()
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in FONTS.iter().enumerate() {
            for b in &FONTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn space_is_first() {
        for font in &FONTS {
            let table = font.table();
            assert_eq!(table[0].char_code, 0x20, "{}", font.name);
            assert_eq!(table[0].unicode, 0x20, "{}", font.name);
        }
    }

    #[test]
    fn latin_codes_and_values_are_distinct() {
        let table = FONTS[0].table();
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.unicode, b.unicode);
                assert!(a.char_code < 0 || a.char_code != b.char_code);
            }
        }
        assert!(LATIN.iter().all(|(_, _, a)| !matches!(a, Ansi(c) if *c < FIRST_CODE)));
    }

    #[test]
    fn standard_encoding() {
        let table = FONTS[4].table();
        assert_eq!(table.len(), 314 + 1);
        assert_eq!(table.iter().filter(|e| e.char_code >= 0).count(), 149);

        let quoteright = find(&table, 0x2019);
        assert_eq!((quoteright.char_code, quoteright.width), (0x27, 222));
        let quotesingle = find(&table, 0x27);
        assert_eq!((quotesingle.char_code, quotesingle.width), (0xA9, 191));
        let lslash = find(&table, 0x141);
        assert_eq!((lslash.char_code, lslash.width), (0xE8, 556));

        // WinAnsi-only codes are not StandardEncoding codes
        for code in [0x7f, 0x80, 0x92, 0xa0, 0xe9] {
            assert!(table.iter().all(|e| e.char_code != code));
        }
    }

    #[test]
    fn unencoded_glyphs() {
        let table = FONTS[4].table();
        for (unicode, width) in [(0x2212, 584), (0xFB01, 500), (0x00E9, 556), (0x010F, 643)] {
            let entry = find(&table, unicode);
            assert_eq!((entry.char_code, entry.width), (-1, width));
        }
        let table = FONTS[8].table();
        assert_eq!(find(&table, 0x2212).width, 564);
        assert_eq!(find(&table, 0x00E9).width, 444);
    }

    #[test]
    fn symbolic_gaps() {
        let table = FONTS[12].table();
        assert!(table.iter().all(|e| !(0x7f..0xa0).contains(&e.char_code)));
    }
}
