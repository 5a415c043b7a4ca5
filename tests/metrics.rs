// Width and metric properties over all built-in fonts

use base14_metrics::conv::CONVERSION_CONSTANT;
use base14_metrics::fonts::{library, MetricsError, Registry};
use base14_metrics::{Base14Metrics, FontMetrics, GlyphId, Text, SENTINEL_UNICODE};

const NAMES: [&str; 14] = [
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Symbol",
    "ZapfDingbats",
];

fn metrics(name: &str, size: f32) -> Base14Metrics {
    let mut metrics = library().metrics(name).unwrap();
    metrics.set_font_size(size);
    metrics
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{a} != {b}");
}

#[test]
fn registry_names() {
    let names: Vec<_> = library().names().collect();
    assert_eq!(names, NAMES);
    assert_eq!(Registry::new().len(), NAMES.len());
}

#[test]
fn unknown_font() {
    let err = library().find_builtin("Nonexistent-Font").unwrap_err();
    assert_eq!(err, MetricsError::FontNotFound("Nonexistent-Font".into()));
    assert!(library().metrics("Nonexistent-Font").is_err());
}

#[test]
fn tables_terminate() {
    for name in NAMES {
        let font = library().find_builtin(name).unwrap();
        let table = font.table();
        let end = table
            .iter()
            .position(|e| e.unicode == SENTINEL_UNICODE)
            .expect("sentinel");
        assert_eq!(end, table.len() - 1, "{name}");
        assert_eq!(font.entries().count(), font.len());
        assert!(font.len() > 180, "{name}");
    }
}

#[test]
fn index_agrees_with_scan() {
    for name in NAMES {
        let font = library().find_builtin(name).unwrap();
        for code in -2..300 {
            let scanned = font.scan(|e| i32::from(e.char_code) == code);
            assert_eq!(font.find_glyph_for_char_code(code), scanned);
            assert_eq!(font.glyph_id_for_char_code(code), scanned.unwrap_or_default());
        }
        for (_, entry) in font.entries() {
            let unicode = u32::from(entry.unicode);
            let scanned = font.scan(|e| u32::from(e.unicode) == unicode);
            assert_eq!(font.find_glyph_for_unicode(unicode), scanned);
        }
        assert_eq!(font.find_glyph_for_unicode(SENTINEL_UNICODE.into()), None);
    }
}

#[test]
fn helvetica_scenario() {
    let mut m = metrics("Helvetica", 12.0);
    let a = m.char_width(b'A');
    assert_eq!(a, 667.0 * 12.0 / 1000.0);

    m.set_font_size(24.0);
    assert_eq!(m.char_width(b'A'), 2.0 * a);
}

#[test]
fn linear_in_size() {
    for name in NAMES {
        let m1 = metrics(name, 7.0);
        let m3 = metrics(name, 21.0);
        for c in 0..=255u8 {
            assert_close(m3.char_width(c), 3.0 * m1.char_width(c));
        }
        assert_close(m3.line_spacing(), 3.0 * m1.line_spacing());
    }
}

#[test]
fn missing_char_uses_glyph_zero() {
    let m = metrics("Times-Roman", 10.0);
    let space = m.glyph_width(GlyphId(0)).unwrap();
    assert_eq!(m.char_width(0x81), f64::from(space) * 10.0 / 1000.0);
    assert_eq!(m.unicode_char_width(0x4E00), m.char_width(b' '));
}

#[test]
fn unicode_lookup() {
    let m = metrics("Times-Roman", 10.0);
    // StandardEncoding: code 0x27 is the right single quote
    assert_eq!(m.unicode_char_width(0x2019), m.char_width(b'\''));
    assert_eq!(m.unicode_char_width(u16::from(b'W')), m.char_width(b'W'));

    let m = metrics("Symbol", 10.0);
    assert_eq!(m.unicode_char_width(0x03B1), m.char_width(b'a'));
    assert!(m.is_symbol());
}

#[test]
fn glyphs_without_code() {
    let m = metrics("Helvetica", 1000.0);
    for (unicode, width) in [(0x0141, 556.0), (0xFB01, 500.0), (0x2212, 584.0)] {
        assert_eq!(m.unicode_char_width(unicode), width);
    }
    assert_eq!(m.char_width(b'\''), 222.0);
    assert_eq!(m.font().len(), 314);

    // Latin-1 letters are reachable by Unicode value only
    let font = m.font();
    let id = font.find_glyph_for_unicode(0xE9).unwrap();
    assert_eq!(font.table()[id.get()].char_code, -1);
    assert_eq!(m.char_width(0xE9), m.char_width(b' '));
}

#[test]
fn string_is_sum_of_chars() {
    let mut m = metrics("Helvetica-Bold", 11.0);
    m.set_font_scale(90.0);
    m.set_font_char_space(3.0);
    let text = "Hello, World";

    let bytes: Vec<u8> = text.bytes().collect();
    let by_char: f64 = bytes.iter().map(|b| m.char_width(*b)).sum();
    assert_close(m.string_width(&bytes[..]), by_char);

    let wide_sum: f64 = text.chars().map(|c| m.char_width(c as u8)).sum();
    assert_close(m.string_width(text), wide_sum);

    let be_bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
    let units = Text::utf16_be_units(&be_bytes);
    let utf16_sum: f64 = text.encode_utf16().map(|u| m.unicode_char_width(u)).sum();
    assert_close(m.string_width(&units[..]), utf16_sum);
    assert_close(utf16_sum, by_char);
}

#[test]
fn wide_beyond_byte_range() {
    let m = metrics("Helvetica", 1000.0);
    // U+0141 is reduced to its low byte, 0x41
    assert_eq!(m.string_width("\u{141}"), m.char_width(b'A'));
    assert_eq!(m.string_width("\u{141}"), 667.0);

    let m = metrics("Courier", 10.0);
    assert_eq!(m.string_width("a€"), 12.0);
}

#[test]
fn explicit_length() {
    let m = metrics("Courier", 10.0);
    assert_eq!(m.string_width(&b"abcdef"[..]), 36.0);
    assert_eq!(m.string_width_len(&b"abcdef"[..], 2), 12.0);
    assert_eq!(m.string_width(&b"abc\0def"[..]), 18.0);
    assert_eq!(m.string_width_len(&b"abc\0def"[..], 7), 42.0);
    assert_eq!(m.string_width_len("abcdef", 100), 36.0);
}

#[test]
fn empty_text() {
    let m = metrics("Times-Bold", 10.0);
    assert_eq!(m.string_width(&b""[..]), 0.0);
    assert_eq!(m.string_width(""), 0.0);
    assert_eq!(m.string_width(&[0u16; 0][..]), 0.0);
    assert_eq!(m.string_width(&b"\0abc"[..]), 0.0);
    assert_eq!(m.string_width_mm(""), 0);
}

#[test]
fn width_in_mm() {
    let m = metrics("Times-Italic", 9.5);
    for text in ["A", "The quick brown fox", "jumps over the lazy dog"] {
        let expected = (m.string_width(text) / CONVERSION_CONSTANT).floor() as u64;
        assert_eq!(m.string_width_mm(text), expected);
        assert_eq!(m.string_width_mm(text.as_bytes()), expected);
    }
    let c = (m.char_width(b'M') / CONVERSION_CONSTANT).floor() as u64;
    assert_eq!(m.char_width_mm(b'M'), c);
}

#[test]
fn vertical_mm() {
    let m = metrics("Courier", 12.0);
    let expected = (m.line_spacing() / CONVERSION_CONSTANT).floor() as u64;
    assert_eq!(m.line_spacing_mm(), expected);
    assert_eq!(m.underline_position_mm(), 0);
    assert_eq!(m.underline_thickness_mm(), 0);
    assert_eq!(m.strikeout_thickness_mm(), 0);
    assert!(m.strikeout_position_mm() > 0);
}

#[test]
fn width_array() {
    let m = metrics("Helvetica", 12.0);
    let widths = m.width_array(32, 126);
    assert_eq!(widths.len(), 95);
    assert_eq!(widths[0], 278.0);
    assert_eq!(widths[usize::from(b'A' - 32)], 667.0);

    // Undefined codes fall back to glyph 0 (space)
    assert_eq!(m.width_array(0, 1), [278.0, 278.0]);
    assert_eq!(m.width_array(0x7f, 0x7f), [278.0]);
    assert!(m.width_array(10, 9).is_empty());
}

#[test]
fn bounding_boxes() {
    let bbox = |name| metrics(name, 1.0).bounding_box();
    assert_eq!(bbox("Courier"), [-23.0, -250.0, 715.0, 805.0]);
    assert_eq!(bbox("Times-Roman"), [-168.0, -218.0, 1000.0, 898.0]);
    assert_eq!(bbox("ZapfDingbats"), [-1.0, -143.0, 981.0, 820.0]);
}

#[test]
fn no_backing_file() {
    for name in NAMES {
        let m = metrics(name, 12.0);
        assert_eq!(m.filename().unwrap_err(), MetricsError::FileNotFound);
        assert_eq!(m.font_data().unwrap_err(), MetricsError::InvalidHandle);
        assert_eq!(m.font_data_len().unwrap_err(), MetricsError::InvalidHandle);
    }
}

#[test]
fn shared_between_engines() {
    let mut a = metrics("Times-Roman", 10.0);
    let b = metrics("Times-Roman", 20.0);
    assert!(std::sync::Arc::ptr_eq(a.font(), b.font()));
    a.set_font_char_space(50.0);
    assert_eq!(b.char_width(b'i'), 278.0 * 20.0 / 1000.0);

    let handle = std::thread::spawn(move || b.string_width("shared"));
    assert!(handle.join().unwrap() > 0.0);
}
