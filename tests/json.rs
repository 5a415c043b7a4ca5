// Test serialization using json
#![cfg(feature = "serde")]

use base14_metrics::conv::LineMetrics;
use base14_metrics::{CharWidthEntry, GlyphId, Rect, RenderState};
use serde::{de::Deserialize, ser::Serialize};
use std::cmp::PartialEq;
use std::fmt::Debug;

fn test<X: Debug + PartialEq + Serialize + for<'a> Deserialize<'a>>(x: X, t: &str) {
    match serde_json::to_string(&x) {
        Ok(text) => assert_eq!(text, t),
        Err(err) => panic!("Ser of '{x:?}' failed: {err}"),
    }

    match serde_json::from_str::<X>(t) {
        Ok(v) => assert_eq!(v, x),
        Err(err) => panic!("Deser of '{t}' failed: {err}"),
    }
}

#[test]
fn glyph() {
    test(GlyphId(7), "7");
    test(
        CharWidthEntry {
            char_code: 65,
            unicode: 0x41,
            width: 667,
        },
        "{\"char_code\":65,\"unicode\":65,\"width\":667}",
    );
}

#[test]
fn geometry() {
    test(
        Rect {
            left: -166.0,
            bottom: -225.0,
            right: 1000.0,
            top: 931.0,
        },
        "{\"left\":-166.0,\"bottom\":-225.0,\"right\":1000.0,\"top\":931.0}",
    );
    test(
        LineMetrics {
            position: 3.5,
            thickness: 0.0,
        },
        "{\"position\":3.5,\"thickness\":0.0}",
    );
}

#[test]
fn render_state() {
    test(
        RenderState::new(12.0),
        "{\"font_size\":12.0,\"scale\":100.0,\"char_spacing\":0.0}",
    );
}
