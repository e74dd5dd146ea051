#![cfg(feature = "wasm")]

use htmldiff_text::wasm::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_html_diff() {
    assert_eq!(
        html_diff("<p>a b</p>", "<p>a c</p>"),
        "<p>a <del class='diffmod'>b</del><ins class='diffmod'>c</ins></p>"
    );
}

#[wasm_bindgen_test(unsupported = test)]
fn test_html_diff_with_classes() {
    assert_eq!(
        html_diff_with_classes("a", "a b", "plus", "minus", "changed").ok(),
        Some("a<ins class='plus'>&nbsp;b</ins>".to_owned())
    );
}

// Building a `JsError` needs a JS host.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen_test]
fn test_invalid_class_is_rejected() {
    assert!(html_diff_with_classes("a b", "a", "plus", "no'pe", "changed").is_err());
}
