//! Expose the `htmldiff-text` crate's functionality to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::DiffConfig;

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::html_diff` for diffing two HTML documents.
#[wasm_bindgen(js_name = htmlDiff)]
#[must_use]
pub fn html_diff(old: &str, new: &str) -> String {
    set_panic_hook();

    crate::html_diff(old, new)
}

/// WASM wrapper around `crate::html_diff_with_config` taking the CSS classes
/// of the markers.
///
/// # Errors
///
/// Throws the `ConfigError` message if a class name can't be used.
#[wasm_bindgen(js_name = htmlDiffWithClasses)]
pub fn html_diff_with_classes(
    old: &str,
    new: &str,
    insert_class: &str,
    delete_class: &str,
    modified_class: &str,
) -> Result<String, JsError> {
    set_panic_hook();

    let config = DiffConfig::default()
        .with_insert_class(insert_class)
        .and_then(|config| config.with_delete_class(delete_class))
        .and_then(|config| config.with_modified_class(modified_class))?;

    Ok(crate::html_diff_with_config(old, new, &config))
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
