//! WASM bindings for the figweave converter.
//!
//! Exposes `convert()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ html, css, images }` or throws on error.

use wasm_bindgen::prelude::*;

use figweave_convert::ConversionOptions;

/// Convert a design document JSON string to HTML + CSS.
///
/// `options` may be `null`/`undefined` or an object with any of
/// `preserveAutoLayout`, `convertEffects`, `useFlexbox`, `importVariants`,
/// `generateTailwind`; missing flags take their defaults.
///
/// Returns a JS object `{ html: string, css: string, images: [{nodeId, imageRef}] }`.
/// Throws a JS error if the document fails to decode.
#[wasm_bindgen]
pub fn convert(json: &str, options: JsValue) -> Result<JsValue, JsError> {
    let root =
        figweave_schema::parse_document(json).map_err(|e| JsError::new(&e.to_string()))?;

    let options: ConversionOptions = if options.is_null() || options.is_undefined() {
        ConversionOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {e}")))?
    };

    let result = figweave_convert::convert(&root, &options);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {e}")))
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
