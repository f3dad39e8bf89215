//! Pastel interpreter as a WASM module for the browser block editor.
//!
//! Every export takes source text and returns a JSON string.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { evaluate, format } from 'pastel-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(evaluate("(print (+ 1 1))"));
//! // { success: true, value: { type: "number", value: 2.0 }, display: "2", log: ["2"] }
//! ```

use pastel::{EvalConfig, PastelError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Evaluate a Pastel program.
///
/// Returns a JSON `EvalOutcome`:
/// ```json
/// { "success": false, "display": "At least 2 parameters are required",
///   "error": { "kind": "syntax", "message": "...", "stack": [...] }, "log": [] }
/// ```
#[wasm_bindgen]
pub fn evaluate(source: &str) -> String {
    pastel::evaluate_to_result(source, EvalConfig::default()).to_json()
}

/// Evaluate with a custom `print` capture limit.
#[wasm_bindgen]
pub fn evaluate_with_limit(source: &str, log_limit: usize) -> String {
    pastel::evaluate_to_result(source, EvalConfig { log_limit }).to_json()
}

/// Check and pretty-print a program, one top-level form per paragraph.
///
/// Returns `{ "success": true, "source": "..." }` or `{ "success": false, "error": {...} }`.
#[wasm_bindgen]
pub fn format(source: &str) -> String {
    let report = match pastel::check(source) {
        Ok(tree) => FormatReport::ok(pastel::format_program(&tree)),
        Err(error) => FormatReport::failed(error),
    };
    to_json(&report)
}

/// Parse a program without evaluating it.
///
/// Returns the tree's textual view on success.
#[wasm_bindgen]
pub fn parse(source: &str) -> String {
    let report = match pastel::parse(source) {
        Ok(tree) => FormatReport::ok(pastel::view_tree(&tree)),
        Err(error) => FormatReport::failed(error),
    };
    to_json(&report)
}

/// Return the interpreter version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[derive(Debug, Serialize)]
struct FormatReport {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<PastelError>,
}

impl FormatReport {
    fn ok(source: String) -> Self {
        Self {
            success: true,
            source: Some(source),
            error: None,
        }
    }

    fn failed(error: PastelError) -> Self {
        Self {
            success: false,
            source: None,
            error: Some(error),
        }
    }
}

fn to_json(report: &FormatReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":{{"kind":"syntax","message":"Serialization error: {}","stack":[]}}}}"#,
            e
        )
    })
}
