use pastel_eval::Value;
use pastel_types::{PastelError, PastelResult};
use serde::Serialize;

/// Structured result of one evaluation, as shipped to the editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalOutcome {
    pub success: bool,
    /// The program's value on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Text the editor shows in its preview area.
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PastelError>,
    /// Captured `print` output.
    pub log: Vec<String>,
}

impl EvalOutcome {
    pub fn new(result: PastelResult<Value>, log: Vec<String>) -> Self {
        match result {
            Ok(value) => Self {
                success: true,
                display: value.to_string(),
                value: Some(value),
                error: None,
                log,
            },
            Err(error) => {
                log::debug!(target: "pastel", "evaluation failed: {error}");
                Self {
                    success: false,
                    display: error.message.clone(),
                    value: None,
                    error: Some(error),
                    log,
                }
            }
        }
    }

    /// JSON form of the outcome; never fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"success":false,"display":"Serialization error: {}","log":[]}}"#,
                e
            )
        })
    }
}
