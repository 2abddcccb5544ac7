use serde_json::json;

pub mod catalog;
pub mod orders;
pub mod products;
pub mod settings;

/// JSON body used for 4xx error responses.
pub(crate) fn error_body(message: impl AsRef<str>) -> serde_json::Value {
    json!({ "error": message.as_ref() })
}
