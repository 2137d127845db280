//! CMS response envelope unwrapping.
//!
//! The CMS nests content as `{"result": {"content": T}}`, `{"result": T}`, or
//! returns `T` bare. A key whose value is JSON `null` counts as missing.

use serde_json::Value;

/// Which envelope a response body was wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    /// `{"result": {"content": T}}`
    ResultContent,
    /// `{"result": T}`
    Result,
    /// `T`
    Bare,
}

impl EnvelopeShape {
    /// Detect the envelope of a parsed body.
    #[must_use]
    pub fn of(body: &Value) -> Self {
        match body.get("result") {
            Some(result) if !result.is_null() => {
                if result.get("content").is_some_and(|c| !c.is_null()) {
                    Self::ResultContent
                } else {
                    Self::Result
                }
            }
            _ => Self::Bare,
        }
    }
}

/// Strip the envelope, returning the inner value.
///
/// ```
/// use newsroom_content::content::unwrap_envelope;
/// use serde_json::json;
///
/// let inner = json!({"_id": "1"});
/// assert_eq!(unwrap_envelope(json!({"result": {"content": inner.clone()}})), inner);
/// assert_eq!(unwrap_envelope(json!({"result": inner.clone()})), inner);
/// assert_eq!(unwrap_envelope(inner.clone()), inner);
/// ```
#[must_use]
pub fn unwrap_envelope(mut body: Value) -> Value {
    match EnvelopeShape::of(&body) {
        EnvelopeShape::ResultContent => body
            .pointer_mut("/result/content")
            .map_or(Value::Null, Value::take),
        EnvelopeShape::Result => body.get_mut("result").map_or(Value::Null, Value::take),
        EnvelopeShape::Bare => body,
    }
}
