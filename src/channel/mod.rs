pub mod dispatcher;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ChannelError;

/// Channel the mobile shell binds its translator calls to.
pub const CHANNEL_NAME: &str = "travel_translator/gemini";

/// A single invocation arriving on the method channel: an operation name
/// plus an argument mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub args: Value,
    /// Correlation id echoed back verbatim. The shell's messenger matches
    /// responses to calls with it; absent ids are simply not echoed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl MethodCall {
    pub fn new(method: &str, args: Value) -> Self {
        Self {
            method: method.to_string(),
            args,
            id: None,
        }
    }

    /// Parse a raw text frame into a method call.
    pub fn from_wire(text: &str) -> Result<Self, ChannelError> {
        let call: MethodCall = serde_json::from_str(text)?;
        Ok(call)
    }

    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(|v| v.as_str())
    }
}

/// Outcome of a method invocation, as it goes back on the wire.
#[derive(Debug, Clone)]
pub enum MethodResult {
    Success(Value),
    NotImplemented { method: String },
    Error { code: String, message: String },
}

impl MethodResult {
    /// Encode the result as a response envelope for the given call.
    pub fn into_message(self, call: &MethodCall) -> Value {
        let mut message = match self {
            MethodResult::Success(result) => json!({
                "type": "result",
                "method": call.method,
                "result": result,
            }),
            MethodResult::NotImplemented { method } => json!({
                "type": "not-implemented",
                "method": method,
            }),
            MethodResult::Error { code, message } => json!({
                "type": "error",
                "method": call.method,
                "code": code,
                "message": message,
            }),
        };
        if let Some(id) = &call.id {
            message["id"] = id.clone();
        }
        message
    }
}

impl From<ChannelError> for MethodResult {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::NotImplemented { method } => MethodResult::NotImplemented { method },
            ChannelError::MalformedCall(e) => MethodResult::Error {
                code: "malformed-call".to_string(),
                message: e.to_string(),
            },
            ChannelError::Engine(e) => MethodResult::Error {
                code: "engine-error".to_string(),
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_call_with_args_and_id() {
        let call = MethodCall::from_wire(
            r#"{"method": "translate", "args": {"text": "hello"}, "id": 7}"#,
        )
        .unwrap();
        assert_eq!(call.method, "translate");
        assert_eq!(call.arg_str("text"), Some("hello"));
        assert_eq!(call.id, Some(json!(7)));
    }

    #[test]
    fn parses_call_without_args() {
        let call = MethodCall::from_wire(r#"{"method": "isAvailable"}"#).unwrap();
        assert_eq!(call.method, "isAvailable");
        assert_eq!(call.arg_str("text"), None);
        assert!(call.id.is_none());
    }

    #[test]
    fn rejects_non_call_frames() {
        assert!(MethodCall::from_wire("not json").is_err());
        assert!(MethodCall::from_wire(r#"{"args": {}}"#).is_err());
    }

    #[test]
    fn success_envelope_echoes_id() {
        let mut call = MethodCall::new("translate", json!({}));
        call.id = Some(json!("abc"));
        let message = MethodResult::Success(json!("done")).into_message(&call);
        assert_eq!(message["type"], "result");
        assert_eq!(message["result"], "done");
        assert_eq!(message["id"], "abc");
    }

    #[test]
    fn not_implemented_envelope_names_the_method() {
        let call = MethodCall::new("detectLanguage", json!({}));
        let message = MethodResult::NotImplemented {
            method: "detectLanguage".to_string(),
        }
        .into_message(&call);
        assert_eq!(message["type"], "not-implemented");
        assert_eq!(message["method"], "detectLanguage");
        assert!(message.get("id").is_none());
    }
}
