//! Cross-language method channel contracts.
//!
//! A host binding (Flutter method channel, JNI, ...) turns an incoming call
//! into a [`MethodCall`] and hands the core a boxed [`MethodResult`]. Every
//! `MethodResult` method consumes the box, so a result can be completed at
//! most once.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_async::sync::oneshot;

/// Incoming method invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    /// Arguments object; `Value::Null` when the caller passed none
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Looks up a named argument. Explicit `null` counts as absent.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name).filter(|value| !value.is_null())
    }
}

/// One-shot reply to a [`MethodCall`].
pub trait MethodResult: Send {
    fn success(self: Box<Self>, value: Value);

    fn error(self: Box<Self>, code: &str, message: &str, details: Option<Value>);

    fn not_implemented(self: Box<Self>);
}

/// Terminal reply captured by a [`ChannelResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResponse {
    /// Value of a successful reply.
    pub fn into_success(self) -> Option<Value> {
        match self {
            MethodResponse::Success { value } => Some(value),
            _ => None,
        }
    }
}

/// [`MethodResult`] resolving a one-shot channel.
///
/// Lets async Rust callers await a reply:
///
/// ```ignore
/// let (result, reply) = ChannelResult::new();
/// plugin.handle_method_call(MethodCall::new("getGenres", json!({})), result);
/// let genres = reply.await?.into_success();
/// ```
#[derive(Debug)]
pub struct ChannelResult {
    sender: oneshot::Sender<MethodResponse>,
}

impl ChannelResult {
    pub fn new() -> (Box<Self>, oneshot::Receiver<MethodResponse>) {
        let (sender, receiver) = oneshot::channel();
        (Box::new(Self { sender }), receiver)
    }

    fn resolve(self, response: MethodResponse) {
        // A dropped receiver means nobody is waiting for the reply anymore.
        let _ = self.sender.send(response);
    }
}

impl MethodResult for ChannelResult {
    fn success(self: Box<Self>, value: Value) {
        self.resolve(MethodResponse::Success { value });
    }

    fn error(self: Box<Self>, code: &str, message: &str, details: Option<Value>) {
        self.resolve(MethodResponse::Error {
            code: code.to_string(),
            message: message.to_string(),
            details,
        });
    }

    fn not_implemented(self: Box<Self>) {
        self.resolve(MethodResponse::NotImplemented);
    }
}
