use echochat_types::{ECHO_REPLY_PREFIX, PENDING_MODEL_REPLY_PREFIX};
use std::fmt;
use std::str::FromStr;

/// Produces the reply text for a submitted message.
///
/// The returned text is rendered after the bot label.
pub trait Responder {
    fn reply(&self, text: &str) -> String;
}

/// Echoes the submitted text back verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

impl Responder for EchoResponder {
    fn reply(&self, text: &str) -> String {
        format!("{}{}", ECHO_REPLY_PREFIX, text)
    }
}

/// Placeholder reply used while no local model is available
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingModelResponder;

impl Responder for PendingModelResponder {
    fn reply(&self, text: &str) -> String {
        format!("{}\"{}\"", PENDING_MODEL_REPLY_PREFIX, text)
    }
}

impl<F> Responder for F
where
    F: Fn(&str) -> String,
{
    fn reply(&self, text: &str) -> String {
        self(text)
    }
}

/// Built-in responders selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponderKind {
    #[default]
    Echo,
    PendingModel,
}

impl ResponderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderKind::Echo => "echo",
            ResponderKind::PendingModel => "pending-model",
        }
    }

    pub fn into_responder(self) -> Box<dyn Responder> {
        match self {
            ResponderKind::Echo => Box::new(EchoResponder),
            ResponderKind::PendingModel => Box::new(PendingModelResponder),
        }
    }
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown responder '{0}' (expected 'echo' or 'pending-model')")]
pub struct ParseResponderError(pub String);

impl FromStr for ResponderKind {
    type Err = ParseResponderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "echo" => Ok(ResponderKind::Echo),
            "pending-model" | "pending_model" | "pending" => Ok(ResponderKind::PendingModel),
            other => Err(ParseResponderError(other.to_string())),
        }
    }
}
