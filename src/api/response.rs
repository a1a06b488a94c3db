//! Response classification
//!
//! Maps a raw (status, body) pair onto exactly one outcome. Classification
//! is a pure function; retries are the request pipeline's job.

use serde_json::Value;

use super::constants;
use super::error::{Error, Result};

/// Classified result of one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 with a decodable body.
    Success(Value),
    /// 404 carrying the platform's canonical missing-entity message.
    EntityNotFound { message: String },
    /// The platform reported a recoverable contention condition.
    Transient { status: u16, message: String },
    /// 401 on a resource call; the token was rejected.
    Unauthorized { status: u16, body: String },
    /// Everything else, including bodies that fail to decode.
    Failed { status: u16, body: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether repeating the same request may resolve this outcome.
    pub fn is_transient(&self) -> bool {
        matches!(self, Outcome::Transient { .. })
    }

    /// Convert into the caller-facing result. A transient outcome reaching
    /// this point has survived every retry and is terminal.
    pub fn into_result(self, attempts: u32) -> Result<Value> {
        match self {
            Outcome::Success(body) => Ok(body),
            Outcome::EntityNotFound { message } => Err(Error::EntityNotFound { message }),
            Outcome::Transient { message, .. } => Err(Error::Transient { attempts, message }),
            Outcome::Unauthorized { status, body } => Err(Error::Authentication { status, body }),
            Outcome::Failed { status, body } => Err(Error::RequestFailed { status, body }),
        }
    }
}

/// Classify one HTTP exchange.
///
/// The body is decoded first: a body that is not valid JSON yields `Failed`
/// regardless of status, carrying the decode error and the raw text. A 404
/// whose message is not the canonical missing-entity text still gets the
/// deadlock test before falling through to `Failed`.
pub fn classify(status: u16, raw_body: &str) -> Outcome {
    let body: Value = match serde_json::from_str(raw_body.trim()) {
        Ok(body) => body,
        Err(e) => {
            return Outcome::Failed {
                status,
                body: format!("invalid response: {}. raw response: {}", e, raw_body),
            };
        }
    };

    if status == 200 {
        return Outcome::Success(body);
    }

    let message = body
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or_default();

    if status == 404 && message == constants::ENTITY_NOT_FOUND_MESSAGE {
        return Outcome::EntityNotFound {
            message: message.to_string(),
        };
    }

    if message.contains(constants::DEADLOCK_MESSAGE_FRAGMENT) {
        return Outcome::Transient {
            status,
            message: message.to_string(),
        };
    }

    if status == 401 {
        return Outcome::Unauthorized {
            status,
            body: body.to_string(),
        };
    }

    Outcome::Failed {
        status,
        body: body.to_string(),
    }
}
