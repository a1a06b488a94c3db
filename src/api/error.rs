//! Error taxonomy for the client
//!
//! Expected platform conditions (missing entity, exhausted transient
//! retries, rejected login) and hard failures (unreachable host, unreadable
//! token storage) share one closed enum so callers can match on exactly the
//! cases they care about.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The platform rejected the credential or token.
    #[error("authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// The requested resource does not exist on the platform.
    #[error("entity not found: {message}")]
    EntityNotFound { message: String },

    /// The platform kept reporting a recoverable contention condition for
    /// every attempt the retry policy allowed.
    #[error("transient platform error persisted after {attempts} attempts: {message}")]
    Transient { attempts: u32, message: String },

    /// Malformed input detected before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The token storage lock could not be acquired in time, or the
    /// persisted record is unreadable.
    #[error("token storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Any other non-success response; carries the status and raw body for
    /// diagnostics.
    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Transport-level failure below the HTTP exchange.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
