//! Resilience features for API operations

pub mod retry;

pub use retry::{RetryConfig, RetryPolicy};
