//! HTTP client layer — `BreatheHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::BreatheHttp;
pub use retry::{RetryConfig, RetryPolicy};
