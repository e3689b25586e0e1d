//! Network URL constants for the Breathe SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.breathe.sidharthify.dev";
