//! Routing service error types.

/// Errors from the routing service or a stand-in provider.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service returned an error status
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// No route connects the two places
    #[error("no walking route from {origin:?} to {destination:?}")]
    NoRoute { origin: String, destination: String },

    /// Invalid API key or request denied
    #[error("unauthorized (check ROUTING_API_KEY)")]
    Unauthorized,

    /// Rate limited by the service
    #[error("rate limited by routing service")]
    RateLimited,

    /// Response parsed but carried unusable data
    #[error("malformed route: {0}")]
    Malformed(String),

    /// Provider not configured or not available
    #[error("not configured: {0}")]
    NotConfigured(String),
}
