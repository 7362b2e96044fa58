use thiserror::Error;

/// Errors from [`crate::routing::RouteProvider::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Fewer than two waypoints were supplied.
    #[error("a route needs at least two waypoints (got {count})")]
    TooFewWaypoints {
        /// Number of waypoints supplied.
        count: usize,
    },
    /// The routing service answered but found no usable route.
    #[error("routing service returned {code}: {message}")]
    NoRoute {
        /// Service status code, for example `"NoRoute"`.
        code: String,
        /// Human-readable detail, possibly empty.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("routing request to {url} timed out after {timeout_secs} s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("routing request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("routing request to {url} failed: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be understood.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Error detail.
        message: String,
    },
}
