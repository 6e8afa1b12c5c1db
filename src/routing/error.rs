//! Routing error types.

use thiserror::Error;

/// Errors raised while registering or applying page rules.
///
/// All of them are fatal for the build: nothing here is retried.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("page rule pattern is empty")]
    EmptyPattern,

    #[error("`{path}` is a directory but no index file is configured")]
    MissingIndexFile { path: String },

    #[error("invalid glob pattern `{pattern}`")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
