//! Sheet fetcher port
//!
//! Defines how a source downloads its CSV export.

use std::future::Future;

use thiserror::Error;

/// Errors that can occur while downloading a sheet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not finish within the configured timeout
    #[error("request to {url} timed out")]
    Timeout {
        /// Requested URL
        url: String,
    },

    /// The server answered with a non-success status
    #[error("{url} answered with HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Connection, TLS or body decoding failure
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error description
        message: String,
    },
}

/// Downloads the body of a URL as text
pub trait Fetcher {
    /// `GET url` and return the response body
    ///
    /// Any non-success status is an error.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
