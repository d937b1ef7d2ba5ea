mod client;
mod origin;
mod types;

pub use self::client::Client;
pub use self::origin::FromStrError as ParseOriginError;
pub use self::origin::Origin;
pub use self::types::AlternateName;
pub use self::types::ApiResponse;
pub use self::types::Episode;
pub use self::types::Mapping;
pub use self::types::NameMap;
use once_cell::sync::Lazy;
use url::Url;

pub(crate) static DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://thexem.de/").unwrap());
pub(crate) const ALL_ENDPOINT: &str = "map/all";
pub(crate) const NAMES_ENDPOINT: &str = "map/allNames";

/// The result value the api reports when a request worked
pub(crate) const RESULT_SUCCESS: &str = "success";

/// The library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to build a request url
    #[error("invalid url")]
    InvalidUrl(#[from] url::ParseError),

    /// A HTTP error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Failed to read a response body
    #[error("failed to read response body")]
    ReadBody(#[source] reqwest::Error),

    /// The server responded with a non-success status code
    #[error("\"{url}\" returned status {status}: {body}")]
    InvalidStatus {
        /// The url of the request
        url: Url,

        /// The response status code
        status: reqwest::StatusCode,

        /// The raw response body
        body: String,
    },

    /// Failed to decode a response body
    #[error("failed to decode response body: {body}")]
    Json {
        /// The underlying decode error
        #[source]
        error: serde_json::Error,

        /// The raw response body
        body: String,
    },

    /// The api reported a failure
    #[error("request failed: {message}")]
    Api {
        /// The message the api returned, empty if it sent none
        message: String,
    },
}
