//! Upload endpoint resolution

use std::fmt;

use pyfix_core::prelude::*;
use url::Url;

/// Where the analysis service listens when nothing is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Route accepting the multipart upload
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";

/// Name of the multipart part carrying the file bytes
pub const FILE_FIELD: &str = "file";

/// Fully resolved upload URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Join `upload_path` onto `server_url`.
    ///
    /// A path on the server URL is kept (`http://host/api` + `/upload` gives
    /// `http://host/api/upload`). Only `http` and `https` are accepted.
    pub fn new(server_url: &str, upload_path: &str) -> Result<Self> {
        let base = Url::parse(server_url.trim())
            .map_err(|e| Error::invalid_endpoint(server_url, e.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_endpoint(
                server_url,
                format!("unsupported scheme '{}'", base.scheme()),
            ));
        }

        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            upload_path.trim().trim_start_matches('/')
        );
        let url =
            Url::parse(&joined).map_err(|e| Error::invalid_endpoint(&joined, e.to_string()))?;

        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
