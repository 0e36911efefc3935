//! HTTP implementation of the analysis service
//!
//! Sends the selected file as a multipart form with a single `file` part and
//! parses the JSON record from a successful response. No retries and no
//! request timeout: the call lasts as long as the service takes.

use std::error::Error as StdError;

use pyfix_core::prelude::*;
use pyfix_core::{AnalysisResult, SelectedFile};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::endpoint::{Endpoint, FILE_FIELD};
use crate::service::AnalysisService;

const PYTHON_MIME: &str = "text/x-python";

/// Analysis service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    endpoint: Endpoint,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Use a preconfigured reqwest client (proxy settings, TLS roots)
    pub fn with_client(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn build_form(file: &SelectedFile) -> Result<Form> {
        let part = Part::bytes(file.content().to_vec())
            .file_name(file.name().to_string())
            .mime_str(PYTHON_MIME)
            .map_err(|e| Error::transport(describe_reqwest_error(&e)))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        info!(
            "Uploading {} ({} bytes) to {}",
            file.name(),
            file.size(),
            self.endpoint
        );

        let form = Self::build_form(file)?;
        let response = self
            .client
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::transport(describe_reqwest_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Analysis service rejected {}: {}", file.name(), status);
            return Err(Error::http(status.to_string()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(describe_reqwest_error(&e)))?;

        let result: AnalysisResult = serde_json::from_slice(&body).map_err(|e| {
            warn!("Unparseable analysis response ({} bytes): {}", body.len(), e);
            Error::malformed_response(e.to_string())
        })?;

        debug!(
            "Analysis of {} finished: original tests passed={}, fixed tests passed={}",
            file.name(),
            result.original_test_success,
            result.fixed_test_success
        );
        Ok(result)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// reqwest's top-level message is terse ("error sending request"); append the
/// source chain so "connection refused" reaches the user.
fn describe_reqwest_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
