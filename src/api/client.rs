/// HTTP client for the solution and check endpoints
///
/// One submission is exactly one `POST` carrying the image as a multipart
/// part named `image`. There is no retry: a failure is reported back to the
/// page and the user decides whether to submit again.

use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::SubmitError;
use crate::state::data::AnalysisResult;
use crate::state::image::UploadedImage;

/// Multipart field the backend reads the image from
pub const IMAGE_FIELD: &str = "image";

/// Cheap to clone; all clones share one connection pool
#[derive(Debug, Clone)]
pub struct SolverClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SolverClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.server_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the endpoint serving `R`
    pub fn endpoint_url<R: AnalysisResult>(&self) -> String {
        format!("{}{}", self.base_url, R::ENDPOINT)
    }

    /// Upload `image` and parse the response as `R`
    pub async fn submit<R: AnalysisResult>(&self, image: UploadedImage) -> Result<R, SubmitError> {
        let url = self.endpoint_url::<R>();
        let size = image.size();

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(image.mime)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!("POST {} ({} bytes)", url, size);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        info!("📥 {} answered {} ({} bytes)", R::ENDPOINT, status, body.len());

        serde_json::from_slice(&body).map_err(|e| SubmitError::Parse(e.to_string()))
    }

    fn transport_error(&self, error: reqwest::Error) -> SubmitError {
        if error.is_timeout() {
            SubmitError::Timeout { secs: self.timeout.as_secs() }
        } else {
            SubmitError::Network(error.to_string())
        }
    }
}
