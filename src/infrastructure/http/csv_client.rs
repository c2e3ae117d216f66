use crate::domain::{
    errors::{AppResult, NetworkError},
    kernel_stats::CsvSource,
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_info};
use gloo_net::http::Request;

/// Fetches CSV text with the browser `fetch` API through gloo.
///
/// Locations are passed to `fetch` as given, so relative paths resolve
/// against the page. There is no timeout and no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpCsvClient;

impl HttpCsvClient {
    pub fn new() -> Self {
        Self
    }
}

impl CsvSource for HttpCsvClient {
    async fn fetch_text(&self, location: &str) -> AppResult<String> {
        let url = location.to_string();
        log_debug!(LogComponent::Infrastructure("HttpCsvClient"), "GET {}", url);

        let response = Request::get(&url).send().await.map_err(|e| NetworkError::RequestFailed {
            url: url.clone(),
            reason: format!("{e:?}"),
        })?;

        if !response.ok() {
            let error = NetworkError::HttpStatus {
                url: url.clone(),
                status: response.status(),
                status_text: response.status_text(),
            };
            log_error!(LogComponent::Infrastructure("HttpCsvClient"), "{}", error);
            return Err(error.into());
        }

        let text = response.text().await.map_err(|e| NetworkError::BodyUnreadable {
            url: url.clone(),
            reason: format!("{e:?}"),
        })?;

        log_info!(
            LogComponent::Infrastructure("HttpCsvClient"),
            "loaded {} ({} bytes)",
            url,
            text.len()
        );

        Ok(text)
    }
}
