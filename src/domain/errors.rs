use derive_more::Display;
use wasm_bindgen::JsValue;

/// Root error type for the whole crate
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(RenderingError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(ConfigurationError),
}

/// Resource retrieval failures. Never retried.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request to {} failed: {}", url, reason)]
    RequestFailed { url: String, reason: String },
    #[display(fmt = "{} answered HTTP {} {}", url, status, status_text)]
    HttpStatus { url: String, status: u16, status_text: String },
    #[display(fmt = "could not read body of {}: {}", url, reason)]
    BodyUnreadable { url: String, reason: String },
}

/// Failures handed back by the charting collaborator
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "chart config serialization failed: {}", _0)]
    SerializationFailed(String),
    #[display(fmt = "Chart.js rejected surface '{}': {}", surface_id, reason)]
    ChartRejected { surface_id: String, reason: String },
    #[display(fmt = "browser API unavailable: {}", _0)]
    BrowserApi(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ConfigurationError {
    #[display(fmt = "invalid dashboard config: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for RenderingError {}
impl std::error::Error for ConfigurationError {}

impl From<NetworkError> for AppError {
    fn from(error: NetworkError) -> Self {
        AppError::Network(error)
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Rendering(error)
    }
}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Configuration(error)
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
