pub mod http;
pub mod rendering;
pub mod services;

pub use http::HttpCsvClient;
pub use rendering::ChartJsSurface;
pub use services::{BrowserTimeProvider, ConsoleLogger};
