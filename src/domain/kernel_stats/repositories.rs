use crate::domain::errors::AppResult;

/// Source of raw CSV text, addressed by URL or relative path
#[allow(async_fn_in_trait)]
pub trait CsvSource {
    /// Whole body of the resource. Transport failures and non-success
    /// statuses are errors; the text itself is never validated here.
    async fn fetch_text(&self, location: &str) -> AppResult<String>;
}
