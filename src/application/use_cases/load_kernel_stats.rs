use crate::domain::{
    errors::AppResult,
    kernel_stats::{CsvSource, KernelStats, Metric, Series, SeriesParser},
    logging::LogComponent,
};
use crate::log_info;

/// Fetches both CSV resources and parses them into series.
///
/// The two fetches run concurrently; the result is only produced once both
/// are parsed. Either failure fails the whole load.
pub struct LoadKernelStatsUseCase<S> {
    source: S,
    parser: SeriesParser,
}

impl<S: CsvSource> LoadKernelStatsUseCase<S> {
    pub fn new(source: S, parser: SeriesParser) -> Self {
        Self { source, parser }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn execute(&self, accuracy_url: &str, loss_url: &str) -> AppResult<KernelStats> {
        let (accuracy, loss) = futures::try_join!(
            self.load(Metric::Accuracy, accuracy_url),
            self.load(Metric::Loss, loss_url)
        )?;

        Ok(KernelStats { accuracy, loss })
    }

    async fn load(&self, metric: Metric, location: &str) -> AppResult<Series> {
        let text = self.source.fetch_text(location).await?;
        let series = self.parser.parse(&text);

        log_info!(
            LogComponent::Application("LoadKernelStats"),
            "{}: {} records from {}",
            metric,
            series.len(),
            location
        );

        Ok(series)
    }
}
