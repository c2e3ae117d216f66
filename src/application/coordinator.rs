use crate::application::{
    config::DashboardConfig,
    use_cases::{LoadKernelStatsUseCase, RenderKernelChartsUseCase, RenderedCharts},
};
use crate::domain::{
    chart::{ChartSpecFactory, ChartSurface},
    errors::AppResult,
    kernel_stats::{CsvSource, SeriesParser},
    logging::LogComponent,
};
use crate::{log_error, log_info};

/// Load-then-render pipeline for the two kernel-size charts
pub struct DashboardCoordinator<S, R> {
    config: DashboardConfig,
    loader: LoadKernelStatsUseCase<S>,
    renderer: RenderKernelChartsUseCase<R>,
}

impl<S: CsvSource, R: ChartSurface> DashboardCoordinator<S, R> {
    pub fn new(config: DashboardConfig, source: S, surface: R) -> Self {
        let loader = LoadKernelStatsUseCase::new(source, SeriesParser::new(config.trailing_line));
        let renderer = RenderKernelChartsUseCase::new(surface, ChartSpecFactory::new(config.chart_kind));
        Self { config, loader, renderer }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        self.loader.source()
    }

    pub fn surface(&self) -> &R {
        self.renderer.surface()
    }

    /// Nothing is rendered unless both series loaded.
    pub async fn run(&self) -> AppResult<RenderedCharts> {
        let result = self.load_and_render().await;
        match &result {
            Ok(charts) => {
                log_info!(
                    LogComponent::Application("Dashboard"),
                    "rendered {} accuracy and {} loss categories",
                    charts.accuracy.category_count(),
                    charts.loss.category_count()
                );
            }
            Err(e) => {
                log_error!(LogComponent::Application("Dashboard"), "dashboard failed: {}", e);
            }
        }
        result
    }

    async fn load_and_render(&self) -> AppResult<RenderedCharts> {
        let stats = self
            .loader
            .execute(&self.config.accuracy.csv_url, &self.config.loss.csv_url)
            .await?;
        self.renderer
            .execute(&stats, &self.config.accuracy.canvas_id, &self.config.loss.canvas_id)
    }
}
