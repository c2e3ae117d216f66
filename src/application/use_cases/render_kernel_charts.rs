use crate::domain::{
    chart::{ChartSpec, ChartSpecFactory, ChartSurface},
    errors::AppResult,
    kernel_stats::{KernelStats, Metric},
    logging::LogComponent,
};
use crate::log_debug;

/// The two specs handed to the surface by one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCharts {
    pub accuracy: ChartSpec,
    pub loss: ChartSpec,
}

impl RenderedCharts {
    pub fn same_shape(&self, other: &RenderedCharts) -> bool {
        self.accuracy.same_shape(&other.accuracy) && self.loss.same_shape(&other.loss)
    }
}

pub struct RenderKernelChartsUseCase<R> {
    surface: R,
    factory: ChartSpecFactory,
}

impl<R: ChartSurface> RenderKernelChartsUseCase<R> {
    pub fn new(surface: R, factory: ChartSpecFactory) -> Self {
        Self { surface, factory }
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Builds a fresh spec per metric and mounts it, accuracy first.
    pub fn execute(&self, stats: &KernelStats, accuracy_surface: &str, loss_surface: &str) -> AppResult<RenderedCharts> {
        let accuracy = self.render_one(Metric::Accuracy, stats, accuracy_surface)?;
        let loss = self.render_one(Metric::Loss, stats, loss_surface)?;
        Ok(RenderedCharts { accuracy, loss })
    }

    fn render_one(&self, metric: Metric, stats: &KernelStats, surface_id: &str) -> AppResult<ChartSpec> {
        let series = match metric {
            Metric::Accuracy => &stats.accuracy,
            Metric::Loss => &stats.loss,
        };
        let spec = self.factory.build(metric, series);

        log_debug!(
            LogComponent::Application("RenderKernelCharts"),
            "{} spec with {} categories -> '{}'",
            metric,
            spec.category_count(),
            surface_id
        );

        self.surface.render(surface_id, &spec)?;
        Ok(spec)
    }
}
