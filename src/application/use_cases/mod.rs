pub mod load_kernel_stats;
pub mod render_kernel_charts;

pub use load_kernel_stats::LoadKernelStatsUseCase;
pub use render_kernel_charts::{RenderKernelChartsUseCase, RenderedCharts};
