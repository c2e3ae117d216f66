pub mod chart;
pub mod errors;
pub mod kernel_stats;
pub mod logging;
