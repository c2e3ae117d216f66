pub mod config;
pub mod coordinator;
pub mod use_cases;

pub use config::{ChartSource, DashboardConfig};
pub use coordinator::DashboardCoordinator;
