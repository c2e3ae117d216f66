use super::entities::ChartSpec;
use crate::domain::errors::AppResult;

/// Drawing collaborator that turns a spec into a chart on a page surface
pub trait ChartSurface {
    /// Mount `spec` on the surface named `surface_id`. Whether the surface
    /// exists is for the implementation to decide.
    fn render(&self, surface_id: &str, spec: &ChartSpec) -> AppResult<()>;
}
