mod helpers;
mod renderer;

pub use helpers::ReportHelper;
pub use renderer::ReportRenderer;
