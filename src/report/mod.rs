mod engine;
mod types;

pub use engine::{render_report, ReportError, ReportRenderer, DEFAULT_REPORT_TEMPLATE};
pub use types::{CategoryContext, ReportContext};
