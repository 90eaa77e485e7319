pub mod fields;
pub mod format;
pub mod html;
pub mod summary;
pub mod writer;

pub use fields::{ReportFields, REPORT_KEYS};
pub use summary::render_summary;
pub use writer::{ReportFormat, ReportWriter, DEFAULT_FILE_STEM};
