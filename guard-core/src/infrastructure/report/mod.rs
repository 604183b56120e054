pub mod html;

pub use html::{HtmlReportRenderer, REPORT_FILE_NAME};
