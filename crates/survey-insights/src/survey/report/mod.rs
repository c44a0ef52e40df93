mod text;
pub mod views;

pub use text::render_text_report;
pub use views::{access_chart, practice_chart, AccessStatus, ChartViews};
