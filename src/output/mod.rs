pub mod formatter;

pub use formatter::{
    format_amount, format_estimate, format_report_json, should_use_colors, Report,
};
