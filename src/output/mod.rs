pub mod formatter;

pub use formatter::{format_compact, format_compound, format_detail, format_json, should_use_colors};
