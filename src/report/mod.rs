pub mod count;
pub mod exec;
pub mod output;
pub mod parse;

pub use count::count_changed_lines;
pub use exec::{build_rows, exec};
pub use output::{output_json, output_ndjson, render_csv};
pub use parse::parse_log;
