mod format;
mod json;
mod table;

pub(crate) use format::NumberFormat;
pub(crate) use json::output_breakdown_json;
pub(crate) use table::{BreakdownTableOptions, print_breakdown_table};
