//! Ratatui widgets for the os101 browser.

pub mod command_bar;
pub mod header;
pub mod help;
pub mod line_input;
pub mod project_detail;
pub mod project_list;
pub mod query_bar;
