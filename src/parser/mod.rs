pub mod update_parser;

pub use update_parser::{api_error, extract_update};
