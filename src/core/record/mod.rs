//! Loading program records from disk

pub mod toml_parser;

pub use toml_parser::{load_record, parse_record_toml, RecordError};
