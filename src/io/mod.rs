//! Text import and export.
pub mod csv;

pub use self::csv::{read_csv, read_csv_with_config, write_csv, write_csv_with_config};
