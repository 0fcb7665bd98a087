//! JSON configuration document with dotted-path access.

mod error;
mod fields;
mod file;
mod path;
mod reader;
mod tree;

pub use error::ConfigError;
pub use path::{split_path, DELIMITER};
pub use reader::ConfigReader;
