//! File-backed loading and saving of the JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::ConfigError;

/// Indentation used when writing config files.
const INDENT: &[u8] = b"    ";

/// Loads and parses a JSON config file.
pub fn load_config_file(path: &Path) -> Result<Value, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_document(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses JSON text into a document.
///
/// Nesting depth is unbounded so that anything `set` can build also loads
/// back.
pub fn parse_document(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let document = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(document)
}

/// Writes `document` to `path`, creating or truncating the file.
///
/// The output is pretty-printed with four-space indentation and ends with a
/// newline.
pub fn write_config_file(path: &Path, document: &Value) -> Result<(), ConfigError> {
    let contents = render_pretty(document)?;
    std::fs::write(path, contents).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn render_pretty(document: &Value) -> Result<Vec<u8>, ConfigError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(ConfigError::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}
