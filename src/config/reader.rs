use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::fields::declared_fields;
use super::file::{load_config_file, parse_document, write_config_file};
use super::path::split_path;
use super::tree::{lookup_path, overlay, set_at_path};
use super::ConfigError;

/// A JSON configuration document with dotted-path access.
///
/// Values are read and written as whole structured records at a path such as
/// `"server.tls"`. Writing to a path creates any missing intermediate objects
/// and replaces whatever previously lived at that location. Reading never
/// creates anything.
///
/// ## Example
///
/// ```
/// use config_reader::ConfigReader;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Params {
///     param1: i32,
///     param2: f32,
/// }
///
/// let mut config = ConfigReader::new();
/// config.set(&Params { param1: 42, param2: 3.5 }, "Params")?;
/// assert_eq!(
///     config.write_to_string()?,
///     r#"{"Params":{"param1":42,"param2":3.5}}"#
/// );
///
/// let params: Params = config.get("Params")?;
/// assert_eq!(params, Params { param1: 42, param2: 3.5 });
/// # Ok::<(), config_reader::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigReader {
    document: Value,
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self {
            document: Value::Object(Default::default()),
        }
    }
}

impl ConfigReader {
    /// Creates a reader holding an empty JSON object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader from the contents of a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut reader = Self::new();
        reader.read_from_file(path)?;
        Ok(reader)
    }

    /// Creates a reader from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut reader = Self::new();
        reader.read_from_string(json)?;
        Ok(reader)
    }

    /// Returns the crate version as `Major.Minor.Patch`.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Replaces the document with the contents of a JSON file.
    ///
    /// On failure the current document is left unchanged.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let document = load_config_file(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read config file");
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        self.document = document;
        Ok(())
    }

    /// Writes the document to a file, pretty-printed with four-space indentation.
    ///
    /// The file is created or truncated.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        write_config_file(path, &self.document).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to write config file");
        })?;
        tracing::debug!(path = %path.display(), "wrote config file");
        Ok(())
    }

    /// Replaces the document with parsed JSON text.
    ///
    /// On failure the current document is left unchanged.
    pub fn read_from_string(&mut self, json: &str) -> Result<(), ConfigError> {
        let document = parse_document(json)
            .map_err(ConfigError::Parse)
            .inspect_err(|e| tracing::warn!(error = %e, "failed to parse config string"))?;
        tracing::debug!(len = json.len(), "loaded config string");
        self.document = document;
        Ok(())
    }

    /// Serializes the document as compact JSON.
    pub fn write_to_string(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string(&self.document)
            .map_err(ConfigError::Serialize)
            .inspect_err(|e| tracing::warn!(error = %e, "failed to serialize config"))?;
        tracing::debug!(len = json.len(), "wrote config string");
        Ok(json)
    }

    /// Reads the value at `path`.
    ///
    /// The empty path reads the whole document. Fails with
    /// [`ConfigError::PathNotFound`] if any segment is missing, and with
    /// [`ConfigError::Conversion`] if the node does not fit `T`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        let node = self.node(path)?;
        T::deserialize(node).map_err(|e| conversion_error(path, e))
    }

    /// Reads the value at `path` into `dest`.
    ///
    /// When `T` is a struct, each field present in the document replaces the
    /// matching field of `dest` as a whole, and fields the document lacks keep
    /// their current values. Any other `T` (enum, map, sequence, scalar) is
    /// replaced by the document's value. `dest` is untouched on failure.
    pub fn get_into<T>(&self, dest: &mut T, path: &str) -> Result<(), ConfigError>
    where
        T: Serialize + DeserializeOwned,
    {
        let node = self.node(path)?;
        let value = if declared_fields::<T>().is_some() && node.is_object() {
            let mut merged =
                serde_json::to_value(&*dest).map_err(|e| conversion_error(path, e))?;
            overlay(&mut merged, node.clone());
            merged
        } else {
            node.clone()
        };
        *dest = serde_json::from_value(value).map_err(|e| conversion_error(path, e))?;
        Ok(())
    }

    /// Writes `value` at `path`, replacing whatever was there.
    ///
    /// Missing intermediate objects are created. The empty path replaces the
    /// whole document. On failure the document is left unchanged.
    pub fn set<T>(&mut self, value: &T, path: &str) -> Result<(), ConfigError>
    where
        T: Serialize + ?Sized,
    {
        let node = serde_json::to_value(value).map_err(|e| conversion_error(path, e))?;
        set_at_path(&mut self.document, &split_path(path), node);
        tracing::debug!(path, "set config value");
        Ok(())
    }

    /// Returns true if `path` names an existing node.
    pub fn contains(&self, path: &str) -> bool {
        lookup_path(&self.document, &split_path(path)).is_some()
    }

    /// Returns the underlying JSON document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Consumes the reader, returning the underlying JSON document.
    pub fn into_document(self) -> Value {
        self.document
    }

    fn node(&self, path: &str) -> Result<&Value, ConfigError> {
        lookup_path(&self.document, &split_path(path)).ok_or_else(|| {
            tracing::warn!(path, "config path not found");
            ConfigError::PathNotFound(path.to_string())
        })
    }
}

impl From<Value> for ConfigReader {
    fn from(document: Value) -> Self {
        Self { document }
    }
}

impl FromStr for ConfigReader {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

fn conversion_error(path: &str, source: serde_json::Error) -> ConfigError {
    tracing::warn!(path, error = %source, "failed to convert config value");
    ConfigError::Conversion {
        path: path.to_string(),
        source,
    }
}
