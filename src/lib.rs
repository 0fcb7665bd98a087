pub mod config;
mod readable;

pub use config::{ConfigError, ConfigReader};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
