use std::io::Cursor;
use std::path::PathBuf;

use tracing::debug;

use crate::config::{self, Properties};
use crate::error::ConfigError;

pub const DEFAULT_KEY: &str = "msg";

/// Where a [`ConfigReader`] gets its bytes from.
#[derive(Clone, Debug)]
pub enum ResourceSource {
    Path(PathBuf),
    /// Resource compiled into the binary, e.g. with `include_bytes!`.
    Embedded(&'static [u8]),
}

/// Answers lookups against a `key=value` resource.
///
/// Nothing is cached: every call opens the resource, parses it and releases
/// the stream before returning.
#[derive(Clone, Debug)]
pub struct ConfigReader {
    source: ResourceSource,
}

impl ConfigReader {
    pub fn new(source: ResourceSource) -> Self {
        Self { source }
    }

    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(ResourceSource::Path(path.into()))
    }

    pub fn embedded(bytes: &'static [u8]) -> Self {
        Self::new(ResourceSource::Embedded(bytes))
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    pub fn exists(&self) -> bool {
        match &self.source {
            ResourceSource::Path(path) => path.is_file(),
            ResourceSource::Embedded(_) => true,
        }
    }

    pub fn load(&self) -> Result<Properties, ConfigError> {
        match &self.source {
            ResourceSource::Path(path) => config::load_config(path),
            ResourceSource::Embedded(bytes) => {
                debug!("reading embedded resource ({} bytes)", bytes.len());
                config::parse_properties(Cursor::new(*bytes))
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let props = self.load()?;
        props
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    /// Fails with the first key in `required` the resource does not define.
    pub fn validate(&self, required: &[&str]) -> Result<(), ConfigError> {
        let props = self.load()?;
        match required.iter().find(|key| !props.contains_key(key)) {
            Some(key) => Err(ConfigError::key_not_found(key)),
            None => Ok(()),
        }
    }
}
