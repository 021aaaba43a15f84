use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

/// Read-only key/value store parsed from a `key=value` resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses `key=value` lines from `reader`.
///
/// Blank lines and lines starting with `#` are skipped. The line is split on
/// the first `=`, so values may themselves contain `=`. The key is trimmed;
/// the value only loses its leading whitespace. A line with no `=` becomes a
/// key with an empty value. Later duplicates replace earlier ones.
pub fn parse_properties<R: BufRead>(reader: R) -> Result<Properties, ConfigError> {
    let mut map = HashMap::new();
    for line in reader.lines() {
        let line = line.map_err(ConfigError::ReadError)?;
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = match line.find('=') {
            Some(eq_pos) => (line[..eq_pos].trim(), line[eq_pos + 1..].trim_start()),
            None => (line.trim_end(), ""),
        };
        map.insert(key.to_string(), value.to_string());
    }
    debug!("parsed {} properties", map.len());
    Ok(Properties { entries: map })
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Properties, ConfigError> {
    let path = path.as_ref();
    let not_found = |source: io::Error| ConfigError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(not_found)?;
    if !file.metadata().map_err(not_found)?.is_file() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    debug!("opened {}", path.display());
    parse_properties(BufReader::new(file))
}
