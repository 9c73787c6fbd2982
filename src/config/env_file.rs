//! `.env` file parsing.
//!
//! Only used for reading: the materializer copies template bytes verbatim
//! and never re-serializes parsed content.

use std::collections::BTreeMap;
use std::path::Path;

/// A parsed `.env` file, preserving declaration order of keys.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Exported: `export KEY=value`
/// - Comments and blank lines are skipped; lines without `=` are ignored
///
/// # Example
///
/// ```
/// use devstrap::config::EnvFile;
///
/// let env = EnvFile::parse("# db\nDATABASE_URL=postgres://localhost/db\nexport DEBUG=\"true\"\n");
/// assert_eq!(env.get("DEBUG"), Some("true"));
/// assert_eq!(env.keys(), vec!["DATABASE_URL", "DEBUG"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    order: Vec<String>,
    values: BTreeMap<String, String>,
}

impl EnvFile {
    /// Parse env file content.
    pub fn parse(content: &str) -> Self {
        let mut env = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = parse_line(line) {
                if !env.values.contains_key(&key) {
                    env.order.push(key.clone());
                }
                env.values.insert(key, value);
            }
        }

        env
    }

    /// Read and parse an env file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Value for `key`, if declared.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether `key` is declared.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Declared keys in file order.
    pub fn keys(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Keys declared in `self` but missing from `other`, in file order.
    pub fn missing_from(&self, other: &EnvFile) -> Vec<String> {
        self.order
            .iter()
            .filter(|k| !other.contains(k))
            .cloned()
            .collect()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
