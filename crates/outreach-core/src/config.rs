use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const USERNAME_KEY: &str = "LINKEDIN_USERNAME";
pub const PASSWORD_KEY: &str = "LINKEDIN_PASSWORD";

/// LinkedIn account credentials, loaded once and passed explicitly into the
/// login stage. Nothing else in the program reads the environment.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Load credentials from an env file, letting process environment
    /// variables of the same name take precedence.
    ///
    /// A missing env file is not an error on its own; the lookup still
    /// succeeds if both variables are set in the process environment.
    pub fn load(env_file: &Path) -> Result<Self> {
        let file_values = if env_file.exists() {
            parse_env_file(&std::fs::read_to_string(env_file)?)
        } else {
            tracing::debug!("env file {} not found, using process environment only", env_file.display());
            HashMap::new()
        };

        let username = lookup(&file_values, USERNAME_KEY)?;
        let password = lookup(&file_values, PASSWORD_KEY)?;

        Ok(Self { username, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn lookup(file_values: &HashMap<String, String>, key: &'static str) -> Result<String> {
    let value = std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| file_values.get(key).cloned());

    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingCredential(key)),
    }
}

/// Parse flat `KEY=VALUE` lines. Blank lines and `#` comments are skipped,
/// surrounding whitespace is trimmed, and matching single or double quotes
/// around the value are stripped.
fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!("skipping malformed env line: {}", line);
            continue;
        };

        let key = key.trim();
        let value = unquote(value.trim());
        if !key.is_empty() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    values
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
