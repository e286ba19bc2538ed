use std::{collections::HashMap, env, fs, path::Path};

use crate::error::Error;

/// Environment variable holding the WeatherAPI.com credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Name of the optional env file looked up in the working directory.
const ENV_FILE: &str = ".env";

/// Resolved runtime configuration.
///
/// Built once at startup and passed explicitly into the client
/// constructor; nothing downstream reads the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load the API key from the process environment, falling back to a
    /// `.env` file in the working directory.
    pub fn load() -> Result<Self, Error> {
        Self::from_sources(env::var(API_KEY_VAR).ok(), Path::new(ENV_FILE))
    }

    /// Resolve the API key from an explicit environment value and an env
    /// file path. The file never overrides a variable that is already
    /// set, and is only read when needed; it is fine for it not to exist.
    pub fn from_sources(env_value: Option<String>, env_file: &Path) -> Result<Self, Error> {
        let from_env = env_value.filter(|v| !v.trim().is_empty());

        let from_file = match from_env {
            Some(_) => None,
            None if env_file.exists() => {
                let contents = fs::read_to_string(env_file).map_err(|source| Error::EnvFile {
                    path: env_file.to_path_buf(),
                    source,
                })?;
                parse_env_file(&contents).remove(API_KEY_VAR)
            }
            None => None,
        };

        let api_key = from_env
            .or(from_file)
            .filter(|v| !v.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(Self { api_key })
    }
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped,
/// values may be wrapped in single or double quotes, and an optional
/// `export ` prefix is tolerated.
fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);

        vars.insert(key.trim().to_string(), value.to_string());
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn env_value_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "API_KEY=from_file").expect("write env file");

        let cfg = Config::from_sources(Some("from_env".to_string()), file.path())
            .expect("config must load");

        assert_eq!(cfg.api_key, "from_env");
    }

    #[test]
    fn falls_back_to_env_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# weather credentials").expect("write env file");
        writeln!(file, "API_KEY=abc123").expect("write env file");

        let cfg = Config::from_sources(None, file.path()).expect("config must load");

        assert_eq!(cfg.api_key, "abc123");
    }

    #[test]
    fn empty_env_value_falls_back_to_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "API_KEY=abc123").expect("write env file");

        let cfg = Config::from_sources(Some(String::new()), file.path())
            .expect("config must load");

        assert_eq!(cfg.api_key, "abc123");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let err = Config::from_sources(None, Path::new("definitely-no-such-file.env"))
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("API_KEY"));
        assert!(msg.contains(".env"));
    }

    #[test]
    fn missing_file_with_env_value_is_fine() {
        let cfg = Config::from_sources(
            Some("from_env".to_string()),
            Path::new("definitely-no-such-file.env"),
        )
        .expect("config must load");

        assert_eq!(cfg.api_key, "from_env");
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let vars = parse_env_file("# comment\n\nAPI_KEY=value\nnot a pair\n");

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("API_KEY").map(String::as_str), Some("value"));
    }

    #[test]
    fn parse_strips_quotes_and_export_prefix() {
        let vars = parse_env_file("export API_KEY=\"quoted value\"\nOTHER='single'\n");

        assert_eq!(vars.get("API_KEY").map(String::as_str), Some("quoted value"));
        assert_eq!(vars.get("OTHER").map(String::as_str), Some("single"));
    }

    #[test]
    fn parse_keeps_equals_signs_in_values() {
        let vars = parse_env_file("API_KEY=abc=def\n");

        assert_eq!(vars.get("API_KEY").map(String::as_str), Some("abc=def"));
    }
}
