//! Test utilities and shared test helpers for Campfire.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of every other crate in the workspace.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test binary helper may already have installed a subscriber.
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temporary file");
    path
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration: only the token, everything else
    /// defaulted.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// A configuration with every section spelled out.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  prefixes:\n",
            "    - \"campfire \"\n",
            "    - \"camp \"\n",
            "  mention_as_prefix: true\n",
            "  activity: \"over your servers!\"\n",
            "  status: idle\n",
            "  owners:\n",
            "    - 123456789012345678\n",
            "\n",
            "help:\n",
            "  plugins_per_page: 2\n",
            "  hidden_categories:\n",
            "    - \"Admin\"\n",
            "    - \"Debug\"\n",
            "  paginator_timeout_seconds: 120\n",
            "\n",
            "embeds:\n",
            "  bot_name: \"Campfire\"\n",
            "  info_colour: 0xE67E22\n",
            "  error_colour: 0xE74C3C\n",
            "  error_delete_delay_seconds: 5\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  json_format: true\n",
            "  directory: \"logs\"\n"
        )
    }

    /// A configuration that parses but fails validation.
    pub fn invalid_config_yaml() -> &'static str {
        r#"
discord:
  token: ""
help:
  plugins_per_page: 0
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_write_temp_file() {
        let dir = create_temp_dir();
        let path = write_temp_file(&dir, "config.yaml", config_fixtures::minimal_config_yaml());
        let read = std::fs::read_to_string(path).unwrap();
        assert!(read.contains("test_token"));
    }
}
