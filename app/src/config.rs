//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;

/// Port the todo backend listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5143";

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-view", about = "Terminal todo list backed by /api/Todo")]
pub struct Config {
    /// Root URL of the todo API; `/api/Todo` is appended.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "TODO_API_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Tracing filter directive, e.g. `warn` or `todo_view_core=debug`.
    #[arg(long, env = "TODO_VIEW_LOG", default_value = "warn")]
    pub log_level: String,

    /// Print plain text without terminal styling.
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["todo-view"]).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.no_color);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn flags_override() {
        let config = Config::try_parse_from([
            "todo-view",
            "--base-url",
            "http://10.0.0.2:8080",
            "--timeout-secs",
            "3",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.timeout_secs, 3);
        assert!(config.no_color);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Config::try_parse_from(["todo-view", "--timeout-secs", "soon"]).is_err());
    }
}
