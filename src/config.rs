//! Runtime configuration shared by the server and the client commands.
//!
//! Values come from CLI flags first, then environment variables (optionally
//! seeded from a `.env` file), then the defaults below.

use std::fmt;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

pub const PORT_ENV: &str = "PORT";
pub const RUN_MODE_ENV: &str = "RUN_MODE";
pub const SERVER_URL_ENV: &str = "REPORTER_URL";

/// Deployment flavour of the server process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RunMode {
    /// Loopback listener, human-readable logs.
    #[default]
    #[value(alias = "dev")]
    Development,
    /// All-interfaces listener, JSON logs.
    #[value(alias = "prod")]
    Production,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn bind_host(&self) -> &'static str {
        match self {
            Self::Development => "127.0.0.1",
            Self::Production => "0.0.0.0",
        }
    }

    pub fn json_logs(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load a `.env` file from the working directory if one exists.
///
/// Returns the path that was loaded, if any. Variables already present in
/// the process environment are not overridden.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}
