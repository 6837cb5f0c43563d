//! Runtime configuration resolved from flags and the environment

use clap::{Args, ValueEnum};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PRESENCE_LOG";
/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "PRESENCE_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// How statuses are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `404 Not Found`
    #[default]
    Plain,
    /// `404 Not Found (4xx Client Error)`
    Long,
}

/// Flags shared by every command. Flags win over the environment.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log filter directive, e.g. `debug` or `presence_http=trace`
    #[arg(long, global = true, env = LOG_ENV, value_name = "FILTER")]
    pub log: Option<String>,

    /// Output format
    #[arg(long, global = true, env = FORMAT_ENV, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl From<&GlobalArgs> for Config {
    fn from(args: &GlobalArgs) -> Self {
        let defaults = Config::default();
        Self {
            log_filter: args
                .log
                .clone()
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            format: args.format.unwrap_or(defaults.format),
        }
    }
}
