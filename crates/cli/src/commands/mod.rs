use clap::{Subcommand, ValueEnum};
use presence_http::StatusClass;
use std::io::Write;

use crate::config::Config;

pub mod classify;
pub mod completion;
pub mod list;
pub mod status;

/// Classification band as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassArg {
    Informational,
    Successful,
    Redirection,
    ClientError,
    ServerError,
}

impl From<ClassArg> for StatusClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Informational => StatusClass::Informational,
            ClassArg::Successful => StatusClass::Successful,
            ClassArg::Redirection => StatusClass::Redirection,
            ClassArg::ClientError => StatusClass::ClientError,
            ClassArg::ServerError => StatusClass::ServerError,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the reason phrase of a registered status code
    #[command(visible_alias = "s")]
    Status {
        /// Numeric status code, e.g. 404
        code: u16,
    },

    /// List registered status codes
    #[command(visible_alias = "ls")]
    List {
        /// Only list codes in this band
        #[arg(long, value_enum)]
        class: Option<ClassArg>,
    },

    /// Show the classification band of any code in 100-599
    Classify {
        /// Numeric status code, registered or not
        code: u16,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    pub fn execute(self, config: &Config, out: &mut impl Write) -> eyre::Result<()> {
        match self {
            Commands::Status { code } => status::execute(config, code, out),
            Commands::List { class } => list::execute(config, class.map(StatusClass::from), out),
            Commands::Classify { code } => classify::execute(code, out),
            Commands::Completion { shell } => completion::execute(shell, out),
        }
    }
}
