use eyre::Result;
use presence_http::HttpStatus;
use std::io::Write;

use crate::config::{Config, OutputFormat};

pub fn execute(config: &Config, code: u16, out: &mut impl Write) -> Result<()> {
    let status = HttpStatus::of_status_code(code)?;
    tracing::debug!(code, reason = status.reason(), "resolved status");
    writeln!(out, "{}", render(&status, config.format))?;
    Ok(())
}

/// Render one status line in the requested format
pub fn render(status: &HttpStatus, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => status.to_string(),
        OutputFormat::Long => format!("{status} ({})", status.class()),
    }
}
