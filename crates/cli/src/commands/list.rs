use eyre::Result;
use presence_core::Optional;
use presence_http::{HttpStatus, StatusClass};
use std::io::Write;

use super::status::render;
use crate::config::Config;

pub fn execute(config: &Config, class: Option<StatusClass>, out: &mut impl Write) -> Result<()> {
    let class = Optional::from(class);

    let mut listed = 0usize;
    for status in HttpStatus::all() {
        let selected = class
            .as_ref()
            .map(|class| class.contains(status.code()))
            .or_else(true);
        if selected {
            writeln!(out, "{}", render(status, config.format))?;
            listed += 1;
        }
    }

    tracing::debug!(listed, "listed statuses");
    Ok(())
}
