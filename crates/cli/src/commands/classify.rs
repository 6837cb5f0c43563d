use eyre::Result;
use presence_http::StatusClass;
use std::io::Write;

pub fn execute(code: u16, out: &mut impl Write) -> Result<()> {
    let class = StatusClass::classify(code)?;
    writeln!(out, "{class}")?;
    Ok(())
}
