use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::Cli;

pub fn execute(shell: Shell, out: &mut impl Write) -> eyre::Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
    Ok(())
}
