use std::io::{self, IsTerminal};

use clap::Parser;

use crate::console::Console;
use crate::registry::Registry;

/// Run a registered console program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Program name; may be omitted when exactly one program is registered
    program: Option<String>,
}

/// Launches the requested program behind a single error boundary: whatever
/// fails (resolution, the session itself, the program's run) is reported on
/// stderr and the process still exits 0. The session must never crash.
pub fn run(registry: &Registry) -> anyhow::Result<()> {
    let cli = Cli::parse();
    report(launch(registry, cli.program.as_deref()))
}

fn report(outcome: anyhow::Result<()>) -> anyhow::Result<()> {
    if let Err(err) = outcome {
        eprintln!("*** {:?}", err);
    }

    Ok(())
}

fn launch(registry: &Registry, name: Option<&str>) -> anyhow::Result<()> {
    let mut program = registry.resolve(name)?;
    let mut console = match io::stdin().is_terminal() {
        true => Console::interactive()?,
        false => Console::stdio(),
    };
    program.run(&mut console)
}
