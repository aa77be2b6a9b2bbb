mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, load config, init logging, dispatch.
    match CliCommand::run_from_args() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("filtersum error: {:#}", err);
            std::process::exit(1);
        }
    }
}
