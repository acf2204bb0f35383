use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use ea_receiver::cli::Cli;
use ea_receiver::emitter::HexLineSink;
use ea_receiver::error::ReceiverError;
use ea_receiver::init_logger;
use ea_receiver::receiver::Receiver;

fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ReceiverError> {
    cli.validate()?;

    let path = cli.input.expect("validated above");
    let mut receiver = Receiver::new(cli.channels);
    let mut sink = HexLineSink::new(io::stdout());

    if path == "-" {
        receiver.run(BufReader::new(io::stdin()), &mut sink)?;
    } else {
        let file = File::open(&path).map_err(|source| ReceiverError::CannotOpenInput {
            path: path.clone(),
            source,
        })?;
        receiver.run(BufReader::new(file), &mut sink)?;
    }

    let stats = receiver.stats();
    info!(
        "done: {} accepted, {} rejected, {} noise resets",
        stats.frames_accepted, stats.frames_rejected, stats.noise_resets
    );

    Ok(())
}
