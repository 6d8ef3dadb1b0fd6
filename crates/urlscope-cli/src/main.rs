use clap::Parser;
use urlscope_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Log to the state dir when possible, stderr otherwise.
    if logging::init_logging(cli.verbose).is_err() {
        logging::init_logging_stderr(cli.verbose);
    }

    if let Err(err) = cli.run().await {
        eprintln!("urlscope error: {:#}", err);
        std::process::exit(1);
    }
}
