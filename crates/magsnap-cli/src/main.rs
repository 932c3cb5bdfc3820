#![forbid(unsafe_code)]

use clap::Parser;
use magsnap_cli::{Cli, logging};

fn main() {
    let cli = Cli::parse();
    let format = cli.log_format;
    logging::init(format);
    let stdout = std::io::stdout();
    if let Err(error) = magsnap_cli::run(cli, &mut stdout.lock()) {
        eprintln!("{}", error.report(format));
        std::process::exit(error.exit_code());
    }
}
