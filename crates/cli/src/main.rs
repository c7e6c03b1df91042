use clap::Parser;
use donation_tally_cli::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    donation_tally_cli::init_logging(args.verbose, args.quiet);

    match donation_tally_cli::execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
