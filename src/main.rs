//! CLI entry point for splitting a captcha archive into tile sets

use captiles::io::cli::Cli;
use captiles::io::configuration::Settings;
use captiles::io::prompt::{AssumeYes, Confirm, LinePrompt};
use captiles::pipeline::{Pipeline, PipelineSummary};
use clap::Parser;
use std::process::ExitCode;

// Allow print for the fatal error shown to the operator
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    captiles::io::logging::init(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> captiles::Result<PipelineSummary> {
    let settings = cli.settings()?;
    if settings.assume_yes {
        run_with(settings, AssumeYes)
    } else {
        run_with(settings, LinePrompt::console())
    }
}

fn run_with<C: Confirm>(settings: Settings, confirm: C) -> captiles::Result<PipelineSummary> {
    Pipeline::new(settings, confirm).run()
}
