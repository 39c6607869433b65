use clap::Parser;

use hook_coverage::cli::Cli;
use hook_coverage::commands::run_report;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    std::process::exit(run_report(&cli));
}
