use clap::Parser;

mod ascii;
mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = cli::run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
