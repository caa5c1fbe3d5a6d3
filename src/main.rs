mod config;
mod core;
mod domain;
mod error;
mod localize;
mod processing;
mod render;
mod session;
mod source;
mod surface;
#[cfg(test)]
mod testing;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    localize::localize();

    let cli = config::Cli::parse();
    let config = config::ViewerConfig::load().with_cli(&cli);
    core::app::run(config)
}
