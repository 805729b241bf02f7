use anyhow::Context;
use clap::Parser;
use loosever::cli::{Cli, execute};
use loosever::config::Config;
use loosever::logging;
use loosever::version::VersionParser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let _guard = logging::init(&config.log).context("Failed to initialize logging")?;

    let parser = VersionParser::new(cli.parse_options(&config));
    for line in execute(&cli.command, &parser)? {
        println!("{line}");
    }

    Ok(())
}
