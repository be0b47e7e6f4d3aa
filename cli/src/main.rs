mod commands;
mod terminal;

use anyhow::Context;
use commands::{CommandLine, Commands, apply, tours, weather};
use tourbook_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbosity());
    print::initialize(commands.quiet);

    let mut cfg: Config = Config::from_env().context("loading configuration")?;
    if let Some(url) = commands.api_url {
        cfg.api.base_url = url;
    }

    print::banner();

    let result: anyhow::Result<()> = match commands.command {
        Commands::Tours => {
            print::header("tours");
            tours::tours(&cfg).await
        }
        Commands::Weather => {
            print::header("weather in china");
            weather::weather(&cfg).await
        }
        Commands::Apply(args) => {
            print::header("tour application");
            apply::apply(args, &cfg).await
        }
    };

    print::end_of_program();
    result
}
