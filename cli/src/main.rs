mod commands;
mod terminal;

use clap::CommandFactory;

use commands::CommandLine;
use machange_common::config::Config;
use machange_core::controller::MacChanger;
use machange_core::system::IfconfigRepo;
use terminal::{logging, ui::TerminalUi};

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    let cfg: Config = match Config::from_flags(cli.into_flags()) {
        Ok(cfg) => cfg,
        Err(e) => CommandLine::command()
            .error(commands::usage_error_kind(e), e)
            .exit(),
    };

    logging::init_logging()?;

    let repo = IfconfigRepo;
    let ui = TerminalUi;
    MacChanger::new(&repo, &ui).run(&cfg, &mut rand::rng());

    Ok(())
}
