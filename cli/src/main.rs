mod commands;
mod terminal;

use aliasguard_common::config::Config;
use aliasguard_common::error;
use aliasguard_common::error::AliasError;
use commands::{CommandLine, Commands, export, generate, history, validate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        ephemeral: commands.ephemeral,
        data_dir: commands.data_dir,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Generate {
            address,
            method,
            tag,
            count,
            save,
        } => generate::generate(&address, method, &tag, count, save, &cfg),
        Commands::Validate { address } => validate::validate(&address, &cfg),
        Commands::History => history::list(&cfg),
        Commands::Save { alias } => history::save(&alias, &cfg),
        Commands::Remove { alias } => history::remove(&alias, &cfg),
        Commands::Clear => history::clear(&cfg),
        Commands::Export { output } => export::export(&output, &cfg),
    };

    if let Err(err) = &result {
        if let Some(alias_err) = err.downcast_ref::<AliasError>() {
            error!("{alias_err}");
            std::process::exit(1);
        }
    }

    print::end_of_program(cfg.quiet);
    result
}
