use anyhow::Result;
use clap::Parser;

use lectern_cli::{
    cli::{Cli, Commands},
    commands::{self, lookup::Lookup},
    config, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(&cli)?;
    logging::init(cli.log_filter(), &config.logging);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => commands::serve::execute(config, host, port, no_cors).await?,

        Commands::Translations { format } => {
            commands::lookup::execute(config, Lookup::Translations, format).await?
        }

        Commands::Books {
            translation,
            format,
        } => commands::lookup::execute(config, Lookup::Books { translation }, format).await?,

        Commands::Chapters {
            translation,
            book,
            format,
        } => {
            commands::lookup::execute(config, Lookup::Chapters { translation, book }, format)
                .await?
        }

        Commands::Verse {
            translation,
            book,
            chapter,
            verse,
            format,
        } => {
            let lookup = Lookup::Verse {
                translation,
                book,
                chapter,
                verse,
            };
            commands::lookup::execute(config, lookup, format).await?
        }

        Commands::Stats {
            translation,
            format,
        } => commands::lookup::execute(config, Lookup::Stats { translation }, format).await?,

        Commands::Config(cmd) => commands::config::execute(cmd, &config, cli.config.as_deref())?,
    }

    Ok(())
}
