use bookshelf::utils::{logger, validation::Validate};
use bookshelf::{load_csv, Catalog, CliConfig, Shell};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bookshelf CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut catalog = Catalog::new();

    // Optional bulk load before the menu; a missing file is fatal here since
    // the user asked for it explicitly on the command line.
    if let Some(path) = &config.import {
        let summary = load_csv(path, &mut catalog)?;
        println!("✅ Imported {} books from {}", summary.added, path);
        for err in &summary.errors {
            eprintln!("❌ {}", err);
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), catalog);
    shell.run()?;

    Ok(())
}
