use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use fontmeta::catalog::{batch_scan, Catalog};
use fontmeta::cli::{prompt_for_directory, write_fonts, Cli};
use fontmeta::utils::init_logging;
use fontmeta::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    init_logging(&config);
    debug!("Using locale '{}', output format {}", config.locale, config.output_format);

    let format = config.output_format;
    let catalog = Catalog::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(batch_file) = &cli.batch {
        for result in batch_scan(&catalog, batch_file)? {
            writeln!(out, "== {} ({} fonts)", result.dir.display(), result.fonts.len())?;
            write_fonts(&mut out, &result.fonts, format)?;
        }
        return Ok(());
    }

    let roots = if cli.paths.is_empty() {
        vec![prompt_for_directory()?]
    } else {
        cli.paths.clone()
    };

    let fonts = catalog.scan_all(&roots)?;
    write_fonts(&mut out, &fonts, format)?;
    debug!(
        "Listed {} fonts, {} parsed, {} from cache",
        fonts.len(),
        catalog.cache().misses(),
        catalog.cache().hits()
    );
    Ok(())
}
