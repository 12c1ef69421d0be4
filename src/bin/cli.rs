// src/bin/cli.rs
use ghdb_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    // Scan failures are already reported; only setup errors get here.
    cli::run()?;
    Ok(())
}
