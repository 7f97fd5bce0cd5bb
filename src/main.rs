use anyhow::{Context, Result};
use cgview::cli::Args;
use cgview::config::{Config, ConfigStore};
use cgview::dialog::{ConfigDialog, DialogOutcome};
use cgview::logging::init_tracing;
use cgview::pages::default_pages;
use clap::Parser;

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let path = args.config.unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path).context("Failed to load configuration")?;
    let pages = default_pages(&store);

    if args.list_pages {
        for page in &pages {
            println!("{}\t{}", page.title(), page.long_title());
        }
        return Ok(());
    }

    let dialog = ConfigDialog::new(pages, &args.selector);
    let outcome = cgview::ui::run(dialog).context("Configuration dialog failed")?;

    match outcome {
        DialogOutcome::Accepted => {
            store.save().context("Failed to save configuration")?;
            println!("Saved configuration to {}", store.path().display());
        }
        DialogOutcome::Rejected => println!("Configuration unchanged"),
    }
    Ok(())
}
