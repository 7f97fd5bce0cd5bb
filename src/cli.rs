use clap::Parser;
use std::path::PathBuf;

/// Edit the settings of the cgview profile viewer.
#[derive(Debug, Parser)]
#[command(name = "cgview", version)]
pub struct Args {
    /// Config file to edit [default: <config dir>/cgview/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the page titles and exit
    #[arg(long)]
    pub list_pages: bool,

    /// Page to open first, optionally with a field ("General/precision")
    #[arg(value_name = "SELECTOR", default_value = "")]
    pub selector: String,
}
