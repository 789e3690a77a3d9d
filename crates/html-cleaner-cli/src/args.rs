use std::path::PathBuf;

use clap::Parser;

/// Strip presentation, scripts, forms, navigation, media and metadata from an HTML
/// document, keeping its semantic structure and visible text.
#[derive(Parser, Debug)]
#[command(name = "html-cleaner", author, version, about, long_about = None)]
pub struct Cli {
    /// HTML file to clean.
    #[arg(value_name = "INPUT", default_value = "input.html")]
    pub input: PathBuf,

    /// Where to write the cleaned HTML.
    #[arg(value_name = "OUTPUT", default_value = "output.html")]
    pub output: PathBuf,

    /// JSON file with cleaning options; fields it omits keep their defaults.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the post-formatter (one tag or text run per line, empty tags removed).
    #[arg(long)]
    pub raw: bool,

    /// Additional tag to remove together with its content (repeatable).
    #[arg(long = "remove-tag", value_name = "TAG")]
    pub remove_tags: Vec<String>,

    /// Additional tag to unwrap, keeping its content (repeatable).
    #[arg(long = "unwrap-tag", value_name = "TAG")]
    pub unwrap_tags: Vec<String>,

    /// Log progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
