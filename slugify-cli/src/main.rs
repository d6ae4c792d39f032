//! # slugify CLI
//!
//! Command-line interface for the slugify library.

mod commands;
mod report;

use clap::{Parser, Subcommand};
use slugify_core::Replacement;
use slugify_types::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slugify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (defaults to ./slugify.yml when present)
    #[arg(long, env = "SLUGIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to slugs, one per line
    Convert {
        /// Text to convert
        #[arg(required = true)]
        texts: Vec<String>,

        /// Join words with `_` instead of `-`
        #[arg(long)]
        underscore: bool,

        /// Keep the original letter case
        #[arg(long)]
        keep_case: bool,

        /// Spell non-Latin scripts in ASCII
        #[arg(long)]
        transliterate: bool,

        /// Locale for case folding and digraphs (e.g. de, fr-FR, tr)
        #[arg(long)]
        locale: Option<Locale>,

        /// Literal replacement applied before conversion (repeatable, in order)
        #[arg(long = "replace", value_name = "FROM=TO", value_parser = commands::convert::parse_replacement)]
        replacements: Vec<Replacement>,

        /// Word to drop from the slug (repeatable)
        #[arg(long = "stopword", value_name = "WORD")]
        stopwords: Vec<String>,

        /// Maximum slug length
        #[arg(long)]
        max_length: Option<usize>,

        /// Only truncate between words
        #[arg(long)]
        word_boundary: bool,

        /// With --word-boundary, stop at the first word that does not fit
        #[arg(long)]
        save_order: bool,

        /// Decode HTML entities (&amp;, &#169;) first
        #[arg(long)]
        entities: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check whether values are already valid slugs
    Check {
        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a starter slugify.yml
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Convert {
            texts,
            underscore,
            keep_case,
            transliterate,
            locale,
            replacements,
            stopwords,
            max_length,
            word_boundary,
            save_order,
            entities,
            json,
        } => {
            let opts = commands::ConvertOptions {
                underscore,
                keep_case,
                transliterate,
                locale,
                replacements,
                stopwords,
                max_length,
                word_boundary,
                save_order,
                entities,
                json,
            };
            commands::convert_texts(config, &texts, opts)
        }
        Commands::Check { values, json } => commands::check_slugs(config, &values, json),
        Commands::Init { path } => commands::init_config(path.as_deref()),
    }
}
