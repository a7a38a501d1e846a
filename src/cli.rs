//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Waypost URL query CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Settings file path (default: waypost.toml)
    #[arg(short = 'C', long, global = true, default_value = "waypost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Normalize a content reference into its final URL
    #[command(visible_alias = "u")]
    Url {
        /// Base identifier: an absolute URL or the site prefix (may be empty)
        base: String,

        /// Path segments appended after the base
        segments: Vec<String>,

        /// Output-relative path of the rendering page (for relative-URL mode)
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        from: Option<String>,
    },

    /// Resolve the URL of a tag page
    #[command(visible_alias = "t")]
    Tag {
        /// Tag name
        tag: String,

        /// Prepend the configured site URL
        #[arg(short, long)]
        site: bool,

        /// Output-relative path of the rendering page (for relative-URL mode)
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        from: Option<String>,
    },

    /// Resolve a cache-busted static asset URL
    #[command(visible_alias = "a")]
    Asset {
        /// Asset path relative to the static root
        path: String,

        /// Static asset root directory
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        root: PathBuf,

        /// Output-relative path of the rendering page (for relative-URL mode)
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        from: Option<String>,
    },
}
