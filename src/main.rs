//! Waypost - permalink normalization and asset cache-busting for static sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use waypost::asset::{AssetHashCache, static_url};
use waypost::cli::{Cli, Commands};
use waypost::config::Settings;
use waypost::logger;
use waypost::permalink::{RenderContext, build_url, tag_url};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let settings = Settings::load(&cli.config)?;

    let url = match &cli.command {
        Commands::Url {
            base,
            segments,
            from,
        } => build_url(&settings, base, segments, context(from).as_ref())?,
        Commands::Tag { tag, site, from } => {
            tag_url(&settings, tag, *site, context(from).as_ref())?
        }
        Commands::Asset { path, root, from } => {
            let cache = AssetHashCache::new(root);
            static_url(&settings, &cache, path, context(from).as_ref())?
        }
    };

    println!("{url}");
    Ok(())
}

/// Render context from the optional `--from` page path.
fn context(from: &Option<String>) -> Option<RenderContext> {
    from.as_deref().map(RenderContext::new)
}
