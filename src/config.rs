//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::components::theme::DEFAULT_SYNTAX_THEME;

/// Command line configuration for pagelayout.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagelayout", version, about, long_about = None)]
pub struct Config {
    /// Directory of markdown pages
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site metadata file (title, description, author, keywords)
    #[arg(long, default_value = "site.toml")]
    pub site: PathBuf,

    /// Syntax highlighting theme (base16-eighties.dark, InspiredGitHub, etc.)
    #[arg(long, default_value = DEFAULT_SYNTAX_THEME)]
    pub theme: String,

    /// Open the generated index page in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory or site metadata file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!("Content directory does not exist: {}", self.content.display());
        }

        if !self.site.is_file() {
            bail!("Site metadata file does not exist: {}", self.site.display());
        }

        Ok(())
    }
}
