use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Generate};

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute, canonical root directory.
    pub root: PathBuf,
    pub select: Vec<String>,
    /// `Some` runs the batch pipeline instead of the TUI.
    pub generate: Option<Generate>,
    pub copy: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Cli::parse())
    }

    pub fn from_args(cli: Cli) -> Result<Self> {
        let root = match cli.root {
            Some(root) => root,
            None => std::env::current_dir().context("cannot determine working directory")?,
        };
        let root = dunce::canonicalize(&root)
            .with_context(|| format!("cannot open directory {}", root.display()))?;
        Ok(Config {
            root,
            select: cli.select,
            generate: cli.generate,
            copy: cli.copy,
        })
    }

    pub fn interactive(&self) -> bool {
        self.generate.is_none()
    }
}
