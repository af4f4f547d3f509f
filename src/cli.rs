use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which text to generate in batch mode.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generate {
    /// Flattened list of relative paths.
    Paths,
    /// Concatenated file contents.
    Contents,
}

#[derive(Parser, Debug)]
#[command(name = "dirpick")]
#[command(
    about = "Browse a directory, tick files and folders, and generate either their relative \
             paths or their concatenated contents for pasting into an LLM prompt."
)]
pub struct Cli {
    /// Directory to browse; defaults to the current working directory.
    pub root: Option<PathBuf>,

    /// Preselect entries whose names match this glob. Repeatable.
    #[arg(short = 's', long = "select")]
    pub select: Vec<String>,

    /// Skip the TUI: print the generated text to stdout and exit.
    #[arg(short = 'g', long = "generate", value_enum)]
    pub generate: Option<Generate>,

    /// In batch mode, also copy the generated text to the clipboard.
    #[arg(short = 'c', long = "copy", requires = "generate")]
    pub copy: bool,
}
