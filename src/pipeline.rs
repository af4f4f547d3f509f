use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::cli::Generate;
use crate::config::Config;
use crate::session::{Command, Outcome, Session};
use crate::tokenizer;

/// Result of one non-interactive generation.
#[derive(Debug)]
pub struct BatchOutput {
    pub text: String,
    pub selected: usize,
    pub tokens: Option<usize>,
}

impl BatchOutput {
    /// One-line summary for stderr.
    pub fn summary(&self) -> String {
        match self.tokens {
            Some(tokens) => format!("OK {} selected, {tokens} tokens", self.selected),
            None => format!("OK {} selected", self.selected),
        }
    }
}

/// Compile selection globs. Every pattern must be valid.
pub fn build_selector(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid --select pattern: {pattern}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Select entries whose names match any of `patterns`. Returns the number
/// of selected entries afterwards.
pub fn preselect(
    session: &mut Session,
    patterns: &[String],
) -> Result<usize> {
    if patterns.is_empty() {
        return Ok(session.selected_count());
    }
    let selector = build_selector(patterns)?;
    session.select_where(|entry| selector.is_match(&entry.name));
    Ok(session.selected_count())
}

/// Open the configured root, apply the selection (everything when no
/// patterns were given) and generate `kind`.
pub fn run(
    config: &Config,
    kind: Generate,
) -> Result<BatchOutput> {
    let mut session = Session::open(&config.root)?;
    if config.select.is_empty() {
        session.select_where(|_| true);
    } else {
        preselect(&mut session, &config.select)?;
    }

    let command = match kind {
        Generate::Paths => Command::GeneratePaths,
        Generate::Contents => Command::GenerateContents,
    };
    let text = match session.execute(command)? {
        Outcome::Generated(text) => text,
        Outcome::Listed(_) => String::new(),
    };
    let tokens = tokenizer::count(&text);
    Ok(BatchOutput {
        text,
        selected: session.selected_count(),
        tokens,
    })
}
