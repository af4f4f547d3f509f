use std::io::Write;

use anyhow::Result;
use dirpick::{
    config::Config,
    constants::{BATCH_LOG_LEVEL, TUI_LOG_LEVEL},
    io::clipboard,
    logging, pipeline,
    session::Session,
    ui,
};

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    logging::init(if config.interactive() {
        TUI_LOG_LEVEL
    } else {
        BATCH_LOG_LEVEL
    });

    let Some(kind) = config.generate else {
        let mut session = Session::open(&config.root)?;
        pipeline::preselect(&mut session, &config.select)?;
        return ui::run_tui(session);
    };

    let output = pipeline::run(&config, kind)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.text.as_bytes())?;
    if !output.text.is_empty() && !output.text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    if config.copy {
        clipboard::copy_to_clipboard(&output.text, false)?;
    }
    eprintln!("{}", output.summary());
    Ok(())
}
