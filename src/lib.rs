pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod session;
pub mod tokenizer;
pub mod ui;

pub use context::generate;
pub use context::scanner;
pub use context::types::Entry;
pub use session::{Command, Outcome, Session};
