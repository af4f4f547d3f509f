// Centralized magic numbers & default values
pub const SEPARATOR_WIDTH: usize = 80;
pub const SEPARATOR_CHAR: char = '-';
pub const BATCH_LOG_LEVEL: &str = "warn";
pub const TUI_LOG_LEVEL: &str = "off";
