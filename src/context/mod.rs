pub mod generate;
pub mod scanner;
pub mod types;
pub mod walk;
