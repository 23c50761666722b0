pub mod browser;
pub mod progress;
pub mod prompt;
