pub mod config;
pub mod display;
pub mod grading;
pub mod help;
pub mod logging;
pub mod output;
pub mod parser;
pub mod session;
