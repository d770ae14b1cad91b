pub mod config;
pub mod console;
pub mod output;
pub mod session;
pub mod task;
