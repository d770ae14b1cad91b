pub mod terminal;

use anyhow::Result;
use async_trait::async_trait;

pub use terminal::TerminalConsole;

/// What came back from the user after a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A full line of input, without the trailing newline
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// Input reached end of file
    Closed,
}

/// Line-oriented interaction with the person practicing.
///
/// The session controller only talks through this trait, so tests can drive
/// it with scripted or self-answering consoles.
#[async_trait]
pub trait Console: Send {
    /// Show `prompt` (without a newline) and wait for the next reply
    async fn ask(&mut self, prompt: &str) -> Result<Reply>;

    /// Print one full line of output
    fn say(&mut self, line: &str) -> Result<()>;
}
