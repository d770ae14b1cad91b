use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{Console, Reply};

/// Console backed by the process's stdin and stdout.
///
/// Stdin lines are read on a plain OS thread because a blocking read cannot be
/// cancelled; the thread is simply abandoned when the process exits. A tokio
/// task listens for Ctrl-C. Both feed one channel, so a pending `ask` wakes up
/// on whichever comes first.
pub struct TerminalConsole {
    rx: mpsc::UnboundedReceiver<Reply>,
}

/// Read the next reply from `reader`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte becomes an unparsable answer instead of ending the session.
/// Only end of input and I/O failures yield `Closed`.
fn read_reply<R: BufRead>(reader: &mut R) -> Reply {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => Reply::Closed,
        Ok(_) => {
            let line = String::from_utf8_lossy(&buf);
            Reply::Line(line.trim_end_matches(&['\r', '\n'][..]).to_string())
        }
        Err(e) => {
            tracing::warn!("Failed to read from stdin: {}", e);
            Reply::Closed
        }
    }
}

impl TerminalConsole {
    /// Must be called from within a tokio runtime
    // No Default: construction spawns a tokio task
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let line_tx = tx.clone();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            let mut lock = stdin.lock();
            loop {
                let reply = read_reply(&mut lock);
                let done = reply == Reply::Closed;
                if line_tx.send(reply).is_err() || done {
                    break;
                }
            }
        });

        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(Reply::Interrupted);
            }
        });

        Self { rx }
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn ask(&mut self, prompt: &str) -> Result<Reply> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt).context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush stdout")?;

        let reply = self.rx.recv().await.unwrap_or(Reply::Closed);
        if !matches!(reply, Reply::Line(_)) {
            // Ctrl-C and EOF leave the cursor after the prompt
            writeln!(stdout).context("Failed to write to stdout")?;
        }
        Ok(reply)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", line).context("Failed to write to stdout")?;
        Ok(())
    }
}
