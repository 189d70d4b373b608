//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod page;
pub mod seed;

use std::io::Write;
use std::path::Path;

/// Write `content` to `out`, replacing the file, or to stdout when no path is given.
async fn write_output(out: Option<&Path>, content: &str) -> std::io::Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, content).await?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()
        }
    }
}
