use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::verdict::Verdict;

/// Configuration for line-oriented checking
#[derive(Debug, Clone)]
pub struct LineReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for LineReaderConfig {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

/// Counters for one pass over an input stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub lines_read: u64,
    pub lines_checked: u64,
    pub palindromes: u64,
    pub blank_lines_skipped: u64,
    pub bytes_read: u64,
}

/// Remove one trailing `\n` or `\r\n`, if present.
///
/// A final line with no terminator is returned untouched.
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}

/// Reads candidates one per line and writes a verdict for each
pub struct LineChecker {
    config: LineReaderConfig,
}

impl LineChecker {
    pub fn new(config: LineReaderConfig) -> Self {
        Self { config }
    }

    /// Check every non-empty line of `input` until end of input, writing one
    /// verdict line per candidate to `output` in input order.
    ///
    /// Lines are raw bytes; a line that is not UTF-8 is still checked and
    /// echoed verbatim.
    pub async fn check_lines<R, W>(&self, input: R, output: &mut W) -> Result<LineStats>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut line = Vec::new();
        let mut stats = LineStats::default();

        loop {
            line.clear();
            let n = match reader.read_until(b'\n', &mut line).await {
                Ok(n) => n,
                Err(e) => {
                    let line_number = stats.lines_read + 1;
                    warn!(line = line_number, error = %e, "Failed to read input line");
                    // WHY: verdicts already produced must reach the caller before the error does
                    output.flush().await.context("Failed to flush output")?;
                    return Err(e).with_context(|| format!("Failed to read input line {line_number}"));
                }
            };
            if n == 0 {
                break;
            }

            stats.lines_read += 1;
            stats.bytes_read += n as u64;

            let candidate = strip_line_terminator(&line);
            if candidate.is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let verdict = Verdict::check(candidate);
            debug!(line = stats.lines_read, is_palindrome = verdict.is_palindrome, "Checked line");

            stats.lines_checked += 1;
            if verdict.is_palindrome {
                stats.palindromes += 1;
            }

            output
                .write_all(&verdict.to_line())
                .await
                .context("Failed to write verdict")?;
        }

        output.flush().await.context("Failed to flush output")?;

        info!(
            lines_read = stats.lines_read,
            lines_checked = stats.lines_checked,
            palindromes = stats.palindromes,
            blank_lines_skipped = stats.blank_lines_skipped,
            bytes_read = stats.bytes_read,
            "End of input"
        );

        Ok(stats)
    }
}

/// Check standard input line by line, writing verdicts to standard output
pub async fn check_stdin(config: LineReaderConfig) -> Result<LineStats> {
    let checker = LineChecker::new(config);
    let mut stdout = tokio::io::stdout();
    checker.check_lines(tokio::io::stdin(), &mut stdout).await
}
