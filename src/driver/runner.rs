// ============================================================================
// Line Driver
// ============================================================================
//
// Feeds input lines into an InMemoryDB session one at a time and writes each
// result line to the output. Stops at END or end of input.
//
// ============================================================================

use super::{DriverConfig, ErrorPolicy, InputSource};
use crate::core::DbError;
use crate::facade::{InMemoryDB, Step};
use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Counters reported once the input is exhausted or END is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, including blank and rejected ones
    pub lines: usize,
    /// Lines skipped because they did not parse
    pub rejected: usize,
    /// True if input stopped at END rather than end of input
    pub ended: bool,
}

/// Open the configured input for line-by-line reading
pub fn open_input(config: &DriverConfig) -> Result<Box<dyn BufRead>> {
    match &config.input {
        InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        InputSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Drive `db` with every line of `input` until END or end of input
///
/// Output is flushed after every line so an interactive session sees each
/// result as soon as it is produced.
pub fn run<R: BufRead, W: Write>(
    db: &mut InMemoryDB,
    mut input: R,
    output: &mut W,
    config: &DriverConfig,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        // Undecodable bytes are a malformed line, not a broken stream.
        let step = match std::str::from_utf8(&buf) {
            Ok(line) => {
                if config.echo && !line.trim().is_empty() {
                    writeln!(output, "> {}", line.trim()).context("Failed to write output")?;
                }
                db.execute(line)
            }
            Err(err) => Err(DbError::from(err)),
        };

        match step {
            Ok(Step::Output(text)) => {
                writeln!(output, "{}", text).context("Failed to write output")?;
            }
            Ok(Step::Silent) => {}
            Ok(Step::Exit) => {
                summary.ended = true;
                break;
            }
            Err(err) => match config.error_policy {
                ErrorPolicy::Skip => {
                    warn!("line {}: {} (skipped)", summary.lines, err);
                    summary.rejected += 1;
                }
                ErrorPolicy::Abort => {
                    output.flush().context("Failed to flush output")?;
                    return Err(anyhow!(err).context(format!("line {}", summary.lines)));
                }
            },
        }

        output.flush().context("Failed to flush output")?;
    }

    info!(
        "processed {} line(s), {} rejected, {}",
        summary.lines,
        summary.rejected,
        if summary.ended { "stopped at END" } else { "end of input" }
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(script: &str, config: &DriverConfig) -> (Result<RunSummary>, String) {
        drive_bytes(script.as_bytes(), config)
    }

    fn drive_bytes(script: &[u8], config: &DriverConfig) -> (Result<RunSummary>, String) {
        let mut db = InMemoryDB::new();
        let mut out = Vec::new();
        let result = run(&mut db, script, &mut out, config);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_outputs_one_line_per_query() {
        let (result, out) = drive("SET a 10\nGET a\nNUMEQUALTO 10\nGET b\n", &DriverConfig::new());
        assert_eq!(out, "10\n1\nNULL\n");

        let summary = result.unwrap();
        assert_eq!(summary.lines, 4);
        assert!(!summary.ended);
    }

    #[test]
    fn test_end_stops_processing() {
        let (result, out) = drive("SET a 1\nEND\nGET a\n", &DriverConfig::new());
        assert_eq!(out, "");
        let summary = result.unwrap();
        assert!(summary.ended);
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_skip_policy_counts_rejected_lines() {
        let (result, out) = drive("SET a\nBOGUS\nSET a 5\nGET a\n", &DriverConfig::new());
        assert_eq!(out, "5\n");
        assert_eq!(result.unwrap().rejected, 2);
    }

    #[test]
    fn test_abort_policy_stops_on_first_error() {
        let config = DriverConfig::new().strict();
        let (result, out) = drive("SET a 1\nGET a\nGET\nGET a\n", &config);
        assert_eq!(out, "1\n");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(format!("{:#}", err).contains("GET expects 1 argument(s), got 0"));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let (result, out) = drive_bytes(b"SET a 1\nSET b \xff\xfe\nGET a\nEND\n", &DriverConfig::new());
        assert_eq!(out, "1\n");

        let summary = result.unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.lines, 4);
        assert!(summary.ended);
    }

    #[test]
    fn test_invalid_utf8_line_aborts_in_strict_mode() {
        let config = DriverConfig::new().strict();
        let (result, out) = drive_bytes(b"SET a 1\nGET a\nGET \xff\nGET a\n", &config);
        assert_eq!(out, "1\n");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(format!("{:#}", err).contains("Invalid UTF-8"));
    }

    #[test]
    fn test_echo() {
        let config = DriverConfig::new().echo(true);
        let (_, out) = drive("SET a 1\n\nGET a\n", &config);
        assert_eq!(out, "> SET a 1\n> GET a\n1\n");
    }

    #[test]
    fn test_open_missing_file_fails() {
        let config = DriverConfig::new().file("/nonexistent/commands.txt");
        let err = open_input(&config).err().unwrap();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
