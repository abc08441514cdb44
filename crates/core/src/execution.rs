use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use log::{info, warn};

use crate::error::{Error, Result};

/// A writer that starts every output line with a fixed prefix.
///
/// The prefix is written lazily, when the first byte of a line arrives, so a
/// trailing newline never leaves a dangling prefix behind.
pub struct PrefixWriter<W: Write> {
    inner: W,
    prefix: String,
    at_line_start: bool,
}

impl<W: Write> PrefixWriter<W> {
    pub fn new(inner: W, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            at_line_start: true,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for PrefixWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in buf.split_inclusive(|&b| b == b'\n') {
            if self.at_line_start {
                self.inner.write_all(self.prefix.as_bytes())?;
            }
            self.inner.write_all(line)?;
            self.at_line_start = line.ends_with(b"\n");
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Copies `reader` into `writer` until EOF, prefixing each line.
///
/// # Errors
///
/// Returns any I/O error from reading or writing.
pub fn forward_with_prefix<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    prefix: &str,
) -> io::Result<u64> {
    let mut writer = PrefixWriter::new(writer, prefix);
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Runs a command to completion, forwarding its stdout and stderr to ours
/// with every line prefixed.
///
/// # Errors
///
/// Returns [`Error::SubProcess`] if the process cannot be started or waited
/// on, and [`Error::SubProcessExit`] if it exits with a non-zero status.
pub fn execute_with_prefix(mut command: Command, prefix: &str) -> Result<()> {
    let executable = command.get_program().to_string_lossy().to_string();
    info!("Executing `{}` with output prefix {:?}", executable, prefix);

    let mut child = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::sub_process(&executable, e))?;

    let child_stdout = child.stdout.take();
    let child_stderr = child.stderr.take();

    let status = thread::scope(|scope| {
        let stdout_forwarder = child_stdout
            .map(|out| scope.spawn(move || forward_with_prefix(out, io::stdout(), prefix)));
        let stderr_forwarder = child_stderr
            .map(|err| scope.spawn(move || forward_with_prefix(err, io::stderr(), prefix)));

        for forwarder in [stdout_forwarder, stderr_forwarder].into_iter().flatten() {
            match forwarder.join() {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => warn!("Failed forwarding output of `{}`: {}", executable, e),
                Err(_) => warn!("Output forwarder for `{}` panicked", executable),
            }
        }

        child.wait()
    })
    .map_err(|e| Error::sub_process(&executable, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit { executable, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed(chunks: &[&str], prefix: &str) -> String {
        let mut writer = PrefixWriter::new(Vec::new(), prefix);
        for chunk in chunks {
            writer.write_all(chunk.as_bytes()).unwrap();
        }
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_prefix_every_line() {
        assert_eq!(prefixed(&["one\ntwo\n"], "> "), "> one\n> two\n");
    }

    #[test]
    fn test_prefix_without_trailing_newline() {
        assert_eq!(prefixed(&["one\ntwo"], "> "), "> one\n> two");
    }

    #[test]
    fn test_prefix_line_split_across_writes() {
        assert_eq!(prefixed(&["on", "e\nt", "wo\n"], "> "), "> one\n> two\n");
    }

    #[test]
    fn test_no_dangling_prefix_after_last_newline() {
        assert_eq!(prefixed(&["done\n"], "  Copilot> "), "  Copilot> done\n");
    }

    #[test]
    fn test_prefix_empty_lines() {
        assert_eq!(prefixed(&["\n\n"], "> "), "> \n> \n");
    }

    #[test]
    fn test_forward_with_prefix() {
        let mut output = Vec::new();
        let copied = forward_with_prefix("a\nb\n".as_bytes(), &mut output, "| ").unwrap();
        assert_eq!(copied, 4);
        assert_eq!(String::from_utf8(output).unwrap(), "| a\n| b\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_success() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo forwarded; echo also >&2"]);
        assert!(execute_with_prefix(command, "test> ").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_non_zero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);
        match execute_with_prefix(command, "test> ") {
            Err(Error::SubProcessExit { executable, status }) => {
                assert_eq!(executable, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected SubProcessExit, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_missing_executable() {
        let command = Command::new("choice-prompt-no-such-executable");
        let result = execute_with_prefix(command, "test> ");
        assert!(matches!(result, Err(Error::SubProcess { .. })));
    }
}
