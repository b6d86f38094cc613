//! Progress and success message formatting for the packaging CLI.
//!
//! Progress goes to an injected writer rather than straight to the process
//! stderr so tests can capture it.

use camino::Utf8Path;
use std::io::Write;

/// Write a line to `stderr`, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}

/// User-facing success message naming the published archive.
#[must_use]
pub fn success_message(archive_path: &Utf8Path) -> String {
    format!("Release archive written to {archive_path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn success_message_names_the_archive() {
        let path = Utf8PathBuf::from("/tmp/dist/svc-v1.0.0-linux-x64-amd64.tar.gz");
        let msg = success_message(&path);
        assert!(msg.contains("svc-v1.0.0-linux-x64-amd64.tar.gz"));
    }

    #[test]
    fn write_stderr_line_appends_newline() {
        let mut buffer = Vec::new();
        write_stderr_line(&mut buffer, "staging complete");
        assert_eq!(buffer, b"staging complete\n");
    }
}
