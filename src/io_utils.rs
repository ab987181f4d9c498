use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file is not valid UTF-8 text.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a library error into a CLI error with a hint.
///
/// I/O errors raised while touching `path` get the same treatment as
/// [`io_cli_error`].
pub fn table_cli_error(context: &str, path: Option<&Path>, err: crate::TableError) -> CliError {
    let msg = match (&err, path) {
        (crate::TableError::Io(io), Some(path)) => format_io_error("reading", path, io),
        _ => cli_hint(&err),
    };
    CliError {
        msg: format!("{context}: {msg}"),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::TableError) -> String {
    use crate::TableError::*;
    match err {
        Model(msg) => format!("{msg}. Provide a text embedding file with --vectors."),
        Fetch(e) => format!("{e}. Check the network connection or use --words-file."),
        HttpStatus { url, status } => {
            format!("HTTP {status} from {url}. Failed to download word list.")
        }
        NoTargets => "Sentence has no significant words. Choose a different sentence.".into(),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Json(e) => format!("{e}. Serialization failed."),
        Payload(msg) => format!("{msg}. Regenerate the table."),
        Io(io) => format!("{io}"),
    }
}
