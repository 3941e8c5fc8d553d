use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::Error;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Pipe rendered source bytes through rustfmt and return the normalized
/// bytes.
///
/// Any failure to spawn, feed or run rustfmt is reported as
/// [`Error::Normalize`]; the caller decides what to do with the
/// unformatted bytes.
pub fn normalize_source(name: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    debug!("normalizing {name}");

    let mut child = Command::new("rustfmt")
        .args(["--edition", "2021", "--emit", "stdout"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Normalize {
            name: name.to_string(),
            detail: format!("failed to run rustfmt: {e}"),
        })?;

    // stdin is piped above, so take() always yields a handle; dropping it
    // closes the pipe and lets rustfmt finish
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(bytes).map_err(|e| Error::Normalize {
            name: name.to_string(),
            detail: format!("failed to feed rustfmt: {e}"),
        })?;
    }

    let output = child.wait_with_output().map_err(|e| Error::Normalize {
        name: name.to_string(),
        detail: format!("failed to wait for rustfmt: {e}"),
    })?;

    if !output.status.success() {
        return Err(Error::Normalize {
            name: name.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
