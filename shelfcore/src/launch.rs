//! Opening shelf entries with the OS default handler
//!
//! Failure is reported to the caller for a status-line message; it never
//! reaches the shelf model and never crashes the process.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("could not open {}: {source}", path.display())]
pub struct LaunchError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Hand `path` to the operating system's default handler.
pub fn launch(path: &Path) -> Result<(), LaunchError> {
    open::that(path).map_err(|source| LaunchError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_names_the_path() {
        let err = LaunchError {
            path: PathBuf::from("/tmp/gone.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/gone.txt"));
        assert!(msg.contains("no handler"));
    }
}
