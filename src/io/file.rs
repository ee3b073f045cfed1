//! Whole-file helpers.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Reads an entire file into a buffer suitable for splitting.
///
/// # Example
///
/// ```no_run
/// use bufsplit::{io::read_file, split_buffer};
///
/// let data = read_file("records.csv")?;
/// let blocks = split_buffer(&data, b'\n', 8)?;
/// println!("{} blocks", blocks.len());
/// # Ok::<(), bufsplit::Error>(())
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, data)?;
    debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");

        write_file(&path, b"a,b,c\n1,2,3\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"a,b,c\n1,2,3\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        write_file(&path, b"").unwrap();
        assert!(read_file(&path).unwrap().is_empty());
    }
}
