use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum NamespaceError {
    #[error("Failed to read namespace from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Namespace file '{path}' is empty")]
    Empty { path: PathBuf },
}

#[instrument("read_namespace", level = "trace")]
pub(crate) async fn read_namespace(path: &Path) -> Result<String, NamespaceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| NamespaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let namespace = raw.trim();
    if namespace.is_empty() {
        return Err(NamespaceError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(namespace.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn namespace_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_read_namespace_trims_newline() {
        let file = namespace_file("staging\n");
        assert_eq!(read_namespace(file.path()).await.unwrap(), "staging");
    }

    #[tokio::test]
    async fn test_read_namespace_rejects_empty_file() {
        let file = namespace_file(" \n");
        let err = read_namespace(file.path()).await.unwrap_err();
        assert!(matches!(err, NamespaceError::Empty { .. }));
    }

    #[tokio::test]
    async fn test_read_namespace_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_namespace(&dir.path().join("namespace"))
            .await
            .unwrap_err();
        assert!(matches!(err, NamespaceError::Read { .. }));
    }
}
