//! Compose file writer
//!
//! Persists the generated document under the user's cache directory:
//! `<cache>/octocompose/<project>/compose.yaml`.

use super::document::ComposeDocument;
use crate::error::{OperatorError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Directory under the cache root that holds all projects
pub const CACHE_NAMESPACE: &str = "octocompose";

/// File name of the generated compose file
pub const COMPOSE_FILE_NAME: &str = "compose.yaml";

/// Writes compose documents to per-project cache paths
#[derive(Debug, Clone)]
pub struct ComposeWriter {
    cache_root: PathBuf,
}

impl ComposeWriter {
    /// Create a writer rooted at `cache_root`
    pub fn new(cache_root: PathBuf) -> Self {
        Self { cache_root }
    }

    /// Create a writer rooted at the user cache directory
    pub fn from_user_cache() -> Result<Self> {
        dirs::cache_dir().map(Self::new).ok_or_else(|| {
            error!("Error while getting cache directory");
            OperatorError::CacheDir("no user cache directory for this platform".to_string())
        })
    }

    /// Path of the compose file for a project
    pub fn path_for(&self, project_id: &str) -> PathBuf {
        self.cache_root
            .join(CACHE_NAMESPACE)
            .join(project_id)
            .join(COMPOSE_FILE_NAME)
    }

    /// Serialize and write a document, returning its path
    ///
    /// Any previous file for the project is removed first; concurrent
    /// writers for the same project are not coordinated.
    pub fn write(&self, doc: &ComposeDocument, project_id: &str) -> Result<PathBuf> {
        let content = doc.to_yaml().map_err(|e| {
            error!(error = %e, "Error while marshalling");
            e
        })?;

        let path = self.path_for(project_id);
        if let Some(parent) = path.parent() {
            create_private_dir(parent).map_err(|e| {
                error!(path = %parent.display(), error = %e, "Error while creating the cache directory");
                e
            })?;
        }

        if path.exists() {
            debug!(path = %path.display(), "Removing existing compose file");
            fs::remove_file(&path).map_err(|e| {
                error!(path = %path.display(), error = %e, "Error while removing existing file");
                e
            })?;
        }

        write_private_file(&path, content.as_bytes()).map_err(|e| {
            error!(path = %path.display(), error = %e, "Error while writing file");
            e
        })?;

        info!(path = %path.display(), services = doc.services.len(), "Wrote compose file");
        Ok(path)
    }
}

fn create_private_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(path)
}

fn write_private_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::document::ComposeService;
    use serde_json::Map;
    use tempfile::TempDir;

    fn sample_document() -> ComposeDocument {
        let mut doc = ComposeDocument::new("demo");
        doc.services.insert(
            "web".to_string(),
            ComposeService {
                enabled: None,
                image: "reg.io/app:1.0".to_string(),
                command: None,
                entrypoint: None,
                extra: Map::new(),
            },
        );
        doc
    }

    #[test]
    fn test_path_for() {
        let writer = ComposeWriter::new(PathBuf::from("/home/user/.cache"));
        assert_eq!(
            writer.path_for("demo"),
            PathBuf::from("/home/user/.cache/octocompose/demo/compose.yaml")
        );
    }

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ComposeWriter::new(temp_dir.path().to_path_buf());
        let doc = sample_document();

        let path = writer.write(&doc, "demo").unwrap();
        assert_eq!(path, temp_dir.path().join("octocompose/demo/compose.yaml"));

        let content = fs::read_to_string(&path).unwrap();
        let parsed: ComposeDocument = serde_yaml::from_str(&content).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ComposeWriter::new(temp_dir.path().to_path_buf());

        let stale = writer.path_for("demo");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "stale: true\n").unwrap();

        let path = writer.write(&sample_document(), "demo").unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("reg.io/app:1.0"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let writer = ComposeWriter::new(temp_dir.path().to_path_buf());
        let path = writer.write(&sample_document(), "demo").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);

        let dir_mode = fs::metadata(path.parent().unwrap())
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700);
    }

    #[test]
    fn test_write_fails_when_cache_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let writer = ComposeWriter::new(blocker);
        let result = writer.write(&sample_document(), "demo");
        assert!(matches!(result, Err(OperatorError::Io(_))));
    }
}
