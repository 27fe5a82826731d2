//! Read-only access to the served root.

use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};

/// File-system collaborator used by the resolver.
///
/// Names are relative to the served root, without a leading '/'.
pub trait FileSource {
    /// Whether `name` is a readable regular file.
    fn exists(&self, name: &str) -> impl Future<Output = bool> + Send;

    /// Reads the whole file.
    fn read_all(&self, name: &str) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// A directory on disk served as-is.
#[derive(Debug, Clone)]
pub struct ServedRoot {
    dir: PathBuf,
}

impl ServedRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Joins `name` onto the root.
    ///
    /// Returns `None` for names that could leave the root: parent components,
    /// absolute paths and drive prefixes.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let mut components = relative.components().peekable();

        components.peek()?;
        if components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
            Some(self.dir.join(relative))
        } else {
            None
        }
    }
}

impl FileSource for ServedRoot {
    async fn exists(&self, name: &str) -> bool {
        let Some(path) = self.path_for(name) else {
            return false;
        };

        tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn read_all(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.path_for(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{name} is outside the served root"),
            )
        })?;

        tokio::fs::read(path).await
    }
}
