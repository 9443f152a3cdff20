use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory for one generation run.
pub struct Project {
    root: TempDir,
}

pub fn tempdir() -> Project {
    Project {
        root: tempfile::Builder::new()
            .prefix("gostart")
            .tempdir()
            .unwrap(),
    }
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root.path().join(path).exists()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.root.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("couldn't read file {path:?}"))
    }
}
