//! JSON manifests (`package.json`, `tsconfig.json`) edited in place.
//!
//! Key order is kept as found in the file and documents are written back
//! with two space indentation and a trailing newline.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    doc: Value,
}

impl Manifest {
    /// # Errors
    ///
    /// Returns an [`Err`] if the file can not be read or is not valid JSON.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path).map_err(Error::io(&path))?;
        let doc = serde_json::from_str(&contents).map_err(|source| Error::Json {
            path: path.clone(),
            source,
        })?;

        Ok(Manifest { path, doc })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().try_fold(&self.doc, |value, key| value.get(key))
    }

    /// Sets `parent.key`. Every object on the way to `parent` must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `parent` does not lead to an object.
    pub fn set(&mut self, parent: &[&str], key: &str, value: Value) -> Result<()> {
        self.object_at(parent)?.insert(key.to_string(), value);
        Ok(())
    }

    /// Removes `parent.key`, keeping the order of the remaining keys.
    /// Removing a key that is not there is fine, a missing `parent` is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `parent` does not lead to an object.
    pub fn remove(&mut self, parent: &[&str], key: &str) -> Result<Option<Value>> {
        Ok(self.object_at(parent)?.shift_remove(key))
    }

    /// # Errors
    ///
    /// Returns an [`Err`] if the document can not be written.
    pub fn save(&self) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(&self.doc).map_err(|source| {
            Error::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        contents.push('\n');

        std::fs::write(&self.path, contents).map_err(Error::io(&self.path))
    }

    fn object_at(&mut self, keys: &[&str]) -> Result<&mut Map<String, Value>> {
        let path = &self.path;
        let missing = |depth: usize| Error::MissingKey {
            path: path.clone(),
            key: if depth == 0 {
                "<root>".to_string()
            } else {
                keys[..depth].join(".")
            },
        };

        let mut current = &mut self.doc;
        for (depth, key) in keys.iter().enumerate() {
            current = current
                .as_object_mut()
                .ok_or_else(|| missing(depth))?
                .get_mut(*key)
                .ok_or_else(|| missing(depth + 1))?;
        }

        current.as_object_mut().ok_or_else(|| missing(keys.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PACKAGE: &str = r#"{
  "name": "demo",
  "scripts": {
    "dev": "node webpack/dev.js",
    "dev:spa": "node webpack/dev.js spa",
    "build": "node webpack/build.js"
  },
  "dependencies": {
    "koa": "^2.13.0",
    "react": "^17.0.0"
  }
}
"#;

    fn package() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, PACKAGE).unwrap();
        (dir, path)
    }

    #[test]
    fn untouched_document_round_trips() {
        let (_dir, path) = package();
        Manifest::load(&path).unwrap().save().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), PACKAGE);
    }

    #[test]
    fn edits_keep_key_order() {
        let (_dir, path) = package();
        let mut manifest = Manifest::load(&path).unwrap();

        manifest
            .set(&["scripts"], "dev", json!("node webpack/dev.js spa"))
            .unwrap();
        assert_eq!(
            manifest.remove(&["scripts"], "dev:spa").unwrap(),
            Some(json!("node webpack/dev.js spa"))
        );
        assert_eq!(manifest.remove(&["dependencies"], "koa-static").unwrap(), None);
        manifest.remove(&["dependencies"], "koa").unwrap();
        manifest.save().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"{
  "name": "demo",
  "scripts": {
    "dev": "node webpack/dev.js spa",
    "build": "node webpack/build.js"
  },
  "dependencies": {
    "react": "^17.0.0"
  }
}
"#
        );
    }

    #[test]
    fn missing_parent() {
        let (_dir, path) = package();
        let mut manifest = Manifest::load(&path).unwrap();

        let err = manifest.remove(&["devDependencies"], "koa").unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "devDependencies"));

        let err = manifest
            .set(&["compilerOptions", "paths"], "@/*", json!(["*"]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "compilerOptions"));

        let err = manifest.set(&["name"], "x", json!(1)).unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "name"));
    }

    #[test]
    fn nested_lookup() {
        let (_dir, path) = package();
        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(
            manifest.get(&["dependencies", "react"]),
            Some(&json!("^17.0.0"))
        );
        assert_eq!(manifest.get(&["dependencies", "vue"]), None);
    }

    #[test]
    fn invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsconfig.json");
        std::fs::write(&path, "{ \"compilerOptions\": ").unwrap();

        assert!(matches!(Manifest::load(&path), Err(Error::Json { .. })));
        assert!(matches!(
            Manifest::load(dir.path().join("absent.json")),
            Err(Error::Io { .. })
        ));
    }
}
