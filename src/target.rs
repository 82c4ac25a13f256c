use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::trace;

/// Resolves `project_name` against `cwd` without touching the filesystem.
///
/// # Errors
///
/// Returns [`Error::MissingProjectName`] if the name is absent or blank.
pub fn resolve(cwd: &Path, project_name: Option<&str>) -> Result<PathBuf> {
    let name = project_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(Error::MissingProjectName)?;

    Path::new(name)
        .absolutize_from(cwd)
        .map(|path| path.into_owned())
        .map_err(Error::io(name))
}

/// Makes sure the project directory exists and is empty, creating it when
/// absent. Only the last path component is created.
///
/// # Errors
///
/// Returns an [`Err`] if the path is not a directory, is a non empty
/// directory, or can not be read or created.
pub fn prepare(cwd: &Path, project_name: Option<&str>) -> Result<PathBuf> {
    let target = resolve(cwd, project_name)?;

    match std::fs::metadata(&target) {
        Ok(meta) if !meta.is_dir() => Err(Error::NotADirectory(target)),
        Ok(_) => {
            let mut entries = std::fs::read_dir(&target).map_err(Error::io(&target))?;
            if entries.next().is_some() {
                Err(Error::NotEmpty(target))
            } else {
                trace!("Reusing empty directory {}", target.display());
                Ok(target)
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            std::fs::create_dir(&target).map_err(Error::io(&target))?;
            trace!("Created {}", target.display());
            Ok(target)
        }
        Err(e) => Err(Error::Io {
            path: target,
            source: e,
        }),
    }
}
