//! Cloning template repositories into the project directory.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::templates::Source;
use crate::trace;

/// Populates a directory with the contents of a template [`Source`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, source: &Source, dest: &Path) -> Result<()>;
}

/// Clones with the `git` executable and drops the template's history.
pub struct GitFetcher {
    program: OsString,
}

impl Default for GitFetcher {
    fn default() -> Self {
        GitFetcher {
            program: "git".into(),
        }
    }
}

impl GitFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `program` instead of the `git` found in `PATH`.
    #[must_use]
    pub fn with_program(program: impl Into<OsString>) -> Self {
        GitFetcher {
            program: program.into(),
        }
    }

    /// Arguments for `git`. `master` clones are shallow.
    #[must_use]
    pub fn clone_args(source: &Source, dest: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["clone".into(), "--branch".into(), (&source.branch).into()];
        if source.branch == "master" {
            args.push("--depth".into());
            args.push("1".into());
        }
        args.push(source.clone_url().into());
        args.push(dest.as_os_str().to_owned());
        args
    }
}

#[async_trait]
impl Fetcher for GitFetcher {
    async fn fetch(&self, source: &Source, dest: &Path) -> Result<()> {
        let args = Self::clone_args(source, dest);
        trace!(
            "Running {} {}",
            self.program.to_string_lossy(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            let mut detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if detail.is_empty() {
                detail = format!("git exited with {}", output.status);
            }
            return Err(Error::Fetch {
                coordinate: source.to_string(),
                output: detail,
            });
        }

        let history = dest.join(".git");
        if tokio::fs::try_exists(&history).await.unwrap_or(false) {
            tokio::fs::remove_dir_all(&history)
                .await
                .map_err(Error::io(&history))?;
        }

        Ok(())
    }
}
