//! Template specific edits applied after a successful clone.
//!
//! Each template maps to an ordered list of [`Step`]s. Steps run in order
//! and stop at the first failure, leaving earlier steps applied.

use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::templates::TemplateId;
use crate::trace;

/// One filesystem or manifest operation, with paths relative to the
/// project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Delete a directory and everything below it. Absent is fine.
    RemoveTree(&'static str),
    /// Move a file or directory.
    Rename {
        from: &'static str,
        to: &'static str,
    },
    /// Delete a directory that must be empty.
    RemoveEmptyDir(&'static str),
    /// Load a JSON manifest, apply the edits in order, write it back.
    EditManifest {
        file: &'static str,
        edits: &'static [Edit],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `parent.key = value`, the value given as JSON text.
    Set {
        parent: &'static [&'static str],
        key: &'static str,
        value: &'static str,
    },
    /// Delete each of `keys` from `parent`.
    Remove {
        parent: &'static [&'static str],
        keys: &'static [&'static str],
    },
}

/// Turns the full stack React template into a client only one.
pub const REACT_ANTD: &[Step] = &[
    Step::RemoveTree("src/server"),
    Step::Rename {
        from: "src/client",
        to: "client",
    },
    Step::Rename {
        from: "src/global.d.ts",
        to: "global.d.ts",
    },
    Step::RemoveEmptyDir("src"),
    Step::Rename {
        from: "client",
        to: "src",
    },
    Step::Rename {
        from: "global.d.ts",
        to: "src/global.d.ts",
    },
    Step::EditManifest {
        file: "package.json",
        edits: &[
            Edit::Set {
                parent: &["scripts"],
                key: "dev",
                value: r#""node webpack/dev.js spa""#,
            },
            Edit::Set {
                parent: &["scripts"],
                key: "build",
                value: r#""node webpack/build.js spa""#,
            },
            Edit::Remove {
                parent: &["scripts"],
                keys: &["dev:spa", "dev:ssr", "build:spa", "build:ssr"],
            },
            Edit::Remove {
                parent: &["dependencies"],
                keys: &[
                    "@loadable/server",
                    "art-template",
                    "koa",
                    "koa-art-template",
                    "koa-bodyparser",
                    "koa-static",
                ],
            },
            Edit::Remove {
                parent: &["devDependencies"],
                keys: &[
                    "@types/koa",
                    "@types/koa-bodyparser",
                    "@types/koa-static",
                    "@types/koa__router",
                    "@types/loadable__server",
                ],
            },
        ],
    },
    Step::EditManifest {
        file: "tsconfig.json",
        edits: &[Edit::Set {
            parent: &["compilerOptions", "paths"],
            key: "@/*",
            value: r#"["*"]"#,
        }],
    },
];

/// The steps to run after cloning `template`. Empty when the clone is used
/// as is.
#[must_use]
pub fn steps_for(template: TemplateId) -> &'static [Step] {
    match template {
        TemplateId::ReactAntd => REACT_ANTD,
        _ => &[],
    }
}

/// Runs `steps` against the project at `root`.
///
/// # Errors
///
/// Returns [`Error::Step`] naming the first step that failed. Nothing done by
/// earlier steps is undone.
pub fn apply(root: &Path, steps: &[Step]) -> Result<()> {
    for (i, step) in steps.iter().enumerate() {
        trace!("Step {}: {step}", i + 1);
        step.apply(root).map_err(|source| Error::Step {
            index: i + 1,
            step: step.to_string(),
            source: Box::new(source),
        })?;
    }

    Ok(())
}

impl Step {
    fn apply(&self, root: &Path) -> Result<()> {
        match *self {
            Step::RemoveTree(dir) => {
                let path = root.join(dir);
                fs_extra::dir::remove(&path).map_err(|source| Error::Fs { path, source })
            }
            Step::Rename { from, to } => {
                let from = root.join(from);
                std::fs::rename(&from, root.join(to)).map_err(Error::io(from))
            }
            Step::RemoveEmptyDir(dir) => {
                let path = root.join(dir);
                std::fs::remove_dir(&path).map_err(Error::io(path))
            }
            Step::EditManifest { file, edits } => {
                let mut manifest = Manifest::load(root.join(file))?;
                for edit in edits {
                    edit.apply(&mut manifest)?;
                }
                manifest.save()
            }
        }
    }
}

impl Edit {
    fn apply(&self, manifest: &mut Manifest) -> Result<()> {
        match *self {
            Edit::Set { parent, key, value } => {
                let value: Value = serde_json::from_str(value).map_err(|source| Error::Json {
                    path: manifest.path().to_path_buf(),
                    source,
                })?;
                manifest.set(parent, key, value)
            }
            Edit::Remove { parent, keys } => {
                for key in keys {
                    manifest.remove(parent, key)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::RemoveTree(dir) => write!(f, "remove {dir}"),
            Step::Rename { from, to } => write!(f, "move {from} to {to}"),
            Step::RemoveEmptyDir(dir) => write!(f, "remove empty {dir}"),
            Step::EditManifest { file, .. } => write!(f, "edit {file}"),
        }
    }
}
