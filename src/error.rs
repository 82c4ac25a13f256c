use std::path::PathBuf;
use thiserror::Error;

use crate::lang::{Lang, Text};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", Text::EmptyCommand.render(Lang::En))]
    EmptyCommand,

    #[error("{}", Text::Unrecognized(.0).render(Lang::En))]
    Unrecognized(String),

    #[error("{}", Text::MissingProjectName.render(Lang::En))]
    MissingProjectName,

    #[error("{}", Text::NotADirectory(&.0.display()).render(Lang::En))]
    NotADirectory(PathBuf),

    #[error("{}", Text::NotEmpty(&.0.display()).render(Lang::En))]
    NotEmpty(PathBuf),

    #[error("{}, available templates: {}", Text::UnknownTemplate(.0).render(Lang::En), crate::templates::TemplateId::names().join(", "))]
    UnknownTemplate(String),

    #[error("{}: {}", Text::PromptFailed.render(Lang::En), .0)]
    Prompt(String),

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to clone {coordinate}:\n{output}")]
    Fetch { coordinate: String, output: String },

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {}", .path.display(), .source)]
    Fs {
        path: PathBuf,
        source: fs_extra::error::Error,
    },

    #[error("{}: invalid JSON: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: `{}` is missing or not an object", .path.display(), .key)]
    MissingKey { path: PathBuf, key: String },

    #[error("step {index} ({step}) failed: {source}")]
    Step {
        index: usize,
        step: String,
        source: Box<Error>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }

    /// Renders the error in the requested language. Errors that only carry
    /// system detail keep their English text.
    #[must_use]
    pub fn localized(&self, lang: Lang) -> String {
        match self {
            Error::EmptyCommand => Text::EmptyCommand.render(lang),
            Error::Unrecognized(args) => Text::Unrecognized(args).render(lang),
            Error::MissingProjectName => Text::MissingProjectName.render(lang),
            Error::NotADirectory(path) => Text::NotADirectory(&path.display()).render(lang),
            Error::NotEmpty(path) => Text::NotEmpty(&path.display()).render(lang),
            Error::UnknownTemplate(id) => format!(
                "{}: {}",
                Text::UnknownTemplate(id).render(lang),
                crate::templates::TemplateId::names().join(", ")
            ),
            Error::Prompt(detail) => format!("{}: {detail}", Text::PromptFailed.render(lang)),
            other => other.to_string(),
        }
    }
}
