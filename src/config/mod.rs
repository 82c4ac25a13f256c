use derive_builder::Builder;
use directories::UserDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lang::Lang;
use crate::{trace, warn};

pub const DEFAULT_HOST: &str = "gitee.com";
pub const DEFAULT_OWNER: &str = "Thyiad";
pub const DEFAULT_BRANCH: &str = "master";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Settings {
    #[builder(default = "DEFAULT_HOST.to_string()")]
    pub host: String,
    #[builder(default = "DEFAULT_OWNER.to_string()")]
    pub owner: String,
    #[builder(default = "DEFAULT_BRANCH.to_string()")]
    pub branch: String,
    #[builder(default)]
    pub lang: Lang,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            lang: Lang::default(),
        }
    }
}

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub host: Option<String>,
    pub owner: Option<String>,
    pub branch: Option<String>,
    pub lang: Option<Lang>,
}

impl FileSettings {
    /// Reads the file at `path`. A missing file yields the empty settings.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the file exists but can not be read or is not
    /// valid JSON for [`FileSettings`].
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            trace!("No config file at {}", path.display());
            return Ok(FileSettings::default());
        }

        let contents = std::fs::read_to_string(path).map_err(Error::io(path))?;
        serde_json::from_str(&contents).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Settings {
    /// Create a new [`Settings`] builder
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Layers the environment over the file values over the defaults.
    ///
    /// Recognized variables: `PT_GIT_HOST`, `PT_GIT_OWNER`, `PT_GIT_BRANCH`,
    /// plus `PT_LANG` and `LANG` when the file sets no language.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if a resolved value is empty.
    pub fn resolve(file: FileSettings, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Settings::builder();

        if let Some(host) = env("PT_GIT_HOST").or(file.host) {
            builder.host(host);
        }
        if let Some(owner) = env("PT_GIT_OWNER").or(file.owner) {
            builder.owner(owner);
        }
        if let Some(branch) = env("PT_GIT_BRANCH").or(file.branch) {
            builder.branch(branch);
        }
        builder.lang(Lang::detect(file.lang, &env));

        let settings = builder
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        for (key, value) in [
            ("host", &settings.host),
            ("owner", &settings.owner),
            ("branch", &settings.branch),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("`{key}` can not be empty")));
            }
        }

        Ok(settings)
    }

    /// Loads the settings for this process from the default config location
    /// and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the config file is malformed.
    pub fn load() -> Result<Self> {
        let file = match PtDirs::default_paths() {
            Some(dirs) => FileSettings::read(&dirs.config_file())?,
            None => {
                warn!("Could not determine the home directory, ignoring {CONFIG_FILE}");
                FileSettings::default()
            }
        };

        Settings::resolve(file, |key| std::env::var(key).ok())
    }
}

/// Well known directories of the tool.
pub struct PtDirs {
    config_dir: PathBuf,
}

impl PtDirs {
    /// Locates the directories for the current user, or [`None`] when no
    /// home directory can be determined.
    #[must_use]
    pub fn default_paths() -> Option<Self> {
        let home = UserDirs::new()?.home_dir().to_owned();
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

        Some(PtDirs {
            config_dir: Self::get_config_dir(&home, xdg),
        })
    }

    /// Returns the path where the config lives
    ///
    /// Looks for the configuration dir, in order:
    /// - `$XDG_CONFIG_HOME/pt`
    /// - `~/.config/pt`
    /// - `~/.pt`
    #[must_use]
    pub fn get_config_dir(home: &Path, xdg_config_home: Option<PathBuf>) -> PathBuf {
        let config_home = xdg_config_home.unwrap_or_else(|| home.join(".config"));

        if config_home.is_dir() {
            config_home.join("pt")
        } else {
            home.join(".pt")
        }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        self.config_dir.as_path()
    }

    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }
}
