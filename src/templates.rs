use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::config::Settings;
use crate::error::{Error, Result};

/// Repository shared by the client-only and the server rendered React templates.
pub const SHARED_REACT_REPOSITORY: &str = "react-ssr";

/// Prefix of every other template repository.
pub const REPOSITORY_PREFIX: &str = "pt-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ReactAntd,
    ReactSsrAntd,
    ReactAntdProV4,
    ReactAntdProV2,
    VueMaterial,
    VueElement,
    KoaMongo,
    NetCoreWebapi,
}

impl TemplateId {
    /// Every template, in the order the prompt lists them.
    pub const ALL: [TemplateId; 8] = [
        TemplateId::ReactAntd,
        TemplateId::ReactSsrAntd,
        TemplateId::ReactAntdProV4,
        TemplateId::ReactAntdProV2,
        TemplateId::VueMaterial,
        TemplateId::VueElement,
        TemplateId::KoaMongo,
        TemplateId::NetCoreWebapi,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ReactAntd => "react-antd",
            TemplateId::ReactSsrAntd => "react-ssr-antd",
            TemplateId::ReactAntdProV4 => "react-antd-pro-v4",
            TemplateId::ReactAntdProV2 => "react-antd-pro-v2",
            TemplateId::VueMaterial => "vue-material",
            TemplateId::VueElement => "vue-element",
            TemplateId::KoaMongo => "koa-mongo",
            TemplateId::NetCoreWebapi => "net-core-webapi",
        }
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }

    /// Name of the repository holding this template.
    #[must_use]
    pub fn repository(self) -> String {
        match self {
            TemplateId::ReactAntd | TemplateId::ReactSsrAntd => SHARED_REACT_REPOSITORY.to_string(),
            other => format!("{REPOSITORY_PREFIX}{}", other.as_str()),
        }
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

/// Where a template is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub host: String,
    pub owner: String,
    pub repository: String,
    pub branch: String,
}

impl Source {
    #[must_use]
    pub fn resolve(template: TemplateId, settings: &Settings) -> Self {
        Source {
            host: settings.host.clone(),
            owner: settings.owner.clone(),
            repository: template.repository(),
            branch: settings.branch.clone(),
        }
    }

    /// URL handed to `git clone`.
    ///
    /// A bare host such as `gitee.com` clones over ssh
    /// (`git@gitee.com:owner/repo.git`). A host with a scheme
    /// (`https://`, `http://`, `file://`) is joined with `/`.
    #[must_use]
    pub fn clone_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            format!("{host}/{}/{}.git", self.owner, self.repository)
        } else if let Some(ssh) = host.strip_prefix("git@") {
            format!("git@{ssh}:{}/{}.git", self.owner, self.repository)
        } else {
            format!("git@{host}:{}/{}.git", self.owner, self.repository)
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}/{}#{}",
            self.host, self.owner, self.repository, self.branch
        )
    }
}

/// Asks the user to pick one template.
#[async_trait]
pub trait Prompt: Send + Sync {
    async fn select(&self, message: String, choices: Vec<TemplateId>) -> Result<TemplateId>;
}

/// Terminal single choice list.
pub struct InquirePrompt;

#[async_trait]
impl Prompt for InquirePrompt {
    async fn select(&self, message: String, choices: Vec<TemplateId>) -> Result<TemplateId> {
        let page_size = choices.len().max(1);

        tokio::task::spawn_blocking(move || {
            inquire::Select::new(&message, choices)
                .with_page_size(page_size)
                .prompt()
        })
        .await
        .map_err(|e| Error::Prompt(e.to_string()))?
        .map_err(|e| Error::Prompt(e.to_string()))
    }
}
