use std::path::PathBuf;

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::indicator::Indicator;
use crate::lang::Text;
use crate::templates::{Prompt, Source, TemplateId};
use crate::{trace, transform};

/// Everything a run needs, passed in rather than looked up.
pub struct Session<'a> {
    pub cwd: PathBuf,
    pub settings: Settings,
    pub indicator: Indicator,
    pub prompt: &'a dyn Prompt,
    pub fetcher: &'a dyn Fetcher,
}

impl Session<'_> {
    /// Validates the target, asks for a template unless one is given, clones
    /// it and runs the template's post processing steps.
    ///
    /// Returns the project directory.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage. Nothing is cleaned up: a
    /// directory created before a failed prompt or clone is left in place.
    pub async fn create(
        &mut self,
        project_name: Option<&str>,
        template: Option<&str>,
    ) -> Result<PathBuf> {
        let lang = self.settings.lang;
        let preselected = template.map(str::parse::<TemplateId>).transpose()?;

        let target = crate::target::prepare(&self.cwd, project_name)?;
        trace!("Target directory: {}", target.display());

        let template = match preselected {
            Some(template) => template,
            None => {
                self.prompt
                    .select(
                        Text::ChooseTemplate.render(lang),
                        TemplateId::ALL.to_vec(),
                    )
                    .await?
            }
        };

        let source = Source::resolve(template, &self.settings);
        trace!("Cloning {source} from {}", source.clone_url());

        self.indicator.start(Text::FetchStart.render(lang));
        if let Err(e) = self.fetcher.fetch(&source, &target).await {
            self.indicator.fail(Text::FetchFailed.render(lang));
            return Err(e);
        }
        self.indicator.succeed(Text::FetchDone.render(lang));

        let steps = transform::steps_for(template);
        if !steps.is_empty() {
            self.indicator.start(Text::TransformStart.render(lang));
            if let Err(e) = transform::apply(&target, steps) {
                self.indicator.fail(Text::TransformFailed.render(lang));
                return Err(e);
            }
            self.indicator.succeed(Text::TransformDone.render(lang));
        }

        Ok(target)
    }

    /// One line per template: its name and where it is cloned from.
    #[must_use]
    pub fn listing(&self) -> Vec<String> {
        let width = TemplateId::names()
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or_default();

        TemplateId::ALL
            .iter()
            .map(|&t| {
                format!(
                    "{:width$}  {}",
                    t.as_str(),
                    Source::resolve(t, &self.settings)
                )
            })
            .collect()
    }
}
