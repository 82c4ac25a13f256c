use anyhow::Result;
use std::process::ExitCode;
use pt::{
    app::Session,
    args::Command,
    config::Settings,
    error, info,
    fetch::GitFetcher,
    indicator::Indicator,
    lang::{Lang, Text},
    templates::InquirePrompt,
    trace,
};

async fn app(command: Command, settings: Settings) -> Result<()> {
    let lang = settings.lang;
    let mut session = Session {
        cwd: std::env::current_dir()?,
        settings,
        indicator: Indicator::new(),
        prompt: &InquirePrompt,
        fetcher: &GitFetcher::new(),
    };

    trace!("Working directory: {}", session.cwd.display());
    trace!("Settings: {:?}", session.settings);

    match command {
        Command::Info(e) => e.print().map_err(Into::into),
        Command::List => {
            for line in session.listing() {
                println!("{line}");
            }
            Ok(())
        }
        Command::Create {
            project_name,
            template,
        } => {
            let target = session
                .create(project_name.as_deref(), template.as_deref())
                .await?;
            info!("{}", Text::Created(&target.display()).render(lang));
            Ok(())
        }
    }
}

fn report(err: &anyhow::Error, lang: Lang) {
    match err.downcast_ref::<pt::Error>() {
        Some(e) => error!(e.localized(lang)),
        None => error!("{err:#}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = Settings::load();
    let lang = settings
        .as_ref()
        .map(|s| s.lang)
        .unwrap_or_else(|_| Lang::detect(None, |key| std::env::var(key).ok()));

    let result = match Command::parse_from(std::env::args_os()) {
        Ok(Command::Info(e)) => e.print().map_err(Into::into),
        Ok(command) => match settings {
            Ok(settings) => app(command, settings).await,
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, lang);
            ExitCode::FAILURE
        }
    }
}
