use clap::error::ErrorKind;
pub use clap::Parser;
use std::ffi::OsString;

use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "pt", version, about = "project boilerplate")]
pub struct Args {
    /// Create a new project
    #[arg(short, long, value_name = "projectName", num_args = 0..=1)]
    pub create: Option<Option<String>>,

    /// Use this template instead of asking for one
    #[arg(short, long, value_name = "TEMPLATE", requires = "create")]
    pub template: Option<String>,

    /// List the available templates
    #[arg(short, long, conflicts_with = "create")]
    pub list: bool,
}

/// What the invocation asks for.
#[derive(Debug)]
pub enum Command {
    Create {
        project_name: Option<String>,
        template: Option<String>,
    },
    List,
    /// `--help` or `--version`, printed by clap.
    Info(clap::Error),
}

impl Command {
    /// Interprets the full argument list, program name included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCommand`] when no argument follows the program
    /// name and [`Error::Unrecognized`] for anything that is not a known
    /// flag combination.
    pub fn parse_from<I, T>(argv: I) -> Result<Command>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.len() <= 1 {
            return Err(Error::EmptyCommand);
        }

        let unrecognized = || {
            Error::Unrecognized(
                argv[1..]
                    .iter()
                    .map(|a| a.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };

        let args = match Args::try_parse_from(&argv) {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                return Ok(Command::Info(e))
            }
            Err(_) => return Err(unrecognized()),
        };

        match args {
            Args { list: true, .. } => Ok(Command::List),
            Args {
                create: Some(project_name),
                template,
                ..
            } => Ok(Command::Create {
                project_name,
                template,
            }),
            _ => Err(unrecognized()),
        }
    }
}
