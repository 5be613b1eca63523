use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the release packager
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output on stderr
    pub verbose: bool,

    /// Directory searched for build artifacts (defaults to the working directory)
    pub path: Option<PathBuf>,

    /// Destination of the archive (defaults to a generated temporary path)
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
        }
    }
}

fn command() -> Command {
    Command::new("package-release")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Package sector_builder_ffi build artifacts into a tar.gz archive")
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Path of the archive to create (a temporary .tar.gz path if omitted)"),
        )
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("DIR")
                .help("Directory to search for build artifacts (defaults to the current directory)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .env("PACKAGE_RELEASE_VERBOSE")
                .action(ArgAction::SetTrue)
                .help("Report packaging progress on stderr"),
        )
}
