use crate::prelude::{eprintln, *};
use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

mod config;
mod convert;
mod error;
mod loader;
mod logging;
mod output;
mod prelude;

/// Exit status when a required option is absent or empty
const MISSING_OPTION_EXIT_CODE: i32 = 1;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "This tool converts Insomnia-exported files (v5 YAML) into Bruno collection files."
)]
pub struct App {
    /// Path to Insomnia exported file
    #[clap(
        short = 'f',
        long = "file",
        env = "BRUCONV_FILE",
        value_parser = NonEmptyStringValueParser::new().map(PathBuf::from)
    )]
    file: PathBuf,

    /// Output directory
    #[clap(
        short = 'o',
        long = "output",
        env = "BRUCONV_OUTPUT",
        value_parser = NonEmptyStringValueParser::new().map(PathBuf::from)
    )]
    output: PathBuf,

    /// Name of bruno collection
    #[clap(
        short = 'n',
        long = "name",
        env = "BRUCONV_NAME",
        value_parser = NonEmptyStringValueParser::new()
    )]
    name: String,

    /// Whether to display additional information.
    #[clap(long, env = "BRUCONV_VERBOSE", default_value = "false")]
    verbose: bool,
}

/// Result of reading the command line
#[derive(Debug)]
enum Args {
    Run(App),
    /// A required option was not given, or was given an empty value
    MissingOption,
    /// Any other clap outcome, including `--help` and `--version`
    Clap(clap::Error),
}

/// An empty value for a required option counts as not having it at all
fn is_missing_option(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::InvalidValue => matches!(
            err.get(ContextKind::InvalidValue),
            Some(ContextValue::String(value)) if value.is_empty()
        ),
        _ => false,
    }
}

fn parse_args<I, T>(args: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match App::try_parse_from(args) {
        Ok(app) => Args::Run(app),
        Err(err) if is_missing_option(&err) => Args::MissingOption,
        Err(err) => Args::Clap(err),
    }
}

fn missing_option_message() -> String {
    format!(
        "\n[ERROR] Missing required option\n\n{}",
        App::command().render_help()
    )
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = match parse_args(std::env::args_os()) {
        Args::Run(app) => app,
        Args::MissingOption => {
            eprintln!("{}", missing_option_message());
            std::process::exit(MISSING_OPTION_EXIT_CODE);
        }
        Args::Clap(err) => err.exit(),
    };
    let config = config::Config::from(app);

    logging::init(config.verbose);

    if let Err(err) = crate::convert::run(&config) {
        logging::report_error("bruconv", &format!("{err:#}"));
        std::process::exit(1);
    }

    Ok(())
}
