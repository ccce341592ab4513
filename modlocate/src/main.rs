//! # modlocate
//!
//! A CLI tool that lists the source modules of a directory tree.
//!
//! ## Overview
//!
//! modlocate is built on top of modlocatelib. It scans a directory, collects
//! its `.ts`/`.tsx` modules (a directory with an `index.ts` is represented by
//! that index alone) and narrows the list with include/exclude regular
//! expressions matched against each module's full path.
//!
//! ## Usage
//!
//! ```bash
//! # List modules under the current directory
//! modlocate
//!
//! # Only modules under src/api, without the legacy ones
//! modlocate src --include "/api/" --exclude "/legacy/"
//!
//! # Read include/exclude lists from a JSON file
//! modlocate src --config modlocate.json
//!
//! # Machine-readable output, with diagnostics on stderr
//! modlocate src --output json --verbose
//! ```

mod render;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use modlocatelib::{locate_modules, Options};
use tracing_subscriber::EnvFilter;

use crate::render::{render_modules, render_summary, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("modlocate")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("List the source modules of a directory tree, honouring index files")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Keep only modules whose path matches this regex (can be specified multiple times)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Drop modules whose path matches this regex (can be specified multiple times)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON file with \"include\"/\"exclude\" pattern lists"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print discovery diagnostics to stderr"),
        )
}

/// Set up the tracing subscriber that receives library diagnostics
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("modlocate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Build options from the config file and command-line patterns
fn build_options(matches: &ArgMatches) -> anyhow::Result<Options> {
    let mut options = match matches.get_one::<String>("config") {
        Some(config) => Options::from_file(config)?,
        None => Options::new(),
    };

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            options = options.include(pattern);
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            options = options.exclude(pattern);
        }
    }

    Ok(options)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let mode = matches
        .get_one::<String>("output")
        .and_then(|s| OutputMode::from_name(s))
        .unwrap_or(OutputMode::Text);

    let options = build_options(matches)?;
    tracing::debug!(?options, path, "locating modules");

    let modules = locate_modules(path, &options)
        .with_context(|| format!("failed to locate modules in '{}'", path))?;

    let rendered = render_modules(&modules, Path::new(path), mode)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    if mode == OutputMode::Text {
        eprintln!("{}", render_summary(modules.len()));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
