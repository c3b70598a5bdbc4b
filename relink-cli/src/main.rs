// Command-line interface for relink
//
// This binary rewrites the links inside one text file, either from Markdown to HTML anchors or back.
// The conversion itself lives in relink-babel; this layer handles arguments, configuration, files,
// the overwrite prompt, and what gets reported to the user.
//
// Usage:
//  relink -i <input> -o <output> -n [-b]   - Markdown links to HTML anchors (optionally target="_blank")
//  relink -i <input> -o <output> -m        - HTML anchors to Markdown links
//  relink -i <input> -n                    - Same, printing the converted text to stdout
//  relink --list-converters                - List available converters
//
// Configuration:
//
// Defaults come from relink-config. A relink.toml in the working directory is layered on top, and
// --config <path> on top of that. Command-line flags always win.

mod prompt;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, ValueHint};
use relink_babel::{check_input, ConvertOptions, ConverterRegistry, Direction};
use relink_config::{Loader, RelinkConfig};
use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind as IoErrorKind};
use std::path::Path;

/// Everything the convert flow needs from the command line.
#[derive(Debug, Clone, PartialEq)]
struct ConvertRequest {
    input: String,
    output: Option<String>,
    direction: Direction,
    blank: bool,
    assume_yes: bool,
    json: bool,
}

impl ConvertRequest {
    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut cmd = build_cli();

        let input = matches.get_one::<String>("input").cloned().ok_or_else(|| {
            cmd.error(
                ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided: --input <INPUT>",
            )
        })?;

        let direction = selected_direction(matches).ok_or_else(|| {
            cmd.error(
                ErrorKind::MissingRequiredArgument,
                "one of --markdown (-m) or --normal (-n) is required",
            )
        })?;

        Ok(ConvertRequest {
            input,
            output: matches.get_one::<String>("output").cloned(),
            direction,
            blank: matches.get_flag("blank"),
            assume_yes: matches.get_flag("yes"),
            json: matches.get_flag("json"),
        })
    }
}

/// JSON summary printed with --json
#[derive(Debug, Serialize)]
struct Report<'a> {
    direction: Direction,
    links: usize,
    output: &'a str,
}

fn build_cli() -> Command {
    Command::new("relink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown links and HTML links")
        .long_about(
            "relink rewrites the links in a text file and leaves everything else alone.\n\n\
            Directions:\n  \
            - -n/--normal:   [Example](https://example.com) -> <a href=\"https://example.com\">Example</a>\n  \
            - -m/--markdown: <a href=\"https://example.com\">Example</a> -> [Example](https://example.com)\n\n\
            Examples:\n  \
            relink -i notes.md -o notes.html -n        # Markdown links to anchors\n  \
            relink -i notes.md -o notes.html -n -b     # ...opening in a new tab\n  \
            relink -i page.html -o page.md -m          # Anchors back to Markdown\n  \
            relink -i notes.md -n > notes.html         # Converted text on stdout",
        )
        .override_usage("relink --input <INPUT> [--output <OUTPUT>] (-m | -n) [-b]")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .visible_alias("in")
                .value_name("INPUT")
                .help("Path to the input file")
                .required_unless_present("list-converters")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .visible_alias("out")
                .value_name("OUTPUT")
                .help("Path to the output file (defaults to stdout)")
                .long_help(
                    "Path to write the converted text.\n\n\
                    If the file already exists you are asked before it is replaced,\n\
                    unless --yes is given or output.confirm_overwrite is off.\n\
                    If not specified, the converted text is written to stdout.",
                )
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("markdown")
                .long("markdown")
                .short('m')
                .help("Convert HTML links to Markdown links")
                .long_help(
                    "Convert HTML links to Markdown links.\n\n\
                    Example:\n  \
                    Input:  <a href=\"https://example.com\">Example</a>\n  \
                    Output: [Example](https://example.com)",
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("normal")
                .long("normal")
                .short('n')
                .help("Convert Markdown links to normal HTML links")
                .long_help(
                    "Convert Markdown links to normal HTML links.\n\n\
                    Example:\n  \
                    Input:  [Example](https://example.com)\n  \
                    Output: <a href=\"https://example.com\">Example</a>",
                )
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("direction")
                .args(["markdown", "normal"])
                .multiple(false),
        )
        .arg(
            Arg::new("blank")
                .long("blank")
                .short('b')
                .help("Add target=\"_blank\" to HTML links (only works with -n)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .help("Overwrite an existing output file without asking")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON summary instead of the success message")
                .requires("output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a relink.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    if matches.get_flag("list-converters") {
        handle_list_converters_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let request = ConvertRequest::from_matches(&matches).unwrap_or_else(|e| e.exit());

    handle_convert_command(&request, &config);
}

fn selected_direction(matches: &ArgMatches) -> Option<Direction> {
    if matches.get_flag("normal") {
        Some(Direction::ToHtml)
    } else if matches.get_flag("markdown") {
        Some(Direction::ToMarkdown)
    } else {
        None
    }
}

/// Handle the convert flow
fn handle_convert_command(request: &ConvertRequest, config: &RelinkConfig) {
    if request.blank && request.direction == Direction::ToMarkdown {
        eprintln!("Warning: The -b/--blank flag is ignored when converting HTML to Markdown.");
    }

    if let Some(path) = request.output.as_deref() {
        if !may_write_output(path, request, config) {
            println!("Operation canceled.");
            return;
        }
    }

    let source = read_input(&request.input);

    if config.check.warn_missing_links {
        if let Some(warning) = check_input(&source, request.direction.source_syntax()) {
            eprintln!("Warning: {warning}");
        }
    }

    log::debug!(
        "converting '{}' with the {} converter",
        request.input,
        request.direction.converter_name()
    );

    let registry = ConverterRegistry::default();
    let options = convert_options(request, config);
    let conversion = registry
        .convert(&source, request.direction.converter_name(), &options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let operation = request.direction.describe(conversion.links);

    match request.output.as_deref() {
        Some(path) => {
            fs::write(path, &conversion.text).unwrap_or_else(|e| {
                eprintln!("Error: An unexpected error occurred while writing to the file: {e}");
                std::process::exit(1);
            });

            if request.json {
                let report = Report {
                    direction: request.direction,
                    links: conversion.links,
                    output: path,
                };
                let json = serde_json::to_string(&report).unwrap_or_else(|e| {
                    eprintln!("Error: Could not serialize the report: {e}");
                    std::process::exit(1);
                });
                println!("{json}");
            } else {
                println!("Successfully {operation} and saved to {path}");
            }
        }
        None => {
            // Keep stdout for the document itself
            print!("{}", conversion.text);
            eprintln!("Successfully {operation}");
        }
    }
}

/// Whether the output file may be (over)written, asking the user when needed.
fn may_write_output(path: &str, request: &ConvertRequest, config: &RelinkConfig) -> bool {
    if request.assume_yes || !config.output.confirm_overwrite || !Path::new(path).exists() {
        return true;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt::confirm_overwrite(path, &mut stdin.lock(), &mut stdout).unwrap_or_else(|e| {
        log::debug!("overwrite prompt failed: {e}");
        false
    })
}

fn read_input(path: &str) -> String {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        if e.kind() == IoErrorKind::NotFound {
            eprintln!("Error: The input file '{path}' does not exist.");
        } else {
            eprintln!("Error: An unexpected error occurred while reading the file: {e}");
        }
        std::process::exit(1);
    });

    String::from_utf8(bytes).unwrap_or_else(|_| {
        eprintln!("Error: The input file '{path}' could not be decoded as UTF-8.");
        std::process::exit(1);
    })
}

/// Handle the list-converters command
fn handle_list_converters_command() {
    let registry = ConverterRegistry::default();
    println!("Available converters:\n");
    for name in registry.list_converters() {
        if let Ok(converter) = registry.get(&name) {
            println!("  {name:<10} {}", converter.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RelinkConfig {
    let loader = Loader::new().with_optional_file("relink.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn convert_options(request: &ConvertRequest, config: &RelinkConfig) -> ConvertOptions {
    let mut options = ConvertOptions::from(&config.convert);
    if request.blank {
        options.new_tab = true;
    }
    options
}
