use clap::{Arg, ArgAction, ArgGroup, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("relink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown links and HTML links")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .visible_alias("in")
                .help("Path to the input file")
                .required_unless_present("list-converters")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .visible_alias("out")
                .help("Path to the output file (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("markdown")
                .long("markdown")
                .short('m')
                .help("Convert HTML links to Markdown links")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("normal")
                .long("normal")
                .short('n')
                .help("Convert Markdown links to normal HTML links")
                .action(ArgAction::SetTrue),
        )
        .group(ArgGroup::new("direction").args(["markdown", "normal"]))
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
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a relink.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-converters")
                .long("list-converters")
                .help("List available converters")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "relink", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "relink", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "relink", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
