use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    Command::new("outline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for cleaning up and converting table of contents outlines")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an outline.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between outline formats (default command)")
                .arg(input())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(["text", "xml", "json", "djvused"]),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .required(true)
                        .value_parser(["text", "xml", "json", "djvused", "pdfmark", "treeviz"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Beautify an outline text file")
                .arg(input())
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Exit with status 1 if the file is not beautified")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the normalized outline text")
                .arg(input()),
        )
        .subcommand(
            Command::new("shift")
                .about("Shift every page number by a fixed amount")
                .allow_negative_numbers(true)
                .arg(input())
                .arg(
                    Arg::new("delta")
                        .help("Amount added to every page number")
                        .required(true)
                        .index(2),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "outline", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "outline", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "outline", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
