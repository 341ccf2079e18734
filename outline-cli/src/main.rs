// Command-line interface for outline
//
// This binary cleans up, checks and converts table of contents outlines.
//
// The core capabilities live in the outline-babel crate: the normalizer, tree builder and
// beautifier, plus the formats outlines are converted to and from. This crate is a thin shell
// over it that reads files, applies configuration and reports errors.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension, while an explicit --from flag overrides the detection.
// Usage:
//  outline <input> --to <format> [--from <format>] [--output <file>]          - Convert between formats (default)
//  outline convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  outline format <input> [--check]      - Beautify, or only check whether the file is beautified
//  outline normalize <input>             - Print the clean, one entry per line text
//  outline shift <input> <delta>         - Move every page number by delta
//  outline --list-formats                - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; configuration keys it knows are applied to the
// configuration, the rest are passed to the target format.
// Example:
//  outline toc.txt --to json --extra-indent 2

use clap::{Arg, ArgAction, Command, ValueHint};
use outline_babel::outline::{beautify_with_rules, is_beautified_with_rules, normalize_with_rules};
use outline_babel::transforms::shift_pages_with_rules;
use outline_babel::{FormatRegistry, OutlineRules};
use outline_config::{Loader, OutlineConfig};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "format", "normalize", "shift", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following argument is the value unless it is another flag
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with("--") && (!next.starts_with('-') || is_number(next))
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn is_number(arg: &str) -> bool {
    arg.parse::<i64>().is_ok()
}

fn build_cli() -> Command {
    Command::new("outline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for cleaning up and converting table of contents outlines")
        .long_about(
            "outline is a command-line tool for working with book outlines: indented,\n\
            one entry per line table of contents text with a page number at the end of\n\
            each line.\n\n\
            Commands:\n  \
            - convert:   Transform between outline formats (text, xml, json, djvused, ...)\n  \
            - format:    Beautify an outline text file\n  \
            - normalize: Join wrapped titles and strip page leaders\n  \
            - shift:     Move every page number by a fixed amount\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            outline toc.txt --to djvused             # DjVu bookmarks (outputs to stdout)\n  \
            outline toc.txt --to json -o toc.json    # JSON tree into a file\n  \
            outline format toc.txt --check           # Exit 1 unless already beautified\n  \
            outline shift toc.txt -12                # Pages 12 lower"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Convert outlines between different formats.\n\n\
                    Supported formats:\n  \
                    - text:    Indented plain text (.txt, .outline)\n  \
                    - xml:     Nested <item> XML, reads WinDjView bookmarks (.xml, .bookmarks)\n  \
                    - json:    JSON tree (.json)\n  \
                    - djvused: DjVu bookmarks for djvused set-outline (.djvused, .dsed)\n  \
                    - pdfmark: PDF bookmarks as Ghostscript pdfmarks (write only)\n  \
                    - treeviz: Tree view for inspection (write only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    outline convert toc.txt --to xml -o toc.xml     # Text to XML file\n  \
                    outline convert book.bookmarks --to text        # WinDjView bookmarks to text\n  \
                    outline toc.txt --to pdfmark --extra-collapsed  # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: text, xml, json, djvused, pdfmark, treeviz\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
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
                .long_about(
                    "Beautify an outline text file.\n\n\
                    Indentation is snapped to whole levels, page numbers are separated\n\
                    from titles by a single space and a blank line is placed before\n\
                    every top-level entry. Files that are already beautified are\n\
                    written back unchanged.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    outline format toc.txt                # Beautify to stdout\n  \
                    outline format toc.txt --check        # Only check, exit 1 if not beautified"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Print nothing, exit with status 1 if the file is not beautified")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the normalized outline text")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("shift")
                .about("Shift every page number by a fixed amount")
                .long_about(
                    "Add a fixed amount to the trailing page number of every line.\n\n\
                    Pages never go below the configured minimum (shift.min_page, 1 by\n\
                    default, overridable with --extra-min-page). The shifted outline is\n\
                    beautified and written to stdout.\n\n\
                    Examples:\n  \
                    outline shift toc.txt 12              # Pages 12 higher\n  \
                    outline shift toc.txt -12             # Pages 12 lower"
                )
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("delta")
                        .help("Amount added to every page number, may be negative")
                        .required(true)
                        .index(2)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or a subcommand is the input of `convert`
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("format", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let check = sub_matches.get_flag("check");
            reject_unused_extras(&extra_params);
            handle_format_command(input, check, &config);
        }
        Some(("normalize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            reject_unused_extras(&extra_params);
            handle_normalize_command(input, &config);
        }
        Some(("shift", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let delta = *sub_matches
                .get_one::<i64>("delta")
                .expect("delta is required");
            reject_unused_extras(&extra_params);
            handle_shift_command(input, delta, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Writes `text` to `output` or stdout, ending it with a newline.
fn emit(text: &str, output: Option<&str>) {
    let mut data = text.to_string();
    if !data.is_empty() && !data.ends_with('\n') {
        data.push('\n');
    }
    match output {
        Some(path) => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{data}"),
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &OutlineConfig,
) {
    let registry = FormatRegistry::with_rules(rules_from_config(config));

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let outline = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    debug!(from, to, entries = outline.len_total(), "converting outline");

    // Configured defaults first, --extra-* parameters win
    let mut format_options = config.convert.options_for(to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&outline, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    emit(&result, output);
}

/// Handle the format command
fn handle_format_command(input: &str, check: bool, config: &OutlineConfig) {
    let source = read_input(input);
    let rules = rules_from_config(config);

    if check {
        if !is_beautified_with_rules(&source, &rules) {
            std::process::exit(1);
        }
        return;
    }

    emit(&beautify_with_rules(&source, &rules), None);
}

/// Handle the normalize command
fn handle_normalize_command(input: &str, config: &OutlineConfig) {
    let source = read_input(input);
    emit(&normalize_with_rules(&source, &rules_from_config(config)), None);
}

/// Handle the shift command
fn handle_shift_command(input: &str, delta: i64, config: &OutlineConfig) {
    let source = read_input(input);
    let result = shift_pages_with_rules(
        &source,
        delta,
        config.shift.min_page,
        &rules_from_config(config),
    );
    if result.adjusted == 0 {
        warn!("no page numbers found to adjust");
    } else {
        debug!(adjusted = result.adjusted, delta, "page numbers adjusted");
    }
    emit(&result.text, None);
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &OutlineConfig) {
    let registry = FormatRegistry::with_rules(rules_from_config(config));

    println!("Available formats:\n");
    for format_name in registry.list_formats() {
        let Ok(format) = registry.get(&format_name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "read/write",
            (true, false) => "read",
            (false, true) => "write",
            (false, false) => "-",
        };
        println!(
            "  {:<10} {:<11} {:<20} {}",
            format_name,
            direction,
            format.file_extensions().join(", "),
            format.description()
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> OutlineConfig {
    let loader = Loader::new().with_optional_file("outline.toml");
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

fn rules_from_config(config: &OutlineConfig) -> OutlineRules {
    OutlineRules::from(&config.formatting.rules)
}

/// Moves the --extra-* parameters that name configuration keys into `config`.
fn apply_config_overrides(config: &mut OutlineConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["indent-width", "indent_width"]) {
        config.formatting.rules.indent_width = parse_number_arg("indent-width", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["min-page", "min_page"]) {
        config.shift.min_page = parse_number_arg("min-page", &raw);
    }
}

/// Commands other than convert have no format to hand leftover parameters to.
fn reject_unused_extras(extra_params: &HashMap<String, String>) {
    if extra_params.is_empty() {
        return;
    }
    let mut keys: Vec<&str> = extra_params.keys().map(String::as_str).collect();
    keys.sort_unstable();
    eprintln!("Unknown parameter(s): {}", keys.join(", "));
    std::process::exit(1);
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_number_arg<T: std::str::FromStr>(flag: &str, raw: &str) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
