//! Command-line interface for logcast
//! This binary converts log files between formats: JSON, CSV, XML and plain
//! text in; Markdown, HTML, JSON, XML and CSV out.
//!
//! Usage:
//!   logcast `<path>` --to `<format>` [--output `<file>`]   - Convert a log file
//!   logcast --list-formats                                 - List registered formats

use clap::{Arg, ArgAction, Command};
use logcast_babel::{FormatRegistry, RenderOptions};

fn main() {
    let matches = Command::new("logcast")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting log files between formats")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the log file (parser chosen by extension)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Target format (e.g., 'markdown', 'html', 'json', 'xml', 'csv')")
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to a file instead of stdout"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Color level cells in Markdown/HTML output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-styles")
                .long("no-styles")
                .help("Omit the embedded stylesheet from HTML output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-summary")
                .long("no-summary")
                .help("Omit the level-count banner from HTML output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-fold")
                .long("no-fold")
                .help("Never fold long messages behind a disclosure widget")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fold-length")
                .long("fold-length")
                .help("Fold messages longer than this many characters")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("group-by")
                .long("group-by")
                .help("Insert HTML group headers when this property changes"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered formats and their capabilities")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let to = matches
        .get_one::<String>("to")
        .expect("to is required unless listing formats");

    let options = RenderOptions {
        use_color: matches.get_flag("color"),
        include_styles: !matches.get_flag("no-styles"),
        enable_summary: !matches.get_flag("no-summary"),
        fold_long_messages: !matches.get_flag("no-fold"),
        fold_message_length: *matches
            .get_one::<usize>("fold-length")
            .expect("fold-length has a default"),
        group_by_property: matches.get_one::<String>("group-by").cloned(),
    };

    handle_convert_command(path, to, matches.get_one::<String>("output"), &options);
}

/// Handle the convert command
fn handle_convert_command(path: &str, to: &str, output: Option<&String>, options: &RenderOptions) {
    let rendered = logcast_babel::convert_file(std::path::Path::new(path), to, options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {}", e);
            std::process::exit(1);
        });

    match output {
        Some(target) => {
            std::fs::write(target, &rendered).unwrap_or_else(|e| {
                eprintln!("Cannot write {}: {}", target, e);
                std::process::exit(1);
            });
        }
        None => print!("{}", rendered),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Registered formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let mut capabilities = Vec::new();
            if format.supports_parsing() {
                capabilities.push("parse");
            }
            if format.supports_serialization() {
                capabilities.push("render");
            }
            println!(
                "  {:<10} {:<16} {}",
                name,
                capabilities.join(", "),
                format.description()
            );
        }
    }
}
