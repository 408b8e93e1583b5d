use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pactl_report_parser::Report;

#[derive(Debug, Parser)]
#[command(name = "pactl-report")]
#[command(about = "Convert captured pactl output into structured JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse pactl output from stdin without executing any commands.
    ParseStdin(ParseStdinArgs),
    /// Parse pactl output from a file without executing any commands.
    ParseFile(ParseFileArgs),
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to a file containing captured pactl output.
    #[arg(long)]
    input: PathBuf,
    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::ParseFile(args) => run_parse_file(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    parse_and_print(&raw, args.compact)
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    parse_and_print(&raw, args.compact)
}

fn parse_and_print(raw: &str, compact: bool) -> Result<(), String> {
    let report = pactl_report_parser::parse(raw).map_err(|err| err.to_string())?;
    println!("{}", render_report(&report, compact)?);
    Ok(())
}

fn render_report(report: &Report, compact: bool) -> Result<String, String> {
    let rendered = if compact {
        serde_json::to_string(report)
    } else {
        serde_json::to_string_pretty(report)
    };
    rendered.map_err(|err| format!("Failed to serialize report: {err}"))
}
