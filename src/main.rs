use std::{fs, process::ExitCode};

use clap::Parser;
use safecalc::{
    Calculator,
    config::{Config, DEFAULT_MAX_DEPTH, MAX_ALLOWED_DEPTH},
    format::format_number,
    interpreter::policy::{self, FUNCTION_NAMES},
    preview::preview,
};
use tracing_subscriber::EnvFilter;

/// safecalc evaluates arithmetic expressions safely: numbers, `+ - * / % **`
/// (or `× ÷ ^`), parentheses and a handful of math functions. Nothing else is
/// ever executed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each non-empty line.
    #[arg(short, long)]
    file: bool,

    /// Print the live preview after every typed character instead of the
    /// final result.
    #[arg(short, long)]
    preview: bool,

    /// List the permitted functions and exit.
    #[arg(long)]
    functions: bool,

    /// Maximum nesting depth of an expression.
    #[arg(long, env = "SAFECALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_depth)]
    max_depth: usize,

    /// The expression, or a path when `--file` is given.
    #[arg(required_unless_present = "functions")]
    contents: Option<String>,
}

fn parse_depth(s: &str) -> Result<usize, String> {
    let depth: usize = s.parse().map_err(|e| format!("'{s}' is not a depth: {e}"))?;
    if !(1..=MAX_ALLOWED_DEPTH).contains(&depth) {
        return Err(format!("depth must be between 1 and {MAX_ALLOWED_DEPTH}"));
    }
    Ok(depth)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if args.functions {
        for name in FUNCTION_NAMES {
            if let Some(arity) = policy::arity(name) {
                println!("{name}: {arity} argument(s)");
            }
        }
        return ExitCode::SUCCESS;
    }

    let Some(contents) = args.contents else {
        eprintln!("No expression given.");
        return ExitCode::FAILURE;
    };

    let calculator = Calculator::new(Config::default().with_max_depth(args.max_depth));

    let lines = if args.file {
        match fs::read_to_string(&contents) {
            Ok(text) => text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string)
                            .collect(),
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![contents]
    };

    let mut failed = false;
    for line in &lines {
        if args.preview {
            print_preview(&calculator, line);
            continue;
        }
        match calculator.evaluate(line) {
            Ok(value) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("{}: {e}", e.kind());
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Prints the preview for every prefix of `line`, one per typed character.
fn print_preview(calculator: &Calculator, line: &str) {
    for (end, ch) in line.char_indices() {
        let typed = &line[..end + ch.len_utf8()];
        println!("{typed:<32} {}", preview(calculator, typed).text());
    }
}
