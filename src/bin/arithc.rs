// SPDX-License-Identifier: Unlicense
use std::path::PathBuf;

use arith::{driver, lexer::UnknownChars, parser::ParseOptions};
use anyhow::{anyhow, Result};
use clap::Parser;

/// Parse and evaluate an integer arithmetic expression.
#[derive(Debug, Parser)]
#[command(name = "arithc", version)]
struct Args {
    /// Also emit the expression tree as a Graphviz digraph
    #[arg(short, long)]
    graph: bool,

    /// Read the expression from a file
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Drop characters that are not part of an expression instead of failing
    #[arg(long)]
    lenient: bool,

    /// The expression to evaluate
    #[arg(required_unless_present = "file")]
    expression: Option<String>,
}

fn source(args: &Args) -> Result<String> {
    match (&args.file, &args.expression) {
        (Some(path), _) => driver::read_file(path),
        (None, Some(expression)) => Ok(expression.clone()),
        (None, None) => Err(anyhow!("no expression given")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = ParseOptions {
        unknown_chars: if args.lenient {
            UnknownChars::Skip
        } else {
            UnknownChars::Reject
        },
    };

    let result = source(&args)
        .and_then(|src| driver::run(&src, &options, args.graph, std::io::stdout().lock()));
    if let Err(v) = result {
        eprintln!("failed to evaluate:\n{v:#}");
        std::process::exit(1);
    }
}
