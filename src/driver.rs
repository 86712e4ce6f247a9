// SPDX-License-Identifier: Unlicense
use std::{io::{Read, Write}, path::Path};

use crate::{parser::{self, ParseOptions}, value::Value};
use anyhow::{Context, Result};

/// Everything one expression produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reconstruction: String,
    pub value: Value,
    pub dot: String,
}

pub fn read_file(source: &Path) -> Result<String> {
    let mut buf = String::new();
    let mut f = std::fs::File::open(source)
        .with_context(|| format!("failed to open {}", source.display()))?;
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

pub fn evaluate_str(source: &str, options: &ParseOptions) -> Result<Report> {
    let tree = parser::parse_with(source, options).context("failed to parse")?;
    Ok(Report {
        reconstruction: tree.to_string(),
        value: tree.eval(),
        dot: tree.to_dot(),
    })
}

pub fn run(source: &str, options: &ParseOptions, graph: bool, mut out: impl Write) -> Result<()> {
    let report = evaluate_str(source, options)?;
    writeln!(out, "Reconstituted expression: {:?}", report.reconstruction)?;
    writeln!(out, "/* {} */", report.value)?;
    if graph {
        out.write_all(report.dot.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
