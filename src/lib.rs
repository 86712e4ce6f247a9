// SPDX-License-Identifier: Unlicense
//! Integer arithmetic expressions: tokenizer, recursive-descent parser,
//! arena-backed expression tree and an error-absorbing value model.
pub mod ast;
pub mod display;
pub mod driver;
pub mod error;
pub mod eval;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::Tree;
pub use error::ParseError;
pub use parser::{parse, parse_with, ParseOptions};
pub use value::Value;

#[cfg(test)]
mod tests;
