//! Discriminator tags and operator sets for the Calc grammar.

use crate::Value;
use std::fmt;

/// Literal tags naming the tagged-sequence constructs.
pub mod tag {
    /// Opens every program: `["calc", ...]`.
    pub const PROGRAM: &str = "calc";
    /// Assignment: `["set", variable, expression]`.
    pub const SET: &str = "set";
    /// Repetition: `["while", condition, statement, ...]`.
    pub const WHILE: &str = "while";
    /// Selection: `["if", condition, then]` or `["if", condition, then, else]`.
    pub const IF: &str = "if";
    /// Input: `["read", variable]`.
    pub const READ: &str = "read";
    /// Output: `["print", variable]`.
    pub const PRINT: &str = "print";
}

/// The five statement discriminators. Disjoint literals, so a value can
/// match at most one statement form.
pub const STATEMENT_TAGS: &[&str] = &[tag::SET, tag::WHILE, tag::IF, tag::READ, tag::PRINT];

/// Returns true if `candidate` is one of the statement discriminators.
pub fn is_statement_tag(candidate: &str) -> bool {
    STATEMENT_TAGS.contains(&candidate)
}

/// Arithmetic operators admitted in the middle slot of a binary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    /// The symbol occupying the operator slot in the sequence form.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Classifies a candidate value as an arithmetic operator symbol.
    pub fn classify(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::from_symbol)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Relational operators admitted in the middle slot of a condition.
///
/// The set shares no symbol with [`BinOp`]; the two sequence forms are told
/// apart by the operator slot alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    Lt,
    Gt,
    Eq,
}

impl RelOp {
    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(RelOp::Lt),
            ">" => Some(RelOp::Gt),
            "=" => Some(RelOp::Eq),
            _ => None,
        }
    }

    /// The symbol occupying the operator slot in the sequence form.
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Eq => "=",
        }
    }

    /// Classifies a candidate value as a relational operator symbol.
    pub fn classify(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::from_symbol)
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
