//! Tagged-sequence AST types and classification for the Calc language.
//!
//! Calc programs are not text. They live in memory as nested tagged
//! sequences: ordered lists whose first element, when a string, names the
//! construct. This crate defines that value shape, classifies arbitrary
//! candidate values against the grammar, and hands back typed views of
//! whatever matched. Turning concrete syntax into these values, and
//! executing them, belong to external crates.
//!
//! # Grammar
//!
//! ```text
//! PROGRAM    ::= '[' 'calc' ',' STATEMENTS ']'
//!
//! STATEMENTS ::= STATEMENT
//!                | STATEMENT ',' STATEMENTS
//!
//! STATEMENT  ::= ASSIGNMENT
//!                | REPETITION
//!                | SELECTION
//!                | INPUT
//!                | OUTPUT
//!
//! ASSIGNMENT ::= '[' 'set' ',' VARIABLE ',' EXPRESSION ']'
//!
//! REPETITION ::= '[' 'while' ',' CONDITION ',' STATEMENTS ']'
//!
//! SELECTION  ::= '[' 'if' ',' CONDITION ',' STATEMENT ']'
//!                | '[' 'if' ',' CONDITION ',' STATEMENT ',' STATEMENT ']'
//!
//! INPUT      ::= '[' 'read' ',' VARIABLE ']'
//!
//! OUTPUT     ::= '[' 'print' ',' VARIABLE ']'
//!
//! EXPRESSION ::= CONSTANT
//!                | VARIABLE
//!                | BINARYEXPR
//!
//! BINARYEXPR ::= '[' EXPRESSION ',' BINARYOPER ',' EXPRESSION ']'
//!
//! CONDITION  ::= '[' EXPRESSION ',' CONDOPER ',' EXPRESSION ']'
//!
//! BINARYOPER ::= '+' | '-' | '*' | '/'
//!
//! CONDOPER   ::= '<' | '>' | '='
//!
//! VARIABLE   ::= any non-empty string
//!
//! CONSTANT   ::= any number
//! ```
//!
//! Statement forms carry a literal discriminator tag; expression forms do
//! not, so their identity is decided by exclusion (constant, then variable,
//! then binary expression). A condition is the same sequence shape as a
//! binary expression, told apart only by the operator slot — the two
//! operator sets share no symbol.
//!
//! # Example
//!
//! ```json
//! ["calc",
//!   ["set", "x", 5],
//!   ["while", ["x", "<", 10],
//!     ["set", "x", ["x", "+", 1]]],
//!   ["print", "x"]]
//! ```
//!
//! ```
//! use calc_ast::{Expr, Program, Stmt, builders};
//!
//! let value = builders::program(vec![builders::set("x", builders::constant(5))]);
//!
//! let program = Program::classify(&value).unwrap();
//! match Stmt::classify(program.statements.first().unwrap()).unwrap() {
//!     Stmt::Set(assignment) => {
//!         assert_eq!(assignment.variable.as_str(), Some("x"));
//!         assert!(matches!(Expr::classify(assignment.expression), Some(Expr::Constant(_))));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

mod ast;
pub mod builders;
mod ops;
mod value;

pub use ast::{
    Assignment, BinaryExpr, Condition, Expr, Input, Output, Program, Repetition, Selection,
    ShapeError, Statements, Stmt, is_constant, is_variable,
};
pub use ops::{BinOp, RelOp, STATEMENT_TAGS, is_statement_tag, tag};
pub use value::Value;
