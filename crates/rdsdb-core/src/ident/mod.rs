//! Identifier codec.
//!
//! Every catalog key is the canonical, whitespace-free rendering
//! `RDS(m,n,k,lambda)` of a [`ParameterTuple`]. This module is the single
//! place that moves between the two forms:
//!
//! ```rust
//! use rdsdb_core::ident::{self, ParameterTuple};
//!
//! let t = ident::parse("RDS(73,7,64,8)").unwrap();
//! assert_eq!(t, ParameterTuple::new(73, 7, 64, 8));
//! assert_eq!(ident::format(&t), "RDS(73,7,64,8)");
//! ```

mod error;
mod lexer;
mod parser;
mod span;

pub use error::ParseError;
pub use lexer::{Lexer, SpannedToken, Token};
pub use parser::Parser;
pub use span::{Span, Spanned};

use std::str::FromStr;

/// The four integer parameters `(m, n, k, lambda)` of a relative difference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterTuple {
    pub m: u64,
    pub n: u64,
    pub k: u64,
    pub lambda: u64,
}

impl ParameterTuple {
    pub const fn new(m: u64, n: u64, k: u64, lambda: u64) -> Self {
        Self { m, n, k, lambda }
    }

    /// The canonical identifier, used as the catalog key.
    pub fn identifier(&self) -> String {
        self.to_string()
    }

    /// The bare parameter list `m,n,k,lambda` used in report text.
    pub fn params(&self) -> String {
        format!("{},{},{},{}", self.m, self.n, self.k, self.lambda)
    }
}

impl std::fmt::Display for ParameterTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RDS({},{},{},{})", self.m, self.n, self.k, self.lambda)
    }
}

impl FromStr for ParameterTuple {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<(u64, u64, u64, u64)> for ParameterTuple {
    fn from((m, n, k, lambda): (u64, u64, u64, u64)) -> Self {
        Self::new(m, n, k, lambda)
    }
}

/// Parse a canonical identifier. Any deviation from `RDS(m,n,k,lambda)`,
/// including whitespace, fails.
pub fn parse(identifier: &str) -> Result<ParameterTuple, ParseError> {
    parser::parse(identifier)
}

/// Strip all whitespace, then parse strictly.
pub fn parse_lenient(identifier: &str) -> Result<ParameterTuple, ParseError> {
    let compact: String = identifier.chars().filter(|c| !c.is_whitespace()).collect();
    parse(&compact)
}

/// Render the canonical identifier for `tuple`.
pub fn format(tuple: &ParameterTuple) -> String {
    tuple.to_string()
}
