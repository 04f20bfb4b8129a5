use thiserror::Error;

use crate::base::BaseType;
use crate::temp::Type;

/// A literal does not conform to the grammar. Offsets are byte positions
/// into the original input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} at offset {offset}")]
    Expected {
        expected: &'static str,
        offset: usize,
    },

    #[error("empty {what} at offset {offset}")]
    Empty { what: &'static str, offset: usize },

    #[error("trailing input at offset {offset}")]
    Trailing { offset: usize },
}

/// A handle carries a tag code outside the known set. The engine and this
/// crate are out of sync; never coerced to a default variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("unrecognized base type code {0}")]
    BaseType(u8),

    #[error("unrecognized subtype code {0}")]
    SubType(u8),
}

/// A valid (base type, subtype) pair with no registered constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no wrapper registered for ({base}, {sub})")]
pub struct LookupError {
    pub base: BaseType,
    pub sub: Type,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("expected a different temporal type")]
    WrongTemporalType,
}
