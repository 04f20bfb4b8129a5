use std::any::Any;
use std::fmt::{Display, Formatter};

use crate::base::BaseType;
use crate::error::ClassificationError;
use crate::handle::{self, THandle};

/// Subtype of a temporal value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Type {
    Instant,
    InstantSet,
    Sequence,
    SequenceSet,
}

impl Type {
    pub fn from_code(code: u8) -> Result<Self, ClassificationError> {
        match code {
            handle::TINSTANT => Ok(Type::Instant),
            handle::TINSTANTSET => Ok(Type::InstantSet),
            handle::TSEQUENCE => Ok(Type::Sequence),
            handle::TSEQUENCESET => Ok(Type::SequenceSet),
            other => Err(ClassificationError::SubType(other)),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Type::Instant => handle::TINSTANT,
            Type::InstantSet => handle::TINSTANTSET,
            Type::Sequence => handle::TSEQUENCE,
            Type::SequenceSet => handle::TSEQUENCESET,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Type::Instant => "Instant",
            Type::InstantSet => "InstantSet",
            Type::Sequence => "Sequence",
            Type::SequenceSet => "SequenceSet",
        };
        f.write_str(s)
    }
}

pub trait Temporal {
    /// Subtype of the wrapped value.
    fn ttype(&self) -> Type;

    /// Base type of the wrapped value.
    fn btype(&self) -> BaseType;

    /// The handle this wrapper holds.
    fn handle(&self) -> &THandle;

    fn as_any(&self) -> &dyn Any;
}
