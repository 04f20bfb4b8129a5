use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::base::{BaseKind, BaseType, BoolKind, FloatKind, GeogKind, GeomKind, IntKind, TextKind};
use crate::error::Error;
use crate::handle::THandle;
use crate::parser::Interp;
use crate::temp::{Temporal, Type};

/// Temporal value of sequence subtype: a time-contiguous run of instants
/// with bound inclusivity and an interpolation mode.
pub struct TSeq<B: BaseKind> {
    handle: THandle,
    _base: PhantomData<B>,
}

pub type TBoolSeq = TSeq<BoolKind>;
pub type TIntSeq = TSeq<IntKind>;
pub type TFloatSeq = TSeq<FloatKind>;
pub type TTextSeq = TSeq<TextKind>;
pub type TGeomPointSeq = TSeq<GeomKind>;
pub type TGeogPointSeq = TSeq<GeogKind>;

impl<B: BaseKind> TSeq<B> {
    /// Wraps `handle`, verifying its tags name exactly this type.
    pub fn new(handle: THandle) -> Result<Self, Error> {
        if handle.temptype() != B::BASE.code() || handle.subtype() != Type::Sequence.code() {
            return Err(Error::WrongTemporalType);
        }
        Ok(Self::wrap(handle))
    }

    pub(crate) fn wrap(handle: THandle) -> Self {
        Self {
            handle,
            _base: PhantomData,
        }
    }

    pub(crate) fn boxed(handle: THandle) -> Box<dyn Temporal> {
        Box::new(Self::wrap(handle))
    }

    /// Interpolation mode for a sequence of this base type whose literal
    /// carried `parsed`.
    pub fn interp(parsed: Option<Interp>) -> Interp {
        B::BASE.default_interp(parsed)
    }
}

impl<B: BaseKind> Temporal for TSeq<B> {
    fn ttype(&self) -> Type {
        Type::Sequence
    }

    fn btype(&self) -> BaseType {
        B::BASE
    }

    fn handle(&self) -> &THandle {
        &self.handle
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<B: BaseKind> Debug for TSeq<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.btype(), self.ttype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interp_default_by_base() {
        assert_eq!(TIntSeq::interp(None), Interp::Stepwise);
        assert_eq!(TFloatSeq::interp(None), Interp::Linear);
        assert_eq!(TFloatSeq::interp(Some(Interp::Stepwise)), Interp::Stepwise);
        assert_eq!(TGeogPointSeq::interp(None), Interp::Linear);
    }
}
