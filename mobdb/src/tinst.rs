use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::base::{BaseKind, BaseType, BoolKind, FloatKind, GeogKind, GeomKind, IntKind, TextKind};
use crate::error::Error;
use crate::handle::THandle;
use crate::temp::{Temporal, Type};

/// Temporal value of instant subtype: a single value/timestamp pair held by
/// the native engine.
pub struct TInst<B: BaseKind> {
    handle: THandle,
    _base: PhantomData<B>,
}

pub type TBoolInst = TInst<BoolKind>;
pub type TIntInst = TInst<IntKind>;
pub type TFloatInst = TInst<FloatKind>;
pub type TTextInst = TInst<TextKind>;
pub type TGeomPointInst = TInst<GeomKind>;
pub type TGeogPointInst = TInst<GeogKind>;

impl<B: BaseKind> TInst<B> {
    /// Wraps `handle`, verifying its tags name exactly this type.
    pub fn new(handle: THandle) -> Result<Self, Error> {
        if handle.temptype() != B::BASE.code() || handle.subtype() != Type::Instant.code() {
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
}

impl<B: BaseKind> Temporal for TInst<B> {
    fn ttype(&self) -> Type {
        Type::Instant
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

impl<B: BaseKind> Debug for TInst<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.btype(), self.ttype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle;

    #[test]
    fn test_new_checks_tags() {
        let h = THandle::new(handle::T_TBOOL, handle::TINSTANT);
        let t = TBoolInst::new(h).unwrap();
        assert_eq!(t.btype(), BaseType::Bool);
        assert_eq!(t.ttype(), Type::Instant);

        // wrong base type
        assert!(matches!(
            TIntInst::new(h),
            Err(Error::WrongTemporalType)
        ));

        // wrong subtype
        let h = THandle::new(handle::T_TBOOL, handle::TSEQUENCE);
        assert!(matches!(
            TBoolInst::new(h),
            Err(Error::WrongTemporalType)
        ));
    }
}
