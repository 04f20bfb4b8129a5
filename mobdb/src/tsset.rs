use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::base::{BaseKind, BaseType, BoolKind, FloatKind, GeogKind, GeomKind, IntKind, TextKind};
use crate::error::Error;
use crate::handle::THandle;
use crate::temp::{Temporal, Type};

/// Temporal value of sequence-set subtype: an ordered collection of
/// sequences with time gaps between them.
pub struct TSet<B: BaseKind> {
    handle: THandle,
    _base: PhantomData<B>,
}

pub type TBoolSeqSet = TSet<BoolKind>;
pub type TIntSeqSet = TSet<IntKind>;
pub type TFloatSeqSet = TSet<FloatKind>;
pub type TTextSeqSet = TSet<TextKind>;
pub type TGeomPointSeqSet = TSet<GeomKind>;
pub type TGeogPointSeqSet = TSet<GeogKind>;

impl<B: BaseKind> TSet<B> {
    /// Wraps `handle`, verifying its tags name exactly this type.
    pub fn new(handle: THandle) -> Result<Self, Error> {
        if handle.temptype() != B::BASE.code() || handle.subtype() != Type::SequenceSet.code() {
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

impl<B: BaseKind> Temporal for TSet<B> {
    fn ttype(&self) -> Type {
        Type::SequenceSet
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

impl<B: BaseKind> Debug for TSet<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.btype(), self.ttype())
    }
}
