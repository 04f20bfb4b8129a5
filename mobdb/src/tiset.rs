use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::base::{BaseKind, BaseType, BoolKind, FloatKind, GeogKind, GeomKind, IntKind, TextKind};
use crate::error::Error;
use crate::handle::THandle;
use crate::temp::{Temporal, Type};

/// Temporal value of instant-set subtype: a set of instants at
/// non-contiguous timestamps.
pub struct TInstSet<B: BaseKind> {
    handle: THandle,
    _base: PhantomData<B>,
}

pub type TBoolInstSet = TInstSet<BoolKind>;
pub type TIntInstSet = TInstSet<IntKind>;
pub type TFloatInstSet = TInstSet<FloatKind>;
pub type TTextInstSet = TInstSet<TextKind>;
pub type TGeomPointInstSet = TInstSet<GeomKind>;
pub type TGeogPointInstSet = TInstSet<GeogKind>;

impl<B: BaseKind> TInstSet<B> {
    /// Wraps `handle`, verifying its tags name exactly this type.
    pub fn new(handle: THandle) -> Result<Self, Error> {
        if handle.temptype() != B::BASE.code() || handle.subtype() != Type::InstantSet.code() {
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

impl<B: BaseKind> Temporal for TInstSet<B> {
    fn ttype(&self) -> Type {
        Type::InstantSet
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

impl<B: BaseKind> Debug for TInstSet<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.btype(), self.ttype())
    }
}
