use std::fmt::{Display, Formatter};

use crate::error::ClassificationError;
use crate::handle;
use crate::parser::Interp;

/// The kind of value varying over time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BaseType {
    Bool,
    Int,
    Float,
    Text,
    GeomPoint,
    GeogPoint,
}

impl BaseType {
    pub fn from_code(code: u8) -> Result<Self, ClassificationError> {
        match code {
            handle::T_TBOOL => Ok(BaseType::Bool),
            handle::T_TFLOAT => Ok(BaseType::Float),
            handle::T_TINT => Ok(BaseType::Int),
            handle::T_TTEXT => Ok(BaseType::Text),
            handle::T_TGEOMPOINT => Ok(BaseType::GeomPoint),
            handle::T_TGEOGPOINT => Ok(BaseType::GeogPoint),
            other => Err(ClassificationError::BaseType(other)),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            BaseType::Bool => handle::T_TBOOL,
            BaseType::Float => handle::T_TFLOAT,
            BaseType::Int => handle::T_TINT,
            BaseType::Text => handle::T_TTEXT,
            BaseType::GeomPoint => handle::T_TGEOMPOINT,
            BaseType::GeogPoint => handle::T_TGEOGPOINT,
        }
    }

    /// Discrete base types step between instants; continuous ones interpolate.
    pub fn is_discrete(&self) -> bool {
        matches!(self, BaseType::Bool | BaseType::Int | BaseType::Text)
    }

    /// Interpolation for a sequence whose literal carried `parsed`. An
    /// explicit flag wins; otherwise discrete base types step and continuous
    /// ones are linear.
    pub fn default_interp(&self, parsed: Option<Interp>) -> Interp {
        match parsed {
            Some(interp) => interp,
            None if self.is_discrete() => Interp::Stepwise,
            None => Interp::Linear,
        }
    }
}

impl Display for BaseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BaseType::Bool => "tbool",
            BaseType::Int => "tint",
            BaseType::Float => "tfloat",
            BaseType::Text => "ttext",
            BaseType::GeomPoint => "tgeompoint",
            BaseType::GeogPoint => "tgeogpoint",
        };
        f.write_str(s)
    }
}

/// Marker for the base type a wrapper is parameterized over.
pub trait BaseKind: 'static {
    const BASE: BaseType;
}

pub enum BoolKind {}
pub enum IntKind {}
pub enum FloatKind {}
pub enum TextKind {}
pub enum GeomKind {}
pub enum GeogKind {}

impl BaseKind for BoolKind {
    const BASE: BaseType = BaseType::Bool;
}
impl BaseKind for IntKind {
    const BASE: BaseType = BaseType::Int;
}
impl BaseKind for FloatKind {
    const BASE: BaseType = BaseType::Float;
}
impl BaseKind for TextKind {
    const BASE: BaseType = BaseType::Text;
}
impl BaseKind for GeomKind {
    const BASE: BaseType = BaseType::GeomPoint;
}
impl BaseKind for GeogKind {
    const BASE: BaseType = BaseType::GeogPoint;
}
