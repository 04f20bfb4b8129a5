//! Core model for MobilityDB temporal values.
//!
//! Two pieces live here: a recursive-descent parser for the textual literal
//! formats (`10@2019-09-08`, `{..}`, `[..)`, `{[..], (..)}`) and a factory
//! that rebuilds the concrete wrapper type from the runtime tags carried by a
//! native value handle. The temporal algebra itself belongs to the native
//! engine behind the handle and is not reimplemented here.

pub mod base;
pub mod error;
pub mod factory;
pub mod handle;
pub mod parser;
pub mod temp;
pub mod tinst;
pub mod tiset;
pub mod tseq;
pub mod tsset;

pub use base::BaseType;
pub use error::Error;
pub use factory::{classify, create};
pub use handle::THandle;
pub use parser::{
    parse_instant, parse_instant_set, parse_sequence, parse_sequence_set, parse_temporal,
};
pub use temp::{Temporal, Type};
