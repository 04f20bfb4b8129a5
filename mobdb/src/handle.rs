//! Opaque stand-in for a value owned by the native engine.
//!
//! The engine tags every temporal value with two small integers: the base
//! type (catalog number) and the subtype. Those two fields are all this crate
//! ever reads off a handle; everything else about the value stays behind the
//! native call surface.

/// Base type catalog codes, as the native engine numbers them.
pub const T_TBOOL: u8 = 12;
pub const T_TFLOAT: u8 = 18;
pub const T_TINT: u8 = 21;
pub const T_TTEXT: u8 = 22;
pub const T_TGEOMPOINT: u8 = 25;
pub const T_TGEOGPOINT: u8 = 26;

/// Subtype codes.
pub const TINSTANT: u8 = 1;
pub const TINSTANTSET: u8 = 2;
pub const TSEQUENCE: u8 = 3;
pub const TSEQUENCESET: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct THandle {
    temptype: u8,
    subtype: u8,
}

impl THandle {
    pub fn new(temptype: u8, subtype: u8) -> Self {
        Self { temptype, subtype }
    }

    pub fn temptype(&self) -> u8 {
        self.temptype
    }

    pub fn subtype(&self) -> u8 {
        self.subtype
    }
}
