//! Register identifiers for the machine.
//!
//! The machine has eight general-purpose registers named `AX` through `HX`,
//! each holding a value in [0, 255] at rest, plus the comparison flag `ZX`
//! (which is not part of this enum; the flag lives on the executor and is set
//! only by `CMP`).

use std::fmt;

use serde::Serialize;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// One of the eight general-purpose registers.
///
/// Register names are case-sensitive in source text: `AX` decodes, `ax` does
/// not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Reg {
    /// Register `AX`.
    Ax,
    /// Register `BX`.
    Bx,
    /// Register `CX`.
    Cx,
    /// Register `DX`.
    Dx,
    /// Register `EX`.
    Ex,
    /// Register `FX`.
    Fx,
    /// Register `GX`.
    Gx,
    /// Register `HX`.
    Hx,
}

impl Reg {
    /// All registers in bank order, for iteration and display.
    pub const ALL: [Self; REGISTER_COUNT] = [
        Self::Ax,
        Self::Bx,
        Self::Cx,
        Self::Dx,
        Self::Ex,
        Self::Fx,
        Self::Gx,
        Self::Hx,
    ];

    /// Decodes a source token into a register.
    ///
    /// The token must be exactly one uppercase letter `A`-`H` followed by the
    /// literal letter `X`. Anything else (including lowercase forms or extra
    /// characters) is not a register.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AX" => Some(Self::Ax),
            "BX" => Some(Self::Bx),
            "CX" => Some(Self::Cx),
            "DX" => Some(Self::Dx),
            "EX" => Some(Self::Ex),
            "FX" => Some(Self::Fx),
            "GX" => Some(Self::Gx),
            "HX" => Some(Self::Hx),
            _ => None,
        }
    }

    /// Returns the canonical source-text name of the register.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ax => "AX",
            Self::Bx => "BX",
            Self::Cx => "CX",
            Self::Dx => "DX",
            Self::Ex => "EX",
            Self::Fx => "FX",
            Self::Gx => "GX",
            Self::Hx => "HX",
        }
    }

    /// Returns the register's index into the bank (0 for `AX` .. 7 for `HX`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
