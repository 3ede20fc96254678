//! JVM instruction set definitions, auto-generated from `isa.yaml`.
//!
//! This crate provides the opcode table used to resolve the mnemonics found
//! in `javap -c` listings, together with per-opcode flags.

use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/generated.rs"));

bitflags::bitflags! {
    /// Static properties of an opcode.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OpcodeFlags: u16 {
        /// Takes a constant-pool index operand (`#n` in listings).
        const CONSTANT_POOL = 1 << 0;
        /// Reads or writes a local variable slot.
        const LOCAL_VARIABLE = 1 << 1;
        /// Transfers control to an offset operand.
        const BRANCH = 1 << 2;
        /// Never falls through to the next instruction.
        const UNCONDITIONAL = 1 << 3;
        /// `tableswitch` / `lookupswitch`.
        const SWITCH = 1 << 4;
        const INVOKE = 1 << 5;
        const FIELD = 1 << 6;
        const RETURN = 1 << 7;
        const THROW = 1 << 8;
        /// Reserved for debuggers and implementation-specific use.
        const RESERVED = 1 << 9;
    }
}

/// Error from parsing a mnemonic that is not in the table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mnemonic '{0}'")]
pub struct UnknownMnemonic(pub String);

impl Opcode {
    /// Raw opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub fn is_branch(self) -> bool {
        self.flags().contains(OpcodeFlags::BRANCH)
    }

    pub fn is_invoke(self) -> bool {
        self.flags().contains(OpcodeFlags::INVOKE)
    }

    /// Whether this opcode ends a basic block: returns, `athrow`, switches
    /// and unconditional jumps.
    pub fn is_terminator(self) -> bool {
        self.flags().intersects(
            OpcodeFlags::RETURN
                | OpcodeFlags::THROW
                | OpcodeFlags::SWITCH
                | OpcodeFlags::UNCONDITIONAL,
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::from_mnemonic(s).ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(byte)
    }
}

/// All opcodes, ordered by opcode byte.
pub fn opcode_table() -> &'static [Opcode] {
    &OPCODES
}

pub fn opcode_count() -> usize {
    OPCODES.len()
}
