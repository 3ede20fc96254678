//! Structured model of `javap -c` bytecode listings.
//!
//! ```
//! use jbcd_listing::{Parameter, parse};
//!
//! let listing = parse("0: aload_0\n1: invokevirtual #2 // Method run:()V\n");
//! assert!(listing.is_clean());
//! assert_eq!(listing.instructions[1].parameters(), &[Parameter::Constant("#2".into())]);
//! ```

pub mod instruction;
pub mod parse;

pub use instruction::{Instruction, Parameter};
pub use parse::{Diagnostic, LineError, Listing, parse, parse_instructions, parse_line};
