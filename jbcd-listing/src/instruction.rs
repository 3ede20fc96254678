use std::fmt;

use jbcd_isa::Opcode;

/// A parameter of a listing instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Constant-pool reference, kept verbatim including the `#` marker.
    Constant(String),
    /// Integer literal: local slot, immediate, branch target.
    Numeric(i32),
    /// Anything else (`int` for `newarray`, labels, descriptors).
    Symbolic(String),
}

impl Parameter {
    /// Classify a single trimmed token.
    ///
    /// A leading `#` always wins over an integer parse, so `#10` is a
    /// constant reference and never the number 10.
    pub fn classify(token: &str) -> Self {
        if token.starts_with('#') {
            Parameter::Constant(token.to_string())
        } else if let Ok(value) = token.parse::<i32>() {
            Parameter::Numeric(value)
        } else {
            Parameter::Symbolic(token.to_string())
        }
    }

    /// Constant-pool index of a `#n` reference.
    pub fn constant_index(&self) -> Option<u16> {
        match self {
            Parameter::Constant(text) => text.strip_prefix('#')?.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Constant(text) | Parameter::Symbolic(text) => f.write_str(text),
            Parameter::Numeric(value) => write!(f, "{value}"),
        }
    }
}

/// A single instruction line of a bytecode listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    offset: u32,
    opcode: Opcode,
    parameters: Vec<Parameter>,
    comment: Option<String>,
}

impl Instruction {
    pub fn new(
        offset: u32,
        opcode: Opcode,
        parameters: Vec<Parameter>,
        comment: Option<String>,
    ) -> Self {
        Self {
            offset,
            opcode,
            parameters,
            comment,
        }
    }

    /// Byte offset within the method's code.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Parameters in source order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Trailing `//` annotation without the marker, e.g.
    /// `Method java/io/PrintStream.println:(I)V`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.offset, self.opcode)?;
        for (i, param) in self.parameters.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{param}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " // {comment}")?;
        }
        Ok(())
    }
}
