use std::fmt;
use std::sync::LazyLock;

use jbcd_isa::{Opcode, UnknownMnemonic};
use regex::Regex;

use crate::instruction::{Instruction, Parameter};

// offset, mnemonic, parameter list, comment. Anchored at the start only:
// whatever follows the optional groups (e.g. the `{` of a switch) is ignored.
static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+):\s([0-9a-z_]+)\s?([#0-9a-z,\- ]+)?\s?(//.*)?")
        .expect("instruction line pattern is valid")
});

/// Why a listing line was skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The line is not an instruction (header, blank separator, ...).
    #[error("line does not match the instruction grammar")]
    Unparseable,
    #[error("offset {0} does not fit in 32 bits")]
    OffsetOutOfRange(String),
    #[error(transparent)]
    UnknownMnemonic(#[from] UnknownMnemonic),
    /// Two consecutive commas in the parameter list.
    #[error("empty parameter in '{0}'")]
    EmptyParameter(String),
}

/// A skipped line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the parsed block.
    pub line_number: usize,
    pub line: String,
    pub error: LineError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: '{}'", self.line_number, self.error, self.line)
    }
}

/// Result of parsing a block: every instruction that could be decoded, in
/// line order, plus one diagnostic per skipped line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub instructions: Vec<Instruction>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Listing {
    /// Whether every line decoded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a `javap -c` style block, one instruction per line.
///
/// Lines that cannot be decoded are skipped and reported both in
/// [`Listing::diagnostics`] and through `log::warn!`; they never abort the
/// block.
pub fn parse(text: &str) -> Listing {
    text.lines()
        .enumerate()
        .fold(Listing::default(), |mut listing, (idx, line)| {
            match parse_line(line) {
                Ok(instruction) => listing.instructions.push(instruction),
                Err(error) => {
                    let diagnostic = Diagnostic {
                        line_number: idx + 1,
                        line: line.to_string(),
                        error,
                    };
                    log::warn!("Skipping bytecode {diagnostic}");
                    listing.diagnostics.push(diagnostic);
                }
            }
            listing
        })
}

/// Parse a block and keep only the instructions.
pub fn parse_instructions(text: &str) -> Vec<Instruction> {
    parse(text).instructions
}

/// Decode a single listing line.
pub fn parse_line(line: &str) -> Result<Instruction, LineError> {
    let caps = LINE.captures(line).ok_or(LineError::Unparseable)?;

    let offset_text = &caps[1];
    let offset = offset_text
        .parse::<u32>()
        .map_err(|_| LineError::OffsetOutOfRange(offset_text.to_string()))?;
    let opcode: Opcode = caps[2].parse()?;

    let parameters = match caps.get(3).map(|m| m.as_str().trim()) {
        Some(params) if !params.is_empty() => parse_parameters(params)?,
        _ => Vec::new(),
    };

    let comment = caps
        .get(4)
        .map(|m| m.as_str().trim_start_matches("//").trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(Instruction::new(offset, opcode, parameters, comment))
}

/// Trailing commas are dropped like `String.split` drops trailing empty
/// pieces; an empty piece between two parameters is an error.
fn parse_parameters(params: &str) -> Result<Vec<Parameter>, LineError> {
    let list = params.trim_end_matches(',');
    if list.is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|part| {
            let token = part.trim();
            if token.is_empty() {
                Err(LineError::EmptyParameter(params.to_string()))
            } else {
                Ok(Parameter::classify(token))
            }
        })
        .collect()
}
