use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Deserialize;

const KNOWN_FLAGS: &[&str] = &[
    "constant_pool",
    "local_variable",
    "branch",
    "unconditional",
    "switch",
    "invoke",
    "field",
    "return",
    "throw",
    "reserved",
];

#[derive(Deserialize)]
struct Isa {
    opcodes: Vec<OpcodeDef>,
}

#[derive(Deserialize)]
struct OpcodeDef {
    mnemonic: String,
    code: u8,
    #[serde(default)]
    flags: Vec<String>,
}

fn main() {
    let manifest = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();

    let isa_path = format!("{manifest}/isa.yaml");
    println!("cargo:rerun-if-changed={isa_path}");

    let text = std::fs::read_to_string(&isa_path)
        .unwrap_or_else(|e| panic!("failed to read {isa_path}: {e}"));
    let isa: Isa = serde_yaml::from_str(&text).expect("isa.yaml is malformed");

    validate(&isa);

    let out_path = PathBuf::from(&out_dir).join("generated.rs");
    std::fs::write(&out_path, render(&isa)).expect("failed to write generated.rs");
}

fn validate(isa: &Isa) {
    let mut codes = HashSet::new();
    let mut mnemonics = HashSet::new();
    for op in &isa.opcodes {
        assert!(
            op.mnemonic
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
            "mnemonic '{}' contains unexpected characters",
            op.mnemonic
        );
        assert!(codes.insert(op.code), "duplicate opcode byte {:#04x}", op.code);
        assert!(
            mnemonics.insert(op.mnemonic.as_str()),
            "duplicate mnemonic '{}'",
            op.mnemonic
        );
        for flag in &op.flags {
            assert!(
                KNOWN_FLAGS.contains(&flag.as_str()),
                "unknown flag '{flag}' on '{}'",
                op.mnemonic
            );
        }
    }
}

/// `iconst_m1` -> `IconstM1`, `ldc2_w` -> `Ldc2W`.
fn variant_name(mnemonic: &str) -> String {
    mnemonic
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn render(isa: &Isa) -> String {
    let mut out = String::new();
    let n = isa.opcodes.len();

    writeln!(out, "/// A JVM opcode.").unwrap();
    writeln!(out, "#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]").unwrap();
    writeln!(out, "#[repr(u8)]").unwrap();
    writeln!(out, "pub enum Opcode {{").unwrap();
    for op in &isa.opcodes {
        writeln!(out, "    /// `{}` ({:#04x})", op.mnemonic, op.code).unwrap();
        writeln!(out, "    {} = {:#04x},", variant_name(&op.mnemonic), op.code).unwrap();
    }
    writeln!(out, "}}\n").unwrap();

    writeln!(out, "/// Every opcode of the instruction set, ordered by opcode byte.").unwrap();
    writeln!(out, "pub const OPCODES: [Opcode; {n}] = [").unwrap();
    for op in &isa.opcodes {
        writeln!(out, "    Opcode::{},", variant_name(&op.mnemonic)).unwrap();
    }
    writeln!(out, "];\n").unwrap();

    writeln!(out, "impl Opcode {{").unwrap();

    writeln!(out, "    /// Canonical mnemonic, as printed by `javap -c`.").unwrap();
    writeln!(out, "    pub const fn mnemonic(self) -> &'static str {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for op in &isa.opcodes {
        writeln!(
            out,
            "            Opcode::{} => \"{}\",",
            variant_name(&op.mnemonic),
            op.mnemonic
        )
        .unwrap();
    }
    writeln!(out, "        }}\n    }}\n").unwrap();

    writeln!(out, "    /// Resolve a mnemonic. Matching is exact and case-sensitive.").unwrap();
    writeln!(out, "    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {{").unwrap();
    writeln!(out, "        match mnemonic {{").unwrap();
    for op in &isa.opcodes {
        writeln!(
            out,
            "            \"{}\" => Some(Opcode::{}),",
            op.mnemonic,
            variant_name(&op.mnemonic)
        )
        .unwrap();
    }
    writeln!(out, "            _ => None,\n        }}\n    }}\n").unwrap();

    writeln!(out, "    /// Resolve an opcode byte.").unwrap();
    writeln!(out, "    pub const fn from_byte(byte: u8) -> Option<Self> {{").unwrap();
    writeln!(out, "        match byte {{").unwrap();
    for op in &isa.opcodes {
        writeln!(
            out,
            "            {:#04x} => Some(Opcode::{}),",
            op.code,
            variant_name(&op.mnemonic)
        )
        .unwrap();
    }
    writeln!(out, "            _ => None,\n        }}\n    }}\n").unwrap();

    writeln!(out, "    /// Static properties of this opcode.").unwrap();
    writeln!(out, "    pub fn flags(self) -> OpcodeFlags {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for op in &isa.opcodes {
        let flags = if op.flags.is_empty() {
            "OpcodeFlags::empty()".to_string()
        } else {
            op.flags
                .iter()
                .map(|f| format!("OpcodeFlags::{}", f.to_ascii_uppercase()))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        writeln!(
            out,
            "            Opcode::{} => {flags},",
            variant_name(&op.mnemonic)
        )
        .unwrap();
    }
    writeln!(out, "        }}\n    }}").unwrap();

    writeln!(out, "}}").unwrap();
    out
}
