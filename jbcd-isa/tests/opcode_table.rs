//! Consistency checks for the generated opcode table.

use jbcd_isa::{Opcode, OpcodeFlags, UnknownMnemonic, opcode_count, opcode_table};

#[test]
fn table_covers_the_whole_instruction_set() {
    // 202 standard opcodes (0x00..=0xc9) plus breakpoint, impdep1, impdep2.
    assert_eq!(opcode_count(), 205);
    let standard = opcode_table().iter().filter(|op| op.byte() <= 0xc9).count();
    assert_eq!(standard, 202);
}

#[test]
fn table_is_ordered_by_byte() {
    let bytes: Vec<u8> = opcode_table().iter().map(|op| op.byte()).collect();
    let mut sorted = bytes.clone();
    sorted.sort_unstable();
    assert_eq!(bytes, sorted);
}

#[test]
fn mnemonic_roundtrip_for_all_opcodes() {
    for &op in opcode_table() {
        let found = Opcode::from_mnemonic(op.mnemonic());
        assert_eq!(
            found,
            Some(op),
            "from_mnemonic('{}') did not resolve back",
            op.mnemonic()
        );
    }
}

#[test]
fn byte_roundtrip_for_all_opcodes() {
    for &op in opcode_table() {
        assert_eq!(Opcode::from_byte(op.byte()), Some(op), "byte {:#04x}", op.byte());
    }
}

#[test]
fn well_known_bytes() {
    assert_eq!(Opcode::Nop.byte(), 0x00);
    assert_eq!(Opcode::IconstM1.byte(), 0x02);
    assert_eq!(Opcode::Iconst0.byte(), 0x03);
    assert_eq!(Opcode::Ldc2W.byte(), 0x14);
    assert_eq!(Opcode::Invokevirtual.byte(), 0xb6);
    assert_eq!(Opcode::Return.byte(), 0xb1);
    assert_eq!(Opcode::JsrW.byte(), 0xc9);
    assert_eq!(Opcode::Impdep2.byte(), 0xff);
}

#[test]
fn unassigned_bytes_do_not_resolve() {
    assert_eq!(Opcode::from_byte(0xcb), None);
    assert_eq!(Opcode::from_byte(0xfd), None);
    assert_eq!(Opcode::try_from(0xe0u8), Err(0xe0));
}

#[test]
fn mnemonic_lookup_is_case_sensitive() {
    assert_eq!(Opcode::from_mnemonic("iconst_0"), Some(Opcode::Iconst0));
    assert_eq!(Opcode::from_mnemonic("ICONST_0"), None);
    assert_eq!(Opcode::from_mnemonic(""), None);
}

#[test]
fn from_str_reports_unknown_mnemonic() {
    assert_eq!("invokevirtual".parse::<Opcode>(), Ok(Opcode::Invokevirtual));
    let err = "frobnicate".parse::<Opcode>().unwrap_err();
    assert_eq!(err, UnknownMnemonic("frobnicate".to_string()));
    assert_eq!(err.to_string(), "unknown mnemonic 'frobnicate'");
}

#[test]
fn display_prints_mnemonic() {
    assert_eq!(Opcode::Getstatic.to_string(), "getstatic");
    assert_eq!(Opcode::IfIcmpge.to_string(), "if_icmpge");
}

#[test]
fn constant_pool_flag() {
    for op in [
        Opcode::Ldc,
        Opcode::LdcW,
        Opcode::Ldc2W,
        Opcode::Getfield,
        Opcode::Invokedynamic,
        Opcode::New,
        Opcode::Checkcast,
    ] {
        assert!(op.flags().contains(OpcodeFlags::CONSTANT_POOL), "{op}");
    }
    assert!(!Opcode::Bipush.flags().contains(OpcodeFlags::CONSTANT_POOL));
}

#[test]
fn branch_and_invoke_predicates() {
    assert!(Opcode::Ifge.is_branch());
    assert!(Opcode::IfAcmpne.is_branch());
    assert!(Opcode::Ifnonnull.is_branch());
    assert!(Opcode::GotoW.is_branch());
    assert!(!Opcode::Tableswitch.is_branch());

    assert!(Opcode::Invokeinterface.is_invoke());
    assert!(!Opcode::Getfield.is_invoke());
}

#[test]
fn terminators() {
    for op in [
        Opcode::Return,
        Opcode::Areturn,
        Opcode::Athrow,
        Opcode::Goto,
        Opcode::GotoW,
        Opcode::Lookupswitch,
        Opcode::Ret,
    ] {
        assert!(op.is_terminator(), "{op} should end a block");
    }
    for op in [Opcode::Ifeq, Opcode::Jsr, Opcode::Invokestatic, Opcode::Nop] {
        assert!(!op.is_terminator(), "{op} should fall through");
    }
}

#[test]
fn only_reserved_opcodes_lie_above_jsr_w() {
    for &op in opcode_table() {
        let reserved = op.flags().contains(OpcodeFlags::RESERVED);
        assert_eq!(reserved, op.byte() > 0xc9, "{op}");
    }
}
