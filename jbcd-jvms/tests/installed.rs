mod common;

use jbcd_isa::Opcode;
use jbcd_jvms::{DescriptionStore, install, installed};

// Kept to a single test: the installed store is process-wide.
#[test]
fn install_once() {
    assert!(installed().is_none());

    let mut store = DescriptionStore::new();
    store.load(&common::chapter());
    install(store).unwrap();

    let global = installed().unwrap();
    assert!(global.is_loaded());
    assert!(global.lookup(Opcode::Iconst0).is_some());

    let rejected = install(DescriptionStore::new()).unwrap_err();
    assert!(!rejected.is_loaded());
    assert_eq!(installed().unwrap().len(), 7);
}
