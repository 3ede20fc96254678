mod common;

use std::cell::RefCell;

use jbcd_isa::Opcode;
use jbcd_jvms::local::{JVMS_CSS_URL, JVMS_HTML_URL};
use jbcd_jvms::{DescriptionStore, Error, LocalJvms, fetch_jvms};

#[test]
fn empty_directory_has_no_document() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalJvms::new(dir.path());
    assert!(!local.has_document());
    assert_eq!(local.stylesheet(), None);
    assert!(matches!(local.read_document(), Err(Error::Io { .. })));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalJvms::new(dir.path());
    local.save(&common::chapter(), "body { margin: 0 }").unwrap();

    assert!(local.has_document());
    assert_eq!(local.stylesheet(), Some(dir.path().join("JVMS.css")));

    let mut store = DescriptionStore::new();
    assert_eq!(local.load_into(&mut store).unwrap(), 7);
    assert!(store.lookup(Opcode::Ifeq).is_some());
}

#[test]
fn fetch_requests_both_documents() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalJvms::new(dir.path());
    let requested = RefCell::new(Vec::new());
    let source = |url: &str| -> String {
        requested.borrow_mut().push(url.to_string());
        if url == JVMS_HTML_URL {
            common::chapter()
        } else {
            "p { color: black }".to_string()
        }
    };

    assert!(fetch_jvms(&source, &local).unwrap());
    assert_eq!(*requested.borrow(), [JVMS_HTML_URL, JVMS_CSS_URL]);
    assert_eq!(
        std::fs::read_to_string(local.css_path()).unwrap(),
        "p { color: black }"
    );
    assert_eq!(local.read_document().unwrap(), common::chapter());
}

#[test]
fn failed_download_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalJvms::new(dir.path());
    let html_only = |url: &str| -> String {
        if url == JVMS_HTML_URL {
            common::chapter()
        } else {
            String::new()
        }
    };

    assert!(!fetch_jvms(&html_only, &local).unwrap());
    assert!(!local.has_document());
    assert_eq!(local.stylesheet(), None);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let local = LocalJvms::new(dir.path().join("missing"));
    let err = local.save("<html/>", "").unwrap_err();
    assert!(err.to_string().contains("JVMS.html"), "{err}");
}
