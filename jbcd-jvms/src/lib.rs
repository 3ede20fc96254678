//! Opcode descriptions taken from the instruction-set chapter of the JVM
//! specification.
//!
//! The chapter is an HTML page with one `<div class="section-execution"
//! title="...">` per instruction or instruction family. [`DescriptionStore`]
//! indexes those sections by title; [`local`] keeps a downloaded copy on
//! disk.

pub mod error;
pub mod local;
pub mod store;

use std::sync::OnceLock;

pub use error::{Error, Result};
pub use local::{DocumentSource, LocalJvms, fetch_jvms};
pub use store::DescriptionStore;

static INSTALLED: OnceLock<DescriptionStore> = OnceLock::new();

/// Publish `store` as the process-wide description store.
///
/// Only the first call succeeds; later calls hand their store back.
pub fn install(store: DescriptionStore) -> std::result::Result<(), DescriptionStore> {
    INSTALLED.set(store)
}

/// The process-wide store, once [`install`]ed.
pub fn installed() -> Option<&'static DescriptionStore> {
    INSTALLED.get()
}
