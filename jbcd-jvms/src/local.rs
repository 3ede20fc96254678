use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store::DescriptionStore;

pub const JVMS_HTML_FILENAME: &str = "JVMS.html";
pub const JVMS_CSS_FILENAME: &str = "JVMS.css";

/// Chapter 6 of the Java SE 7 JVM specification (the instruction set).
pub const JVMS_HTML_URL: &str = "http://docs.oracle.com/javase/specs/jvms/se7/html/jvms-6.html";
pub const JVMS_CSS_URL: &str = "http://docs.oracle.com/javase/specs/javaspec.css";

/// Downloads a document. Implementations return an empty string on any
/// failure; timeouts are theirs to enforce.
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> String;
}

impl<F> DocumentSource for F
where
    F: Fn(&str) -> String,
{
    fn fetch(&self, url: &str) -> String {
        self(url)
    }
}

/// Directory holding a downloaded copy of the specification and its
/// stylesheet.
#[derive(Debug, Clone)]
pub struct LocalJvms {
    dir: PathBuf,
}

impl LocalJvms {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(JVMS_HTML_FILENAME)
    }

    pub fn css_path(&self) -> PathBuf {
        self.dir.join(JVMS_CSS_FILENAME)
    }

    pub fn has_document(&self) -> bool {
        self.html_path().exists()
    }

    /// Path of the stylesheet, if it has been downloaded.
    pub fn stylesheet(&self) -> Option<PathBuf> {
        let path = self.css_path();
        path.exists().then_some(path)
    }

    pub fn read_document(&self) -> Result<String> {
        let path = self.html_path();
        fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    }

    /// Write both files, replacing any previous copy.
    pub fn save(&self, html: &str, css: &str) -> Result<()> {
        write(&self.html_path(), html)?;
        write(&self.css_path(), css)?;
        log::info!("Saved JVM specification to {}", self.dir.display());
        Ok(())
    }

    /// Read the local document into `store`. Returns the number of sections
    /// stored.
    pub fn load_into(&self, store: &mut DescriptionStore) -> Result<usize> {
        let html = self.read_document()?;
        Ok(store.load(&html))
    }
}

/// Download the specification and its stylesheet and persist them in
/// `local`.
///
/// Nothing is written unless both downloads produced content. Returns
/// whether the files were written.
pub fn fetch_jvms(source: &impl DocumentSource, local: &LocalJvms) -> Result<bool> {
    let html = source.fetch(JVMS_HTML_URL);
    let css = source.fetch(JVMS_CSS_URL);

    if html.is_empty() || css.is_empty() {
        log::warn!(
            "JVM specification download incomplete (html: {} bytes, css: {} bytes)",
            html.len(),
            css.len()
        );
        return Ok(false);
    }

    local.save(&html, &css)?;
    Ok(true)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
