use std::cmp::Reverse;
use std::collections::HashMap;

use jbcd_isa::Opcode;

/// Opening tag of one instruction section in the specification HTML.
const SECTION_MARKER: &str = "<div class=\"section-execution\"";
const TITLE_PREFIX: &str = "<div class=\"section-execution\" title=\"";

/// Starts the templated part of a family key (`if<cond>`, `lconst_<n>`).
const PLACEHOLDER_START: char = '<';

/// A templated key split at load time.
#[derive(Debug, Clone)]
struct Family {
    prefix: String,
    key: String,
}

/// Opcode descriptions keyed by section title.
///
/// Titles are either plain mnemonics (`ifnull`) or family keys whose
/// templated suffix stands for several opcodes (`if_icmp<cond>` covers
/// `if_icmpeq` .. `if_icmple`). Families are checked longest prefix first,
/// so `if_icmp<cond>` wins over `if<cond>` for `if_icmpge`.
#[derive(Debug, Clone, Default)]
pub struct DescriptionStore {
    entries: HashMap<String, String>,
    families: Vec<Family>,
}

impl DescriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every titled section of `document` and store it.
    ///
    /// Loading is additive: sections with a title already present replace
    /// the previous text, everything else is kept. An empty or section-less
    /// document leaves the store untouched. Returns the number of sections
    /// stored.
    pub fn load(&mut self, document: &str) -> usize {
        let mut stored = 0;
        for section in sections(document) {
            if let Some(title) = section_title(section) {
                self.entries.insert(title.to_string(), section.to_string());
                stored += 1;
            }
        }

        if stored > 0 {
            self.rebuild_families();
        }
        log::debug!(
            "Loaded {stored} opcode descriptions ({} entries, {} families)",
            self.entries.len(),
            self.families.len()
        );
        stored
    }

    /// Description for `opcode`, by exact mnemonic or by family.
    pub fn lookup(&self, opcode: Opcode) -> Option<&str> {
        self.lookup_mnemonic(opcode.mnemonic())
    }

    pub fn lookup_mnemonic(&self, mnemonic: &str) -> Option<&str> {
        if let Some(desc) = self.entries.get(mnemonic) {
            return Some(desc.as_str());
        }

        // The mnemonic must be strictly longer than the prefix: the
        // templated part stands for at least one character.
        self.families
            .iter()
            .find(|f| mnemonic.len() > f.prefix.len() && mnemonic.starts_with(&f.prefix))
            .and_then(|f| self.entries.get(&f.key))
            .map(String::as_str)
    }

    pub fn is_loaded(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored section titles, in no particular order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pairs of family keys where the first one's prefix extends the
    /// second's (`if_icmp<cond>` and `if<cond>`). The first takes
    /// precedence on lookup.
    pub fn overlaps(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, longer) in self.families.iter().enumerate() {
            for shorter in &self.families[i + 1..] {
                if longer.prefix.starts_with(&shorter.prefix) {
                    pairs.push((longer.key.as_str(), shorter.key.as_str()));
                }
            }
        }
        pairs
    }

    fn rebuild_families(&mut self) {
        let mut families: Vec<Family> = self
            .entries
            .keys()
            .filter_map(|key| {
                let pos = key.find(PLACEHOLDER_START)?;
                if pos == 0 {
                    log::warn!("Ignoring description key '{key}' with an empty prefix");
                    return None;
                }
                Some(Family {
                    prefix: key[..pos].to_string(),
                    key: key.clone(),
                })
            })
            .collect();
        families.sort_by(|a, b| {
            (Reverse(a.prefix.len()), &a.key).cmp(&(Reverse(b.prefix.len()), &b.key))
        });

        self.families = families;

        for (longer, shorter) in self.overlaps() {
            log::warn!(
                "Description families '{longer}' and '{shorter}' overlap; '{longer}' takes precedence"
            );
        }
    }
}

/// Split `document` at each section marker. A section runs up to the next
/// marker, the last one to the end of the document.
fn sections(document: &str) -> impl Iterator<Item = &str> {
    let starts: Vec<usize> = document
        .match_indices(SECTION_MARKER)
        .map(|(pos, _)| pos)
        .collect();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(document.len()))
        .collect();
    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| &document[start..end])
}

fn section_title(section: &str) -> Option<&str> {
    let rest = section.strip_prefix(TITLE_PREFIX)?;
    let title = &rest[..rest.find('"')?];
    (!title.is_empty()).then_some(title)
}
