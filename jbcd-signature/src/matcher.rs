use std::collections::HashMap;
use std::fmt;

use crate::normalize::NormalizedSignature;

/// How closely a candidate had to be normalized before it matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Byte-for-byte identical.
    Exact,
    /// Equal after generic erasure and whitespace, modifier and
    /// parameter-name removal.
    Erased,
    /// Equal once package and outer-class qualifiers are also dropped.
    SimpleNames,
    /// Equal once type variables are allowed to stand for their erasure
    /// (`E get(int)` and `java.lang.Object get(int)`).
    TypeVariables,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Exact => "exact",
            Tier::Erased => "erased",
            Tier::SimpleNames => "simple names",
            Tier::TypeVariables => "type variables",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub candidate: &'a str,
    pub tier: Tier,
}

/// Find the candidate signature that denotes the same method as `target`.
///
/// Tiers are tried from strictest to loosest and the first tier with
/// exactly one matching candidate decides. Two or more candidates at the
/// same tier are ambiguous (e.g. `f(java.util.Date)` and `f(java.sql.Date)`
/// under simple names) and yield `None`, as does a target without a
/// parameter list.
pub fn best_match<'a, I>(target: &str, candidates: I) -> Option<Match<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<&'a str> = candidates.into_iter().collect();
    candidates.sort_unstable();
    candidates.dedup();

    if let Some(candidate) = candidates.iter().copied().find(|&c| c == target) {
        return Some(Match {
            candidate,
            tier: Tier::Exact,
        });
    }

    let Some(erased) = NormalizedSignature::parse(target) else {
        log::debug!("No parameter list in signature '{target}'");
        return None;
    };
    let simple = erased.simplified();
    let parsed: Vec<(&'a str, NormalizedSignature, NormalizedSignature)> = candidates
        .iter()
        .filter_map(|&c| {
            let n = NormalizedSignature::parse(c)?;
            let s = n.simplified();
            Some((c, n, s))
        })
        .collect();

    for tier in [Tier::Erased, Tier::SimpleNames, Tier::TypeVariables] {
        let found: Vec<&'a str> = parsed
            .iter()
            .filter(|(_, n, s)| match tier {
                Tier::Exact => false,
                Tier::Erased => *n == erased,
                Tier::SimpleNames => *s == simple,
                Tier::TypeVariables => s.matches_erasure(&simple),
            })
            .map(|&(c, _, _)| c)
            .collect();

        match found.as_slice() {
            [] => continue,
            &[candidate] => {
                log::debug!("Matched '{target}' to '{candidate}' ({tier})");
                return Some(Match { candidate, tier });
            }
            many => {
                log::debug!(
                    "Signature '{target}' is ambiguous ({tier}): {} candidates",
                    many.len()
                );
                return None;
            }
        }
    }

    None
}

/// [`best_match`] without the tier.
pub fn find_best_match<'a, I>(target: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    best_match(target, candidates).map(|m| m.candidate)
}

/// Look up the bytecode block for `signature` in a per-class cache keyed by
/// `javap` method header, falling back to [`find_best_match`] over the keys
/// when there is no exact entry.
pub fn resolve_bytecode<'c>(
    signature: &str,
    cache: &'c HashMap<String, String>,
) -> Option<&'c str> {
    if let Some(bytecode) = cache.get(signature) {
        return Some(bytecode.as_str());
    }
    let key = find_best_match(signature, cache.keys().map(String::as_str))?;
    cache.get(key).map(String::as_str)
}
