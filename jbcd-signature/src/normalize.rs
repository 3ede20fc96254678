//! Structural normal form of a method signature.
//!
//! Both `public static void main(java.lang.String[])` and
//! `static <T> java.util.List<T> copy(java.util.List<T> src) throws IOException;`
//! reduce to a name, an optional return type and a list of parameter types,
//! with generics erased and whitespace, modifiers and parameter names
//! dropped.

const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "strictfp",
    "default",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSignature {
    pub name: String,
    /// `None` for constructors.
    pub return_type: Option<String>,
    pub parameters: Vec<String>,
}

impl NormalizedSignature {
    /// Returns `None` when the text has no parameter list.
    pub fn parse(signature: &str) -> Option<Self> {
        let mut text = signature.trim().trim_end_matches(';').trim_end();
        if let Some(pos) = text.find(" throws ") {
            text = &text[..pos];
        }
        let text = erase_generics(text);

        let open = text.find('(')?;
        let close = text.rfind(')')?;
        if close < open {
            return None;
        }

        let mut head: Vec<&str> = text[..open]
            .split_whitespace()
            .filter(|word| !MODIFIERS.contains(word) && !word.starts_with('@'))
            .collect();
        let name = head.pop()?;
        let return_type = head.pop().map(type_name);

        let params = text[open + 1..close].trim();
        let parameters = if params.is_empty() {
            Vec::new()
        } else {
            params.split(',').map(parameter_type).collect()
        };

        Some(Self {
            name: name.to_string(),
            return_type,
            parameters,
        })
    }

    /// The same signature with package and outer-class qualifiers removed
    /// from its types.
    ///
    /// Method names are kept whole: `$` is part of synthetic names such as
    /// `lambda$main$0`. Only a constructor name loses its package.
    pub fn simplified(&self) -> Self {
        let name = match self.return_type {
            Some(_) => self.name.clone(),
            None => self.name.rsplit('.').next().unwrap_or(&self.name).to_string(),
        };
        Self {
            name,
            return_type: self.return_type.as_deref().map(simple_name),
            parameters: self.parameters.iter().map(|p| simple_name(p)).collect(),
        }
    }

    /// Equality where a type variable on either side (`T`, `E`, `K2`) stands
    /// for any type of the same array depth, as it does once erased.
    pub fn matches_erasure(&self, other: &Self) -> bool {
        let return_types = match (&self.return_type, &other.return_type) {
            (Some(a), Some(b)) => same_erasure(a, b),
            (None, None) => true,
            _ => false,
        };
        self.name == other.name
            && return_types
            && self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(&other.parameters)
                .all(|(a, b)| same_erasure(a, b))
    }
}

fn same_erasure(a: &str, b: &str) -> bool {
    let (a_base, a_dims) = split_dims(a);
    let (b_base, b_dims) = split_dims(b);
    a_dims == b_dims && (a_base == b_base || is_type_variable(a_base) || is_type_variable(b_base))
}

fn split_dims(ty: &str) -> (&str, &str) {
    let base = ty.trim_end_matches("[]");
    (base, &ty[base.len()..])
}

/// An unqualified upper-case letter, optionally numbered.
fn is_type_variable(ty: &str) -> bool {
    let mut chars = ty.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_digit())
}

/// Remove every balanced `<...>` group, nested ones included.
fn erase_generics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// `final java.lang.String... names` -> `java.lang.String[]`.
fn parameter_type(param: &str) -> String {
    let mut words: Vec<&str> = param
        .split_whitespace()
        .filter(|word| *word != "final" && !word.starts_with('@'))
        .collect();
    if words.len() >= 2 && words.last().is_some_and(|w| is_identifier(w)) {
        words.pop();
    }
    type_name(&words.concat())
}

fn type_name(ty: &str) -> String {
    ty.replace("...", "[]").replace('/', ".")
}

fn is_identifier(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && word.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// `java.util.Map$Entry[]` -> `Entry[]`.
fn simple_name(ty: &str) -> String {
    let (base, dims) = split_dims(ty);
    let simple = base.rsplit(['.', '$']).next().unwrap_or(base);
    format!("{simple}{dims}")
}
